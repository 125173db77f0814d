use crate::core::camera::components::{MainCamera, OrbitCamera};
use crate::core::camera::logic::{OrbitInput, OrbitState, orbit_translation, step_orbit};
use crate::core::resources::Settings;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

const SPACE_COLOR: Color = Color::srgb(0.02, 0.02, 0.03);
const PIXELS_PER_LINE: f32 = 100.0;

pub fn spawn_camera(mut commands: Commands, settings: Res<Settings>) {
    let camera = &settings.camera;
    let orbit = OrbitState::new(camera.start_distance);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Tonemapping::AcesFitted,
        DistanceFog {
            color: SPACE_COLOR,
            falloff: FogFalloff::ExponentialSquared { density: 0.02 },
            ..default()
        },
        AmbientLight {
            color: Color::srgb_u8(0x40, 0x40, 0x40),
            brightness: 400.0,
            ..default()
        },
        Transform::from_translation(orbit_translation(&orbit)).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        OrbitCamera(orbit),
    ));

    // key light
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 1.5e8,
            range: 200.0,
            ..default()
        },
        Transform::from_xyz(50.0, 50.0, 50.0),
    ));

    // blue rim behind the globe, reads as atmosphere
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0x44, 0x44, 0xFF),
            intensity: 1.5e7,
            range: 100.0,
            ..default()
        },
        Transform::from_xyz(-20.0, 10.0, -20.0),
    ));

    info!("Camera spawned");
}

pub fn orbit_camera_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    settings: Res<Settings>,
    mut camera_q: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let over_ui = contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area() || ctx.wants_pointer_input())
        .unwrap_or(false);

    let drag: Vec2 = if mouse_input.pressed(MouseButton::Left) && !over_ui {
        mouse_motion.read().map(|motion| motion.delta).sum()
    } else {
        mouse_motion.clear();
        Vec2::ZERO
    };

    let scroll: f32 = if over_ui {
        mouse_wheel.clear();
        0.0
    } else {
        mouse_wheel
            .read()
            .map(|wheel| match wheel.unit {
                MouseScrollUnit::Line => wheel.y,
                MouseScrollUnit::Pixel => wheel.y / PIXELS_PER_LINE,
            })
            .sum()
    };

    let viewport_height = windows.single().map(|window| window.height()).unwrap_or(0.0);

    let Ok((mut transform, mut orbit)) = camera_q.single_mut() else {
        return;
    };

    let input = OrbitInput {
        drag,
        scroll,
        viewport_height,
    };
    let next = step_orbit(&orbit, &input, &settings.camera);
    **orbit = next;

    transform.translation = orbit_translation(&orbit);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
