use crate::core::resources::Settings;
use crate::globe::components::{AtmosphereEntity, GlobeEntity, GlobeVertices};
use crate::globe::events::PaintMoodEvent;
use crate::globe::logic::{base_vertex_colors, breathing_scale, linear_vertex_color};
use bevy::asset::RenderAssetUsages;
use bevy::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use moodmap::mesh_data::GlobeMeshData;
use moodmap::mood::BASE_COLOR;
use moodmap::paint::paint_near;

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<Settings>,
) {
    let globe = &settings.globe;
    let mesh_data = GlobeMeshData::icosphere(globe.radius, globe.detail);
    let colors = base_vertex_colors(
        mesh_data.vertex_count(),
        BASE_COLOR,
        globe.base_lightness_jitter,
        &mut rand::rng(),
    );
    let positions = mesh_data.positions.clone();
    let vertex_count = positions.len();

    // non-indexed so every triangle keeps its own flat normal and color
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, mesh_data.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, mesh_data.normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::from(Color::srgb_u8(0x00, 0x00, 0x11)),
        perceptual_roughness: 0.9,
        reflectance: 0.1,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::default(),
        GlobeEntity,
        GlobeVertices {
            positions,
            radius: globe.radius,
        },
    ));

    let atmosphere_mesh = Sphere::new(globe.atmosphere_radius).mesh().uv(64, 64);
    let atmosphere_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x44, 0x88, 0xff).with_alpha(globe.atmosphere_opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(atmosphere_mesh)),
        MeshMaterial3d(atmosphere_material),
        Transform::default(),
        AtmosphereEntity,
    ));

    info!(
        "Globe spawned: radius {}, detail {}, {vertex_count} vertices",
        globe.radius, globe.detail
    );
}

pub fn animate_globe(
    time: Res<Time>,
    settings: Res<Settings>,
    mut globe_q: Query<&mut Transform, (With<GlobeEntity>, Without<AtmosphereEntity>)>,
    mut atmosphere_q: Query<&mut Transform, (With<AtmosphereEntity>, Without<GlobeEntity>)>,
) {
    let globe = &settings.globe;
    let turn = globe.rotation_speed * time.delta_secs();

    for mut transform in globe_q.iter_mut() {
        transform.rotate_y(turn);
        transform.scale = Vec3::splat(breathing_scale(
            time.elapsed_secs(),
            globe.breathing_rate,
            globe.breathing_amplitude,
        ));
    }

    for mut transform in atmosphere_q.iter_mut() {
        transform.rotate_y(turn);
    }
}

/// Recolors the vertices near each event's place on the globe.
///
/// Targets sit on the unrotated sphere and vertices are compared in world
/// space, so a mood lands on whatever part of the turning globe currently
/// faces its coordinates.
pub fn paint_mood_events(
    mut events: MessageReader<PaintMoodEvent>,
    settings: Res<Settings>,
    mut meshes: ResMut<Assets<Mesh>>,
    globe_q: Query<(&Mesh3d, &GlobeVertices, &GlobalTransform), With<GlobeEntity>>,
) {
    if events.is_empty() {
        return;
    }

    let Ok((mesh3d, vertices, transform)) = globe_q.single() else {
        warn!("No globe to paint on, dropping {} mood events", events.len());
        events.clear();
        return;
    };
    let Some(mesh) = meshes.get_mut(&mesh3d.0) else {
        events.clear();
        return;
    };
    let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute_mut(Mesh::ATTRIBUTE_COLOR)
    else {
        error!("Globe mesh has no RGBA color attribute");
        events.clear();
        return;
    };

    let world = transform.affine();
    let radius = f64::from(vertices.radius);

    for event in events.read() {
        let target = event.geo_point.to_sphere_point(radius).as_vec3();
        let painted = paint_near(
            target,
            linear_vertex_color(event.mood.color()),
            &vertices.positions,
            colors,
            &world,
            settings.globe.paint_threshold,
        );
        debug!(
            "Painted {painted} vertices {} at ({:.2}, {:.2})",
            event.mood, event.geo_point.lat, event.geo_point.lng
        );
    }
}
