use bevy::math::{Vec2, Vec3};
use moodmap::config::CameraConfig;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

// keeps the camera off the poles where looking_at(Vec3::Y) degenerates
const MIN_POLAR: f32 = 0.01;
const MAX_POLAR: f32 = PI - 0.01;
const ZOOM_BASE: f32 = 0.95;
const REST_VELOCITY: f32 = 1e-6;

/// Spherical camera position around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Angle around +Y; zero puts the camera on +Z.
    pub azimuth: f32,
    /// Angle down from +Y.
    pub polar: f32,
    pub distance: f32,
    pub azimuth_velocity: f32,
    pub polar_velocity: f32,
}

impl OrbitState {
    pub fn new(distance: f32) -> Self {
        Self {
            azimuth: 0.0,
            polar: FRAC_PI_2,
            distance,
            azimuth_velocity: 0.0,
            polar_velocity: 0.0,
        }
    }
}

/// Pointer input gathered over one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitInput {
    /// Pixels dragged with the rotate button held.
    pub drag: Vec2,
    /// Wheel lines, positive away from the user (zoom in).
    pub scroll: f32,
    pub viewport_height: f32,
}

/// Advances the orbit by one frame.
///
/// Dragging across the full viewport height turns the camera by
/// `TAU * rotate_speed`. Rotation is damped: each frame applies `damping` of
/// the remaining velocity. Zoom is applied at once and clamped.
pub fn step_orbit(state: &OrbitState, input: &OrbitInput, config: &CameraConfig) -> OrbitState {
    let mut next = *state;
    let damping = if config.damping > 0.0 {
        config.damping.min(1.0)
    } else {
        1.0
    };

    if input.drag != Vec2::ZERO && input.viewport_height > 0.0 {
        let per_pixel = TAU / input.viewport_height * config.rotate_speed;
        next.azimuth_velocity -= input.drag.x * per_pixel;
        next.polar_velocity -= input.drag.y * per_pixel;
    }

    next.azimuth = (next.azimuth + next.azimuth_velocity * damping) % TAU;
    next.polar = (next.polar + next.polar_velocity * damping).clamp(MIN_POLAR, MAX_POLAR);
    next.azimuth_velocity = settle(next.azimuth_velocity * (1.0 - damping));
    next.polar_velocity = settle(next.polar_velocity * (1.0 - damping));

    if input.scroll != 0.0 {
        next.distance *= ZOOM_BASE.powf(input.scroll * config.zoom_speed);
    }
    next.distance = next.distance.clamp(config.min_distance, config.max_distance);

    next
}

fn settle(velocity: f32) -> f32 {
    if velocity.abs() < REST_VELOCITY {
        0.0
    } else {
        velocity
    }
}

pub fn orbit_translation(state: &OrbitState) -> Vec3 {
    let (sin_polar, cos_polar) = state.polar.sin_cos();
    let (sin_azimuth, cos_azimuth) = state.azimuth.sin_cos();
    Vec3::new(
        state.distance * sin_polar * sin_azimuth,
        state.distance * cos_polar,
        state.distance * sin_polar * cos_azimuth,
    )
}
