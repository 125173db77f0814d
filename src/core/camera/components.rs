use crate::core::camera::logic::OrbitState;
use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

/// Orbit around the globe, with the velocity carried between frames for
/// damping.
#[derive(Component, Deref, DerefMut)]
pub struct OrbitCamera(pub OrbitState);
