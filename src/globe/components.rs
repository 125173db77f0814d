use bevy::prelude::*;

#[derive(Component)]
pub struct GlobeEntity;

#[derive(Component)]
pub struct AtmosphereEntity;

/// Local-space vertex positions of the globe mesh, fixed at creation.
///
/// Kept beside the mesh so painting can read positions while it writes the
/// color attribute.
#[derive(Component)]
pub struct GlobeVertices {
    pub positions: Vec<[f32; 3]>,
    /// Radius the mesh was built with; config reloads do not change it.
    pub radius: f32,
}
