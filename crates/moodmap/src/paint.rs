use glam::{Affine3A, Vec3};

/// Paint radius for a radius-5 globe at detail 12: wide enough to cover a
/// cluster of polygons rather than a single vertex.
pub const DEFAULT_PAINT_THRESHOLD: f32 = 0.8;

/// Overwrites the color of every vertex whose world-space position lies
/// strictly closer than `threshold` to `target`. Returns how many vertices
/// were painted.
///
/// Colors are replaced, never blended, so overlapping calls resolve to the
/// last one. The scan is linear in the vertex count. Only the common prefix of
/// `positions` and `colors` is visited.
pub fn paint_near<C: Copy>(
    target: Vec3,
    color: C,
    positions: &[[f32; 3]],
    colors: &mut [C],
    world_transform: &Affine3A,
    threshold: f32,
) -> usize {
    let mut painted = 0;
    for (position, slot) in positions.iter().zip(colors.iter_mut()) {
        let world = world_transform.transform_point3(Vec3::from_array(*position));
        if world.distance(target) < threshold {
            *slot = color;
            painted += 1;
        }
    }
    painted
}
