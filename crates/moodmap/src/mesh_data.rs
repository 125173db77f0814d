use glam::Vec3;

/// Golden ratio, used for the 12 corners of the base icosahedron.
const PHI: f32 = 1.618_034;

const ICOSAHEDRON_CORNERS: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Raw, non-indexed mesh data for the faceted globe.
///
/// Every triangle owns its three vertices so that each polygon can be colored
/// and shaded on its own. Positions are fixed once built; only the colors the
/// renderer keeps alongside them change.
#[derive(Debug, Clone)]
pub struct GlobeMeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

impl GlobeMeshData {
    /// Builds a geodesic sphere: each icosahedron face is split into
    /// `(detail + 1)^2` triangles and every vertex is pushed out to `radius`.
    pub fn icosphere(radius: f32, detail: u32) -> Self {
        let segments = detail as usize + 1;
        let triangle_count = ICOSAHEDRON_FACES.len() * segments * segments;
        let mut positions = Vec::with_capacity(triangle_count * 3);
        let mut normals = Vec::with_capacity(triangle_count * 3);

        for face in ICOSAHEDRON_FACES {
            let [a, b, c] = face.map(|i| Vec3::from_array(ICOSAHEDRON_CORNERS[i]));
            for triangle in subdivide_face(a, b, c, segments) {
                let [p0, p1, p2] = triangle.map(|p| p.normalize() * radius);
                let (p1, p2, normal) = outward_winding(p0, p1, p2);
                for p in [p0, p1, p2] {
                    positions.push(p.to_array());
                    normals.push(normal.to_array());
                }
            }
        }

        Self { positions, normals }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Splits a flat triangle into `segments^2` smaller ones laid out in rows
/// from the `a`-`b` edge toward `c`.
fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, segments: usize) -> Vec<[Vec3; 3]> {
    let rows: Vec<Vec<Vec3>> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let left = a.lerp(c, t);
            let right = b.lerp(c, t);
            let columns = segments - i;
            if columns == 0 {
                vec![left]
            } else {
                (0..=columns)
                    .map(|j| left.lerp(right, j as f32 / columns as f32))
                    .collect()
            }
        })
        .collect();

    let mut triangles = Vec::with_capacity(segments * segments);
    for i in 0..segments {
        for j in 0..(2 * (segments - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                triangles.push([rows[i][k + 1], rows[i + 1][k], rows[i][k]]);
            } else {
                triangles.push([rows[i][k + 1], rows[i + 1][k + 1], rows[i + 1][k]]);
            }
        }
    }
    triangles
}

/// Orders the triangle counter-clockwise seen from outside and returns its
/// face normal.
fn outward_winding(p0: Vec3, p1: Vec3, p2: Vec3) -> (Vec3, Vec3, Vec3) {
    let normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
    let centroid = (p0 + p1 + p2) / 3.0;
    if normal.dot(centroid) < 0.0 {
        (p2, p1, -normal)
    } else {
        (p1, p2, normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::DEFAULT_PAINT_THRESHOLD;
    use rstest::rstest;

    #[rstest]
    #[case(0, 60)]
    #[case(1, 240)]
    #[case(12, 10_140)]
    fn vertex_count_follows_detail(#[case] detail: u32, #[case] expected: usize) {
        let mesh = GlobeMeshData::icosphere(5.0, detail);
        assert_eq!(mesh.vertex_count(), expected);
        assert_eq!(mesh.normals.len(), expected);
    }

    #[test]
    fn every_vertex_sits_on_the_sphere() {
        let mesh = GlobeMeshData::icosphere(5.0, 4);
        for p in &mesh.positions {
            let length = Vec3::from_array(*p).length();
            assert!((length - 5.0).abs() < 1e-4, "vertex at radius {length}");
        }
    }

    #[test]
    fn normals_point_outward() {
        let mesh = GlobeMeshData::icosphere(5.0, 3);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            let p = Vec3::from_array(*p);
            let n = Vec3::from_array(*n);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(p) > 0.0);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mesh = GlobeMeshData::icosphere(2.0, 2);
        for tri in mesh.positions.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(Vec3::from_array);
            let normal = (b - a).cross(c - a);
            assert!(normal.dot(a + b + c) > 0.0);
        }
    }

    #[test]
    fn detail_twelve_is_dense_enough_for_the_default_paint_radius() {
        let mesh = GlobeMeshData::icosphere(5.0, 12);
        let target = Vec3::new(0.0, 5.0, 0.0);
        let nearby = mesh
            .positions
            .iter()
            .filter(|p| Vec3::from_array(**p).distance(target) < DEFAULT_PAINT_THRESHOLD)
            .count();
        // a cluster of polygons, not a single vertex
        assert!(nearby > 6, "only {nearby} vertices in range");
    }
}
