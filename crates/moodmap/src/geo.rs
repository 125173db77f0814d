use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
///
/// Values are not validated: latitudes outside `[-90, 90]` or longitudes
/// outside `[-180, 180]` still map onto the sphere through the wrapped
/// trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Equator / prime meridian, used when no location is known.
    pub const ORIGIN: GeoPoint = GeoPoint { lat: 0.0, lng: 0.0 };

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_sphere_point(self, radius: f64) -> DVec3 {
        to_sphere_point(self.lat, self.lng, radius)
    }

    /// Great-circle angle between two points, in degrees.
    pub fn angular_distance_deg(self, other: GeoPoint) -> f64 {
        let a = self.to_sphere_point(1.0);
        let b = other.to_sphere_point(1.0);
        a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
    }
}

/// Maps latitude/longitude (degrees) to a point on a sphere of `radius`.
///
/// The polar angle is measured from the north pole (+Y) and the azimuth is
/// shifted so that longitude -180 lands on theta = 0.
pub fn to_sphere_point(lat: f64, lng: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lng + 180.0).to_radians();

    let x = -(radius * phi.sin() * theta.cos());
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    DVec3::new(x, y, z)
}

/// Inverse of [`to_sphere_point`]. The radius is taken from the point's length.
///
/// Longitude is normalized to `[-180, 180]`; at the poles it is meaningless
/// and comes back as -180.
pub fn sphere_point_to_geo(point: DVec3) -> GeoPoint {
    let radius = point.length();
    if radius == 0.0 {
        return GeoPoint::ORIGIN;
    }

    let phi = (point.y / radius).clamp(-1.0, 1.0).acos();
    let theta = point.z.atan2(-point.x);

    let lat = 90.0 - phi.to_degrees();
    let mut lng = theta.to_degrees() - 180.0;
    if lng < -180.0 {
        lng += 360.0;
    }

    GeoPoint { lat, lng }
}

/// Distance along the ray to the nearest intersection with a sphere in front
/// of the origin, or `None` when the ray misses.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let direction = direction.try_normalize()?;
    let to_origin = origin - center;

    let b = to_origin.dot(direction);
    let c = to_origin.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // origin is inside the sphere
        Some(far)
    } else {
        None
    }
}
