use bevy::math::{Affine3A, DVec3, Vec2, Vec3};
use moodmap::GeoPoint;
use moodmap::geo::{ray_sphere_intersection, sphere_point_to_geo};

pub const DOUBLE_CLICK_SECS: f64 = 0.3;
/// How far the cursor may drift between the two clicks, in logical pixels.
pub const DOUBLE_CLICK_SLOP: f32 = 4.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct ClickTracker {
    last: Option<(f64, Vec2)>,
}

impl ClickTracker {
    /// Records a click and reports whether it completes a double click.
    ///
    /// A completed double click is consumed, so a third quick click starts
    /// over instead of firing again.
    pub fn register(&mut self, now_secs: f64, position: Vec2) -> bool {
        let is_double = self.last.is_some_and(|(at, last_position)| {
            now_secs - at <= DOUBLE_CLICK_SECS
                && position.distance(last_position) <= DOUBLE_CLICK_SLOP
        });

        self.last = if is_double {
            None
        } else {
            Some((now_secs, position))
        };
        is_double
    }
}

/// Finds the coordinate under a world-space ray on a globe of `radius`
/// placed by `globe_transform`.
///
/// The ray is taken into the globe's local space, so rotation and scale are
/// both accounted for.
pub fn pick_geo_point(
    ray_origin: Vec3,
    ray_direction: Vec3,
    globe_transform: &Affine3A,
    radius: f32,
) -> Option<GeoPoint> {
    let to_local = globe_transform.inverse();
    let origin = to_local.transform_point3(ray_origin);
    let direction = to_local.transform_vector3(ray_direction).try_normalize()?;

    let distance = ray_sphere_intersection(origin, direction, Vec3::ZERO, radius)?;
    let hit = origin + direction * distance;
    Some(sphere_point_to_geo(DVec3::from(hit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Quat;
    use moodmap::geo::to_sphere_point;
    use rstest::rstest;

    #[rstest]
    #[case(0.2, Vec2::new(101.0, 100.0), true)]
    #[case(0.5, Vec2::new(100.0, 100.0), false)] // too slow
    #[case(0.1, Vec2::new(120.0, 100.0), false)] // moved too far
    fn second_click_within_window_is_double(
        #[case] delay: f64,
        #[case] second: Vec2,
        #[case] expected: bool,
    ) {
        let mut tracker = ClickTracker::default();
        assert!(!tracker.register(10.0, Vec2::new(100.0, 100.0)));
        assert_eq!(tracker.register(10.0 + delay, second), expected);
    }

    #[test]
    fn triple_click_fires_once() {
        let mut tracker = ClickTracker::default();
        let at = Vec2::splat(50.0);
        assert!(!tracker.register(1.0, at));
        assert!(tracker.register(1.1, at));
        assert!(!tracker.register(1.2, at));
    }

    #[test]
    fn ray_down_the_x_axis_hits_lng_minus_180() {
        let point = pick_geo_point(
            Vec3::new(-20.0, 0.0, 0.0),
            Vec3::X,
            &Affine3A::IDENTITY,
            5.0,
        )
        .unwrap();
        assert!(point.lat.abs() < 1e-4);
        assert!((point.lng.abs() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn pick_undoes_globe_rotation_and_scale() {
        let place = GeoPoint::new(35.0, 139.0);
        let local = to_sphere_point(place.lat, place.lng, 5.0).as_vec3();
        let transform = Affine3A::from_scale_rotation_translation(
            Vec3::splat(1.002),
            Quat::from_rotation_y(1.3),
            Vec3::ZERO,
        );
        let world = transform.transform_point3(local);

        // shoot from outside, straight at the center through the point
        let origin = world * 4.0;
        let point = pick_geo_point(origin, -origin, &transform, 5.0).unwrap();

        assert!((point.lat - place.lat).abs() < 1e-2, "lat {}", point.lat);
        assert!((point.lng - place.lng).abs() < 1e-2, "lng {}", point.lng);
    }

    #[test]
    fn ray_past_the_globe_picks_nothing() {
        let miss = pick_geo_point(
            Vec3::new(0.0, 10.0, 20.0),
            Vec3::NEG_Z,
            &Affine3A::IDENTITY,
            5.0,
        );
        assert!(miss.is_none());
    }
}
