use bevy::color::{Color, ColorToComponents, Hsla};
use moodmap::Rgb;
use rand::Rng;

/// Mesh vertex colors are linear; mood colors are authored in sRGB.
pub fn linear_vertex_color(color: Rgb) -> [f32; 4] {
    Color::srgb_u8(color.r, color.g, color.b).to_linear().to_f32_array()
}

/// One color per vertex: `base` with a random HSL lightness offset in
/// `-jitter / 2..=jitter / 2`, so the untouched surface does not look flat.
pub fn base_vertex_colors(
    count: usize,
    base: Rgb,
    jitter: f32,
    rng: &mut impl Rng,
) -> Vec<[f32; 4]> {
    let base = Hsla::from(Color::srgb_u8(base.r, base.g, base.b));
    let half = jitter.abs() / 2.0;

    (0..count)
        .map(|_| {
            let offset = rng.random_range(-half..=half);
            let varied = base.with_lightness((base.lightness + offset).clamp(0.0, 1.0));
            Color::from(varied).to_linear().to_f32_array()
        })
        .collect()
}

/// Uniform scale of the slowly "breathing" globe.
pub fn breathing_scale(elapsed_secs: f32, rate: f32, amplitude: f32) -> f32 {
    1.0 + (elapsed_secs * rate).sin() * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::LinearRgba;
    use moodmap::Mood;
    use moodmap::mood::BASE_COLOR;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[test]
    fn mid_grey_converts_to_linear() {
        let [r, g, b, a] = linear_vertex_color(Mood::Anxious.color());
        for channel in [r, g, b] {
            assert!((channel - 0.2159).abs() < 1e-3, "got {channel}");
        }
        assert_eq!(a, 1.0);
    }

    #[test]
    fn base_colors_stay_close_to_base_lightness() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = base_vertex_colors(500, BASE_COLOR, 0.05, &mut rng);
        assert_eq!(colors.len(), 500);

        let base = Hsla::from(Color::srgb_u8(BASE_COLOR.r, BASE_COLOR.g, BASE_COLOR.b));
        for color in &colors {
            let hsla = Hsla::from(Color::from(LinearRgba::from_f32_array(*color)));
            assert!((hsla.lightness - base.lightness).abs() <= 0.025 + 1e-3);
        }
        // not all identical
        assert!(colors.iter().any(|c| c != &colors[0]));
    }

    #[test]
    fn zero_jitter_gives_the_plain_base_color() {
        let mut rng = StdRng::seed_from_u64(1);
        let colors = base_vertex_colors(3, BASE_COLOR, 0.0, &mut rng);
        let expected = linear_vertex_color(BASE_COLOR);
        for color in colors {
            for (got, want) in color.iter().zip(expected) {
                assert!((got - want).abs() < 1e-5);
            }
        }
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(std::f32::consts::FRAC_PI_2 / 0.3, 1.002)]
    #[case(3.0 * std::f32::consts::FRAC_PI_2 / 0.3, 0.998)]
    fn breathing_follows_a_sine(#[case] elapsed: f32, #[case] expected: f32) {
        let scale = breathing_scale(elapsed, 0.3, 0.002);
        assert!((scale - expected).abs() < 1e-5, "got {scale}");
    }
}
