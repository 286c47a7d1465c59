use prism_engine::paint::Color;
use rand::Rng;

/// Opaque color with each of r, g, b drawn independently from `[0, 1)`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(rng.r#gen(), rng.r#gen(), rng.r#gen())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn channels_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let c = random_color(&mut rng);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&ch), "channel {ch} out of range");
            }
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn channels_are_drawn_independently() {
        let mut rng = StdRng::seed_from_u64(11);
        let c = random_color(&mut rng);
        assert!(c.r != c.g || c.g != c.b);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }
}
