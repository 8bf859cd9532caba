use crate::prelude::*;

/// Easing curves for camera tweens.
///
/// `PowerNInOut` follows the usual animation-library naming: power2 is cubic,
/// power3 is quartic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2InOut,
    Power3InOut,
}

impl Ease {
    /// Map linear progress in `[0, 1]` onto the curve. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => in_out(t, 3),
            Ease::Power3InOut => in_out(t, 4),
        }
    }
}

fn in_out(t: f32, exponent: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(exponent)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powi(exponent)
    }
}

pub fn lerp_point(from: &Point3<f32>, to: &Point3<f32>, t: f32) -> Point3<f32> {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for ease in [Ease::Linear, Ease::Power2InOut, Ease::Power3InOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_in_out_is_monotonic_and_slow_at_the_ends() {
        let ease = Ease::Power3InOut;
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease.apply(step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
        assert!(ease.apply(0.1) < 0.1);
        assert!(ease.apply(0.9) > 0.9);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Ease::Power2InOut.apply(-1.0), 0.0);
        assert_eq!(Ease::Power2InOut.apply(2.0), 1.0);
    }
}
