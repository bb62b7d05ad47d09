use serde::{Deserialize, Serialize};

/// Interpolation curve mapping elapsed fraction `t` to progress.
///
/// Every curve is clamped to `[0, 1]`, is non-decreasing, and lands exactly
/// on `1.0` at `t = 1`. Selected by `animation.easing` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`
    #[default]
    EaseOutCubic,
    /// `1 - 2^(-10t)`, snapped to 1 at the end.
    ExponentialOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOutCubic, Easing::ExponentialOut];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.5), 1.0);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn curves_never_decrease() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=200 {
                let value = easing.apply(step as f64 / 200.0);
                assert!(value >= previous, "{easing:?} dipped at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
        assert!(Easing::ExponentialOut.apply(0.5) > Easing::EaseOutCubic.apply(0.5));
    }
}
