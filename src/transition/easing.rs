//! Easing curves mapping linear elapsed time to progress.

use serde::{Deserialize, Serialize};

/// Easing curve applied by the animation driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Progress equals elapsed fraction.
    Linear,
    /// Fast start, decelerating into the settled state.
    #[default]
    CubicOut,
}

impl Easing {
    /// Maps an elapsed fraction in [0, 1] to progress in [0, 1].
    ///
    /// Both curves fix the endpoints exactly and are non-decreasing.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicOut => cubic_out(t),
        }
    }
}

/// `(t - 1)^3 + 1`.
#[must_use]
pub fn cubic_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_out_endpoints() {
        assert!(cubic_out(0.0).abs() < f64::EPSILON);
        assert!((cubic_out(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cubic_out_decelerates() {
        // Ahead of linear everywhere inside the interval.
        for step in 1..10 {
            let t = f64::from(step) / 10.0;
            assert!(cubic_out(t) > t);
        }
        assert!((cubic_out(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = Easing::CubicOut.apply(f64::from(step) / 100.0);
            assert!(value >= last);
            last = value;
        }
    }
}
