//! Fly-and-scale entrance/exit transition.
//!
//! An element starts offset by `(x, y)`, scaled down to `start_scale` and fully
//! transparent, and settles at its natural position, scale 1 and full
//! opacity. Every axis is a straight two-point remap of progress.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::easing::Easing;

const UNIT: (f64, f64) = (0.0, 1.0);

/// Offsets, starting scale and duration of a fly-and-scale transition.
///
/// Immutable once built. Serialized as `y`, `x`, `start` and `duration`;
/// absent fields take the defaults (`-8`, `0`, `0.95`, `150`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    #[serde(rename = "y")]
    vertical_offset: f64,
    #[serde(rename = "x")]
    horizontal_offset: f64,
    #[serde(rename = "start")]
    start_scale: f64,
    #[serde(rename = "duration")]
    duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            vertical_offset: -8.0,
            horizontal_offset: 0.0,
            start_scale: 0.95,
            duration_ms: 150,
        }
    }
}

impl TransitionConfig {
    #[must_use]
    pub const fn with_vertical_offset(mut self, pixels: f64) -> Self {
        self.vertical_offset = pixels;
        self
    }

    #[must_use]
    pub const fn with_horizontal_offset(mut self, pixels: f64) -> Self {
        self.horizontal_offset = pixels;
        self
    }

    /// Not validated: zero or negative scales pass straight through.
    #[must_use]
    pub const fn with_start_scale(mut self, scale: f64) -> Self {
        self.start_scale = scale;
        self
    }

    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Starting vertical offset in pixels.
    pub const fn vertical_offset(&self) -> f64 {
        self.vertical_offset
    }

    /// Starting horizontal offset in pixels.
    pub const fn horizontal_offset(&self) -> f64 {
        self.horizontal_offset
    }

    /// Starting uniform scale.
    pub const fn start_scale(&self) -> f64 {
        self.start_scale
    }

    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Inline style for one instant of the transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSnapshot {
    /// Value for the `transform` property.
    pub transform: String,
    /// Value for the `opacity` property.
    pub opacity: f64,
}

impl StyleSnapshot {
    /// Renders as `transform:...;opacity:...;`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform:{};opacity:{};",
            self.transform,
            CssNumber(self.opacity)
        )
    }
}

/// Shortest decimal form, with negative zero folded into `0`.
struct CssNumber(f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}")
    }
}

/// Linearly remaps `value` from the `from` range onto the `to` range.
#[must_use]
pub fn remap(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (min_a, max_a) = from;
    let (min_b, max_b) = to;

    let percentage = (value - min_a) / (max_a - min_a);
    percentage * (max_b - min_b) + min_b
}

/// Treats an identity (`none`) or blank transform as absent.
pub fn normalize_base_transform(transform: &str) -> &str {
    let trimmed = transform.trim();
    if trimmed == "none" { "" } else { trimmed }
}

/// Style at `progress` (0 = start state, 1 = settled).
///
/// Pure: identical arguments always produce an identical snapshot.
pub fn sample(config: &TransitionConfig, progress: f64, base_transform: &str) -> StyleSnapshot {
    let x = remap(progress, UNIT, (config.horizontal_offset, 0.0));
    let y = remap(progress, UNIT, (config.vertical_offset, 0.0));
    let scale = remap(progress, UNIT, (config.start_scale, 1.0));

    let motion = format!(
        "translate3d({}px, {}px, 0) scale({})",
        CssNumber(x),
        CssNumber(y),
        CssNumber(scale)
    );
    let base = normalize_base_transform(base_transform);
    let transform = if base.is_empty() {
        motion
    } else {
        format!("{base} {motion}")
    };

    StyleSnapshot {
        transform,
        opacity: progress,
    }
}

/// Which way the transition runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Entering: progress rises from 0 to 1.
    #[default]
    In,
    /// Leaving: progress falls from 1 to 0.
    Out,
}

/// A fly-and-scale transition bound to one element.
///
/// Captures the element's pre-animation transform once; the caller's
/// scheduler supplies elapsed time per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyAndScale {
    config: TransitionConfig,
    base_transform: String,
    easing: Easing,
}

impl FlyAndScale {
    pub fn new(config: TransitionConfig, base_transform: &str) -> Self {
        Self {
            config,
            base_transform: normalize_base_transform(base_transform).to_string(),
            easing: Easing::CubicOut,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn base_transform(&self) -> &str {
        &self.base_transform
    }

    pub fn duration(&self) -> Duration {
        self.config.duration()
    }

    /// Always zero: the transition starts on the first frame.
    pub fn delay(&self) -> Duration {
        Duration::ZERO
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Style at an already-eased progress value.
    pub fn css(&self, t: f64) -> StyleSnapshot {
        sample(&self.config, t, &self.base_transform)
    }

    /// Eased progress after `elapsed`, clamped to the transition's lifetime.
    ///
    /// Entering reaches exactly 1 once `elapsed >= duration`; leaving mirrors it.
    pub fn progress_at(&self, elapsed: Duration, direction: Direction) -> f64 {
        let duration = self.duration();
        let linear = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        let eased = self.easing.apply(linear);

        match direction {
            Direction::In => eased,
            Direction::Out => 1.0 - eased,
        }
    }

    pub fn frame_at(&self, elapsed: Duration, direction: Direction) -> StyleSnapshot {
        self.css(self.progress_at(elapsed, direction))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }

    /// Frames at a fixed interval, always ending on the exact final state.
    pub fn timeline(&self, interval: Duration, direction: Direction) -> Vec<(Duration, StyleSnapshot)> {
        let duration = self.duration();
        let mut frames = Vec::new();

        if !interval.is_zero() {
            let mut elapsed = Duration::ZERO;
            while elapsed < duration {
                frames.push((elapsed, self.frame_at(elapsed, direction)));
                elapsed += interval;
            }
        }
        frames.push((duration, self.frame_at(duration, direction)));

        tracing::debug!(
            name: "transition.timeline",
            frames = frames.len(),
            duration_ms = self.config.duration_ms,
            "Built transition timeline"
        );
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.vertical_offset(), -8.0);
        assert_eq!(config.horizontal_offset(), 0.0);
        assert_eq!(config.start_scale(), 0.95);
        assert_eq!(config.duration(), Duration::from_millis(150));
    }

    #[test]
    fn test_start_state() {
        let snapshot = sample(&TransitionConfig::default(), 0.0, "");
        assert_eq!(snapshot.transform, "translate3d(0px, -8px, 0) scale(0.95)");
        assert_eq!(snapshot.opacity, 0.0);
    }

    #[test]
    fn test_settled_state() {
        let snapshot = sample(&TransitionConfig::default(), 1.0, "");
        assert_eq!(snapshot.transform, "translate3d(0px, 0px, 0) scale(1)");
        assert_eq!(snapshot.opacity, 1.0);
    }

    #[test]
    fn test_midpoint() {
        let config = TransitionConfig::default()
            .with_vertical_offset(-10.0)
            .with_horizontal_offset(20.0)
            .with_start_scale(0.5);
        let snapshot = sample(&config, 0.5, "");
        assert_eq!(snapshot.transform, "translate3d(10px, -5px, 0) scale(0.75)");
        assert_eq!(snapshot.opacity, 0.5);
    }

    #[test]
    fn test_base_transform_prefix() {
        let config = TransitionConfig::default();
        let snapshot = sample(&config, 1.0, "rotate(45deg)");
        assert_eq!(snapshot.transform, "rotate(45deg) translate3d(0px, 0px, 0) scale(1)");

        let identity = sample(&config, 1.0, "none");
        assert_eq!(identity.transform, "translate3d(0px, 0px, 0) scale(1)");
    }

    #[test]
    fn test_unvalidated_scale_passes_through() {
        let config = TransitionConfig::default().with_start_scale(-0.5);
        assert!(sample(&config, 0.0, "").transform.ends_with("scale(-0.5)"));
    }

    #[test]
    fn test_remap_generic_ranges() {
        assert_eq!(remap(5.0, (0.0, 10.0), (100.0, 200.0)), 150.0);
        assert_eq!(remap(0.25, UNIT, (-8.0, 0.0)), -6.0);
    }

    #[test]
    fn test_css_rendering() {
        let snapshot = sample(&TransitionConfig::default(), 0.0, "");
        assert_eq!(
            snapshot.to_css(),
            "transform:translate3d(0px, -8px, 0) scale(0.95);opacity:0;"
        );
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(CssNumber(-0.0).to_string(), "0");
    }

    #[test]
    fn test_progress_reaches_one() {
        let transition = FlyAndScale::new(TransitionConfig::default(), "none");
        assert_eq!(transition.base_transform(), "");
        assert_eq!(transition.progress_at(Duration::ZERO, Direction::In), 0.0);
        assert_eq!(transition.progress_at(Duration::from_millis(150), Direction::In), 1.0);
        assert_eq!(transition.progress_at(Duration::from_secs(5), Direction::In), 1.0);
        assert_eq!(transition.progress_at(Duration::ZERO, Direction::Out), 1.0);
        assert_eq!(transition.progress_at(Duration::from_millis(150), Direction::Out), 0.0);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let transition = FlyAndScale::new(TransitionConfig::default().with_duration_ms(0), "");
        assert_eq!(transition.progress_at(Duration::ZERO, Direction::In), 1.0);
        assert_eq!(transition.timeline(Duration::from_millis(16), Direction::In).len(), 1);
    }

    #[test]
    fn test_timeline_ends_settled() {
        let transition = FlyAndScale::new(TransitionConfig::default(), "");
        let frames = transition.timeline(Duration::from_millis(16), Direction::In);
        assert_eq!(frames.len(), 11);
        let (elapsed, last) = frames.last().unwrap();
        assert_eq!(*elapsed, Duration::from_millis(150));
        assert_eq!(last.opacity, 1.0);
        assert!(frames.windows(2).all(|w| w[0].1.opacity <= w[1].1.opacity));
    }
}
