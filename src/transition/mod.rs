//! Parametric entrance/exit transitions.
//!
//! [`sample`] is the pure interpolator: given a [`TransitionConfig`] and a
//! progress value it returns the [`StyleSnapshot`] for that instant.
//! [`FlyAndScale`] wraps it with the duration, easing and captured base
//! transform an animation driver needs.
//!
//! ```rust
//! use showcase_kit::transition::{TransitionConfig, sample};
//!
//! let snapshot = sample(&TransitionConfig::default(), 0.0, "");
//! assert!(snapshot.transform.contains("translate3d(0px, -8px, 0) scale(0.95)"));
//! assert_eq!(snapshot.opacity, 0.0);
//! ```

pub mod easing;
pub mod fly_and_scale;

pub use easing::{Easing, cubic_out};
pub use fly_and_scale::{
    Direction, FlyAndScale, StyleSnapshot, TransitionConfig, normalize_base_transform, remap,
    sample,
};
