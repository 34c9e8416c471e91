//! Showcase Kit
//!
//! Runtime utilities shared by every component in a UI showcase: class-name
//! composition with utility conflict resolution, and the fly-and-scale
//! transition interpolator.
//!
//! # Modules
//!
//! - [`class`]: `cn` composition, utility group table, conflict resolution
//! - [`transition`]: fly-and-scale interpolation, easing and frame driver
//! - [`environment`]: process-wide browser detection flag
//! - [`recipes`]: button class recipe built on [`cn`](class::cn)
//! - [`config`]: CLI and layered configuration
//! - [`telemetry`]: tracing subscriber setup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::float_cmp)]

pub mod class;
pub mod config;
pub mod environment;
pub mod error;
pub mod recipes;
pub mod telemetry;
pub mod transition;

pub use class::{ClassMerger, ClassValue, cn, tw_merge};
pub use error::{Error, Result};
pub use transition::{FlyAndScale, StyleSnapshot, TransitionConfig, sample};
