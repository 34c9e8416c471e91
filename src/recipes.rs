//! Button class recipe.
//!
//! Base, tone and density utilities are layered first and the caller's own
//! classes last, all through [`cn`], so a caller passing `px-6` replaces the
//! recipe's horizontal padding instead of fighting it.
//!
//! ```rust
//! use showcase_kit::recipes::{ButtonDensity, ButtonTone, button_classes};
//!
//! let classes = button_classes(ButtonTone::Quiet, ButtonDensity::Compact, "px-4");
//! assert!(classes.ends_with("h-7 gap-1 text-xs px-4"));
//! ```

use serde::{Deserialize, Serialize};

use crate::class::{ClassValue, cn};

const BASE: &str = "inline-flex items-center justify-center rounded-md font-medium \
                    focus-visible:ring-2 disabled:opacity-50";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTone {
    #[default]
    Solid,
    Outline,
    /// No fill until hovered.
    Quiet,
}

impl ButtonTone {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Solid => "bg-slate-900 text-slate-50 hover:bg-slate-800",
            Self::Outline => "border border-slate-300 bg-white text-slate-900 hover:bg-slate-100",
            Self::Quiet => "bg-transparent text-slate-700 hover:bg-slate-100",
        }
    }
}

/// Height, gap, padding and type size as one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonDensity {
    Compact,
    #[default]
    Regular,
    Roomy,
}

impl ButtonDensity {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Compact => "h-7 gap-1 px-2 text-xs",
            Self::Regular => "h-9 gap-2 px-3 text-sm",
            Self::Roomy => "h-11 gap-2 px-5 text-base",
        }
    }
}

pub fn button_classes(
    tone: ButtonTone,
    density: ButtonDensity,
    extra: impl Into<ClassValue>,
) -> String {
    cn([
        ClassValue::from(BASE),
        tone.classes().into(),
        density.classes().into(),
        extra.into(),
    ])
}
