//! Class-name composition.
//!
//! [`cn`] flattens conditional [`ClassValue`] inputs and resolves utility
//! conflicts so that the last utility for a given style axis wins:
//!
//! ```rust
//! use showcase_kit::cn;
//!
//! let active = true;
//! let classes = cn!("px-2 py-1 text-sm", ("bg-primary", active), "px-4");
//! assert_eq!(classes, "py-1 text-sm bg-primary px-4");
//! ```
//!
//! # Modules
//!
//! - [`value`]: conditional input values
//! - [`groups`]: built-in utility group table
//! - [`merge`]: conflict resolution and custom groups

pub mod groups;
pub mod merge;
pub mod value;

pub use groups::{ClassGroup, ParsedClass, parse_class};
pub use merge::{ClassMerger, CustomGroup, GroupRef};
pub use value::ClassValue;

static DEFAULT_MERGER: ClassMerger = ClassMerger::new();

/// Composes class inputs into a single class attribute value.
///
/// Never fails: empty and falsy inputs contribute nothing.
pub fn cn<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let value = ClassValue::List(inputs.into_iter().map(Into::into).collect());
    DEFAULT_MERGER.compose(&value)
}

/// Resolves conflicts in a flat, whitespace-separated class string.
pub fn tw_merge(classes: &str) -> String {
    DEFAULT_MERGER.merge(classes)
}

/// Variadic [`cn`] over heterogeneous inputs.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::class::cn([$($crate::class::ClassValue::from($value)),+])
    };
}
