//! Process-wide runtime environment detection.
//!
//! Peer utilities that touch a document (focus traps, portals) gate on
//! [`is_browser`]. The flag is computed once and never changes afterwards.

use std::sync::OnceLock;

use crate::error::{Error, Result};

static IS_BROWSER: OnceLock<bool> = OnceLock::new();

/// Returns `true` when running where a browser document exists.
///
/// The first call fixes the value for the rest of the process.
pub fn is_browser() -> bool {
    *IS_BROWSER.get_or_init(detect)
}

/// Sets the flag explicitly, e.g. from an SSR host that knows better.
///
/// Must happen before the first [`is_browser`] read.
pub fn init(is_browser: bool) -> Result<()> {
    IS_BROWSER
        .set(is_browser)
        .map_err(|_already| Error::EnvironmentInitialized)?;
    tracing::debug!(name: "environment.init", is_browser, "Environment flag set");
    Ok(())
}

fn detect() -> bool {
    cfg!(all(target_arch = "wasm32", target_os = "unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_stable() {
        let first = is_browser();
        assert_eq!(is_browser(), first);
    }

    #[test]
    fn test_init_after_read_is_rejected() {
        let current = is_browser();
        let result = init(!current);
        assert!(matches!(result, Err(Error::EnvironmentInitialized)));
        assert_eq!(is_browser(), current);
    }

    #[test]
    fn test_native_target_is_not_browser() {
        assert!(!detect());
    }
}
