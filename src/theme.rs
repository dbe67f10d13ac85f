//! Dark-mode preference store.
//!
//! The persisted value is tri-state: "true"/"false" under
//! [`crate::config::DARK_MODE_KEY`], or absent. An explicit choice always wins;
//! with no stored choice the OS `prefers-color-scheme` media query decides,
//! and the app re-resolves whenever that signal changes.

use log::debug;
use web_sys::MediaQueryList;

use crate::config;

/// Effective dark mode: the explicit persisted choice if there is one,
/// otherwise whatever the ambient OS signal currently says.
pub fn resolve_effective(saved: Option<bool>, ambient: bool) -> bool {
    saved.unwrap_or(ambient)
}

fn parse_preference(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// The persisted preference, or `None` when unset or storage is unavailable.
pub fn load_preference() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(config::DARK_MODE_KEY).ok()??;
    parse_preference(&raw)
}

pub fn store_preference(dark: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let value = if dark { "true" } else { "false" };
            let _ = storage.set_item(config::DARK_MODE_KEY, value);
        }
    }
}

/// Forgets the explicit choice, handing control back to the ambient signal.
pub fn clear_preference() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(config::DARK_MODE_KEY);
        }
    }
}

/// The `(prefers-color-scheme: dark)` media query, used both for the initial
/// resolution and for subscribing to live changes.
pub fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

/// Current value of the ambient OS signal; light when the query is unavailable.
pub fn ambient_dark() -> bool {
    media_query().map(|query| query.matches()).unwrap_or(false)
}

/// Effective dark mode at startup.
pub fn initial_dark() -> bool {
    resolve_effective(load_preference(), ambient_dark())
}

/// Toggles the `dark` class on the document element. Every control that
/// reflects the theme renders from the same app-owned state, so this is the
/// only place the visual tree is touched.
pub fn apply(dark: bool) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        debug!("theme: dark mode {}", if dark { "on" } else { "off" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_choice_overrides_ambient() {
        assert!(resolve_effective(Some(true), false));
        assert!(!resolve_effective(Some(false), true));
    }

    #[test]
    fn test_unset_follows_ambient() {
        assert!(resolve_effective(None, true));
        assert!(!resolve_effective(None, false));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        // Toggling twice lands back on the starting effective value, but the
        // preference is now explicit rather than unset.
        let ambient = true;
        let start = resolve_effective(None, ambient);
        let after_first = !start;
        let after_second = !after_first;
        assert_eq!(after_second, start);
        assert_eq!(resolve_effective(Some(after_second), !ambient), start);
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!(parse_preference("true"), Some(true));
        assert_eq!(parse_preference("false"), Some(false));
        assert_eq!(parse_preference(""), None);
        assert_eq!(parse_preference("1"), None);
    }
}
