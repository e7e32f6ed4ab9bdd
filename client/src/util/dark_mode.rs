//! Theme preference: read, apply, toggle.
//!
//! The app opens in dark mode unless the visitor has switched to light. The
//! choice is stored in `localStorage` and reflected as a `data-theme`
//! attribute on `<html>`, which the stylesheet keys off.
//!
//! TRADE-OFFS
//! ==========
//! SSR always renders the dark default; a stored light preference is applied
//! after hydration, so light-mode visitors may see one dark frame.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "ai_iq_dark";

/// Theme used when nothing is stored.
pub const DEFAULT_DARK: bool = true;

/// Read the stored preference, falling back to [`DEFAULT_DARK`].
pub fn read_preference() -> bool {
    parse_preference(super::storage::load_raw(STORAGE_KEY).as_deref())
}

fn parse_preference(raw: Option<&str>) -> bool {
    match raw {
        Some("true") => true,
        Some("false") => false,
        _ => DEFAULT_DARK,
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Value of the `data-theme` attribute for a preference.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    super::storage::save_json(STORAGE_KEY, &next);
    next
}
