//! Theme Preference
//!
//! Reads the dark mode preference from `localStorage` and applies the
//! `dark-mode` class to `<body>`. The toggle writes back to `localStorage`
//! and updates the class.

/// `localStorage` key holding `"true"` or `"false"`
pub const STORAGE_KEY: &str = "darkMode";

/// Marker class carried by `<body>` while dark mode is active
pub const BODY_CLASS: &str = "dark-mode";

/// Read the saved preference. Missing storage or key means light mode.
pub fn load_preference() -> bool {
    let mut raw = None;
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(STORAGE_KEY) {
                raw = value;
            }
        }
    }
    preference_enabled(raw.as_deref())
}

/// Persist the preference
pub fn store_preference(enabled: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, preference_string(enabled));
        }
    }
}

/// Add or remove the body marker class
pub fn apply_to_body(enabled: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());

    if let Some(body) = body {
        let class_list = body.class_list();
        let _ = if enabled {
            class_list.add_1(BODY_CLASS)
        } else {
            class_list.remove_1(BODY_CLASS)
        };
    }
}

fn preference_string(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

fn preference_enabled(raw: Option<&str>) -> bool {
    raw == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_true_string_enables_dark_mode() {
        assert!(preference_enabled(Some("true")));
        assert!(!preference_enabled(Some("false")));
        assert!(!preference_enabled(Some("TRUE")));
        assert!(!preference_enabled(None));
    }

    #[test]
    fn stored_strings_round_trip() {
        for enabled in [true, false] {
            assert_eq!(
                preference_enabled(Some(preference_string(enabled))),
                enabled
            );
        }
    }
}
