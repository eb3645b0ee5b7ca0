//! Light/dark theme preference and application.
//!
//! Reads the stored preference, falls back to the system setting, and
//! applies the `.dark` class on the `<html>` element. Toggle writes back
//! and reapplies. DOM access requires a browser environment.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

const THEME_KEY: &str = "edupath-theme";

/// Read the theme preference: `true` means dark mode.
///
/// A stored `"dark"` wins; any other stored value means light; with nothing
/// stored the system preference decides.
pub fn read_preference(store: &impl KeyValueStore) -> bool {
    match store.get(THEME_KEY) {
        Some(value) => value == "dark",
        None => system_prefers_dark(),
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the root element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle the theme, persist the new preference, and reapply.
pub fn toggle(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    store.set(THEME_KEY, if next { "dark" } else { "light" });
    next
}
