use log::warn;
use web_sys::window;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

pub fn prefers_dark_scheme() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Adds or removes the `dark` class on the document element.
pub fn apply_dark_mode(enabled: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element, skipping dark mode update");
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, enabled) {
        warn!("Failed to toggle dark class: {:?}", e);
    }
}

pub fn open_in_new_tab(url: &str) {
    match window() {
        Some(w) => {
            if let Err(e) = w.open_with_url_and_target(url, "_blank") {
                warn!("Failed to open {}: {:?}", url, e);
            }
        }
        None => warn!("No window, cannot open {}", url),
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    match window() {
        Some(w) => {
            if let Err(e) = w.alert_with_message(message) {
                warn!("Failed to show alert {:?}: {:?}", message, e);
            }
        }
        None => warn!("No window, cannot alert {:?}", message),
    }
}
