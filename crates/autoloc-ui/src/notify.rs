//! Blocking browser notices for mutation outcomes.

use web_sys::window;

/// Blocking confirmation notice.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Ask before a destructive action. Defaults to "no" when the dialog
/// cannot be shown.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
