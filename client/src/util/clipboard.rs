//! Copy-to-clipboard with a blocking confirmation.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Confirmation shown after the active document is copied.
pub const COPIED_ALERT: &str = "已复制到剪贴板！";

/// Put `text` on the system clipboard and confirm with `alert`.
///
/// The write is not awaited; the alert follows immediately. No-op outside
/// the browser.
pub fn copy_with_alert(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.navigator().clipboard().write_text(text);
        let _ = window.alert_with_message(COPIED_ALERT);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
