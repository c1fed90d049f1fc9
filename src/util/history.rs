//! Browser history navigation.

/// Step back one entry, as the browser back button does.
pub fn go_back() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            if let Err(e) = history.back() {
                leptos::logging::warn!("history.back failed: {e:?}");
            }
        }
    }
}
