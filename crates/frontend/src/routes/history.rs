use wasm_bindgen::JsValue;
use web_sys::window;

/// Browser side of navigation: where we are, how to record a move, and scrolling.
pub trait HistoryBackend {
    /// Current location path, or `None` when it cannot be read.
    fn current_path(&self) -> Option<String>;

    /// Add a new history entry (never replaces the current one).
    fn push_path(&self, path: &str);

    fn scroll_to_top(&self);
}

/// [`HistoryBackend`] over `window.history` / `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl HistoryBackend for BrowserHistory {
    fn current_path(&self) -> Option<String> {
        window()?.location().pathname().ok()
    }

    fn push_path(&self, path: &str) {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            log::warn!("window.history unavailable, {} not pushed", path);
            return;
        };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("pushState({}) failed: {:?}", path, e);
        }
    }

    fn scroll_to_top(&self) {
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
