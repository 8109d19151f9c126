use web_sys::Window;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Full page navigation. Used after auth changes so every provider
/// re-runs its session check.
pub fn redirect_to(path: &str) {
    if let Ok(window) = window() {
        let location = window.location();
        if location.pathname().map(|p| p == path).unwrap_or(false) {
            return;
        }
        if let Err(err) = location.set_href(path) {
            log::error!("Failed to navigate to {}: {:?}", path, err);
        }
    }
}
