pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod test_support;
pub mod utils;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::DEFAULT_LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }

    // Mount after the runtime config resolves so the first render sees the
    // configured event and API base URL.
    leptos::spawn_local(async move {
        let cfg = config::await_config().await;
        log::set_max_level(cfg.log_level.to_level_filter());
        log::info!("Starting {} attendance portal", cfg.event.name);
        router::mount_app();
    });
}
