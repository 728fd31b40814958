//! Spotlight shell - Main Entry Point
//!
//! Serves the Dioxus application. Uses dioxus::serve() pattern for dx serve
//! compatibility.

use spotlight_shell::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use spotlight_shell::config::ShellConfig;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Spotlight shell...");

    match ShellConfig::from_env() {
        Ok(config) => tracing::info!(
            breakpoint_px = config.breakpoint_px,
            login_path = %config.login_path,
            resize_policy = ?config.resize_policy,
            "Shell configuration loaded"
        ),
        Err(e) => tracing::warn!("Invalid shell configuration, falling back to defaults: {}", e),
    }

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Spotlight shell - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
