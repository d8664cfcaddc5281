//! Typed UI Demo - Main Entry Point
//!
//! A native GPUI demonstration of statically typed UI components.

use typed_ui_demo::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Typed UI Demo...");

    // Run the GPUI application
    run_app();
}
