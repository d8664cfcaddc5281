//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::root_view::RootView;
use crate::domain::config::AppConfig;

actions!(typed_ui_demo, [Quit]);

/// Run the demo application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Window sizing comes from the optional config file
        let config = AppConfig::load();

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Typed Component Demo")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| cx.new(|cx| RootView::new(cx)))
            .expect("failed to open the main window");

        cx.activate(true);
    });
}
