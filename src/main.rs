// Reddot Mobile - Main Entry Point
// Opens a native window showing the static content screen

use eframe::egui;
use reddot_mobile::config::{Config, MIN_WINDOW_SIZE};
use reddot_mobile::ui::{install_fonts, render_app_layout, ContentView};
use tracing::info;

fn main() -> eframe::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size(config.inner_size())
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    info!(title = %config.window.title, "Starting window");

    // Run the application
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(|cc| {
            install_fonts(&cc.egui_ctx);
            Box::new(ReddotApp::new())
        }),
    )
}

/// Main application struct
/// Holds the screen and renders it every frame
struct ReddotApp {
    view: ContentView,
}

impl ReddotApp {
    fn new() -> Self {
        Self {
            view: ContentView::new(),
        }
    }
}

impl eframe::App for ReddotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render_app_layout(ctx, &self.view);
    }
}
