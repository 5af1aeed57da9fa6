//! Moveasy - travel booking app
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Moveasy v{}", env!("CARGO_PKG_VERSION"));

    // Phone-sized window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 844.0])
            .with_min_inner_size([320.0, 568.0])
            .with_title("Moveasy"),
        ..Default::default()
    };

    eframe::run_native(
        "Moveasy",
        options,
        Box::new(|cc| Ok(Box::new(app::MoveasyApp::new(cc)))),
    )
}
