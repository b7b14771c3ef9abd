// main.rs - Window front end for the conway engine

use conway_view::{LifeApp, ViewConfig, ViewError, init_logging};
use eframe::egui;
use tracing::info;

fn main() -> Result<(), ViewError> {
    init_logging();

    let config = ViewConfig::from_env()?;
    info!(width = config.width, height = config.height, "starting window");
    let app = LifeApp::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(app.preferred_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}
