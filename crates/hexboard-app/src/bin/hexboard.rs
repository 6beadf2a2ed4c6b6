//! Hexboard desktop application using egui/eframe.

use clap::Parser as _;
use hexboard_app::{AppConfig, HexboardApp};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "hexboard";

    better_panic::install();
    env_logger::init();

    let config = AppConfig::parse();

    log::info!(
        "starting Hexboard {}, side length {}",
        env!("CARGO_PKG_VERSION"),
        config.side_len
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((config.width, config.height))
            .with_min_inner_size((200.0, 200.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Hexboard",
        options,
        Box::new(move |_cc| Ok(Box::new(HexboardApp::new(&config)?))),
    )
}
