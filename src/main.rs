// src/main.rs
use anyhow::Result;
use eframe::egui;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

mod api;
mod app;
mod report;
mod settings;
mod state;
mod store;
mod ui;

use app::CoalWatchApp;
use settings::Settings;

fn init_logging() -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let settings = Settings::load()?;
    log::info!("forecast service at {}", settings.api_base);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Прогноз самовозгорания угля"),
        ..Default::default()
    };

    eframe::run_native(
        "coalwatch",
        options,
        Box::new(move |_cc| Box::new(CoalWatchApp::new(&settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
