mod app;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::FileRosterApp;
use clap::Parser;
use eframe::egui;
use file_roster::{Config, DataService};

/// Browse a CSV file list sorted by date or file name.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Data file; overrides the config.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Fail date sorts on unparsable dates.
    #[arg(long)]
    strict_dates: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(data) = self.data {
            config.data_path = data;
        }
        config.strict_dates |= self.strict_dates;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    log::info!("Reading file list from {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let service = DataService::new(config);
    eframe::run_native(
        "File Roster",
        options,
        Box::new(|_cc| Ok(Box::new(FileRosterApp::new(service)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
