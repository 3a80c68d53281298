use std::{env, path::{Path, PathBuf}, process::ExitCode};

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{app::SharkApp, driver::Driver};

mod app;
mod command;
mod common;
mod driver;
mod error;
mod settings;
mod state;
mod style;
mod ui;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--apply`: push the saved config to the mouse once, without a window.
fn apply_once(driver: &Driver, path: &Path, reapply: bool) -> Result<()> {
    let mut settings = settings::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    settings.reapply_config = reapply;

    let cmd = command::build(&settings, &path.display().to_string());
    info!(command = %command::display(&cmd), "Applying settings");

    let out = driver.run(&cmd).context("Failed to apply settings")?;
    print!("{out}");
    Ok(())
}

fn query_charge_once(driver: &Driver) -> Result<()> {
    let out = driver.run(&command::query_charge()).context("Failed to query charge")?;
    print!("{out}");
    Ok(())
}

fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let config_path = args.iter()
        .find_map(|a| a.strip_prefix("--config="))
        .map(PathBuf::from)
        .unwrap_or_else(settings::default_config_path);

    let driver = Driver::from_env();
    info!(program = driver.program(), config = %config_path.display(), "Starting");

    if args.iter().any(|a| a == "--query-charge") {
        return report(query_charge_once(&driver));
    }

    if args.iter().any(|a| a == "--apply") {
        let reapply = args.iter().any(|a| a == "--reapply");
        return report(apply_once(&driver, &config_path, reapply));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 640.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Attack Shark R1 Driver"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Attack Shark R1 Driver",
        options,
        Box::new(move |_cc| Ok(Box::new(SharkApp::new(driver, config_path))))
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("GUI failed: {e}");
            ExitCode::FAILURE
        }
    }
}
