#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod aggregate;
mod app;
mod chart;
mod config;
mod constants;
mod dashboard;
mod data;
mod error;
mod perf;
mod state;
mod ui;
mod widgets;

use app::HeartDash;
use config::DashboardConfig;
use data::Dataset;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    perf::start_profiler();

    let config = match DashboardConfig::load(Path::new(constants::config::CONFIG_FILE)) {
        Ok(config) => config.with_data_override(std::env::args_os().nth(1).map(PathBuf::from)),
        Err(e) => {
            log::error!("{}: {}", e.title(), e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let dataset = match timed!("load_dataset", Dataset::load(&config.data_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!(
                "cannot load {}: {}",
                config.data_path.display(),
                e.user_message()
            );
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };
    let result = eframe::run_native(
        "Heart Disease Dashboard",
        options,
        Box::new(|_| Ok(Box::new(HeartDash::new(dataset, config)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI terminated: {}", e);
            ExitCode::FAILURE
        }
    }
}
