use std::path::Path;

use eframe::egui::{self, CentralPanel, ScrollArea, SidePanel, TopBottomPanel};

use crate::config::DashboardConfig;
use crate::constants::layout;
use crate::data::Dataset;
use crate::error::Result;
use crate::state::AppState;
use crate::widgets::FilterControls;
use crate::{perf, ui};

pub struct HeartDash {
    pub state: AppState,
}

impl HeartDash {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(dataset, config),
        }
    }

    /// Load a replacement dataset; on failure the current one stays
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let dataset = crate::timed!("load_dataset", Dataset::load(path))?;
        log::info!(
            "replacing dataset with {} ({} rows)",
            path.display(),
            dataset.height()
        );
        self.state.replace_dataset(dataset);
        Ok(())
    }

    /// [`Self::load_file`] with failures reported in the error banner
    pub fn open_file(&mut self, path: &Path) {
        if let Err(e) = self.load_file(path) {
            log::error!("failed to load {}: {}", path.display(), e);
            self.state.ui.set_error(format!("{}: {}", e.title(), e.user_message()));
        }
    }

    pub fn save_config(&mut self, path: &Path) {
        let mut config = self.state.config.clone();
        self.state.ui.store_into(&mut config);
        match config.save(path) {
            Ok(()) => self.state.config = config,
            Err(e) => {
                log::error!("failed to save config: {}", e);
                self.state.ui.set_error(e.user_message());
            }
        }
    }
}

impl eframe::App for HeartDash {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        perf::finish_frame();
        profiling::scope!("HeartDash::update");

        if self.state.ui.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::render_toolbar(self, ui);
            ui::render_error_banner(self, ui);
            ui.add_space(2.0);
        });

        SidePanel::left("filters")
            .default_width(layout::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    let dataset = self.state.dataset.clone();
                    let reset = FilterControls::new(&mut self.state.filters, &dataset).show(ui);
                    if reset.inner {
                        self.state.reset_filters();
                    }
                });
            });

        // Sidebar edits take effect in the same frame
        self.state.refresh();

        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Dashboard Interaktif: Visualisasi Penyakit Jantung 2020");
            ui.separator();

            ScrollArea::vertical().show(ui, |ui| {
                let chart_height = self.state.ui.chart_height;
                for panel in &self.state.dashboard.panels {
                    ui::render_panel(ui, panel, chart_height);
                }

                if self.state.ui.show_table {
                    ui.heading("Data Terfilter");
                    ui::render_data_table(ui, &self.state.dataset, &self.state.dashboard.rows);
                }
            });
        });
    }
}
