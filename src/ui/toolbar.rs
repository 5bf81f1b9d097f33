use std::path::Path;

use egui::RichText;

use crate::app::HeartDash;
use crate::constants::{colors, config};

/// Top bar: file operations, view toggles and the row count
pub fn render_toolbar(app: &mut HeartDash, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("📂 Open Dataset").on_hover_text("Load a survey CSV").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .pick_file()
            {
                app.open_file(&path);
            }
        }

        if ui.button("💾 Save Settings").on_hover_text(config::CONFIG_FILE).clicked() {
            app.save_config(Path::new(config::CONFIG_FILE));
        }

        ui.separator();

        let state = &mut app.state;
        ui.toggle_value(&mut state.ui.show_table, "📋 Table")
            .on_hover_text("Preview filtered rows");

        let theme = if state.ui.dark_mode { "🌙" } else { "☀" };
        if ui.button(theme).on_hover_text("Toggle theme").clicked() {
            state.ui.dark_mode = !state.ui.dark_mode;
        }

        ui.add(
            egui::Slider::new(&mut state.ui.chart_height, 200.0..=700.0)
                .text("Chart height")
                .step_by(10.0),
        );

        ui.separator();

        if let Some(path) = state.dataset.file_path() {
            ui.label(format!(
                "📄 {}",
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("Unknown")
            ))
            .on_hover_text(path.display().to_string());
            ui.separator();
        }

        let status = state.dashboard.status_line();
        if state.has_active_filters() {
            ui.strong(status);
        } else {
            ui.label(status);
        }
    });

    // Handle drag and drop
    let dropped = ui.ctx().input(|i| {
        i.raw
            .dropped_files
            .first()
            .and_then(|f| f.path.clone())
    });
    if let Some(path) = dropped {
        app.open_file(&path);
    }
}

/// Dismissable error line, shown only while an error is set
pub fn render_error_banner(app: &mut HeartDash, ui: &mut egui::Ui) {
    let Some(message) = app.state.ui.error_message.clone() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("⚠ {}", message)).color(colors::ERROR));
        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
            app.state.ui.clear_error();
        }
    });
}
