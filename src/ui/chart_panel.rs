use egui::{Color32, RichText, Stroke};
use egui_plot::{uniform_grid_spacer, Bar, BarChart, Corner, GridMark, Legend, Plot};

use crate::chart::{category_label, ChartKind, ChartSpec};
use crate::dashboard::{Panel, PanelContent};

/// Render one dashboard panel: its heading, then the chart or the no-data notice
pub fn render_panel(ui: &mut egui::Ui, panel: &Panel, chart_height: f32) {
    ui.heading(panel.heading);
    match &panel.content {
        PanelContent::Chart(spec) => render_chart(ui, spec, chart_height),
        PanelContent::NoData(message) => render_no_data(ui, message, chart_height),
    }
    ui.add_space(12.0);
}

fn render_no_data(ui: &mut egui::Ui, message: &str, chart_height: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.set_min_height((chart_height / 4.0).min(80.0));
        ui.label(RichText::new(format!("ℹ {}", message)).italics());
    });
}

fn render_chart(ui: &mut egui::Ui, spec: &ChartSpec, chart_height: f32) {
    profiling::scope!("render_chart");

    ui.label(RichText::new(&spec.title).strong());

    let horizontal = spec.kind.is_horizontal();
    let mut plot = Plot::new(&spec.title)
        .height(chart_height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone());

    if spec.show_legend {
        plot = plot.legend(Legend::default().position(Corner::RightTop));
    }

    if let Some((min, max)) = spec.x_range {
        plot = plot.include_x(min).include_x(max);
    }

    // counts start at zero on the value axis
    plot = if horizontal { plot.include_x(0.0) } else { plot.include_y(0.0) };

    if spec.kind != ChartKind::StackedHistogram {
        let categories = spec.categories.clone();
        let formatter = move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            category_label(&categories, mark.value).to_string()
        };
        let spacer = uniform_grid_spacer(|_| [1.0, 1.0, 1.0]);
        plot = if horizontal {
            plot.y_axis_formatter(formatter).y_grid_spacer(spacer)
        } else {
            plot.x_axis_formatter(formatter).x_grid_spacer(spacer)
        };
    }

    plot.show(ui, |plot_ui| {
        for series in &spec.series {
            let bars: Vec<Bar> = series
                .bars
                .iter()
                .map(|bar| {
                    Bar::new(bar.position, bar.value)
                        .width(bar.width)
                        .base_offset(bar.base)
                        .fill(bar.color)
                        .stroke(Stroke::new(1.0, outline(bar.color)))
                        .name(bar.tooltip_text())
                })
                .collect();

            let mut chart = BarChart::new(series.name.clone(), bars)
                .color(series.color)
                .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| bar.name.clone()));
            if horizontal {
                chart = chart.horizontal();
            }
            plot_ui.bar_chart(chart);
        }
    });
}

fn outline(fill: Color32) -> Color32 {
    fill.gamma_multiply(0.8)
}
