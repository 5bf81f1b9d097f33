//! Aggregation result -> chart description, one adapter per panel.
//!
//! Each adapter returns `None` for an empty result; the caller shows the
//! panel's no-data notice instead of a chart.

use egui::Color32;

use super::{category_colors, ChartBar, ChartKind, ChartSeries, ChartSpec, TooltipField};
use crate::aggregate::{
    AgeDiseaseTable, CountTable, HealthType, MeanHealthTable, SleepHistogram,
};
use crate::constants::colors;
use crate::constants::plot::{BAR_WIDTH, GROUP_WIDTH, SLEEP_AXIS_RANGE, STACKED_BAR_WIDTH};
use crate::data::schema::{ALCOHOL_DRINKING, HEART_DISEASE, SEX, SMOKING};
use crate::data::{Category, Sex, YesNo};

/// Labels and colors for a single-series category bar chart
pub struct BarPresentation<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Tooltip label for the category key
    pub key_field: &'a str,
    /// Tooltip label for the count
    pub value_field: &'a str,
    pub colors: Option<&'a [Color32]>,
}

/// Generic vertical bar chart over a count table
pub fn count_bar_chart<K: Category>(
    table: &CountTable<K>,
    presentation: &BarPresentation<'_>,
    label: impl Fn(K) -> &'static str,
) -> Option<ChartSpec> {
    if table.is_empty() {
        return None;
    }

    let palette = category_colors(table.rows.len(), presentation.colors);
    let bars: Vec<ChartBar> = table
        .rows
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (row, color))| ChartBar {
            position: i as f64,
            width: BAR_WIDTH,
            base: 0.0,
            value: row.count as f64,
            color,
            tooltip: vec![
                TooltipField::new(presentation.key_field, label(row.key)),
                TooltipField::new(presentation.value_field, row.count),
            ],
        })
        .collect();

    Some(ChartSpec {
        title: presentation.title.to_string(),
        kind: ChartKind::Bar,
        x_label: presentation.x_label.to_string(),
        y_label: presentation.y_label.to_string(),
        categories: table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i as f64, label(row.key).to_string()))
            .collect(),
        series: vec![ChartSeries {
            name: presentation.value_field.to_string(),
            color: bars.first().map_or(Color32::GRAY, |bar| bar.color),
            bars,
        }],
        x_range: None,
        show_legend: false,
    })
}

pub fn disease_distribution_chart(table: &CountTable<YesNo>) -> Option<ChartSpec> {
    count_bar_chart(
        table,
        &BarPresentation {
            title: "Distribusi Proporsi Penderita Penyakit Jantung",
            x_label: "Status Penyakit Jantung",
            y_label: "Jumlah Orang",
            key_field: HEART_DISEASE,
            value_field: "Count",
            colors: Some(&[colors::STEEL_BLUE, colors::FLAME]),
        },
        |k| k.label(),
    )
}

pub fn sex_chart(table: &CountTable<Sex>) -> Option<ChartSpec> {
    count_bar_chart(
        table,
        &BarPresentation {
            title: "Jumlah Kasus Penyakit Jantung per Jenis Kelamin",
            x_label: "Jenis Kelamin",
            y_label: "Jumlah Kasus",
            key_field: SEX,
            value_field: "Count",
            colors: Some(&[colors::DARK_ORANGE, colors::DODGER_BLUE]),
        },
        |k| k.label(),
    )
}

/// Display label for a smoking status
pub fn smoking_label(status: YesNo) -> &'static str {
    match status {
        YesNo::Yes => "Perokok",
        YesNo::No => "Bukan Perokok",
    }
}

pub fn smoking_chart(table: &CountTable<YesNo>) -> Option<ChartSpec> {
    count_bar_chart(
        table,
        &BarPresentation {
            title: "Jumlah Penderita Penyakit Jantung berdasarkan Kebiasaan Merokok",
            x_label: "Status Merokok",
            y_label: "Jumlah Penderita",
            key_field: SMOKING,
            value_field: "Count",
            colors: Some(&[colors::TEAL, colors::GOLD]),
        },
        smoking_label,
    )
}

pub fn alcohol_chart(table: &CountTable<YesNo>) -> Option<ChartSpec> {
    count_bar_chart(
        table,
        &BarPresentation {
            title: "Jumlah Penderita Penyakit Jantung berdasarkan Kebiasaan Minum Alkohol",
            x_label: "Status Minum Alkohol",
            y_label: "Jumlah Penderita",
            key_field: ALCOHOL_DRINKING,
            value_field: "Count",
            colors: Some(&[colors::SLATE_BLUE, colors::GOLDENROD]),
        },
        |k| k.label(),
    )
}

/// Horizontal stacked Yes/No bars per age bracket, youngest on top
pub fn age_chart(table: &AgeDiseaseTable) -> Option<ChartSpec> {
    if table.is_empty() {
        return None;
    }

    let top = (table.rows.len() - 1) as f64;
    let position = |i: usize| top - i as f64;

    let tooltip = |i: usize| {
        let row = &table.rows[i];
        vec![
            TooltipField::new("Kelompok Umur", row.age.label()),
            TooltipField::new("Penyakit Jantung (Ya)", row.yes),
            TooltipField::new("Penyakit Jantung (Tidak)", row.no),
            TooltipField::new("Total Kasus", row.total()),
        ]
    };

    let yes_bars = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| ChartBar {
            position: position(i),
            width: STACKED_BAR_WIDTH,
            base: 0.0,
            value: row.yes as f64,
            color: colors::FLAME,
            tooltip: tooltip(i),
        })
        .collect();

    let no_bars = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| ChartBar {
            position: position(i),
            width: STACKED_BAR_WIDTH,
            base: row.yes as f64,
            value: row.no as f64,
            color: colors::STEEL_BLUE,
            tooltip: tooltip(i),
        })
        .collect();

    Some(ChartSpec {
        title: "Jumlah Orang Terkena dan Tidak Terkena Penyakit Jantung Berdasarkan Umur".to_string(),
        kind: ChartKind::HorizontalStackedBar,
        x_label: "Jumlah Orang".to_string(),
        y_label: "Kelompok Umur".to_string(),
        categories: table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (position(i), row.age.label().to_string()))
            .collect(),
        series: vec![
            ChartSeries {
                name: YesNo::Yes.label().to_string(),
                color: colors::FLAME,
                bars: yes_bars,
            },
            ChartSeries {
                name: YesNo::No.label().to_string(),
                color: colors::STEEL_BLUE,
                bars: no_bars,
            },
        ],
        x_range: None,
        show_legend: true,
    })
}

/// Grouped bars: one group per status, one bar per health type
pub fn mean_health_chart(table: &MeanHealthTable) -> Option<ChartSpec> {
    if table.is_empty() {
        return None;
    }

    let statuses = table.statuses();
    let health_colors = category_colors(
        HealthType::ALL.len(),
        Some(&[colors::PURPLE, colors::BROWN]),
    );
    let bar_width = GROUP_WIDTH / HealthType::ALL.len() as f64;

    let series = HealthType::ALL
        .into_iter()
        .zip(health_colors)
        .enumerate()
        .map(|(j, (health_type, color))| {
            let offset = (j as f64 - (HealthType::ALL.len() - 1) as f64 / 2.0) * bar_width;
            let bars = statuses
                .iter()
                .enumerate()
                .filter_map(|(g, &status)| {
                    let average = table.get(status, health_type)?;
                    let total: f64 = HealthType::ALL
                        .into_iter()
                        .filter_map(|ht| table.get(status, ht))
                        .sum();
                    Some(ChartBar {
                        position: g as f64 + offset,
                        width: bar_width,
                        base: 0.0,
                        value: average,
                        color,
                        tooltip: vec![
                            TooltipField::new("Status Penyakit Jantung", status.label()),
                            TooltipField::new("Jenis Sakit", health_type.as_str()),
                            TooltipField::new("Rata-rata Hari", format!("{:.2}", average)),
                            TooltipField::new("Total", format!("{:.2}", total)),
                        ],
                    })
                })
                .collect();
            ChartSeries {
                name: health_type.as_str().to_string(),
                color,
                bars,
            }
        })
        .collect();

    Some(ChartSpec {
        title: "Rata-rata Hari Sakit Fisik dan Mental berdasarkan Status Penyakit Jantung".to_string(),
        kind: ChartKind::GroupedBar,
        x_label: "Status Penyakit Jantung".to_string(),
        y_label: "Rata-rata Jumlah Hari".to_string(),
        categories: statuses
            .iter()
            .enumerate()
            .map(|(g, status)| (g as f64, status.label().to_string()))
            .collect(),
        series,
        x_range: None,
        show_legend: true,
    })
}

/// Stacked histogram: "Tidak" at the bottom, "Ya" on top
pub fn sleep_chart(histogram: &SleepHistogram) -> Option<ChartSpec> {
    if histogram.is_empty() {
        return None;
    }

    let tooltip = |i: usize| {
        let bin = &histogram.bins[i];
        vec![
            TooltipField::new("Rentang Jam Tidur", format!("{:.0} - {:.0} jam", bin.left, bin.right)),
            TooltipField::new("Jumlah Responden (Ya)", bin.yes),
            TooltipField::new("Jumlah Responden (Tidak)", bin.no),
            TooltipField::new("Total", bin.total()),
        ]
    };

    let no_bars = histogram
        .bins
        .iter()
        .enumerate()
        .map(|(i, bin)| ChartBar {
            position: (bin.left + bin.right) / 2.0,
            width: bin.right - bin.left,
            base: 0.0,
            value: bin.no as f64,
            color: colors::DARK_SEA_GREEN,
            tooltip: tooltip(i),
        })
        .collect();

    let yes_bars = histogram
        .bins
        .iter()
        .enumerate()
        .map(|(i, bin)| ChartBar {
            position: (bin.left + bin.right) / 2.0,
            width: bin.right - bin.left,
            base: bin.no as f64,
            value: bin.yes as f64,
            color: colors::LIGHT_SALMON,
            tooltip: tooltip(i),
        })
        .collect();

    Some(ChartSpec {
        title: "Distribusi Jam Tidur Berdasarkan Status Penyakit Jantung".to_string(),
        kind: ChartKind::StackedHistogram,
        x_label: "Jam Tidur per Malam".to_string(),
        y_label: "Jumlah Responden".to_string(),
        categories: Vec::new(),
        series: vec![
            ChartSeries {
                name: "Tidak".to_string(),
                color: colors::DARK_SEA_GREEN,
                bars: no_bars,
            },
            ChartSeries {
                name: "Ya".to_string(),
                color: colors::LIGHT_SALMON,
                bars: yes_bars,
            },
        ],
        x_range: Some(SLEEP_AXIS_RANGE),
        show_legend: true,
    })
}
