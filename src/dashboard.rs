//! One recompute pass: filter, aggregate, adapt.

use crate::aggregate::{
    disease_distribution, heart_disease_by_age, heart_disease_by_alcohol, heart_disease_by_sex,
    heart_disease_by_smoking, mean_health_days, sleep_histogram,
};
use crate::chart::adapters::{
    age_chart, alcohol_chart, disease_distribution_chart, mean_health_chart, sex_chart,
    sleep_chart, smoking_chart,
};
use crate::chart::ChartSpec;
use crate::data::{apply_filters, Dataset, FilteredView};
use crate::error::Result;
use crate::state::FilterParameters;

/// Shown by every panel when the filters leave nothing to plot
pub const NO_DATA_MESSAGE: &str = "Tidak ada data yang tersedia untuk filter yang dipilih.";

#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Chart(ChartSpec),
    NoData(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub heading: &'static str,
    pub content: PanelContent,
}

impl Panel {
    fn new(heading: &'static str, chart: Option<ChartSpec>, no_data: &'static str) -> Self {
        Self {
            heading,
            content: chart.map_or(PanelContent::NoData(no_data), PanelContent::Chart),
        }
    }

    #[cfg(test)]
    pub fn has_chart(&self) -> bool {
        matches!(self.content, PanelContent::Chart(_))
    }
}

/// Render output for the current filter selection
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Dataset rows that passed the filters, in dataset order
    pub rows: Vec<usize>,
    pub total_rows: usize,
    pub panels: Vec<Panel>,
}

impl Dashboard {
    /// Filter the dataset and rebuild every panel
    pub fn compute(dataset: &Dataset, params: &FilterParameters) -> Result<Self> {
        profiling::scope!("Dashboard::compute");

        let view = apply_filters(dataset, params)?;
        Ok(Self::from_view(&view))
    }

    /// Panels for an already filtered view.
    ///
    /// An empty view shows the generic notice everywhere; otherwise a panel
    /// with nothing to plot explains which group came up empty.
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        let notice = |specific: &'static str| {
            if view.is_empty() { NO_DATA_MESSAGE } else { specific }
        };

        let panels = vec![
            Panel::new(
                "1. Distribusi Status Penyakit Jantung",
                disease_distribution_chart(&disease_distribution(view)),
                NO_DATA_MESSAGE,
            ),
            Panel::new(
                "2. Jumlah Kasus Penyakit Jantung Berdasarkan Jenis Kelamin",
                sex_chart(&heart_disease_by_sex(view)),
                notice("Tidak ada kasus penyakit jantung berdasarkan jenis kelamin untuk filter yang dipilih."),
            ),
            Panel::new(
                "3. Jumlah Orang Terkena dan Tidak Terkena Penyakit Jantung Berdasarkan Umur",
                age_chart(&heart_disease_by_age(view)),
                notice("Tidak ada data distribusi penyakit jantung berdasarkan kategori usia untuk filter yang dipilih."),
            ),
            Panel::new(
                "4. Distribusi Penderita Penyakit Jantung berdasarkan Kebiasaan Merokok",
                smoking_chart(&heart_disease_by_smoking(view)),
                notice("Tidak ada penderita penyakit jantung berdasarkan kebiasaan merokok untuk filter yang dipilih."),
            ),
            Panel::new(
                "5. Distribusi Penderita Penyakit Jantung berdasarkan Kebiasaan Minum Alkohol",
                alcohol_chart(&heart_disease_by_alcohol(view)),
                notice("Tidak ada penderita penyakit jantung berdasarkan kebiasaan minum alkohol untuk filter yang dipilih."),
            ),
            Panel::new(
                "6. Rata-rata Hari Sakit Fisik dan Mental berdasarkan Status Penyakit Jantung",
                mean_health_chart(&mean_health_days(view)),
                notice("Tidak ada data rata-rata hari sakit fisik dan mental untuk filter yang dipilih."),
            ),
            Panel::new(
                "7. Distribusi Jam Tidur Berdasarkan Status Penyakit Jantung",
                sleep_chart(&sleep_histogram(view)),
                NO_DATA_MESSAGE,
            ),
        ];

        Self {
            rows: view.row_indices().to_vec(),
            total_rows: view.dataset().height(),
            panels,
        }
    }

    /// Every panel in its no-data state, used when filtering itself failed
    pub fn empty(dataset: &Dataset) -> Self {
        Self::from_view(&FilteredView::none(dataset))
    }

    pub fn filtered_rows(&self) -> usize {
        self.rows.len()
    }

    /// Status line text, e.g. "3 of 8 respondents"
    pub fn status_line(&self) -> String {
        format!("{} of {} respondents", self.filtered_rows(), self.total_rows)
    }
}
