//! Application state management
//!
//! The dashboard state is split into the loaded dataset, the filter
//! selection, the last computed render output and UI-only flags.

mod filters;
mod ui;

pub use filters::{FilterParameters, SexFilter};
pub use ui::UiState;

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::data::Dataset;

/// Main application state container
pub struct AppState {
    /// Read-only survey data, shared with every recompute
    pub dataset: Arc<Dataset>,

    /// Current sidebar selection
    pub filters: FilterParameters,

    /// Selection the current dashboard was computed from
    applied: Option<FilterParameters>,

    /// Panels for `applied`
    pub dashboard: Dashboard,

    /// Banner text set by a failed recompute, cleared by the next good one
    filter_error: Option<String>,

    /// UI interaction state
    pub ui: UiState,

    pub config: DashboardConfig,
}

impl AppState {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let filters = FilterParameters::for_dataset(&dataset);
        let dashboard = Dashboard::empty(&dataset);
        let mut state = Self {
            dataset: Arc::new(dataset),
            filters,
            applied: None,
            dashboard,
            filter_error: None,
            ui: UiState::from_config(&config),
            config,
        };
        state.refresh();
        state
    }

    /// Swap in a freshly loaded dataset and reset the filters to its defaults
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        if let Some(path) = dataset.file_path() {
            self.config.data_path = path.to_path_buf();
        }
        self.filters = FilterParameters::for_dataset(&dataset);
        self.dataset = Arc::new(dataset);
        self.applied = None;
        self.refresh();
    }

    /// Recompute the dashboard if the selection changed since the last run.
    ///
    /// Returns true when a recompute happened.
    pub fn refresh(&mut self) -> bool {
        self.filters.validate(self.dataset.ranges());
        if self.applied.as_ref() == Some(&self.filters) {
            return false;
        }

        match Dashboard::compute(&self.dataset, &self.filters) {
            Ok(dashboard) => {
                log::info!("filters applied: {}", dashboard.status_line());
                self.dashboard = dashboard;
                if let Some(message) = self.filter_error.take() {
                    if self.ui.error_message.as_ref() == Some(&message) {
                        self.ui.clear_error();
                    }
                }
            }
            Err(e) => {
                log::error!("filter evaluation failed: {}", e);
                self.dashboard = Dashboard::empty(&self.dataset);
                let message = e.user_message();
                self.ui.set_error(message.clone());
                self.filter_error = Some(message);
            }
        }
        self.applied = Some(self.filters.clone());
        true
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear(&self.dataset);
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters(&self.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::tests::sample_dataset;
    use crate::data::{NumericRange, Sex};

    #[test]
    fn test_new_state_computes_once() {
        let mut state = AppState::new(sample_dataset(), DashboardConfig::default());

        assert_eq!(state.dashboard.filtered_rows(), 8);
        assert!(!state.refresh());
    }

    #[test]
    fn test_refresh_only_on_change() {
        let mut state = AppState::new(sample_dataset(), DashboardConfig::default());

        state.filters.sex = SexFilter::Only(Sex::Male);
        assert!(state.refresh());
        assert_eq!(state.dashboard.filtered_rows(), 4);
        assert!(!state.refresh());

        state.reset_filters();
        assert!(!state.has_active_filters());
        assert!(state.refresh());
        assert_eq!(state.dashboard.filtered_rows(), 8);
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let mut state = AppState::new(sample_dataset(), DashboardConfig::default());
        state.filters.sleep_time = NumericRange { min: 50.0, max: -3.0 };

        state.refresh();

        assert_eq!(state.filters.sleep_time, state.dataset.ranges().sleep_time);
        assert_eq!(state.dashboard.filtered_rows(), 8);
    }

    #[test]
    fn test_replace_dataset_resets_filters() {
        let mut state = AppState::new(sample_dataset(), DashboardConfig::default());
        state.filters.clear_ages();
        state.refresh();
        assert_eq!(state.dashboard.filtered_rows(), 0);

        state.replace_dataset(sample_dataset());

        assert!(!state.has_active_filters());
        assert_eq!(state.dashboard.filtered_rows(), 8);
    }

    #[test]
    fn test_recompute_keeps_unrelated_error() {
        let mut state = AppState::new(sample_dataset(), DashboardConfig::default());
        state.ui.set_error("Failed to save settings");

        state.filters.sex = SexFilter::Only(Sex::Female);
        assert!(state.refresh());

        assert_eq!(state.ui.error_message.as_deref(), Some("Failed to save settings"));
    }
}
