//! UI interaction state

use crate::config::DashboardConfig;

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Error message to display in the banner
    pub error_message: Option<String>,

    /// Show the filtered rows preview table
    pub show_table: bool,

    pub dark_mode: bool,

    /// Height of each chart panel
    pub chart_height: f32,
}

impl UiState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            error_message: None,
            show_table: config.show_table,
            dark_mode: config.dark_mode,
            chart_height: config.chart_height,
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Copy the UI toggles back into the config for saving
    pub fn store_into(&self, config: &mut DashboardConfig) {
        config.show_table = self.show_table;
        config.dark_mode = self.dark_mode;
        config.chart_height = self.chart_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_lifecycle() {
        let mut ui = UiState::from_config(&DashboardConfig::default());
        assert!(ui.error_message.is_none());

        ui.set_error("boom");
        assert_eq!(ui.error_message.as_deref(), Some("boom"));

        ui.clear_error();
        assert!(ui.error_message.is_none());
    }

    #[test]
    fn test_toggles_round_trip_through_config() {
        let mut config = DashboardConfig::default();
        let mut ui = UiState::from_config(&config);
        ui.show_table = !config.show_table;
        ui.chart_height = 500.0;

        ui.store_into(&mut config);

        assert_eq!(config.show_table, ui.show_table);
        assert_eq!(config.chart_height, 500.0);
    }
}
