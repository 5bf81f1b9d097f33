//! Application-wide constants and default values
//!
//! Colors, palettes, layout sizes and file names live here so the chart
//! adapters and widgets don't carry magic numbers.

/// Chart colors
pub mod colors {
    use egui::Color32;

    /// Bokeh's `Category20c`, used when a chart has no explicit colors
    pub const CATEGORY20C: [Color32; 20] = [
        Color32::from_rgb(0x31, 0x82, 0xbd),
        Color32::from_rgb(0x6b, 0xae, 0xd6),
        Color32::from_rgb(0x9e, 0xca, 0xe1),
        Color32::from_rgb(0xc6, 0xdb, 0xef),
        Color32::from_rgb(0xe6, 0x55, 0x0d),
        Color32::from_rgb(0xfd, 0x8d, 0x3c),
        Color32::from_rgb(0xfd, 0xae, 0x6b),
        Color32::from_rgb(0xfd, 0xd0, 0xa2),
        Color32::from_rgb(0x31, 0xa3, 0x54),
        Color32::from_rgb(0x74, 0xc4, 0x76),
        Color32::from_rgb(0xa1, 0xd9, 0x9b),
        Color32::from_rgb(0xc7, 0xe9, 0xc0),
        Color32::from_rgb(0x75, 0x6b, 0xb1),
        Color32::from_rgb(0x9e, 0x9a, 0xc8),
        Color32::from_rgb(0xbc, 0xbd, 0xdc),
        Color32::from_rgb(0xda, 0xda, 0xeb),
        Color32::from_rgb(0x63, 0x63, 0x63),
        Color32::from_rgb(0x96, 0x96, 0x96),
        Color32::from_rgb(0xbd, 0xbd, 0xbd),
        Color32::from_rgb(0xd9, 0xd9, 0xd9),
    ];

    pub const STEEL_BLUE: Color32 = Color32::from_rgb(0x4b, 0x8b, 0xbe);
    pub const FLAME: Color32 = Color32::from_rgb(0xe4, 0x57, 0x2e);
    pub const DARK_ORANGE: Color32 = Color32::from_rgb(0xff, 0x8c, 0x00);
    pub const DODGER_BLUE: Color32 = Color32::from_rgb(0x1e, 0x90, 0xff);
    pub const TEAL: Color32 = Color32::from_rgb(0x00, 0x80, 0x80);
    pub const GOLD: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00);
    pub const SLATE_BLUE: Color32 = Color32::from_rgb(0x6a, 0x5a, 0xcd);
    pub const GOLDENROD: Color32 = Color32::from_rgb(0xda, 0xa5, 0x20);
    pub const PURPLE: Color32 = Color32::from_rgb(0x94, 0x67, 0xbd);
    pub const BROWN: Color32 = Color32::from_rgb(0x8c, 0x56, 0x4b);
    pub const LIGHT_SALMON: Color32 = Color32::from_rgb(0xff, 0xa0, 0x7a);
    pub const DARK_SEA_GREEN: Color32 = Color32::from_rgb(0x8f, 0xbc, 0x8f);

    /// Color of the error banner text
    pub const ERROR: Color32 = Color32::from_rgb(255, 80, 80);
}

/// Plotting defaults
pub mod plot {
    /// Bar width for simple category charts
    pub const BAR_WIDTH: f64 = 0.5;

    /// Bar height for the horizontal stacked age chart
    pub const STACKED_BAR_WIDTH: f64 = 0.8;

    /// Total width taken by one group in a grouped bar chart
    pub const GROUP_WIDTH: f64 = 0.7;

    /// Fixed x-axis window for the sleep histogram (hours)
    pub const SLEEP_AXIS_RANGE: (f64, f64) = (0.0, 12.0);
}

/// UI layout defaults
pub mod layout {
    /// Sidebar (filters) default width
    pub const SIDEBAR_WIDTH: f32 = 260.0;

    /// Default chart height
    pub const CHART_HEIGHT: f32 = 350.0;

    /// Height of the filtered rows preview table
    pub const TABLE_HEIGHT: f32 = 240.0;

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 20.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 18.0;

    /// Maximum number of rows rendered in the preview table
    pub const TABLE_MAX_ROWS: usize = 500;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "heart-dash.json";

    /// Dataset loaded when neither the command line nor the config names one
    pub const DEFAULT_DATA_FILE: &str = "heart_2020_cleaned.csv";
}
