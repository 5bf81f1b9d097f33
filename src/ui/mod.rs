mod chart_panel;
mod data_table;
mod toolbar;

pub use chart_panel::render_panel;
pub use data_table::render_data_table;
pub use toolbar::{render_error_banner, render_toolbar};
