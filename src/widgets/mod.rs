//! Reusable UI widgets for the dashboard

mod filter_controls;
mod range_input;

pub use filter_controls::FilterControls;
pub use range_input::RangeInput;
