pub mod filter;
pub mod schema;
pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use filter::{apply_filters, FilteredView};
pub use schema::{AgeCategory, Category, Respondent, Sex, YesNo};
pub use source::Dataset;
pub use stats::{NumericRange, ObservedRanges};
