//! Error types for the heart disease dashboard
//!
//! Load-time problems (missing columns, unparseable values, unknown
//! categories) are fatal at startup; everything after load is either
//! infallible or reported per panel.

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Required column not present in the CSV header
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Empty or unparseable cell in a required column
    #[error("Missing or non-numeric value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    /// Categorical cell outside the column's fixed value set
    #[error("Unexpected value '{value}' in column '{column}' at row {row}")]
    InvalidCategory {
        column: String,
        value: String,
        row: usize,
    },

    /// Empty dataset error
    #[error("Dataset is empty or has no rows")]
    EmptyDataset,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;

/// UI-friendly error message formatting
impl DashError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            DashError::FileIo(e) => format!("File error: {}", e),
            DashError::Polars(e) => format!("Data error: {}", e),
            DashError::Config(msg) => format!("Config error: {}", msg),
            DashError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            DashError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            DashError::MissingValue { column, row } => {
                format!("Row {} has no usable value for '{}'", row + 1, column)
            }
            DashError::InvalidCategory { column, value, row } => {
                format!("Row {}: '{}' is not a valid {}", row + 1, value, column)
            }
            DashError::EmptyDataset => "Dataset is empty".to_string(),
            DashError::Json(e) => format!("JSON error: {}", e),
        }
    }

    /// Get a short title for the error (for the error banner)
    pub fn title(&self) -> &'static str {
        match self {
            DashError::FileIo(_) => "File Error",
            DashError::Polars(_) => "Data Error",
            DashError::Config(_) => "Configuration Error",
            DashError::UnsupportedFormat { .. } => "Unsupported Format",
            DashError::ColumnNotFound { .. } => "Column Not Found",
            DashError::MissingValue { .. } => "Missing Value",
            DashError::InvalidCategory { .. } => "Invalid Category",
            DashError::EmptyDataset => "Empty Dataset",
            DashError::Json(_) => "JSON Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DashError::ColumnNotFound {
            column: "SleepTime".to_string(),
        };
        assert_eq!(err.user_message(), "Column 'SleepTime' not found");
        assert_eq!(err.title(), "Column Not Found");

        let err = DashError::InvalidCategory {
            column: "Sex".to_string(),
            value: "Other".to_string(),
            row: 4,
        };
        assert_eq!(err.user_message(), "Row 5: 'Other' is not a valid Sex");
        assert_eq!(
            err.to_string(),
            "Unexpected value 'Other' in column 'Sex' at row 4"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_err: DashError = io_err.into();
        assert!(matches!(dash_err, DashError::FileIo(_)));
    }
}
