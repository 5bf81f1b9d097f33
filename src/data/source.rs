use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::schema::*;
use super::stats::{observed_range, NumericRange, ObservedRanges};
use crate::error::{DashError, Result};

/// The survey table, validated and immutable after load.
///
/// Holds the typed records alongside a normalized polars frame (canonical
/// strings, `Float64` numerics and a row-id column) that the filter engine
/// evaluates expressions against.
pub struct Dataset {
    /// Normalized frame used for filtering
    frame: DataFrame,
    /// Typed rows, indexed by row id
    records: Vec<Respondent>,
    /// Observed min/max of each numeric column
    ranges: ObservedRanges,
    /// Sex values present in the data, in enum order
    sexes: Vec<Sex>,
    /// Age brackets present in the data, in canonical order
    age_categories: Vec<AgeCategory>,
    /// Path the dataset was read from
    file_path: Option<PathBuf>,
}

impl Dataset {
    /// Load and validate a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        profiling::scope!("Dataset::load");

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DashError::UnsupportedFormat {
                extension: String::new(),
            })?;

        if !extension.eq_ignore_ascii_case("csv") {
            return Err(DashError::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }

        if !path.exists() {
            return Err(DashError::FileIo(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10_000))
            .finish()?
            .collect()?;

        log::info!(
            "read {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        Self::from_dataframe(df, Some(path.to_path_buf()))
    }

    /// Validate an already-loaded DataFrame into a dataset.
    ///
    /// Fails on the first missing column, empty cell, non-numeric number or
    /// unknown category; nothing is silently coerced.
    pub fn from_dataframe(df: DataFrame, path: Option<PathBuf>) -> Result<Self> {
        profiling::scope!("Dataset::from_dataframe");

        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(DashError::ColumnNotFound {
                    column: name.to_string(),
                });
            }
        }

        if df.height() == 0 {
            return Err(DashError::EmptyDataset);
        }

        let heart_disease = categorical_column::<YesNo>(&df, HEART_DISEASE)?;
        let sex = categorical_column::<Sex>(&df, SEX)?;
        let age_category = categorical_column::<AgeCategory>(&df, AGE_CATEGORY)?;
        let smoking = categorical_column::<YesNo>(&df, SMOKING)?;
        let alcohol_drinking = categorical_column::<YesNo>(&df, ALCOHOL_DRINKING)?;
        let bmi = numeric_column(&df, BMI)?;
        let physical_health = numeric_column(&df, PHYSICAL_HEALTH)?;
        let mental_health = numeric_column(&df, MENTAL_HEALTH)?;
        let sleep_time = numeric_column(&df, SLEEP_TIME)?;

        let records: Vec<Respondent> = (0..df.height())
            .map(|i| Respondent {
                heart_disease: heart_disease[i],
                sex: sex[i],
                age_category: age_category[i],
                bmi: bmi[i],
                physical_health: physical_health[i],
                mental_health: mental_health[i],
                sleep_time: sleep_time[i],
                smoking: smoking[i],
                alcohol_drinking: alcohol_drinking[i],
            })
            .collect();

        let row_ids: Vec<u64> = (0..records.len() as u64).collect();
        let frame = DataFrame::new(vec![
            Column::new(ROW_ID.into(), row_ids),
            Column::new(HEART_DISEASE.into(), labels(&heart_disease, |v| v.as_str())),
            Column::new(SEX.into(), labels(&sex, |v| v.as_str())),
            Column::new(AGE_CATEGORY.into(), labels(&age_category, |v| v.as_str())),
            Column::new(BMI.into(), bmi),
            Column::new(PHYSICAL_HEALTH.into(), physical_health),
            Column::new(MENTAL_HEALTH.into(), mental_health),
            Column::new(SLEEP_TIME.into(), sleep_time),
            Column::new(SMOKING.into(), labels(&smoking, |v| v.as_str())),
            Column::new(ALCOHOL_DRINKING.into(), labels(&alcohol_drinking, |v| v.as_str())),
        ])?;

        let ranges = ObservedRanges {
            bmi: frame_range(&frame, BMI)?,
            physical_health: frame_range(&frame, PHYSICAL_HEALTH)?,
            mental_health: frame_range(&frame, MENTAL_HEALTH)?,
            sleep_time: frame_range(&frame, SLEEP_TIME)?,
        };

        let sexes = Sex::ALL
            .into_iter()
            .filter(|s| sex.contains(s))
            .collect();
        let age_categories = AgeCategory::ALL
            .into_iter()
            .filter(|a| age_category.contains(a))
            .collect();

        log::debug!("observed ranges: {:?}", ranges);

        Ok(Self {
            frame,
            records,
            ranges,
            sexes,
            age_categories,
            file_path: path,
        })
    }

    /// Build a dataset directly from typed records
    #[cfg(test)]
    pub fn from_records(records: &[Respondent]) -> Result<Self> {
        let df = DataFrame::new(vec![
            Column::new(
                HEART_DISEASE.into(),
                records.iter().map(|r| r.heart_disease.as_str()).collect::<Vec<_>>(),
            ),
            Column::new(SEX.into(), records.iter().map(|r| r.sex.as_str()).collect::<Vec<_>>()),
            Column::new(
                AGE_CATEGORY.into(),
                records.iter().map(|r| r.age_category.as_str()).collect::<Vec<_>>(),
            ),
            Column::new(BMI.into(), records.iter().map(|r| r.bmi).collect::<Vec<_>>()),
            Column::new(
                PHYSICAL_HEALTH.into(),
                records.iter().map(|r| r.physical_health).collect::<Vec<_>>(),
            ),
            Column::new(
                MENTAL_HEALTH.into(),
                records.iter().map(|r| r.mental_health).collect::<Vec<_>>(),
            ),
            Column::new(
                SLEEP_TIME.into(),
                records.iter().map(|r| r.sleep_time).collect::<Vec<_>>(),
            ),
            Column::new(
                SMOKING.into(),
                records.iter().map(|r| r.smoking.as_str()).collect::<Vec<_>>(),
            ),
            Column::new(
                ALCOHOL_DRINKING.into(),
                records.iter().map(|r| r.alcohol_drinking.as_str()).collect::<Vec<_>>(),
            ),
        ])?;
        Self::from_dataframe(df, None)
    }

    /// Get a reference to the normalized DataFrame
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn records(&self) -> &[Respondent] {
        &self.records
    }

    pub fn record(&self, row: usize) -> Option<&Respondent> {
        self.records.get(row)
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.records.len()
    }

    pub fn ranges(&self) -> &ObservedRanges {
        &self.ranges
    }

    pub fn sexes(&self) -> &[Sex] {
        &self.sexes
    }

    pub fn age_categories(&self) -> &[AgeCategory] {
        &self.age_categories
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

fn labels<T: Copy>(values: &[T], label: impl Fn(T) -> &'static str) -> Vec<&'static str> {
    values.iter().map(|&v| label(v)).collect()
}

fn frame_range(frame: &DataFrame, name: &str) -> Result<NumericRange> {
    let series = frame.column(name)?.as_materialized_series();
    observed_range(series)?.ok_or(DashError::EmptyDataset)
}

/// Read a numeric column as f64, rejecting nulls and non-finite values
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;

    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .filter(|v| v.is_finite())
                .ok_or_else(|| DashError::MissingValue {
                    column: name.to_string(),
                    row,
                })
        })
        .collect()
}

/// Read a string column and parse every cell into a categorical enum
fn categorical_column<T: FromStr>(df: &DataFrame, name: &str) -> Result<Vec<T>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;

    series
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let raw = value.ok_or_else(|| DashError::MissingValue {
                column: name.to_string(),
                row,
            })?;
            raw.parse::<T>().map_err(|_| DashError::InvalidCategory {
                column: name.to_string(),
                value: raw.to_string(),
                row,
            })
        })
        .collect()
}
