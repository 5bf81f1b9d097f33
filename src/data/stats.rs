use polars::prelude::*;

use crate::error::Result;

/// Inclusive numeric interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    /// Build a range, swapping the bounds if they arrive inverted
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Degenerate range holding a single value
    #[cfg(test)]
    pub fn point(value: f64) -> Self {
        Self { min: value, max: value }
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Restrict this range to lie inside `bounds`, keeping min <= max
    pub fn clamp_to(&self, bounds: &NumericRange) -> Self {
        let min = self.min.clamp(bounds.min, bounds.max);
        let max = self.max.clamp(bounds.min, bounds.max);
        Self::new(min, max)
    }
}

/// Observed min/max of each numeric column of the full dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedRanges {
    pub bmi: NumericRange,
    pub physical_health: NumericRange,
    pub mental_health: NumericRange,
    pub sleep_time: NumericRange,
}

/// Min and max of a numeric column, `None` when it holds no values
pub fn observed_range(series: &Series) -> Result<Option<NumericRange>> {
    let series_f64 = series.cast(&DataType::Float64)?;
    let chunked = series_f64.f64()?;

    Ok(match (chunked.min(), chunked.max()) {
        (Some(min), Some(max)) => Some(NumericRange::new(min, max)),
        _ => None,
    })
}

/// Arithmetic mean, `None` for an empty input
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
