//! Filter engine: evaluates [`FilterParameters`] against a [`Dataset`]

use polars::prelude::*;

use super::schema::{Respondent, ROW_ID};
use super::source::Dataset;
use crate::error::Result;
use crate::state::FilterParameters;

/// Rows of a dataset that satisfy the current filters.
///
/// Stores row ids into the borrowed dataset, so it can never hold a row the
/// dataset doesn't have. May be empty.
#[derive(Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    rows: Vec<usize>,
}

impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dataset, other.dataset) && self.rows == other.rows
    }
}

impl std::fmt::Debug for FilteredView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredView")
            .field("dataset_rows", &self.dataset.height())
            .field("rows", &self.rows)
            .finish()
    }
}

impl<'a> FilteredView<'a> {
    /// View over every row of the dataset
    #[cfg(test)]
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            rows: (0..dataset.height()).collect(),
        }
    }

    /// A view with no rows
    pub fn none(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            rows: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Row ids in dataset order
    pub fn row_indices(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Respondent> + '_ {
        let records = self.dataset.records();
        self.rows.iter().map(move |&row| &records[row])
    }
}

/// Apply the filters to the dataset, producing a new view.
///
/// The source frame is never modified; an empty result is not an error.
pub fn apply_filters<'a>(dataset: &'a Dataset, params: &FilterParameters) -> Result<FilteredView<'a>> {
    profiling::scope!("apply_filters");

    let filtered = dataset
        .frame()
        .clone()
        .lazy()
        .filter(params.to_expr())
        .select([col(ROW_ID)])
        .collect()?;

    let ids = filtered.column(ROW_ID)?.as_materialized_series().u64()?;
    let rows: Vec<usize> = ids.into_iter().flatten().map(|id| id as usize).collect();

    let view = FilteredView { dataset, rows };
    log::debug!("filters kept {} of {} rows", view.len(), dataset.height());

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::{AgeCategory, Sex, YesNo};
    use crate::data::source::tests::{respondent, sample_dataset};
    use crate::data::NumericRange;
    use crate::state::SexFilter;

    fn assert_view_matches(ds: &Dataset, params: &FilterParameters) {
        let view = apply_filters(ds, params).unwrap();

        // every kept row satisfies the predicate, every dropped row fails it
        let expected: Vec<usize> = ds
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| params.matches(r))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(view.row_indices(), expected.as_slice());
        assert!(view.iter().all(|r| params.matches(r)));
    }

    #[test]
    fn test_defaults_keep_everything() {
        let ds = sample_dataset();
        let params = FilterParameters::for_dataset(&ds);
        let view = apply_filters(&ds, &params).unwrap();

        assert_eq!(view.len(), ds.height());
        assert_eq!(view, FilteredView::all(&ds));
    }

    #[test]
    fn test_sex_filter_scenario() {
        let ds = Dataset::from_records(&[
            respondent(YesNo::Yes, Sex::Male, AgeCategory::From40To44, 25.0, 7.0),
            respondent(YesNo::No, Sex::Female, AgeCategory::From40To44, 27.0, 8.0),
        ])
        .unwrap();
        let mut params = FilterParameters::for_dataset(&ds);
        params.sex = SexFilter::Only(Sex::Male);

        let view = apply_filters(&ds, &params).unwrap();

        assert_eq!(view.row_indices(), &[0]);
        assert_eq!(view.iter().next().map(|r| r.sex), Some(Sex::Male));
    }

    #[test]
    fn test_no_ages_selected_is_empty() {
        let ds = sample_dataset();
        let mut params = FilterParameters::for_dataset(&ds);
        params.clear_ages();

        let view = apply_filters(&ds, &params).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_point_range_keeps_exact_minimum() {
        let ds = Dataset::from_records(&[
            respondent(YesNo::No, Sex::Male, AgeCategory::From18To24, 18.5, 7.0),
            respondent(YesNo::No, Sex::Male, AgeCategory::From18To24, 18.5000001, 7.0),
            respondent(YesNo::Yes, Sex::Female, AgeCategory::From18To24, 30.0, 7.0),
            respondent(YesNo::No, Sex::Female, AgeCategory::From18To24, 18.5, 6.0),
        ])
        .unwrap();
        let mut params = FilterParameters::for_dataset(&ds);
        let min = ds.ranges().bmi.min;
        params.bmi = NumericRange::point(min);

        let view = apply_filters(&ds, &params).unwrap();

        assert_eq!(view.row_indices(), &[0, 3]);
        assert!(view.iter().all(|r| r.bmi == min));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let ds = sample_dataset();
        let mut params = FilterParameters::for_dataset(&ds);
        params.sleep_time = NumericRange::new(7.0, 9.0);

        let view = apply_filters(&ds, &params).unwrap();
        let sleep: Vec<f64> = view.iter().map(|r| r.sleep_time).collect();

        assert_eq!(sleep, vec![8.0, 7.0, 9.0, 7.5]);
    }

    #[test]
    fn test_constraints_compose_conjunctively() {
        let ds = sample_dataset();
        let mut params = FilterParameters::for_dataset(&ds);
        params.sex = SexFilter::Only(Sex::Female);
        params.age_categories = [AgeCategory::From65To69, AgeCategory::From80, AgeCategory::From50To54]
            .into_iter()
            .collect();
        params.mental_health = NumericRange::new(0.0, 20.0);
        params.bmi = NumericRange::new(19.0, 26.0);

        assert_view_matches(&ds, &params);
        let view = apply_filters(&ds, &params).unwrap();
        assert_eq!(view.row_indices(), &[3, 4]);
    }

    #[test]
    fn test_filter_grid_matches_predicate() {
        let ds = sample_dataset();
        let sexes = [SexFilter::All, SexFilter::Only(Sex::Male), SexFilter::Only(Sex::Female)];
        let bmi_ranges = [
            ds.ranges().bmi,
            NumericRange::new(20.0, 30.0),
            NumericRange::point(ds.ranges().bmi.max),
        ];
        let health_ranges = [NumericRange::new(0.0, 30.0), NumericRange::new(0.0, 5.0)];

        for sex in sexes {
            for bmi in bmi_ranges {
                for health in health_ranges {
                    let mut params = FilterParameters::for_dataset(&ds);
                    params.sex = sex;
                    params.bmi = bmi;
                    params.physical_health = health;
                    params.mental_health = health;
                    assert_view_matches(&ds, &params);
                }
            }
        }
    }

    #[test]
    fn test_filtering_is_idempotent_and_non_mutating() {
        let ds = sample_dataset();
        let frame_before = ds.frame().clone();
        let mut params = FilterParameters::for_dataset(&ds);
        params.sex = SexFilter::Only(Sex::Male);
        params.sleep_time = NumericRange::new(5.0, 8.0);

        let first = apply_filters(&ds, &params).unwrap();
        let second = apply_filters(&ds, &params).unwrap();

        assert_eq!(first, second);
        assert!(ds.frame().equals(&frame_before));
    }
}
