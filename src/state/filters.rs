//! Filter parameters chosen in the sidebar

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::data::schema::{AGE_CATEGORY, BMI, MENTAL_HEALTH, PHYSICAL_HEALTH, SEX, SLEEP_TIME};
use crate::data::{AgeCategory, Dataset, NumericRange, ObservedRanges, Sex};

/// Sex selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SexFilter {
    #[default]
    All,
    Only(Sex),
}

impl SexFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SexFilter::All => "Semua",
            SexFilter::Only(sex) => sex.as_str(),
        }
    }
}

/// Current UI selections; every constraint is ANDed with the others
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParameters {
    /// Exact-match constraint on Sex, or no constraint
    pub sex: SexFilter,

    /// Allowed age brackets; an empty set matches nothing
    pub age_categories: BTreeSet<AgeCategory>,

    /// Inclusive BMI bounds
    pub bmi: NumericRange,

    /// Inclusive bounds on days of poor physical health
    pub physical_health: NumericRange,

    /// Inclusive bounds on days of poor mental health
    pub mental_health: NumericRange,

    /// Inclusive bounds on hours of sleep
    pub sleep_time: NumericRange,
}

impl FilterParameters {
    /// Defaults for a dataset: any sex, every observed age bracket and the
    /// full observed range of each numeric column
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let ranges = dataset.ranges();
        Self {
            sex: SexFilter::All,
            age_categories: dataset.age_categories().iter().copied().collect(),
            bmi: ranges.bmi,
            physical_health: ranges.physical_health,
            mental_health: ranges.mental_health,
            sleep_time: ranges.sleep_time,
        }
    }

    /// Reset all filters to the dataset defaults
    pub fn clear(&mut self, dataset: &Dataset) {
        *self = Self::for_dataset(dataset);
    }

    /// Check if any filter narrows the dataset
    pub fn has_active_filters(&self, dataset: &Dataset) -> bool {
        *self != Self::for_dataset(dataset)
    }

    pub fn select_all_ages(&mut self, dataset: &Dataset) {
        self.age_categories = dataset.age_categories().iter().copied().collect();
    }

    pub fn clear_ages(&mut self) {
        self.age_categories.clear();
    }

    pub fn set_age(&mut self, age: AgeCategory, selected: bool) {
        if selected {
            self.age_categories.insert(age);
        } else {
            self.age_categories.remove(&age);
        }
    }

    /// Fix inverted bounds and clamp every range to the observed range
    pub fn validate(&mut self, ranges: &ObservedRanges) {
        self.bmi = self.bmi.clamp_to(&ranges.bmi);
        self.physical_health = self.physical_health.clamp_to(&ranges.physical_health);
        self.mental_health = self.mental_health.clamp_to(&ranges.mental_health);
        self.sleep_time = self.sleep_time.clamp_to(&ranges.sleep_time);
    }

    /// Evaluate the constraints against a single record
    #[cfg(test)]
    pub fn matches(&self, respondent: &crate::data::Respondent) -> bool {
        let sex_ok = match self.sex {
            SexFilter::All => true,
            SexFilter::Only(sex) => respondent.sex == sex,
        };

        sex_ok
            && self.age_categories.contains(&respondent.age_category)
            && self.bmi.contains(respondent.bmi)
            && self.physical_health.contains(respondent.physical_health)
            && self.mental_health.contains(respondent.mental_health)
            && self.sleep_time.contains(respondent.sleep_time)
    }

    /// Build the polars predicate for the normalized dataset frame
    pub fn to_expr(&self) -> Expr {
        let sex = match self.sex {
            SexFilter::All => lit(true),
            SexFilter::Only(sex) => col(SEX).eq(lit(sex.as_str())),
        };

        let ages = self
            .age_categories
            .iter()
            .fold(lit(false), |acc, age| acc.or(col(AGE_CATEGORY).eq(lit(age.as_str()))));

        sex.and(ages)
            .and(range_expr(BMI, &self.bmi))
            .and(range_expr(PHYSICAL_HEALTH, &self.physical_health))
            .and(range_expr(MENTAL_HEALTH, &self.mental_health))
            .and(range_expr(SLEEP_TIME, &self.sleep_time))
    }
}

fn range_expr(column: &str, range: &NumericRange) -> Expr {
    col(column)
        .gt_eq(lit(range.min))
        .and(col(column).lt_eq(lit(range.max)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::tests::sample_dataset;

    #[test]
    fn test_defaults_cover_dataset() {
        let ds = sample_dataset();
        let params = FilterParameters::for_dataset(&ds);

        assert_eq!(params.sex, SexFilter::All);
        assert_eq!(params.age_categories.len(), ds.age_categories().len());
        assert_eq!(params.bmi, ds.ranges().bmi);
        assert_eq!(params.sleep_time, ds.ranges().sleep_time);
        assert!(!params.has_active_filters(&ds));
        assert!(ds.records().iter().all(|r| params.matches(r)));
    }

    #[test]
    fn test_validate_clamps_and_orders() {
        let ds = sample_dataset();
        let mut params = FilterParameters::for_dataset(&ds);
        params.bmi = NumericRange { min: 100.0, max: 0.0 };
        params.sleep_time = NumericRange { min: 6.0, max: 99.0 };

        params.validate(ds.ranges());

        assert_eq!(params.bmi, ds.ranges().bmi);
        assert_eq!(params.sleep_time, NumericRange::new(6.0, ds.ranges().sleep_time.max));
        assert!(params.bmi.min <= params.bmi.max);
    }

    #[test]
    fn test_age_selection() {
        let ds = sample_dataset();
        let mut params = FilterParameters::for_dataset(&ds);

        params.clear_ages();
        assert!(params.age_categories.is_empty());
        assert!(params.has_active_filters(&ds));

        params.set_age(AgeCategory::From18To24, true);
        params.set_age(AgeCategory::From65To69, true);
        params.set_age(AgeCategory::From18To24, false);
        assert_eq!(
            params.age_categories.iter().copied().collect::<Vec<_>>(),
            vec![AgeCategory::From65To69]
        );

        params.select_all_ages(&ds);
        params.clear(&ds);
        assert!(!params.has_active_filters(&ds));
    }

    #[test]
    fn test_sex_filter_label() {
        assert_eq!(SexFilter::All.label(), "Semua");
        assert_eq!(SexFilter::Only(Sex::Female).label(), "Female");
    }
}
