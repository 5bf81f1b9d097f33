use std::collections::BTreeMap;

use crate::data::{Category, FilteredView, Respondent, Sex, YesNo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount<K> {
    pub key: K,
    pub count: usize,
}

/// Category -> count table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable<K> {
    pub rows: Vec<CategoryCount<K>>,
}

impl<K: Category> CountTable<K> {
    /// Counts ordered by descending count; ties keep the key order
    fn value_counts(keys: impl Iterator<Item = K>) -> Self {
        let mut rows = tally(keys);
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Self { rows }
    }

    /// Counts ordered by key label, as a group-by reports them
    fn group_counts(keys: impl Iterator<Item = K>) -> Self {
        let mut rows = tally(keys);
        rows.sort_by_key(|row| row.key.label());
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    #[cfg(test)]
    pub fn count(&self, key: K) -> usize {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map_or(0, |row| row.count)
    }
}

fn tally<K: Category>(keys: impl Iterator<Item = K>) -> Vec<CategoryCount<K>> {
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(key, count)| CategoryCount { key, count })
        .collect()
}

fn cases<'a, 'b>(view: &'a FilteredView<'b>) -> impl Iterator<Item = &'b Respondent> + 'a {
    view.iter().filter(|r| r.heart_disease.is_yes())
}

/// Respondents per heart disease status
pub fn disease_distribution(view: &FilteredView<'_>) -> CountTable<YesNo> {
    profiling::scope!("disease_distribution");
    CountTable::value_counts(view.iter().map(|r| r.heart_disease))
}

/// Heart disease cases per sex
pub fn heart_disease_by_sex(view: &FilteredView<'_>) -> CountTable<Sex> {
    profiling::scope!("heart_disease_by_sex");
    CountTable::group_counts(cases(view).map(|r| r.sex))
}

/// Heart disease cases per smoking status
pub fn heart_disease_by_smoking(view: &FilteredView<'_>) -> CountTable<YesNo> {
    profiling::scope!("heart_disease_by_smoking");
    CountTable::value_counts(cases(view).map(|r| r.smoking))
}

/// Heart disease cases per alcohol drinking status
pub fn heart_disease_by_alcohol(view: &FilteredView<'_>) -> CountTable<YesNo> {
    profiling::scope!("heart_disease_by_alcohol");
    CountTable::value_counts(cases(view).map(|r| r.alcohol_drinking))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::tests::{respondent, sample_dataset};
    use crate::data::{apply_filters, AgeCategory, Dataset};
    use crate::state::{FilterParameters, SexFilter};

    #[test]
    fn test_distribution_on_single_male_row() {
        let ds = Dataset::from_records(&[
            respondent(YesNo::No, Sex::Male, AgeCategory::From25To29, 24.0, 7.0),
            respondent(YesNo::Yes, Sex::Female, AgeCategory::From25To29, 26.0, 6.0),
        ])
        .unwrap();
        let mut params = FilterParameters::for_dataset(&ds);
        params.sex = SexFilter::Only(Sex::Male);
        let view = apply_filters(&ds, &params).unwrap();

        let table = disease_distribution(&view);

        assert_eq!(table.rows, vec![CategoryCount { key: YesNo::No, count: 1 }]);
    }

    #[test]
    fn test_distribution_orders_by_count() {
        let ds = sample_dataset();
        let table = disease_distribution(&FilteredView::all(&ds));

        assert_eq!(
            table.rows,
            vec![
                CategoryCount { key: YesNo::No, count: 5 },
                CategoryCount { key: YesNo::Yes, count: 3 },
            ]
        );
        assert_eq!(table.total(), ds.height());
    }

    #[test]
    fn test_cases_by_sex_only_counts_heart_disease() {
        let ds = sample_dataset();
        let table = heart_disease_by_sex(&FilteredView::all(&ds));

        assert_eq!(
            table.rows,
            vec![
                CategoryCount { key: Sex::Female, count: 1 },
                CategoryCount { key: Sex::Male, count: 2 },
            ]
        );
    }

    #[test]
    fn test_cases_by_smoking_and_alcohol() {
        let ds = sample_dataset();
        let view = FilteredView::all(&ds);

        let smoking = heart_disease_by_smoking(&view);
        assert_eq!(smoking.count(YesNo::Yes), 2);
        assert_eq!(smoking.count(YesNo::No), 1);
        assert_eq!(smoking.rows[0].key, YesNo::Yes);

        let alcohol = heart_disease_by_alcohol(&view);
        assert_eq!(alcohol.rows, vec![CategoryCount { key: YesNo::No, count: 3 }]);
        assert_eq!(alcohol.count(YesNo::Yes), 0);
    }

    #[test]
    fn test_no_cases_gives_empty_tables() {
        let ds = Dataset::from_records(&[
            respondent(YesNo::No, Sex::Male, AgeCategory::From25To29, 24.0, 7.0),
        ])
        .unwrap();
        let view = FilteredView::all(&ds);

        assert!(!disease_distribution(&view).is_empty());
        assert!(heart_disease_by_sex(&view).is_empty());
        assert!(heart_disease_by_smoking(&view).is_empty());
        assert!(heart_disease_by_alcohol(&view).is_empty());
    }
}
