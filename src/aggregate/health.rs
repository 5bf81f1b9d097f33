use crate::data::stats::mean;
use crate::data::{FilteredView, YesNo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthType {
    PhysicalHealth,
    MentalHealth,
}

impl HealthType {
    /// Bar order inside each status group
    pub const ALL: [HealthType; 2] = [HealthType::PhysicalHealth, HealthType::MentalHealth];

    pub fn as_str(self) -> &'static str {
        match self {
            HealthType::PhysicalHealth => "PhysicalHealth",
            HealthType::MentalHealth => "MentalHealth",
        }
    }
}

/// One (status, health type) bar of the grouped chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanHealthRow {
    pub status: YesNo,
    pub health_type: HealthType,
    pub average_days: f64,
}

/// Long-format means, grouped by status then health type
#[derive(Debug, Clone, PartialEq)]
pub struct MeanHealthTable {
    pub rows: Vec<MeanHealthRow>,
}

impl MeanHealthTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Statuses present, in row order
    pub fn statuses(&self) -> Vec<YesNo> {
        let mut statuses = Vec::new();
        for row in &self.rows {
            if !statuses.contains(&row.status) {
                statuses.push(row.status);
            }
        }
        statuses
    }

    pub fn get(&self, status: YesNo, health_type: HealthType) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.status == status && row.health_type == health_type)
            .map(|row| row.average_days)
    }
}

/// Mean physical and mental health days per heart disease status.
///
/// A status with no rows in the view has no mean and is left out entirely.
pub fn mean_health_days(view: &FilteredView<'_>) -> MeanHealthTable {
    profiling::scope!("mean_health_days");

    // group keys sorted by label, No before Yes
    let mut statuses = YesNo::ALL;
    statuses.sort_by_key(|s| s.as_str());

    let mut rows = Vec::new();
    for status in statuses {
        let group = || view.iter().filter(move |r| r.heart_disease == status);

        let (Some(physical), Some(mental)) = (
            mean(group().map(|r| r.physical_health)),
            mean(group().map(|r| r.mental_health)),
        ) else {
            continue;
        };

        rows.push(MeanHealthRow {
            status,
            health_type: HealthType::PhysicalHealth,
            average_days: physical,
        });
        rows.push(MeanHealthRow {
            status,
            health_type: HealthType::MentalHealth,
            average_days: mental,
        });
    }

    MeanHealthTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::tests::sample_dataset;
    use crate::data::{apply_filters, AgeCategory};
    use crate::state::FilterParameters;

    #[test]
    fn test_means_per_status() {
        let ds = sample_dataset();
        let table = mean_health_days(&FilteredView::all(&ds));

        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.statuses(), vec![YesNo::No, YesNo::Yes]);
        assert_eq!(table.rows[0].health_type, HealthType::PhysicalHealth);
        assert_eq!(table.rows[1].health_type, HealthType::MentalHealth);

        // Yes rows: physical 2, 30, 6 / mental 0, 0, 2
        assert_eq!(table.get(YesNo::Yes, HealthType::PhysicalHealth), Some(38.0 / 3.0));
        assert_eq!(table.get(YesNo::Yes, HealthType::MentalHealth), Some(2.0 / 3.0));
        // No rows: physical 0, 10, 0, 1, 0 / mental 5, 3, 15, 0, 30
        assert_eq!(table.get(YesNo::No, HealthType::PhysicalHealth), Some(11.0 / 5.0));
        assert_eq!(table.get(YesNo::No, HealthType::MentalHealth), Some(53.0 / 5.0));
    }

    #[test]
    fn test_empty_group_is_omitted() {
        let ds = sample_dataset();
        let mut params = FilterParameters::for_dataset(&ds);
        params.age_categories = [AgeCategory::From18To24].into_iter().collect();
        let view = apply_filters(&ds, &params).unwrap();

        let table = mean_health_days(&view);

        assert_eq!(table.statuses(), vec![YesNo::No]);
        assert_eq!(table.get(YesNo::Yes, HealthType::PhysicalHealth), None);
        assert!(table.rows.iter().all(|row| row.average_days.is_finite()));
    }

    #[test]
    fn test_empty_view() {
        let ds = sample_dataset();
        let mut params = FilterParameters::for_dataset(&ds);
        params.clear_ages();
        let view = apply_filters(&ds, &params).unwrap();

        assert!(mean_health_days(&view).is_empty());
    }
}
