use crate::data::{AgeCategory, FilteredView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeDiseaseRow {
    pub age: AgeCategory,
    pub yes: usize,
    pub no: usize,
}

impl AgeDiseaseRow {
    pub fn total(&self) -> usize {
        self.yes + self.no
    }
}

/// Yes/No counts per age bracket.
///
/// Either empty (empty view) or exactly one row per bracket in canonical
/// order, with zeros for brackets the view doesn't contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeDiseaseTable {
    pub rows: Vec<AgeDiseaseRow>,
}

impl AgeDiseaseTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn heart_disease_by_age(view: &FilteredView<'_>) -> AgeDiseaseTable {
    profiling::scope!("heart_disease_by_age");

    if view.is_empty() {
        return AgeDiseaseTable { rows: Vec::new() };
    }

    let mut rows: Vec<AgeDiseaseRow> = AgeCategory::ALL
        .into_iter()
        .map(|age| AgeDiseaseRow { age, yes: 0, no: 0 })
        .collect();

    for respondent in view.iter() {
        let row = &mut rows[respondent.age_category.index()];
        if respondent.heart_disease.is_yes() {
            row.yes += 1;
        } else {
            row.no += 1;
        }
    }

    AgeDiseaseTable { rows }
}
