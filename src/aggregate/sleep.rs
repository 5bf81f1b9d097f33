use crate::data::{FilteredView, NumericRange};

/// One unit-width histogram bin `[left, right)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepBin {
    pub left: f64,
    pub right: f64,
    pub yes: usize,
    pub no: usize,
}

impl SleepBin {
    pub fn total(&self) -> usize {
        self.yes + self.no
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SleepHistogram {
    pub bins: Vec<SleepBin>,
}

impl SleepHistogram {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Bin edges, `bins.len() + 1` values
    #[cfg(test)]
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.left).collect();
        edges.extend(self.bins.last().map(|bin| bin.right));
        edges
    }
}

/// Integer edges from `floor(min)` to `floor(max) + 1` inclusive
pub fn sleep_bin_edges(range: &NumericRange) -> Vec<f64> {
    let first = range.min.floor() as i64;
    let last = range.max.floor() as i64 + 1;
    (first..=last).map(|edge| edge as f64).collect()
}

/// Sleep time histogram split by heart disease status.
///
/// The bin grid comes from the full dataset's observed range, so filters only
/// change bar heights. The last bin is closed on the right.
pub fn sleep_histogram(view: &FilteredView<'_>) -> SleepHistogram {
    profiling::scope!("sleep_histogram");

    if view.is_empty() {
        return SleepHistogram { bins: Vec::new() };
    }

    let edges = sleep_bin_edges(&view.dataset().ranges().sleep_time);
    let mut bins: Vec<SleepBin> = edges
        .windows(2)
        .map(|w| SleepBin {
            left: w[0],
            right: w[1],
            yes: 0,
            no: 0,
        })
        .collect();

    let first = edges[0];
    let last_bin = bins.len() - 1;
    for respondent in view.iter() {
        let offset = (respondent.sleep_time - first).floor();
        if offset < 0.0 {
            continue;
        }
        let index = (offset as usize).min(last_bin);
        if respondent.heart_disease.is_yes() {
            bins[index].yes += 1;
        } else {
            bins[index].no += 1;
        }
    }

    SleepHistogram { bins }
}
