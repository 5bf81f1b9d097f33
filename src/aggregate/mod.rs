//! Aggregators: stateless functions from a filtered view to the small
//! summary table behind one chart.
//!
//! Every aggregator returns an empty result for an empty view; none of them
//! share state, so they can run in any order.

mod age;
mod counts;
mod health;
mod sleep;

pub use age::{heart_disease_by_age, AgeDiseaseTable};
pub use counts::{
    disease_distribution, heart_disease_by_alcohol, heart_disease_by_sex,
    heart_disease_by_smoking, CountTable,
};
pub use health::{mean_health_days, HealthType, MeanHealthTable};
pub use sleep::{sleep_histogram, SleepHistogram};
