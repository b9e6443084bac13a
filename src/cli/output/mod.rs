//! Text renderings of a [Report](crate::rating::report::Report). Everything here is a pure
//! function of its inputs.

pub mod log_entry;
pub mod markdown;

use crate::rating::{entities::Activity, taxonomy::Category};

/// Activities of one category as a single line, separated with `、`.
fn join_activities(activities: &[Activity]) -> String {
    activities
        .iter()
        .map(|a| &*a.content)
        .collect::<Vec<_>>()
        .join("、")
}

/// Weight of a scored category in whole percents.
fn weight_percent(category: Category) -> f64 {
    (category.weight().unwrap_or(0.) * 100.).round()
}
