use super::{
    entities::{round_one_decimal, Activity, CategoryScore},
    taxonomy::{Category, HOUR_MARKERS, MINUTE_MARKERS, QUALITY_KEYWORDS},
};

/// Points every activity contributes before boosts.
const POINTS_PER_ACTIVITY: f64 = 5.;
const MAX_SCORE: f64 = 10.;
const QUALITY_BOOST: f64 = 1.;
const HOUR_BOOST: f64 = 1.;
const MINUTE_BOOST: f64 = 0.5;

/// Scores a category from the activities assigned to it.
///
/// Two activities already saturate the base component. Quality keywords and duration markers add
/// on top, capped at [MAX_SCORE].
pub fn score_category(category: Category, activities: &[&Activity]) -> CategoryScore {
    if activities.is_empty() {
        return CategoryScore { category, score: 0. };
    }

    let base = (activities.len() as f64 * POINTS_PER_ACTIVITY).min(MAX_SCORE);

    let quality_boost = activities
        .iter()
        .filter(|a| contains_any(&a.content, &QUALITY_KEYWORDS))
        .count() as f64
        * QUALITY_BOOST;

    let time_boost = activities
        .iter()
        .map(|a| {
            let mut boost = 0.;
            if contains_any(&a.content, &HOUR_MARKERS) {
                boost += HOUR_BOOST;
            }
            if contains_any(&a.content, &MINUTE_MARKERS) {
                boost += MINUTE_BOOST;
            }
            boost
        })
        .sum::<f64>();

    CategoryScore {
        category,
        score: round_one_decimal((base + quality_boost + time_boost).min(MAX_SCORE)),
    }
}

fn contains_any(content: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| content.contains(needle))
}
