use std::{collections::BTreeMap, fmt::Display};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    entities::{round_one_decimal, Activity, CategoryScore},
    taxonomy::Category,
};

/// Scores at or above this produce a highlight.
const HIGHLIGHT_THRESHOLD: f64 = 8.;
/// Non-zero scores below this produce a suggestion.
const SUGGESTION_THRESHOLD: f64 = 5.;

/// Qualitative label for the daily score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatingTier {
    VeryPoor,
    Poor,
    Average,
    Good,
    Excellent,
}

impl RatingTier {
    /// Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 9. {
            RatingTier::Excellent
        } else if score >= 7. {
            RatingTier::Good
        } else if score >= 5. {
            RatingTier::Average
        } else if score >= 3. {
            RatingTier::Poor
        } else {
            RatingTier::VeryPoor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::Excellent => "Excellent",
            RatingTier::Good => "Good",
            RatingTier::Average => "Average",
            RatingTier::Poor => "Poor",
            RatingTier::VeryPoor => "Very poor",
        }
    }
}

impl Display for RatingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Weighted daily score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalScore {
    pub total: f64,
    pub rating: RatingTier,
}

/// Result of rating one description of a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
    /// Only categories with at least one activity, [Category::Other] included.
    pub categories: BTreeMap<Category, Vec<Activity>>,
    /// Every scored category, [Category::Other] excluded.
    pub category_scores: BTreeMap<Category, CategoryScore>,
    pub total_score: TotalScore,
    pub highlights: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Report {
    pub fn score_of(&self, category: Category) -> f64 {
        self.category_scores
            .get(&category)
            .map(|s| s.score)
            .unwrap_or(0.)
    }
}

/// Groups activities by category, keeping input order inside each group.
pub fn group_by_category(activities: &[Activity]) -> BTreeMap<Category, Vec<Activity>> {
    let mut groups = BTreeMap::<Category, Vec<Activity>>::new();
    for activity in activities {
        groups
            .entry(activity.category)
            .or_default()
            .push(activity.clone());
    }
    groups
}

/// Combines category scores with their weights. The tier is taken from the unrounded sum, so
/// 8.96 is shown as 9.0 but still rated [RatingTier::Good].
pub fn total_score(category_scores: &BTreeMap<Category, CategoryScore>) -> TotalScore {
    let total = category_scores
        .values()
        .filter_map(|s| s.category.weight().map(|w| s.score * w))
        .sum::<f64>();

    TotalScore {
        total: round_one_decimal(total),
        rating: RatingTier::from_score(total),
    }
}

pub fn highlights(
    category_scores: &BTreeMap<Category, CategoryScore>,
    categories: &BTreeMap<Category, Vec<Activity>>,
) -> Vec<String> {
    category_scores
        .values()
        .filter(|s| s.score >= HIGHLIGHT_THRESHOLD)
        .filter(|s| categories.get(&s.category).is_some_and(|a| !a.is_empty()))
        .map(|s| format!("{} performs excellently", s.category))
        .collect()
}

/// Categories without any activity never get a suggestion, only weak ones do.
pub fn suggestions(category_scores: &BTreeMap<Category, CategoryScore>) -> Vec<String> {
    category_scores
        .values()
        .filter(|s| s.score > 0. && s.score < SUGGESTION_THRESHOLD)
        .map(|s| format!("increase investment in {}", s.category))
        .collect()
}
