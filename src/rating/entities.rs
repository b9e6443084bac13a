use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::taxonomy::Category;

/// Piece of the input text that is a candidate activity, before it's classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub content: Arc<str>,
    /// Clock hour in `H:00` form, when the fragment was introduced by one.
    pub time: Option<Arc<str>>,
}

impl Fragment {
    pub fn timed(content: &str, hour: &str) -> Self {
        Self {
            content: content.into(),
            time: Some(format!("{hour}:00").into()),
        }
    }

    pub fn untimed(content: &str) -> Self {
        Self {
            content: content.into(),
            time: None,
        }
    }

    pub fn with_category(self, category: Category) -> Activity {
        Activity {
            content: self.content,
            time: self.time,
            category,
        }
    }
}

/// Classified fragment. Never changes after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub content: Arc<str>,
    pub time: Option<Arc<str>>,
    pub category: Category,
}

/// Score of a single category in `[0, 10]`, one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
}

/// Rounds to one decimal from the exact value of the float, so `0.35` (stored slightly below)
/// goes down and `3.45` (stored slightly above) goes up. Exact ties go to the even neighbour.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
