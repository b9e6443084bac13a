//! Splits a free-text description of a day into candidate activities.
//!
//! Clauses introduced by a clock hour ("7点起床", "9:开会") are extracted first and keep their
//! hour. Every other clause is taken as-is, unless it overlaps a clause that was already captured
//! with a time. The overlap check is plain substring containment in both directions, so a clause
//! that happens to be a literal substring of an unrelated timed clause is suppressed too.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use tracing::trace;

use super::entities::Fragment;

/// `<hour><clock marker><text up to the next delimiter>`
static TIMED_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})[:：点]\s*([^，,；;。\n]+)").expect("timed clause pattern is valid")
});

static TIME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[:：点]").expect("time prefix pattern is valid"));

static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[，,；;。\n]").expect("delimiter pattern is valid"));

/// Returns timed fragments in document order followed by untimed fragments in document order.
pub fn segment(text: &str) -> Vec<Fragment> {
    let mut fragments = vec![];
    let mut timed_contents = HashSet::<&str>::new();

    for captures in TIMED_CLAUSE.captures_iter(text) {
        let (Some(hour), Some(content)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let content = content.as_str().trim();
        if content.is_empty() {
            continue;
        }
        trace!("Timed clause {content:?} at {}", hour.as_str());
        timed_contents.insert(content);
        fragments.push(Fragment::timed(content, hour.as_str()));
    }

    for sentence in DELIMITER.split(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() || TIME_PREFIX.is_match(sentence) {
            continue;
        }

        let overlaps = timed_contents
            .iter()
            .any(|timed| sentence.contains(timed) || timed.contains(sentence));
        if overlaps {
            trace!("Skipping {sentence:?}, already captured with a time");
            continue;
        }

        fragments.push(Fragment::untimed(sentence));
    }

    fragments
}
