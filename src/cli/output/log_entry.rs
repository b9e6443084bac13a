use chrono::NaiveDateTime;

use crate::{rating::report::Report, utils::time::date_to_string};

use super::{join_activities, weight_percent};

const BANNER_WIDTH: usize = 60;

/// Renders one entry of the daily rating log. `recorded_at` is written at the end of the entry so
/// several ratings in the same file can be told apart.
pub fn format_log_entry(text: &str, report: &Report, recorded_at: NaiveDateTime) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(BANNER_WIDTH);
    let mut lines = vec![];

    lines.push(banner.clone());
    lines.push(format!("Daily rating log - {}", date_to_string(report.date)));
    lines.push(banner.clone());
    lines.push(String::new());

    lines.push("[Input]".to_string());
    lines.push(text.to_string());
    lines.push(String::new());

    lines.push("[Activities by category]".to_string());
    lines.push(rule.clone());
    for (category, activities) in &report.categories {
        lines.push(format!("{category}: {}", join_activities(activities)));
    }
    lines.push(String::new());

    lines.push("[Scores]".to_string());
    lines.push(rule.clone());
    for (category, score) in &report.category_scores {
        lines.push(format!(
            "{category}: {:.1}/10 (weight {:.0}%)",
            score.score,
            weight_percent(*category)
        ));
    }
    lines.push(String::new());

    lines.push("[Overall]".to_string());
    lines.push(rule.clone());
    lines.push(format!(
        "{:.1}/10 - {}",
        report.total_score.total, report.total_score.rating
    ));
    lines.push(String::new());

    if !report.highlights.is_empty() {
        lines.push("[Highlights]".to_string());
        lines.push(rule.clone());
        lines.extend(report.highlights.iter().map(|h| format!("✓ {h}")));
        lines.push(String::new());
    }

    if !report.suggestions.is_empty() {
        lines.push("[Suggestions]".to_string());
        lines.push(rule);
        lines.extend(report.suggestions.iter().map(|s| format!("• {s}")));
        lines.push(String::new());
    }

    lines.push("[Recorded at]".to_string());
    lines.push(recorded_at.format("%Y-%m-%d %H:%M:%S").to_string());
    lines.push(String::new());
    lines.push(banner);
    lines.push(String::new());

    lines.join("\n")
}
