use crate::{rating::report::Report, utils::time::date_to_string};

use super::{join_activities, weight_percent};

/// Renders a report as markdown: a category table, per-category scores, the overall rating, and
/// highlights and suggestions when there are any.
pub fn format_report(report: &Report) -> String {
    let mut output = vec![];

    output.push(format!(
        "## {} Daily activity rating\n",
        date_to_string(report.date)
    ));

    output.push("### Activities by category\n".to_string());
    output.push("| Category | Activities |".to_string());
    output.push("|------|----------|".to_string());
    for (category, activities) in &report.categories {
        output.push(format!("| {category} | {} |", join_activities(activities)));
    }

    output.push("\n### Scores\n".to_string());
    for (category, score) in &report.category_scores {
        output.push(format!(
            "- {category}: {:.1}/10 (weight {:.0}%)",
            score.score,
            weight_percent(*category)
        ));
    }

    output.push(format!(
        "\n### Overall: {:.1}/10 {}\n",
        report.total_score.total, report.total_score.rating
    ));

    if !report.highlights.is_empty() {
        output.push("### Highlights".to_string());
        output.extend(report.highlights.iter().map(|h| format!("- {h}")));
        output.push(String::new());
    }

    if !report.suggestions.is_empty() {
        output.push("### Suggestions".to_string());
        output.extend(report.suggestions.iter().map(|s| format!("- {s}")));
        output.push(String::new());
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::format_report;
    use crate::{
        cli::output::test_reports::{morning_report, TEST_DATE},
        rating::generate_report,
    };

    #[test]
    fn renders_all_sections() {
        let report = morning_report();
        let text = format_report(&report);

        assert!(text.starts_with("## 2024-04-05 Daily activity rating"));
        assert!(text.contains("| Health | 起床、吃早餐、跑了5公里 |"));
        assert!(text.contains("| Study | 复习笔记、练习考试 |"));
        assert!(text.contains("- Health: 10.0/10 (weight 25%)"));
        assert!(text.contains("- Study: 10.0/10 (weight 15%)"));
        assert!(text.contains("- Leisure: 0.0/10 (weight 2%)"));
        assert!(text.contains("### Overall: 4.0/10 Poor"));
        assert!(text.contains(
            "### Highlights\n- Health performs excellently\n- Study performs excellently"
        ));
        assert!(!text.contains("### Suggestions"));
    }

    #[test]
    fn empty_report_has_no_feedback_sections() {
        let text = format_report(&generate_report("", TEST_DATE));

        assert!(text.contains("### Overall: 0.0/10 Very poor"));
        assert!(!text.contains("### Highlights"));
        assert!(!text.contains("### Suggestions"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let report = morning_report();
        let before = report.clone();

        assert_eq!(format_report(&report), format_report(&report));
        assert_eq!(report, before);
    }

    #[test]
    fn categories_follow_taxonomy_order() {
        let text = format_report(&morning_report());
        let health = text.find("- Health:").unwrap();
        let study = text.find("- Study:").unwrap();
        let family = text.find("- Family:").unwrap();
        assert!(family < health && health < study);
    }
}
