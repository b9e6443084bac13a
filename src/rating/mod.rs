//! Rating of a free-text description of a day.
//!
//! The pipeline only moves forward: text is [segmenter::segment]ed into fragments, each fragment
//! is [classifier::classify]ed into a [taxonomy::Category], every scored category gets a
//! [scorer::score_category], and [report] combines them into a weighted [report::Report].
//! Nothing here performs I/O or fails. Any input, including an empty one, produces a report.

pub mod classifier;
pub mod entities;
pub mod report;
pub mod scorer;
pub mod segmenter;
pub mod taxonomy;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use entities::{Activity, CategoryScore};
use report::{group_by_category, highlights, suggestions, total_score, Report};
use taxonomy::Category;

/// Runs the whole pipeline for `text`. `date` is the day the report is generated for.
#[instrument(skip(text), fields(len = text.len()))]
pub fn generate_report(text: &str, date: NaiveDate) -> Report {
    let activities = segmenter::segment(text)
        .into_iter()
        .map(|fragment| {
            let category = classifier::classify(&fragment.content);
            fragment.with_category(category)
        })
        .collect::<Vec<Activity>>();
    debug!("Found {} activities", activities.len());

    let categories = group_by_category(&activities);

    let category_scores = Category::SCORED
        .into_iter()
        .map(|category| {
            let assigned = activities
                .iter()
                .filter(|a| a.category == category)
                .collect::<Vec<_>>();
            (category, scorer::score_category(category, &assigned))
        })
        .collect::<BTreeMap<Category, CategoryScore>>();

    let total_score = total_score(&category_scores);
    let highlights = highlights(&category_scores, &categories);
    let suggestions = suggestions(&category_scores);
    debug!("Rated {} ({})", total_score.total, total_score.rating);

    Report {
        date,
        activities,
        categories,
        category_scores,
        total_score,
        highlights,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{generate_report, report::RatingTier, taxonomy::Category};
    use crate::utils::logging::TEST_LOGGING;

    const TEST_DATE: NaiveDate = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();

    const SAMPLE_DAY: &str = "
    今天早上7点起床，跑了5公里；8点吃健康早餐；9点开始工作，
    完成了项目报告；中午陪孩子做作业1小时；下午学习了Python编程2小时；
    晚上做了晚饭；和家人一起看电视；11点睡觉
    ";

    #[test]
    fn morning_routine_is_all_health() {
        *TEST_LOGGING;
        let report = generate_report("7点起床，跑了5公里；8点吃早餐", TEST_DATE);

        let timed = report
            .activities
            .iter()
            .filter(|a| a.time.is_some())
            .collect::<Vec<_>>();
        assert_eq!(timed.len(), 2);
        assert_eq!(timed[0].time.as_deref(), Some("7:00"));
        assert_eq!(timed[1].time.as_deref(), Some("8:00"));
        assert!(report.activities.iter().all(|a| a.category == Category::Health));

        assert_eq!(report.score_of(Category::Health), 10.);
        assert_eq!(report.total_score.total, 2.5);
        assert_eq!(report.total_score.rating, RatingTier::VeryPoor);
        assert_eq!(report.highlights, vec!["Health performs excellently".to_string()]);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn empty_input_is_well_formed() {
        for input in ["", "   ", "\n\n，；"] {
            let report = generate_report(input, TEST_DATE);
            assert!(report.activities.is_empty());
            assert!(report.categories.is_empty());
            assert_eq!(report.category_scores.len(), Category::SCORED.len());
            assert!(report.category_scores.values().all(|s| s.score == 0.));
            assert_eq!(report.total_score.total, 0.);
            assert_eq!(report.total_score.rating, RatingTier::VeryPoor);
            assert!(report.highlights.is_empty());
            assert!(report.suggestions.is_empty());
        }
    }

    #[test]
    fn unknown_activity_goes_to_other() {
        let report = generate_report("xyzabc", TEST_DATE);
        assert_eq!(report.activities.len(), 1);
        assert_eq!(report.activities[0].category, Category::Other);
        assert_eq!(report.categories[&Category::Other].len(), 1);
        assert!(!report.category_scores.contains_key(&Category::Other));
        assert!(report.category_scores.values().all(|s| s.score == 0.));
        assert_eq!(report.total_score.total, 0.);
    }

    #[test]
    fn sample_day_scores() {
        let report = generate_report(SAMPLE_DAY, TEST_DATE);

        assert_eq!(report.date, TEST_DATE);
        assert_eq!(report.activities.len(), 10);
        assert_eq!(
            report.activities.iter().filter(|a| a.time.is_some()).count(),
            4
        );
        assert_eq!(&*report.categories[&Category::Other][0].content, "晚上做了晚饭");

        assert_eq!(report.score_of(Category::Health), 10.);
        assert_eq!(report.score_of(Category::Work), 10.);
        assert_eq!(report.score_of(Category::SelfImprovement), 7.);
        assert_eq!(report.score_of(Category::Family), 6.);
        assert_eq!(report.score_of(Category::Leisure), 5.);
        assert_eq!(report.score_of(Category::Study), 0.);

        assert_eq!(report.total_score.total, 6.2);
        assert_eq!(report.total_score.rating, RatingTier::Average);
        assert_eq!(
            report.highlights,
            vec![
                "Health performs excellently".to_string(),
                "Work performs excellently".to_string()
            ]
        );
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn zero_categories_never_reported() {
        let report = generate_report(SAMPLE_DAY, TEST_DATE);
        for category in Category::SCORED {
            if report.score_of(category) == 0. {
                let label = category.label();
                assert!(!report.highlights.iter().any(|h| h.contains(label)));
                assert!(!report.suggestions.iter().any(|s| s.contains(label)));
            }
        }
    }

    #[test]
    fn same_input_same_report() {
        assert_eq!(
            generate_report(SAMPLE_DAY, TEST_DATE),
            generate_report(SAMPLE_DAY, TEST_DATE)
        );
    }
}
