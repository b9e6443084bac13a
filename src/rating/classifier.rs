use super::taxonomy::Category;

/// Picks the category with the most distinct keywords contained in `content`.
///
/// Matching ignores case and token boundaries. When counts tie, the category that comes first in
/// taxonomy order wins. Content that matches nothing is [Category::Other].
pub fn classify(content: &str) -> Category {
    let content = content.to_lowercase();

    let mut best = Category::Other;
    let mut best_matches = 0;
    for category in Category::SCORED {
        let matches = keyword_matches(&content, category);
        if matches > best_matches {
            best_matches = matches;
            best = category;
        }
    }
    best
}

/// Number of keywords of `category` found in already lowercased `content`.
fn keyword_matches(content: &str, category: Category) -> usize {
    category
        .keywords()
        .iter()
        .filter(|keyword| content.contains(&keyword.to_lowercase()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::{classify, keyword_matches};
    use crate::rating::taxonomy::Category;

    #[test]
    fn classifies_by_keyword() {
        assert_eq!(classify("起床"), Category::Health);
        assert_eq!(classify("吃早餐"), Category::Health);
        assert_eq!(classify("跑了5公里"), Category::Health);
        assert_eq!(classify("和朋友聚会"), Category::Social);
        assert_eq!(classify("复习考试"), Category::Study);
    }

    #[test]
    fn unmatched_content_is_other() {
        assert_eq!(classify("xyzabc"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("Python"), Category::SelfImprovement);
        assert_eq!(classify("PYTHON编程"), Category::SelfImprovement);
    }

    #[test]
    fn highest_count_wins() {
        // "完成" hits Work once, "完成项目" and "项目" push Work to three.
        assert_eq!(keyword_matches("完成项目", Category::Work), 3);
        assert_eq!(classify("完成项目"), Category::Work);
        assert_eq!(classify("陪读书籍笔记"), Category::Study);
    }

    #[test]
    fn ties_keep_taxonomy_order() {
        assert_eq!(keyword_matches("陪着休息", Category::Family), 1);
        assert_eq!(keyword_matches("陪着休息", Category::Health), 1);
        assert_eq!(classify("陪着休息"), Category::Family);

        assert_eq!(keyword_matches("陪孩子学习编程", Category::Family), 2);
        assert_eq!(keyword_matches("陪孩子学习编程", Category::SelfImprovement), 2);
        assert_eq!(classify("陪孩子学习编程"), Category::Family);
    }

    #[test]
    fn substring_matching_has_no_token_boundaries() {
        // "ai" appears inside "said".
        assert_eq!(classify("she said hello"), Category::SelfImprovement);
    }

    #[test]
    fn classification_is_repeatable() {
        let content = "下午学习了Python编程2小时";
        assert_eq!(classify(content), classify(content));
    }
}
