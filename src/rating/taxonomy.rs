use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Life domain an activity belongs to. Variants are declared in taxonomy order, which is also the
/// order used for tie-breaking during classification and for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Family,
    SelfImprovement,
    Health,
    Study,
    Work,
    LifeSkills,
    Social,
    Leisure,
    /// Catch-all for activities that matched no keyword. Never scored.
    Other,
}

impl Category {
    /// Every category that takes part in scoring, in taxonomy order.
    pub const SCORED: [Category; 8] = [
        Category::Family,
        Category::SelfImprovement,
        Category::Health,
        Category::Study,
        Category::Work,
        Category::LifeSkills,
        Category::Social,
        Category::Leisure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Family => "Family",
            Category::SelfImprovement => "Self-improvement",
            Category::Health => "Health",
            Category::Study => "Study",
            Category::Work => "Work",
            Category::LifeSkills => "Life-skills",
            Category::Social => "Social",
            Category::Leisure => "Leisure",
            Category::Other => "Other",
        }
    }

    /// Share of the daily score this category accounts for. [Category::Other] has no weight.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Category::Family => Some(0.20),
            Category::SelfImprovement => Some(0.20),
            Category::Health => Some(0.25),
            Category::Study => Some(0.15),
            Category::Work => Some(0.10),
            Category::LifeSkills => Some(0.05),
            Category::Social => Some(0.03),
            Category::Leisure => Some(0.02),
            Category::Other => None,
        }
    }

    /// Keywords signalling this category. Matching is plain substring containment.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Family => &[
                "家人", "陪", "家务", "照顾", "孩子", "父母", "配偶", "丈夫", "妻子", "爸爸",
                "妈妈", "小朋友", "给全家人", "做饭", "做菜", "做早餐", "做午餐", "做晚饭",
                "做晚餐", "做4个菜",
            ],
            Category::SelfImprovement => &[
                "学习", "编程", "阅读", "技能", "兴趣", "爱好", "成长", "提升", "python",
                "python编程", "ai", "ai编程", "人工智能",
            ],
            Category::Health => &[
                "运动", "跑步", "健身", "锻炼", "早餐", "饮食", "睡觉", "睡眠", "休息", "起床",
                "作息", "公里", "吃早餐", "午睡", "篮球", "羽毛球", "体育", "运动课",
            ],
            Category::Study => &["课程", "考试", "复习", "专业", "知识", "书籍", "笔记", "练习"],
            Category::Work => &[
                "工作", "项目", "报告", "会议", "任务", "完成", "汇报", "做项目", "完成项目",
            ],
            Category::LifeSkills => &["整理", "收纳", "维修", "财务", "理财", "规划", "烹饪"],
            Category::Social => &["朋友", "聚会", "活动", "聊天", "联系", "人脉", "送和接"],
            Category::Leisure => &[
                "电视", "电影", "游戏", "娱乐", "休闲", "放松", "音乐", "看电视", "看新闻",
            ],
            Category::Other => &[],
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Terms that mark an activity as done thoroughly. Shared by every category.
pub const QUALITY_KEYWORDS: [&str; 10] = [
    "完成", "很好", "优秀", "坚持", "持续", "深入", "规律", "跑了", "学习", "健康",
];

/// Substrings that mean the activity mentions a duration in hours.
pub const HOUR_MARKERS: [&str; 2] = ["小时", "h"];

/// Substrings that mean the activity mentions a duration in minutes.
pub const MINUTE_MARKERS: [&str; 2] = ["分钟", "min"];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Category, QUALITY_KEYWORDS};

    #[test]
    fn scored_weights_sum_to_one() {
        let sum: f64 = Category::SCORED.iter().filter_map(|c| c.weight()).sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn weights_and_keywords_share_key_set() {
        for category in Category::SCORED {
            let weight = category.weight().expect("scored category has a weight");
            assert!(weight > 0. && weight <= 1.);
            assert!(!category.keywords().is_empty(), "{category} has no keywords");
        }
        assert_eq!(Category::Other.weight(), None);
        assert!(Category::Other.keywords().is_empty());
    }

    #[test]
    fn keyword_lists_have_no_duplicates() {
        for category in Category::SCORED {
            let unique = category.keywords().iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), category.keywords().len(), "{category}");
        }
        let unique = QUALITY_KEYWORDS.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), QUALITY_KEYWORDS.len());
    }

    #[test]
    fn scored_order_matches_declaration_order() {
        let mut sorted = Category::SCORED;
        sorted.sort();
        assert_eq!(sorted, Category::SCORED);
        assert!(Category::SCORED.iter().all(|c| *c < Category::Other));
    }
}
