//! Rule-based cuisine classification.
//!
//! Infers category, category detail, representative dish, and search tags
//! from free text when a source left them blank. Rules are ordered
//! pattern tables evaluated top-to-bottom with first-match-wins semantics;
//! the order is a behavioral contract, do not reorder.

use regex::{Regex, RegexBuilder};

/// (pattern, (category, detail)) in precedence order.
const CATEGORY_RULES: [(&str, (&str, &str)); 6] = [
    ("한식|백반|국밥|한정식|찌개|곰탕", ("한식", "백반/정식")),
    ("중식|짜장|짬뽕|마라", ("중식", "중화요리")),
    ("일식|초밥|돈카츠|라멘|우동", ("일식", "일식당")),
    ("양식|파스타|스테이크|피자|브런치", ("양식", "양식당")),
    ("카페|커피|디저트", ("카페", "카페/디저트")),
    ("치킨|족발|보쌈|분식|주점|술", ("기타", "기타(주점/카페/뷔페/기타)")),
];

/// (pattern, dish label) in precedence order.
const MAIN_DISH_RULES: [(&str, &str); 6] = [
    ("백반|정식", "백반/정식"),
    ("국밥|곰탕|탕", "국밥/탕"),
    ("초밥|회", "초밥/회"),
    ("고기|구이|삼겹", "고기/구이"),
    ("면|라멘|우동|칼국수", "면요리"),
    ("파스타|피자", "파스타/피자"),
];

/// (pattern, tag labels); a basis may match several rules, matched label
/// sets are unioned in first-seen order.
const TAG_RULES: [(&str, &[&str]); 5] = [
    ("한식|백반|국밥", &["한식", "백반", "국밥"]),
    ("일식|초밥|라멘", &["일식", "초밥", "라멘"]),
    ("중식|짜장|짬뽕", &["중식", "짜장", "짬뽕"]),
    ("양식|파스타|스테이크", &["양식", "파스타", "스테이크"]),
    ("카페|디저트", &["카페", "디저트"]),
];

/// Free-text inputs for one record; empty strings mean "not set".
#[derive(Debug, Clone, Default)]
pub struct ClassifyInput {
    pub name: String,
    pub category: String,
    pub detail: String,
    pub main_dish: String,
    pub tags: String,
}

/// Classification result; fields already set on input pass through
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub detail: String,
    pub main_dish: String,
    pub tags: String,
}

/// Classifier owning its compiled rule tables.
///
/// Built once at startup and passed explicitly into the enrichment pass.
#[derive(Debug)]
pub struct Classifier {
    category_rules: Vec<(Regex, (String, String))>,
    main_dish_rules: Vec<(Regex, String)>,
    tag_rules: Vec<(Regex, Vec<String>)>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        // Patterns are fixed table constants; compilation cannot fail.
        let compile = |p: &str| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("invalid rule pattern")
        };

        Self {
            category_rules: CATEGORY_RULES
                .iter()
                .map(|(p, (c, d))| (compile(p), (c.to_string(), d.to_string())))
                .collect(),
            main_dish_rules: MAIN_DISH_RULES
                .iter()
                .map(|(p, d)| (compile(p), d.to_string()))
                .collect(),
            tag_rules: TAG_RULES
                .iter()
                .map(|(p, tags)| (compile(p), tags.iter().map(|t| t.to_string()).collect()))
                .collect(),
        }
    }

    /// Backfill unset classification fields from the record's free text.
    ///
    /// The search basis is the concatenation of all five inputs, so an
    /// already-set field still contributes evidence for the others. A
    /// non-empty input field is never overwritten.
    pub fn classify(&self, input: &ClassifyInput) -> Classification {
        let basis = [
            input.name.as_str(),
            input.category.as_str(),
            input.detail.as_str(),
            input.main_dish.as_str(),
            input.tags.as_str(),
        ]
        .join(" ");

        let mut category = input.category.clone();
        let mut detail = input.detail.clone();
        let mut main_dish = input.main_dish.clone();
        let mut tags = input.tags.clone();

        if category.is_empty() {
            if let Some((_, (c, d))) = self
                .category_rules
                .iter()
                .find(|(pattern, _)| pattern.is_match(&basis))
            {
                category = c.clone();
                detail = d.clone();
            }
        }

        if detail.is_empty() {
            detail = category.clone();
        }

        if main_dish.is_empty() {
            if let Some((_, dish)) = self
                .main_dish_rules
                .iter()
                .find(|(pattern, _)| pattern.is_match(&basis))
            {
                main_dish = dish.clone();
            }
        }

        if tags.is_empty() {
            let mut collected: Vec<String> = Vec::new();
            for (pattern, labels) in &self.tag_rules {
                if pattern.is_match(&basis) {
                    for label in labels {
                        if !label.is_empty() && !collected.contains(label) {
                            collected.push(label.clone());
                        }
                    }
                }
            }
            tags = collected.join(",");
        }

        Classification {
            category,
            detail,
            main_dish,
            tags,
        }
    }
}
