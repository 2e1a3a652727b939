//! Skill extraction — bounded, case-insensitive token matching against the
//! fixed catalog.
//!
//! A token matches iff it is delimited on both sides by start/end of string,
//! whitespace, or one of `, . / ;`. This is deliberately NOT true word-boundary
//! matching: the delimiter class keeps "Java" out of "JavaScript" while still
//! letting tokens that contain `.` or `/` (Next.js, CI/CD) match as literals.

use serde::{Deserialize, Serialize};

use crate::analysis::catalog;

/// Categorized extraction result. All seven category keys are always present;
/// a category with no matches is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub core_cs: Vec<String>,
    pub languages: Vec<String>,
    pub web: Vec<String>,
    pub data: Vec<String>,
    pub cloud: Vec<String>,
    pub testing: Vec<String>,
    pub other: Vec<String>,
}

impl ExtractedSkills {
    /// Categories in canonical order, paired with their display keys.
    pub fn categories(&self) -> [(&'static str, &[String]); 7] {
        [
            ("core_cs", &self.core_cs),
            ("languages", &self.languages),
            ("web", &self.web),
            ("data", &self.data),
            ("cloud", &self.cloud),
            ("testing", &self.testing),
            ("other", &self.other),
        ]
    }

    /// All extracted skills flattened across categories, in category order.
    pub fn flattened(&self) -> Vec<&str> {
        self.categories()
            .into_iter()
            .flat_map(|(_, skills)| skills.iter().map(String::as_str))
            .collect()
    }

    /// Number of categories with at least one skill (`other` included).
    pub fn populated_count(&self) -> usize {
        self.categories()
            .into_iter()
            .filter(|(_, skills)| !skills.is_empty())
            .count()
    }

    pub fn total(&self) -> usize {
        self.categories()
            .into_iter()
            .map(|(_, skills)| skills.len())
            .sum()
    }
}

/// Extracts catalog skills from free-form JD text.
///
/// Total over all inputs: if nothing matches anywhere (including the empty
/// string), `other` is populated with the fixed fallback skills.
pub fn extract_skills(jd_text: &str) -> ExtractedSkills {
    let text = jd_text.to_lowercase();

    let mut extracted = ExtractedSkills {
        core_cs: match_catalog(&text, catalog::CORE_CS),
        languages: match_catalog(&text, catalog::LANGUAGES),
        web: match_catalog(&text, catalog::WEB),
        data: match_catalog(&text, catalog::DATA),
        cloud: match_catalog(&text, catalog::CLOUD),
        testing: match_catalog(&text, catalog::TESTING),
        other: Vec::new(),
    };

    if extracted.total() == 0 {
        extracted.other = catalog::FALLBACK_SKILLS
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    extracted
}

/// Returns the subsequence of `skills` matched in `text`, in catalog order.
/// `text` must already be lower-cased.
fn match_catalog(text: &str, skills: &[&str]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| contains_bounded(text, &skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

/// True if `token` occurs in `text` with a delimiter (or string edge) on each
/// side. Delimiters: whitespace and `, . / ;`.
fn contains_bounded(text: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = text[from..].find(token) {
        let start = from + offset;
        let end = start + token.len();

        let before_ok = text[..start].chars().next_back().map_or(true, is_delimiter);
        let after_ok = text[end..].chars().next().map_or(true, is_delimiter);
        if before_ok && after_ok {
            return true;
        }

        // Advance by one char past the failed match and keep scanning.
        from = start
            + text[start..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
    }
    false
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | '/' | ';')
}
