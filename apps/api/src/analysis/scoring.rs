//! Readiness scoring — additive heuristic over extraction results and request
//! fields, plus the per-skill confidence adjustment applied by toggles.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::ExtractedSkills;

/// Floor of the readiness scale; every analysis starts here.
pub const BASE_SCORE: u32 = 35;
/// Ceiling of the readiness scale.
pub const MAX_SCORE: u32 = 100;

const CATEGORY_POINTS: u32 = 5;
const CATEGORY_CAP: u32 = 30;
const COMPANY_POINTS: u32 = 10;
const ROLE_POINTS: u32 = 10;
const LONG_JD_POINTS: u32 = 10;
const LONG_JD_CHARS: usize = 800;

/// Score delta for flipping one skill's confidence.
const TOGGLE_STEP: i64 = 4;

/// Self-assessed confidence for one extracted skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    #[default]
    Practice,
}

impl Confidence {
    pub fn toggled(self) -> Self {
        match self {
            Confidence::Know => Confidence::Practice,
            Confidence::Practice => Confidence::Know,
        }
    }
}

/// Computes the base readiness score in [35, 100].
///
/// Additive: 35 base, +5 per populated skill category (capped at +30),
/// +10 each for a non-blank company, a non-blank role, and a JD longer than
/// 800 characters. Clamped at 100.
pub fn calculate_readiness_score(
    jd_text: &str,
    company: &str,
    role: &str,
    skills: &ExtractedSkills,
) -> u32 {
    let mut score = BASE_SCORE;

    let category_bonus = skills.populated_count() as u32 * CATEGORY_POINTS;
    score += category_bonus.min(CATEGORY_CAP);

    if !company.trim().is_empty() {
        score += COMPANY_POINTS;
    }
    if !role.trim().is_empty() {
        score += ROLE_POINTS;
    }
    if jd_text.chars().count() > LONG_JD_CHARS {
        score += LONG_JD_POINTS;
    }

    score.min(MAX_SCORE)
}

/// Applies the confidence-toggle adjustment to a final score: +4 when the
/// skill is now known, -4 when it is back to practice, clamped to [0, 100].
pub fn adjust_for_toggle(current: u32, now: Confidence) -> u32 {
    let delta = match now {
        Confidence::Know => TOGGLE_STEP,
        Confidence::Practice => -TOGGLE_STEP,
    };
    (current as i64 + delta).clamp(0, MAX_SCORE as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::extract_skills;

    fn skills_with_categories(n: usize) -> ExtractedSkills {
        let mut skills = ExtractedSkills::default();
        let slots: [&mut Vec<String>; 7] = [
            &mut skills.core_cs,
            &mut skills.languages,
            &mut skills.web,
            &mut skills.data,
            &mut skills.cloud,
            &mut skills.testing,
            &mut skills.other,
        ];
        for slot in slots.into_iter().take(n) {
            slot.push("x".to_string());
        }
        skills
    }

    #[test]
    fn test_empty_everything_scores_base() {
        let score = calculate_readiness_score("", "", "", &ExtractedSkills::default());
        assert_eq!(score, BASE_SCORE);
    }

    #[test]
    fn test_five_points_per_populated_category() {
        for n in 0..=6 {
            let score = calculate_readiness_score("", "", "", &skills_with_categories(n));
            assert_eq!(score, BASE_SCORE + 5 * n as u32);
        }
    }

    #[test]
    fn test_category_bonus_caps_at_thirty() {
        let score = calculate_readiness_score("", "", "", &skills_with_categories(7));
        assert_eq!(score, BASE_SCORE + 30);
    }

    #[test]
    fn test_company_and_role_each_add_ten() {
        let skills = ExtractedSkills::default();
        let base = calculate_readiness_score("", "", "", &skills);
        assert_eq!(calculate_readiness_score("", "Acme", "", &skills), base + 10);
        assert_eq!(
            calculate_readiness_score("", "Acme", "SDE-1", &skills),
            base + 20
        );
    }

    #[test]
    fn test_whitespace_only_company_does_not_count() {
        let skills = ExtractedSkills::default();
        assert_eq!(
            calculate_readiness_score("", "   ", "", &skills),
            BASE_SCORE
        );
    }

    #[test]
    fn test_long_jd_adds_ten_past_800_chars() {
        let skills = ExtractedSkills::default();
        let short = "x".repeat(800);
        let long = "x".repeat(801);
        assert_eq!(calculate_readiness_score(&short, "", "", &skills), BASE_SCORE);
        assert_eq!(
            calculate_readiness_score(&long, "", "", &skills),
            BASE_SCORE + 10
        );
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let long = "x".repeat(2000);
        let score = calculate_readiness_score(&long, "Amazon", "SDE", &skills_with_categories(7));
        assert!(score >= BASE_SCORE && score <= MAX_SCORE);
        // All bonuses together: 35 + 30 + 10 + 10 + 10.
        assert_eq!(score, 95);
    }

    #[test]
    fn test_fallback_extraction_still_counts_one_category() {
        // No catalog match populates `other`, which counts as one category.
        let skills = extract_skills("teamwork above all");
        let score = calculate_readiness_score("teamwork above all", "", "", &skills);
        assert_eq!(score, BASE_SCORE + 5);
    }

    #[test]
    fn test_toggle_know_adds_four() {
        assert_eq!(adjust_for_toggle(60, Confidence::Know), 64);
    }

    #[test]
    fn test_toggle_practice_subtracts_four() {
        assert_eq!(adjust_for_toggle(60, Confidence::Practice), 56);
    }

    #[test]
    fn test_toggle_clamps_at_bounds() {
        assert_eq!(adjust_for_toggle(2, Confidence::Practice), 0);
        assert_eq!(adjust_for_toggle(98, Confidence::Know), 100);
    }

    #[test]
    fn test_confidence_toggled_round_trips() {
        assert_eq!(Confidence::Practice.toggled(), Confidence::Know);
        assert_eq!(Confidence::Know.toggled(), Confidence::Practice);
    }

    #[test]
    fn test_confidence_default_is_practice() {
        assert_eq!(Confidence::default(), Confidence::Practice);
    }
}
