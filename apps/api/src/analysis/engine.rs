//! Orchestrator — composes extraction, scoring, intel, and round mapping into
//! a single [`AnalysisResult`], stamped with a fresh id and timestamps.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::extractor::{extract_skills, ExtractedSkills};
use crate::analysis::intel::{infer_company_intel, CompanyIntel};
use crate::analysis::rounds::{generate_round_mapping, RoundStep};
use crate::analysis::scoring::{self, calculate_readiness_score, Confidence};
use crate::analysis::templates::{
    preparation_checklist, sample_questions, seven_day_plan, ChecklistRound, PlanDay,
};

/// Input to one analysis run. All fields may be empty; only the caller
/// enforces a minimum JD length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub company: String,
    pub role: String,
    pub jd_text: String,
}

/// The full record persisted to history. After creation only
/// `skill_confidence_map`, `final_score`, and `updated_at` ever change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    pub company_intel: CompanyIntel,
    pub round_mapping: Vec<RoundStep>,
    pub checklist: Vec<ChecklistRound>,
    pub plan_7_days: Vec<PlanDay>,
    pub questions: Vec<String>,
    pub base_score: u32,
    pub skill_confidence_map: BTreeMap<String, Confidence>,
    pub final_score: u32,
}

impl AnalysisResult {
    /// Flips one skill's confidence, applies the score adjustment, and bumps
    /// `updated_at`. Returns the new confidence, or `None` if the skill was
    /// never extracted for this analysis.
    pub fn toggle_skill(&mut self, skill: &str, now: DateTime<Utc>) -> Option<Confidence> {
        let entry = self.skill_confidence_map.get_mut(skill)?;
        *entry = entry.toggled();
        let confidence = *entry;
        self.final_score = scoring::adjust_for_toggle(self.final_score, confidence);
        self.updated_at = now;
        Some(confidence)
    }
}

/// Runs the full analysis pipeline. Deterministic except for `id` and the
/// two timestamps; always succeeds.
pub fn analyze_jd(request: &AnalysisRequest) -> AnalysisResult {
    let extracted_skills = extract_skills(&request.jd_text);
    let base_score = calculate_readiness_score(
        &request.jd_text,
        &request.company,
        &request.role,
        &extracted_skills,
    );

    // Every extracted skill starts at "practice"; toggles come later.
    let skill_confidence_map = extracted_skills
        .flattened()
        .into_iter()
        .map(|skill| (skill.to_string(), Confidence::Practice))
        .collect();

    let company_intel = infer_company_intel(&request.company, &request.jd_text);
    let round_mapping = generate_round_mapping(&company_intel, &extracted_skills);

    let now = Utc::now();
    AnalysisResult {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        company: request.company.clone(),
        role: request.role.clone(),
        jd_text: request.jd_text.clone(),
        extracted_skills,
        company_intel,
        round_mapping,
        checklist: preparation_checklist(),
        plan_7_days: seven_day_plan(),
        questions: sample_questions(),
        base_score,
        skill_confidence_map,
        final_score: base_score,
    }
}
