//! Interview round mapping — one of two fixed templates selected by the
//! company profile. The startup template's first round is the only place
//! skill content affects wording.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::ExtractedSkills;
use crate::analysis::intel::CompanyIntel;

/// Frontend tokens that flip startup round 1 to a UI exercise.
const FRONTEND_SKILLS: &[&str] = &["React", "Next.js", "JavaScript"];

/// One step of the expected interview process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStep {
    pub round_title: String,
    pub focus_areas: Vec<String>,
    pub why_it_matters: String,
}

fn round(title: &str, focus_areas: &[&str], why: &str) -> RoundStep {
    RoundStep {
        round_title: title.to_string(),
        focus_areas: focus_areas.iter().map(|f| f.to_string()).collect(),
        why_it_matters: why.to_string(),
    }
}

/// Returns the 4-round enterprise template or the 3-round startup template.
pub fn generate_round_mapping(intel: &CompanyIntel, skills: &ExtractedSkills) -> Vec<RoundStep> {
    if intel.is_enterprise {
        return vec![
            round(
                "Round 1: Online Assessment",
                &["Aptitude", "2 DSA Problems"],
                "To filter candidates based on core logic and speed.",
            ),
            round(
                "Round 2: Technical Interview I",
                &["DSA (Trees/Graphs)", "Core CS"],
                "Deep dive into data structures and computer science foundations.",
            ),
            round(
                "Round 3: Technical Interview II",
                &["Low Level Design", "Projects"],
                "Evaluates your ability to write clean, modular, and object-oriented code.",
            ),
            round(
                "Round 4: HR / Behavioral",
                &["Culture Fit", "Situational"],
                "Ensures alignment with company values and long-term potential.",
            ),
        ];
    }

    let has_frontend = skills
        .web
        .iter()
        .any(|s| FRONTEND_SKILLS.contains(&s.as_str()));
    let exercise = if has_frontend { "UI" } else { "Feature" };
    let machine_coding_focus = format!("Practical {exercise} implementation");

    vec![
        round(
            "Round 1: Machine Coding",
            &[machine_coding_focus.as_str()],
            "Validates if you can build real-world components from scratch.",
        ),
        round(
            "Round 2: Technical Discussion",
            &["Project Deep-dive", "Stack depth"],
            "Tests your understanding of the tools and choices you made in your projects.",
        ),
        round(
            "Round 3: Founder / Culture Fit",
            &["Vibe check", "Ownership mindset"],
            "Startups look for early members who take high ownership and move fast.",
        ),
    ]
}
