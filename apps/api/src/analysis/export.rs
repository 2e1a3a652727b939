//! Plain-text readiness report, the downloadable rendering of one analysis.
//!
//! Stable for a fixed record: dates come from the record, never the clock.

use crate::analysis::engine::AnalysisResult;
use crate::analysis::scoring::Confidence;

const NOT_SPECIFIED: &str = "Not Specified";

/// Renders the full report. Section layout mirrors the exported TXT file:
/// header, company intel, rounds, skills with confidence tags, 7-day plan,
/// checklist, questions.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str("PLACEMENT READINESS REPORT\n");
    out.push_str("==========================\n");
    out.push_str(&format!("Company: {}\n", or_not_specified(&result.company)));
    out.push_str(&format!("Role: {}\n", or_not_specified(&result.role)));
    out.push_str(&format!("Date: {}\n", result.created_at.format("%Y-%m-%d")));
    out.push_str(&format!(
        "Last Updated: {}\n",
        result.updated_at.format("%Y-%m-%d")
    ));
    out.push_str(&format!(
        "Current Score: {}/100 (Base: {})\n",
        result.final_score, result.base_score
    ));

    out.push_str("\nCOMPANY INTEL\n-------------\n");
    out.push_str(&format!("Industry: {}\n", result.company_intel.industry));
    out.push_str(&format!("Size: {}\n", result.company_intel.category));
    out.push_str(&format!(
        "Typical Focus: {}\n",
        result.company_intel.hiring_focus
    ));

    out.push_str("\nINTERVIEW ROUNDS\n----------------\n");
    let rounds: Vec<String> = result
        .round_mapping
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "Round {}: {}\nFocus: {}\nWhy: {}",
                i + 1,
                r.round_title,
                r.focus_areas.join(", "),
                r.why_it_matters
            )
        })
        .collect();
    out.push_str(&rounds.join("\n\n"));
    out.push('\n');

    out.push_str("\nKEY SKILLS & ASSESSMENT\n-----------------------\n");
    for (category, skills) in result.extracted_skills.categories() {
        if skills.is_empty() {
            continue;
        }
        let tagged: Vec<String> = skills
            .iter()
            .map(|skill| {
                let tag = match result.skill_confidence_map.get(skill) {
                    Some(Confidence::Know) => "KNOW",
                    _ => "PRACTICE",
                };
                format!("{skill} [{tag}]")
            })
            .collect();
        out.push_str(&format!(
            "{}: {}\n",
            category.to_uppercase(),
            tagged.join(", ")
        ));
    }

    out.push_str("\n7-DAY ACTION PLAN\n-----------------\n");
    let plan: Vec<String> = result
        .plan_7_days
        .iter()
        .map(|p| format!("Day {}: {}\nTasks: {}", p.day, p.focus, p.tasks.join(", ")))
        .collect();
    out.push_str(&plan.join("\n\n"));
    out.push('\n');

    out.push_str("\nPREPARATION CHECKLIST\n---------------------\n");
    let checklist: Vec<String> = result
        .checklist
        .iter()
        .map(|c| {
            let items: Vec<String> = c.items.iter().map(|i| format!("- {i}")).collect();
            format!("{}\n{}", c.round_title, items.join("\n"))
        })
        .collect();
    out.push_str(&checklist.join("\n\n"));
    out.push('\n');

    out.push_str("\nLIKELY INTERVIEW QUESTIONS\n--------------------------\n");
    for (i, q) in result.questions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, q));
    }

    out
}

fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::{analyze_jd, AnalysisRequest};
    use chrono::Utc;

    fn sample_result() -> AnalysisResult {
        analyze_jd(&AnalysisRequest {
            company: "Amazon".to_string(),
            role: "SDE-1".to_string(),
            jd_text: "Strong DSA and React skills; SQL and Docker a plus.".to_string(),
        })
    }

    #[test]
    fn test_report_contains_all_sections() {
        let report = render_report(&sample_result());
        for section in [
            "PLACEMENT READINESS REPORT",
            "COMPANY INTEL",
            "INTERVIEW ROUNDS",
            "KEY SKILLS & ASSESSMENT",
            "7-DAY ACTION PLAN",
            "PREPARATION CHECKLIST",
            "LIKELY INTERVIEW QUESTIONS",
        ] {
            assert!(report.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn test_blank_company_and_role_render_not_specified() {
        let result = analyze_jd(&AnalysisRequest {
            company: String::new(),
            role: "  ".to_string(),
            jd_text: String::new(),
        });
        let report = render_report(&result);
        assert!(report.contains("Company: Not Specified"));
        assert!(report.contains("Role: Not Specified"));
    }

    #[test]
    fn test_skills_carry_confidence_tags() {
        let mut result = sample_result();
        result.toggle_skill("DSA", Utc::now());
        let report = render_report(&result);
        assert!(report.contains("DSA [KNOW]"));
        assert!(report.contains("React [PRACTICE]"));
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let report = render_report(&sample_result());
        // Nothing matched in testing, so the category line must not appear.
        assert!(!report.contains("TESTING:"));
        assert!(report.contains("CORE_CS: DSA"));
    }

    #[test]
    fn test_questions_are_numbered() {
        let report = render_report(&sample_result());
        assert!(report.contains("1. Walk me through your most challenging project."));
        assert!(report.contains("5. Why do you want to join this company specifically?"));
    }

    #[test]
    fn test_report_shows_scores() {
        let result = sample_result();
        let report = render_report(&result);
        assert!(report.contains(&format!(
            "Current Score: {}/100 (Base: {})",
            result.final_score, result.base_score
        )));
    }

    #[test]
    fn test_report_is_stable_for_fixed_record() {
        let result = sample_result();
        assert_eq!(render_report(&result), render_report(&result));
    }
}
