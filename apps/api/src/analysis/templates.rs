//! Fixed preparation templates attached to every analysis.
//!
//! Plain constant data, identical for every request. No logic belongs here;
//! skill extraction, scoring, and round mapping carry all of it.

use serde::{Deserialize, Serialize};

/// One checklist section tied to a generic interview round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub round_title: String,
    pub items: Vec<String>,
}

/// One slot of the 7-day study plan. `day` is a label ("1-2", "5"), not an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

fn checklist_round(title: &str, items: &[&str]) -> ChecklistRound {
    ChecklistRound {
        round_title: title.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
    }
}

fn plan_day(day: &str, focus: &str, tasks: &[&str]) -> PlanDay {
    PlanDay {
        day: day.to_string(),
        focus: focus.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn preparation_checklist() -> Vec<ChecklistRound> {
    vec![
        checklist_round(
            "Round 1: Aptitude / Basics",
            &[
                "Quantitative Aptitude",
                "Logical Reasoning",
                "Verbal Ability",
                "Basic Coding MCQ",
            ],
        ),
        checklist_round(
            "Round 2: DSA + Core CS",
            &[
                "Array/String Manipulation",
                "Linked Lists/Trees",
                "OS Memory Management",
                "DBMS Normalization",
            ],
        ),
        checklist_round(
            "Round 3: Tech Interview",
            &[
                "Project Walkthrough",
                "System Design Basics",
                "Problem Solving",
            ],
        ),
        checklist_round(
            "Round 4: Managerial / HR",
            &[
                "Strengths & Weaknesses",
                "Conflict Resolution",
                "Future Goals",
            ],
        ),
    ]
}

pub fn seven_day_plan() -> Vec<PlanDay> {
    vec![
        plan_day(
            "1-2",
            "Basics + Core CS",
            &[
                "Review Operating Systems",
                "Database Management",
                "Networks",
            ],
        ),
        plan_day(
            "3-4",
            "DSA + Coding Practice",
            &[
                "Practice Array Problems",
                "String Logic",
                "Tree Traversals",
            ],
        ),
        plan_day(
            "5",
            "Project + Resume Alignment",
            &[
                "Refine Project Descriptions",
                "Key Performance Metrics",
            ],
        ),
        plan_day(
            "6",
            "Mock Interview Questions",
            &["Behavioral Answers", "Technical Deep Dive"],
        ),
        plan_day(
            "7",
            "Revision + Weak Areas",
            &["Final Polish", "Confidence Building"],
        ),
    ]
}

pub fn sample_questions() -> Vec<String> {
    [
        "Walk me through your most challenging project.",
        "How do you handle technical debt?",
        "Explain a time you disagreed with a team member.",
        "What is your approach to learning a new technology?",
        "Why do you want to join this company specifically?",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
}
