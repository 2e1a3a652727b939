//! Company intel — enterprise classification by name containment, plus
//! keyword-driven industry inference over the JD text.

use serde::{Deserialize, Serialize};

pub const ENTERPRISE_CATEGORY: &str = "Enterprise (2000+)";
pub const STARTUP_CATEGORY: &str = "Startup (<200)";

const ENTERPRISE_FOCUS: &str =
    "High emphasis on DSA, CS Fundamentals (OS/DBMS), and scalable system design logic.";
const STARTUP_FOCUS: &str =
    "Heavy focus on practical stack depth, project building experience, and immediate problem-solving.";

/// Well-known large employers. A company name containing any of these is
/// classified as enterprise.
const ENTERPRISE_NAMES: &[&str] = &[
    "amazon",
    "google",
    "microsoft",
    "meta",
    "apple",
    "netflix",
    "tcs",
    "infosys",
    "wipro",
    "hcl",
    "accenture",
    "ibm",
    "capgemini",
    "cognizant",
    "oracle",
];

/// Industry keyword groups in priority order. First group with any hit wins,
/// so a JD mentioning both "bank" and "health" classifies as fintech.
const INDUSTRY_GROUPS: &[(&str, &[&str])] = &[
    ("Fintech / Banking", &["bank", "finance", "insurance", "fintech"]),
    ("Healthcare / Biotech", &["health", "medical", "bio", "clinical"]),
    ("E-commerce / Retail", &["shop", "retail", "e-commerce", "commerce"]),
    (
        "Media / Entertainment",
        &["game", "entertainment", "streaming", "media"],
    ),
    ("Cybersecurity", &["cyber", "security", "protection"]),
];

const DEFAULT_INDUSTRY: &str = "Technology Services";

/// Heuristic company profile derived once per analysis; immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub name: String,
    pub category: String,
    pub industry: String,
    pub hiring_focus: String,
    pub is_enterprise: bool,
}

/// Derives a [`CompanyIntel`] from the company name and JD text. Total over
/// all inputs; a blank name simply classifies as startup.
pub fn infer_company_intel(company_name: &str, jd_text: &str) -> CompanyIntel {
    let name = company_name.to_lowercase();
    let name = name.trim();
    let is_enterprise = ENTERPRISE_NAMES.iter().any(|e| name.contains(e));

    let text = jd_text.to_lowercase();
    let industry = INDUSTRY_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(label, _)| *label)
        .unwrap_or(DEFAULT_INDUSTRY);

    let (category, hiring_focus) = if is_enterprise {
        (ENTERPRISE_CATEGORY, ENTERPRISE_FOCUS)
    } else {
        (STARTUP_CATEGORY, STARTUP_FOCUS)
    };

    CompanyIntel {
        name: company_name.to_string(),
        category: category.to_string(),
        industry: industry.to_string(),
        hiring_focus: hiring_focus.to_string(),
        is_enterprise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_enterprise_classifies_enterprise() {
        let intel = infer_company_intel("Amazon", "any text");
        assert!(intel.is_enterprise);
        assert_eq!(intel.category, ENTERPRISE_CATEGORY);
    }

    #[test]
    fn test_enterprise_match_is_containment_not_equality() {
        let intel = infer_company_intel("Google Cloud India", "");
        assert!(intel.is_enterprise);
    }

    #[test]
    fn test_unknown_company_classifies_startup() {
        let intel = infer_company_intel("Acme Startup", "any text");
        assert!(!intel.is_enterprise);
        assert_eq!(intel.category, STARTUP_CATEGORY);
    }

    #[test]
    fn test_blank_company_name_is_startup() {
        let intel = infer_company_intel("", "some jd");
        assert!(!intel.is_enterprise);
        assert_eq!(intel.name, "");
    }

    #[test]
    fn test_original_name_preserved_verbatim() {
        let intel = infer_company_intel("  Microsoft  ", "");
        assert_eq!(intel.name, "  Microsoft  ");
        assert!(intel.is_enterprise);
    }

    #[test]
    fn test_industry_first_match_wins() {
        // Both fintech and healthcare keywords present; fintech has priority.
        let intel = infer_company_intel("Acme", "a bank serving health providers");
        assert_eq!(intel.industry, "Fintech / Banking");
    }

    #[test]
    fn test_each_industry_group_detected() {
        let cases = [
            ("insurance claims platform", "Fintech / Banking"),
            ("clinical trials software", "Healthcare / Biotech"),
            ("retail point of sale", "E-commerce / Retail"),
            ("streaming video delivery", "Media / Entertainment"),
            ("protection against threats", "Cybersecurity"),
        ];
        for (text, expected) in cases {
            assert_eq!(infer_company_intel("Acme", text).industry, expected);
        }
    }

    #[test]
    fn test_industry_defaults_to_technology_services() {
        let intel = infer_company_intel("Acme", "we build developer tools");
        assert_eq!(intel.industry, "Technology Services");
    }

    #[test]
    fn test_hiring_focus_tracks_enterprise_flag() {
        let enterprise = infer_company_intel("Oracle", "");
        let startup = infer_company_intel("Tiny Co", "");
        assert!(enterprise.hiring_focus.contains("DSA"));
        assert!(startup.hiring_focus.contains("stack depth"));
        assert_ne!(enterprise.hiring_focus, startup.hiring_focus);
    }
}
