//! Fixed skill catalog the extractor matches against.
//!
//! Catalog order is load-bearing: extracted skills are reported in catalog
//! order, never input order.

pub const CORE_CS: &[&str] = &["DSA", "OOP", "DBMS", "OS", "Networks"];

pub const LANGUAGES: &[&str] = &[
    "Java",
    "Python",
    "JavaScript",
    "TypeScript",
    "C",
    "C++",
    "C#",
    "Go",
];

pub const WEB: &[&str] = &["React", "Next.js", "Node.js", "Express", "REST", "GraphQL"];

pub const DATA: &[&str] = &["SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis"];

pub const CLOUD: &[&str] = &[
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Linux",
];

pub const TESTING: &[&str] = &["Selenium", "Cypress", "Playwright", "JUnit", "PyTest"];

/// Generic skills reported under `other` when no catalog token matches at all.
pub const FALLBACK_SKILLS: &[&str] = &[
    "Communication",
    "Problem solving",
    "Basic coding",
    "Projects",
];
