// Analysis engine: skill extraction, readiness scoring, company intel,
// round mapping, fixed templates, and the orchestrator tying them together.
// The pipeline is pure and synchronous; handlers and stores sit at the edges.

pub mod catalog;
pub mod engine;
pub mod export;
pub mod extractor;
pub mod handlers;
pub mod intel;
pub mod rounds;
pub mod scoring;
pub mod templates;
