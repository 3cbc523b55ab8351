// Résumé analysis engine: lexical features, keyword extraction, section detection,
// ATS scoring and recommendations, plus the orchestrator that runs them together.
// Everything below `orchestrator` is a pure function of the input text.

pub mod ats;
pub mod extraction;
pub mod keywords;
pub mod lexical;
pub mod models;
pub mod orchestrator;
pub mod recommendations;
pub mod sections;
pub mod text;

pub use models::{FileMeta, ResumeAnalysis};
pub use orchestrator::analyze;
