//! Resume relevance scoring library

pub mod config;
pub mod error;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{RelevanceError, Result};
pub use processing::analyzer::{AnalysisResult, RelevanceAnalyzer};
pub use processing::scorer::Verdict;
