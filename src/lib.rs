//! Franck-Hertz analysis: smooth a mercury tube run, find the current peaks
//! and plot the voltage spacing between them.
pub mod analysis;
pub mod config;
pub use analysis::{AnalysisError, AnalysisPipeline, AnalysisReport};
pub use config::AnalysisConfig;
