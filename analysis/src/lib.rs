//! strata-analysis: heuristic codebase analysis engine
//!
//! This crate walks a directory tree (respecting ignore rules), extracts
//! per-file structural facts via pattern matching, and aggregates them into
//! a project-level snapshot: languages, frameworks, an architecture guess,
//! naming conventions, and unresolved dependency edges.
//!
//! The extraction is heuristic by design — fixed regex lists, no AST — and
//! a scan is best-effort: a single unreadable file never fails the run.
//!
//! # Example
//!
//! ```ignore
//! use strata_analysis::Analyzer;
//!
//! let analyzer = Analyzer::with_default_config();
//! let snapshot = analyzer.analyze("path/to/project").await?;
//! println!("{} files", snapshot.summary.total_files);
//! ```

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod conventions;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod extract;
pub mod heuristics;
pub mod language;
pub mod manifest;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::AnalyzerConfig;
pub use engine::Analyzer;
pub use error::{AnalyzerError, FileError, ManifestError};
pub use heuristics::PatternHeuristic;
pub use heuristics::registry::HeuristicRegistry;
pub use language::Language;
pub use manifest::ProjectManifest;
pub use types::fact::{FileFact, StyleSample};
pub use types::snapshot::{
    ArchitectureGuess, ArchitectureKind, CodeStyleGuess, ConventionReport, DependencyEdge,
    DependencyReport, DetectedPattern, FileOrganization, Indentation, NamingStyle,
    PatternCategory, ProjectSnapshot, ProjectSummary, QuoteStyle, StructureStyle,
};
