//! Data model for the analyzer: per-file facts and the aggregated snapshot.

pub mod fact;
pub mod snapshot;

pub use fact::{FileFact, StyleSample};
pub use snapshot::{
    ArchitectureGuess, ArchitectureKind, CodeStyleGuess, ConventionReport, DependencyEdge,
    DependencyReport, DetectedPattern, FileOrganization, Indentation, NamingStyle,
    PatternCategory, ProjectSnapshot, ProjectSummary, QuoteStyle, StructureStyle,
};
