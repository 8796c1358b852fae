use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// The aggregate result of one `analyze()` call.
///
/// A snapshot is a pure function of the extracted fact set plus the manifest
/// contents at scan time: re-running over an unchanged tree produces an equal
/// value. It has no lifecycle of its own; callers cache it and serve the
/// sub-objects as independent views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub summary: ProjectSummary,
    pub architecture: ArchitectureGuess,
    pub patterns: Vec<DetectedPattern>,
    pub dependencies: DependencyReport,
    pub conventions: ConventionReport,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_files: usize,
    pub total_lines: usize,
    pub lines_by_language: BTreeMap<Language, usize>,
    /// Every framework rule matched by any import specifier. A specifier may
    /// contribute to several entries; there is no priority between them.
    pub frameworks: Vec<String>,
    pub package_managers: Vec<String>,
    pub test_frameworks: Vec<String>,
}

/// Coarse architecture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchitectureKind {
    Monolith,
    Microservices,
    Monorepo,
    Library,
    Unknown,
}

/// Structural style of the source layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureStyle {
    Mvc,
    Clean,
    FeatureBased,
    Layered,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureGuess {
    pub kind: ArchitectureKind,
    pub structure: StructureStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend_framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl Default for ArchitectureGuess {
    fn default() -> Self {
        Self {
            kind: ArchitectureKind::Unknown,
            structure: StructureStyle::Unknown,
            frontend_framework: None,
            backend_framework: None,
            database: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Naming,
    Structure,
    StateManagement,
}

/// One detected idiom occurrence, produced by a pattern heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub name: String,
    pub description: String,
    pub frequency: usize,
    /// At most three example identifiers.
    pub examples: Vec<String>,
    pub category: PatternCategory,
}

/// An internal dependency edge: source file → raw import specifier.
///
/// Specifiers are never resolved against the filesystem; `to` may name a
/// directory, an extensionless module, or nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyReport {
    pub internal: Vec<DependencyEdge>,
    /// Package name → version requirement, verbatim from the manifest.
    pub external: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOrganization {
    FeatureBased,
    TypeBased,
    Flat,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indentation {
    Tabs,
    TwoSpaces,
    FourSpaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeStyleGuess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indentation: Option<Indentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<QuoteStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolons: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_commas: Option<bool>,
}

/// Naming and formatting conventions observed across the whole fact set.
///
/// Naming guesses are all-or-nothing: a single counter-example suppresses the
/// convention entirely rather than reporting a "mostly" percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConventionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_naming: Option<NamingStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_naming: Option<NamingStyle>,
    pub file_organization: FileOrganization,
    pub code_style: CodeStyleGuess,
}

impl Default for ConventionReport {
    fn default() -> Self {
        Self {
            type_naming: None,
            function_naming: None,
            file_organization: FileOrganization::Unknown,
            code_style: CodeStyleGuess::default(),
        }
    }
}
