//! # Scan Command
//!
//! Runs the analyzer once over a project root and serves the requested
//! view off the cached snapshot. The snapshot is computed exactly once per
//! invocation; every view is a read over the same immutable result.
//!
//! ## Usage
//!
//! ```bash
//! strata scan                       # full snapshot of the current directory
//! strata scan path/to/project
//! strata scan --view architecture   # one view only
//! strata scan --output json         # machine-readable report envelope
//! ```

use std::path::PathBuf;

use clap::ValueEnum;
use colored::Colorize;
use strata_analysis::{
    Analyzer, ArchitectureKind, FileOrganization, Indentation, NamingStyle, ProjectSnapshot,
    QuoteStyle, StructureStyle,
};

use crate::errors::display_scan_error;
use crate::exit_codes::{EXIT_SCAN_ERROR, EXIT_SUCCESS};
use crate::report::ScanReport;

/// Output format options for the scan command
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header and one summary line
    Basic,
    /// All requested views with details (default)
    Full,
    /// JSON report envelope
    Json,
}

/// Snapshot views servable from one cached scan
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SnapshotView {
    All,
    Summary,
    Architecture,
    Patterns,
    Dependencies,
    Conventions,
}

impl SnapshotView {
    fn includes(&self, other: SnapshotView) -> bool {
        *self == SnapshotView::All || *self == other
    }
}

/// Arguments for the scan command
pub struct ScanArgs {
    /// Project root (defaults to the current directory)
    pub path: Option<PathBuf>,
    pub view: SnapshotView,
    pub output: OutputFormat,
}

/// Execute the scan command
///
/// # Returns
///
/// * `EXIT_SUCCESS` - Scan completed and the view was printed
/// * `EXIT_SCAN_ERROR` - Root path was not a readable directory
pub async fn execute(args: ScanArgs) -> i32 {
    let root = args.path.unwrap_or_else(|| PathBuf::from("."));

    let analyzer = Analyzer::with_default_config();
    let snapshot = match analyzer.analyze(&root).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            display_scan_error(&e);
            return EXIT_SCAN_ERROR;
        }
    };

    let report = ScanReport::new(root.display().to_string(), snapshot);

    match args.output {
        OutputFormat::Json => {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("{} Failed to serialize report: {}", "✗".red().bold(), e);
                    return EXIT_SCAN_ERROR;
                }
            }
        }
        OutputFormat::Basic => render_basic(&report),
        OutputFormat::Full => render_full(&report, args.view),
    }

    EXIT_SUCCESS
}

fn render_basic(report: &ScanReport) {
    render_header(report);
    let summary = &report.snapshot.summary;
    println!(
        "  {} files, {} lines, {} frameworks detected",
        summary.total_files,
        summary.total_lines,
        summary.frameworks.len()
    );
}

fn render_full(report: &ScanReport, view: SnapshotView) {
    render_header(report);
    let snapshot = &report.snapshot;

    if view.includes(SnapshotView::Summary) {
        render_summary(snapshot);
    }
    if view.includes(SnapshotView::Architecture) {
        render_architecture(snapshot);
    }
    if view.includes(SnapshotView::Patterns) {
        render_patterns(snapshot);
    }
    if view.includes(SnapshotView::Dependencies) {
        render_dependencies(snapshot);
    }
    if view.includes(SnapshotView::Conventions) {
        render_conventions(snapshot);
    }
}

fn render_header(report: &ScanReport) {
    println!(
        "{} Scanned {} ({})",
        "→".cyan().bold(),
        report.root.bright_blue(),
        report.project_id
    );
}

fn render_summary(snapshot: &ProjectSnapshot) {
    let summary = &snapshot.summary;
    println!();
    println!("{}", "Summary".bold());
    println!("  {}: {}", "Files".dimmed(), summary.total_files);
    println!("  {}: {}", "Lines".dimmed(), summary.total_lines);

    for (language, lines) in &summary.lines_by_language {
        println!("  {}: {}", language.name().dimmed(), lines);
    }
    if !summary.frameworks.is_empty() {
        println!(
            "  {}: {}",
            "Frameworks".dimmed(),
            summary.frameworks.join(", ").cyan()
        );
    }
    if !summary.test_frameworks.is_empty() {
        println!(
            "  {}: {}",
            "Test frameworks".dimmed(),
            summary.test_frameworks.join(", ").cyan()
        );
    }
    if !summary.package_managers.is_empty() {
        println!(
            "  {}: {}",
            "Package managers".dimmed(),
            summary.package_managers.join(", ").cyan()
        );
    }
}

fn render_architecture(snapshot: &ProjectSnapshot) {
    let architecture = &snapshot.architecture;
    println!();
    println!("{}", "Architecture".bold());
    println!("  {}: {}", "Kind".dimmed(), kind_label(architecture.kind));
    println!(
        "  {}: {}",
        "Structure".dimmed(),
        structure_label(architecture.structure)
    );
    if let Some(ref frontend) = architecture.frontend_framework {
        println!("  {}: {}", "Frontend".dimmed(), frontend.cyan());
    }
    if let Some(ref backend) = architecture.backend_framework {
        println!("  {}: {}", "Backend".dimmed(), backend.cyan());
    }
    if let Some(ref database) = architecture.database {
        println!("  {}: {}", "Database".dimmed(), database.cyan());
    }
}

fn render_patterns(snapshot: &ProjectSnapshot) {
    println!();
    println!("{}", "Patterns".bold());
    if snapshot.patterns.is_empty() {
        println!("  {}", "none detected".dimmed());
        return;
    }
    for pattern in &snapshot.patterns {
        println!(
            "  {} {} (×{})",
            "→".cyan(),
            pattern.name,
            pattern.frequency
        );
        println!("    {}", pattern.description.dimmed());
        if !pattern.examples.is_empty() {
            println!("    e.g. {}", pattern.examples.join(", ").cyan());
        }
    }
}

fn render_dependencies(snapshot: &ProjectSnapshot) {
    let dependencies = &snapshot.dependencies;
    println!();
    println!("{}", "Dependencies".bold());
    println!(
        "  {}: {}",
        "External packages".dimmed(),
        dependencies.external.len()
    );
    println!(
        "  {}: {}",
        "Internal edges".dimmed(),
        dependencies.internal.len()
    );
    for edge in &dependencies.internal {
        println!(
            "  {} {} {} {} (×{})",
            "→".dimmed(),
            edge.from,
            "→".dimmed(),
            edge.to,
            edge.count
        );
    }
}

fn render_conventions(snapshot: &ProjectSnapshot) {
    let conventions = &snapshot.conventions;
    println!();
    println!("{}", "Conventions".bold());
    if let Some(style) = conventions.type_naming {
        println!("  {}: {}", "Type naming".dimmed(), naming_label(style));
    }
    if let Some(style) = conventions.function_naming {
        println!("  {}: {}", "Function naming".dimmed(), naming_label(style));
    }
    println!(
        "  {}: {}",
        "File organization".dimmed(),
        organization_label(conventions.file_organization)
    );
    let code_style = &conventions.code_style;
    if let Some(indentation) = code_style.indentation {
        println!(
            "  {}: {}",
            "Indentation".dimmed(),
            indentation_label(indentation)
        );
    }
    if let Some(quotes) = code_style.quotes {
        println!(
            "  {}: {}",
            "Quotes".dimmed(),
            match quotes {
                QuoteStyle::Single => "single",
                QuoteStyle::Double => "double",
            }
        );
    }
    if let Some(semicolons) = code_style.semicolons {
        println!(
            "  {}: {}",
            "Semicolons".dimmed(),
            if semicolons { "yes" } else { "no" }
        );
    }
}

fn kind_label(kind: ArchitectureKind) -> &'static str {
    match kind {
        ArchitectureKind::Monolith => "monolith",
        ArchitectureKind::Microservices => "microservices",
        ArchitectureKind::Monorepo => "monorepo",
        ArchitectureKind::Library => "library",
        ArchitectureKind::Unknown => "unknown",
    }
}

fn structure_label(structure: StructureStyle) -> &'static str {
    match structure {
        StructureStyle::Mvc => "mvc",
        StructureStyle::Clean => "clean",
        StructureStyle::FeatureBased => "feature-based",
        StructureStyle::Layered => "layered",
        StructureStyle::Unknown => "unknown",
    }
}

fn naming_label(style: NamingStyle) -> &'static str {
    match style {
        NamingStyle::PascalCase => "PascalCase",
        NamingStyle::CamelCase => "camelCase",
        NamingStyle::SnakeCase => "snake_case",
        NamingStyle::ScreamingSnakeCase => "SCREAMING_SNAKE_CASE",
    }
}

fn organization_label(organization: FileOrganization) -> &'static str {
    match organization {
        FileOrganization::FeatureBased => "feature-based",
        FileOrganization::TypeBased => "type-based",
        FileOrganization::Flat => "flat",
        FileOrganization::Unknown => "unknown",
    }
}

fn indentation_label(indentation: Indentation) -> &'static str {
    match indentation {
        Indentation::Tabs => "tabs",
        Indentation::TwoSpaces => "2 spaces",
        Indentation::FourSpaces => "4 spaces",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_view_includes() {
        assert!(SnapshotView::All.includes(SnapshotView::Summary));
        assert!(SnapshotView::Summary.includes(SnapshotView::Summary));
        assert!(!SnapshotView::Summary.includes(SnapshotView::Patterns));
    }

    #[test]
    fn test_labels_cover_unknowns() {
        assert_eq!(kind_label(ArchitectureKind::Unknown), "unknown");
        assert_eq!(structure_label(StructureStyle::Unknown), "unknown");
        assert_eq!(organization_label(FileOrganization::Unknown), "unknown");
    }

    #[tokio::test]
    async fn test_execute_scan_success() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.js"), "let x = 1;\n").unwrap();

        let code = execute(ScanArgs {
            path: Some(temp.path().to_path_buf()),
            view: SnapshotView::All,
            output: OutputFormat::Basic,
        })
        .await;

        assert_eq!(code, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn test_execute_scan_missing_root() {
        let temp = TempDir::new().unwrap();

        let code = execute(ScanArgs {
            path: Some(temp.path().join("missing")),
            view: SnapshotView::All,
            output: OutputFormat::Full,
        })
        .await;

        assert_eq!(code, EXIT_SCAN_ERROR);
    }

    #[tokio::test]
    async fn test_execute_scan_json_output() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.js"), "").unwrap();

        let code = execute(ScanArgs {
            path: Some(temp.path().to_path_buf()),
            view: SnapshotView::All,
            output: OutputFormat::Json,
        })
        .await;

        assert_eq!(code, EXIT_SUCCESS);
    }
}
