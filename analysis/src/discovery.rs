//! File discovery and ignore filtering.
//!
//! Walks the scan root and yields every file not excluded by the combined
//! ignore rule set: a `.gitignore` at the root (optional), the built-in
//! exclusions below, and any extra patterns from the configuration. The
//! rule set is fully constructed before the first inclusion test runs and
//! is read-only afterwards.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;

/// Directories excluded unconditionally, at any depth.
pub const BUILTIN_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    ".next",
    ".nuxt",
    ".cache",
    "__pycache__",
    "target",
    "out",
];

/// File globs excluded unconditionally (minified/bundled artifacts).
pub const BUILTIN_IGNORE_GLOBS: &[&str] = &["*.min.js", "*.min.css", "*.map", "*.bundle.js"];

/// Produce the set of candidate file paths under `root`, sorted.
///
/// An unreadable or non-directory root is the one fatal failure of a scan.
/// A malformed ignore pattern is skipped with a warning; the remaining rules
/// still apply. Unreadable entries inside the tree are skipped.
pub fn discover_files(root: &Path, config: &AnalyzerConfig) -> Result<Vec<PathBuf>, AnalyzerError> {
    let metadata = std::fs::metadata(root).map_err(|source| AnalyzerError::RootUnreadable {
        path: root.display().to_string(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(AnalyzerError::RootUnreadable {
            path: root.display().to_string(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let overrides = build_ignore_overrides(root, config)?;

    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .git_ignore(true)
        .require_git(false)
        .overrides(overrides)
        .follow_links(false)
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Build the override set: built-in directory and glob exclusions plus any
/// configured extras. In override position a `!`-prefixed glob excludes.
fn build_ignore_overrides(
    root: &Path,
    config: &AnalyzerConfig,
) -> Result<ignore::overrides::Override, AnalyzerError> {
    let mut builder = OverrideBuilder::new(root);

    for dir in BUILTIN_IGNORE_DIRS {
        add_ignore_pattern(&mut builder, dir);
    }
    for glob in BUILTIN_IGNORE_GLOBS {
        add_ignore_pattern(&mut builder, glob);
    }
    for pattern in &config.extra_ignore_patterns {
        add_ignore_pattern(&mut builder, pattern);
    }

    builder
        .build()
        .map_err(|e| AnalyzerError::Internal(anyhow!("failed to build ignore rules: {e}")))
}

fn add_ignore_pattern(builder: &mut OverrideBuilder, pattern: &str) {
    if let Err(e) = builder.add(&format!("!{pattern}")) {
        log::warn!("skipping malformed ignore pattern {pattern:?}: {e}");
    }
}
