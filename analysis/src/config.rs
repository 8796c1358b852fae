use serde::{Deserialize, Serialize};

/// Analyzer configuration, passed explicitly to the entry point.
///
/// There is no process-wide default singleton; the analyzer is a pure function
/// of (root, ignore rules, manifest) plus this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Upper bound on concurrently open file reads during extraction.
    pub max_parallel_files: usize,
    /// Extra ignore patterns applied on top of the built-in set and the
    /// root ignore file. Gitignore-style globs; malformed entries are
    /// skipped, not fatal.
    #[serde(default)]
    pub extra_ignore_patterns: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_parallel_files: 16,
            extra_ignore_patterns: Vec::new(),
        }
    }
}
