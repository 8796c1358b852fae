use std::path::Path;

use arc_swap::ArcSwap;

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::heuristics::registry::HeuristicRegistry;
use crate::session::InternalScanState;
use crate::types::snapshot::ProjectSnapshot;

/// The strata analysis engine.
///
/// Thread-safe and designed for concurrent use. Configuration and pattern
/// heuristics can be hot-swapped via `ArcSwap`.
///
/// # Usage
///
/// ```rust,ignore
/// use strata_analysis::Analyzer;
///
/// let analyzer = Analyzer::with_default_config();
/// let snapshot = analyzer.analyze("path/to/project").await?;
/// ```
///
/// The engine is stateless between calls; all scan state lives inside the
/// call. A snapshot is produced once per `analyze()` invocation and replaced
/// wholesale by the next one — there is no incremental update.
pub struct Analyzer {
    pub config: ArcSwap<AnalyzerConfig>,
    pub heuristics: ArcSwap<HeuristicRegistry>,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration and heuristics.
    pub fn new(config: AnalyzerConfig, heuristics: HeuristicRegistry) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            heuristics: ArcSwap::from_pointee(heuristics),
        }
    }

    /// Convenience constructor with default configuration and built-in
    /// heuristics.
    pub fn with_default_config() -> Self {
        Self::new(
            AnalyzerConfig::default(),
            HeuristicRegistry::with_builtin_heuristics(),
        )
    }

    /// Main entry point: scan `root` and return one immutable snapshot.
    ///
    /// Fails only when `root` is not a readable directory. Per-file read
    /// failures, a broken manifest, or malformed ignore lines degrade the
    /// snapshot instead of failing the scan.
    pub async fn analyze(&self, root: impl AsRef<Path>) -> Result<ProjectSnapshot, AnalyzerError> {
        let config = self.config.load_full();
        let heuristics = self.heuristics.load_full();
        let mut state = InternalScanState::new(root.as_ref().to_path_buf(), config, heuristics);
        state.run().await
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_default_config()
    }
}
