use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use scc::HashMap as ConcurrentHashMap;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::aggregate::build_snapshot;
use crate::config::AnalyzerConfig;
use crate::discovery::discover_files;
use crate::error::AnalyzerError;
use crate::extract::extract_file_fact;
use crate::heuristics::registry::HeuristicRegistry;
use crate::manifest::{self, ProjectManifest};
use crate::types::fact::FileFact;
use crate::types::snapshot::ProjectSnapshot;

/// Internal state for a single scan.
///
/// This is a helper struct that manages the pipeline:
/// 1. Discover candidate files (ignore rules applied)
/// 2. Read the optional manifest
/// 3. Extract one fact per file, concurrently
/// 4. Aggregate the fact set into a snapshot
///
/// Extraction failures are per-file and non-fatal; the fact map only ever
/// contains successful extractions. Aggregation does not start until every
/// extraction attempt has resolved.
pub struct InternalScanState {
    root: PathBuf,
    config: Arc<AnalyzerConfig>,
    heuristics: Arc<HeuristicRegistry>,

    /// Facts keyed by relative path, filled concurrently during extraction.
    facts: Arc<ConcurrentHashMap<String, Arc<FileFact>>>,

    manifest: Option<ProjectManifest>,
}

impl InternalScanState {
    pub fn new(
        root: PathBuf,
        config: Arc<AnalyzerConfig>,
        heuristics: Arc<HeuristicRegistry>,
    ) -> Self {
        Self {
            root,
            config,
            heuristics,
            facts: Arc::new(ConcurrentHashMap::new()),
            manifest: None,
        }
    }

    /// Top-level pipeline. The only fatal failure is an unreadable root.
    pub async fn run(&mut self) -> Result<ProjectSnapshot, AnalyzerError> {
        let paths = discover_files(&self.root, &self.config)?;
        log::debug!("discovered {} candidate files", paths.len());

        self.manifest = manifest::read_manifest(&self.root);
        self.extract_all(paths).await?;
        self.aggregate().await
    }

    /// Fan out one extraction task per file, bounded by the configured
    /// parallelism, and join before returning.
    async fn extract_all(&self, paths: Vec<PathBuf>) -> Result<(), AnalyzerError> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_parallel_files.max(1)));
        let mut tasks = JoinSet::new();

        for path in paths {
            let semaphore = Arc::clone(&semaphore);
            let facts = Arc::clone(&self.facts);
            let root = self.root.clone();

            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                match extract_file_fact(&root, &path).await {
                    Ok(fact) => {
                        let key = fact.relative_path.clone();
                        let _ = facts.insert_sync(key, Arc::new(fact));
                    }
                    Err(e) => {
                        log::warn!("skipping file: {e}");
                    }
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                return Err(AnalyzerError::Internal(anyhow!(
                    "extraction task failed: {e}"
                )));
            }
        }

        Ok(())
    }

    /// Snapshot the fact map into a sorted slice and aggregate it.
    async fn aggregate(&self) -> Result<ProjectSnapshot, AnalyzerError> {
        let mut entries: Vec<Arc<FileFact>> = Vec::new();
        self.facts.iter_sync(|_, fact| {
            entries.push(Arc::clone(fact));
            true
        });
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        Ok(build_snapshot(&entries, self.manifest.as_ref(), &self.heuristics).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str, contents: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }

    fn state(root: &Path) -> InternalScanState {
        InternalScanState::new(
            root.to_path_buf(),
            Arc::new(AnalyzerConfig::default()),
            Arc::new(HeuristicRegistry::with_builtin_heuristics()),
        )
    }

    #[tokio::test]
    async fn test_run_on_empty_directory() {
        let temp = TempDir::new().unwrap();
        let snapshot = state(temp.path()).run().await.unwrap();
        assert_eq!(snapshot.summary.total_files, 0);
    }

    #[tokio::test]
    async fn test_run_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = state(&temp.path().join("missing"))
            .run()
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::RootUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_run_collects_facts_for_every_readable_file() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "src/a.ts", "let a = 1;\n");
        create_file(temp.path(), "src/b.ts", "let b = 2;\n");

        let snapshot = state(temp.path()).run().await.unwrap();
        assert_eq!(snapshot.summary.total_files, 2);
    }

    #[tokio::test]
    async fn test_run_skips_binary_files_and_continues() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "src/ok.ts", "let a = 1;\n");
        fs::write(temp.path().join("blob.bin"), [0xff, 0xfe, 0x80]).unwrap();

        let snapshot = state(temp.path()).run().await.unwrap();
        // The binary file is a per-file failure, not a scan failure.
        assert_eq!(snapshot.summary.total_files, 1);
    }

    #[tokio::test]
    async fn test_run_with_parallelism_of_one() {
        let temp = TempDir::new().unwrap();
        for i in 0..8 {
            create_file(temp.path(), &format!("f{i}.js"), "x;\n");
        }

        let mut state = InternalScanState::new(
            temp.path().to_path_buf(),
            Arc::new(AnalyzerConfig {
                max_parallel_files: 1,
                ..AnalyzerConfig::default()
            }),
            Arc::new(HeuristicRegistry::new()),
        );

        let snapshot = state.run().await.unwrap();
        assert_eq!(snapshot.summary.total_files, 8);
    }

    #[tokio::test]
    async fn test_manifest_is_read_during_run() {
        let temp = TempDir::new().unwrap();
        create_file(
            temp.path(),
            "package.json",
            r#"{"dependencies": {"react": "^18.0.0"}}"#,
        );
        create_file(temp.path(), "src/index.ts", "");

        let snapshot = state(temp.path()).run().await.unwrap();
        assert_eq!(snapshot.dependencies.external["react"], "^18.0.0");
    }
}
