use thiserror::Error;

/// Top-level error type exposed by the analyzer.
///
/// Only a fatal scan-level failure escapes `analyze()`. Everything else is
/// absorbed where it happens and shows up in the snapshot as an omission or a
/// default value.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("root path {path} is not a readable directory: {source}")]
    RootUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// "Catch-all" for unexpected internal failures.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Per-file extraction failures.
///
/// A file that fails this way is skipped and the scan continues; the error is
/// logged, never returned from `analyze()`.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    Encoding { path: String },
}

/// Manifest problems. Present-but-broken is treated identically to absent.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
