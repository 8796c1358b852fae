//! Scan report envelope.
//!
//! Wraps one immutable `ProjectSnapshot` with an opaque project identifier
//! and creation timestamp so cached snapshots can be keyed by downstream
//! consumers. The snapshot itself stays timestamp-free and deterministic.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strata_analysis::ProjectSnapshot;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Opaque identifier for this scan.
    pub project_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Root directory that was scanned.
    pub root: String,
    pub snapshot: ProjectSnapshot,
}

impl ScanReport {
    pub fn new(root: impl Into<String>, snapshot: ProjectSnapshot) -> Self {
        Self {
            project_id: Uuid::new_v4(),
            created_at: Utc::now(),
            root: root.into(),
            snapshot,
        }
    }
}
