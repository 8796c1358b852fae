pub mod hooks;
pub mod registry;

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::types::fact::FileFact;
use crate::types::snapshot::DetectedPattern;

/// A single idiom detector run during aggregation.
///
/// Heuristics are pure: they inspect the completed fact set and emit at most
/// one pattern record (name, description, frequency, up to three examples,
/// category). New detectors follow this shape without touching the
/// aggregation contract.
#[async_trait]
pub trait PatternHeuristic: Send + Sync + Debug {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// Evaluate the heuristic against the complete fact set.
    ///
    /// Returns `None` when the idiom does not occur.
    async fn evaluate(&self, facts: &[Arc<FileFact>]) -> Option<DetectedPattern>;
}
