use std::sync::Arc;

use crate::heuristics::PatternHeuristic;
use crate::heuristics::hooks::HookNamingHeuristic;

/// Holds the pattern heuristics evaluated during aggregation.
#[derive(Debug, Default)]
pub struct HeuristicRegistry {
    heuristics: Vec<Arc<dyn PatternHeuristic>>,
}

impl HeuristicRegistry {
    /// Empty registry, for callers that register heuristics manually.
    pub fn new() -> Self {
        Self {
            heuristics: Vec::new(),
        }
    }

    pub fn register(&mut self, heuristic: Arc<dyn PatternHeuristic>) {
        self.heuristics.push(heuristic);
    }

    /// All registered heuristics, in registration order.
    pub fn all(&self) -> &[Arc<dyn PatternHeuristic>] {
        &self.heuristics
    }

    /// Registry pre-loaded with the built-in heuristics.
    pub fn with_builtin_heuristics() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HookNamingHeuristic));
        registry
    }
}
