//! Heuristic: hook-style function naming.
//!
//! Fires when a file that imports a known framework also declares functions
//! named `useXxx`. Frequency is the number of such functions across the
//! whole fact set; up to three names are kept as examples.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::classify::is_framework_import;
use crate::heuristics::PatternHeuristic;
use crate::types::fact::FileFact;
use crate::types::snapshot::{DetectedPattern, PatternCategory};

const MAX_EXAMPLES: usize = 3;

#[derive(Debug)]
pub struct HookNamingHeuristic;

fn is_hook_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

#[async_trait]
impl PatternHeuristic for HookNamingHeuristic {
    fn id(&self) -> &'static str {
        "naming.hook_style_functions"
    }

    fn name(&self) -> &'static str {
        "Hook-style functions"
    }

    async fn evaluate(&self, facts: &[Arc<FileFact>]) -> Option<DetectedPattern> {
        let mut frequency = 0;
        let mut examples = BTreeSet::new();

        for fact in facts {
            if !fact.imports.keys().any(|s| is_framework_import(s)) {
                continue;
            }
            for function in &fact.declared_functions {
                if is_hook_name(function) {
                    frequency += 1;
                    examples.insert(function.clone());
                }
            }
        }

        if frequency == 0 {
            return None;
        }

        Some(DetectedPattern {
            name: self.name().to_string(),
            description: "Functions named use* alongside framework imports".to_string(),
            frequency,
            examples: examples.into_iter().take(MAX_EXAMPLES).collect(),
            category: PatternCategory::Naming,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::extract::fact_from_content;

    fn fact(path: &str, content: &str) -> Arc<FileFact> {
        Arc::new(fact_from_content(
            Path::new("/proj"),
            &Path::new("/proj").join(path),
            content,
        ))
    }

    #[test]
    fn test_is_hook_name() {
        assert!(is_hook_name("useFoo"));
        assert!(is_hook_name("useState"));
        assert!(!is_hook_name("use"));
        assert!(!is_hook_name("user"));
        assert!(!is_hook_name("render"));
    }

    #[tokio::test]
    async fn test_hooks_across_files_are_summed() {
        let facts = vec![
            fact("a.ts", "import React from 'react';\nfunction useFoo() {}"),
            fact("b.ts", "import React from 'react';\nfunction useBar() {}"),
        ];

        let pattern = HookNamingHeuristic.evaluate(&facts).await.unwrap();
        assert_eq!(pattern.frequency, 2);
        let examples: BTreeSet<_> = pattern.examples.iter().cloned().collect();
        assert_eq!(
            examples,
            BTreeSet::from(["useFoo".to_string(), "useBar".to_string()])
        );
        assert_eq!(pattern.category, PatternCategory::Naming);
    }

    #[tokio::test]
    async fn test_no_framework_import_no_pattern() {
        let facts = vec![fact("a.ts", "function useFoo() {}")];
        assert!(HookNamingHeuristic.evaluate(&facts).await.is_none());
    }

    #[tokio::test]
    async fn test_examples_are_capped_at_three() {
        let facts = vec![fact(
            "a.ts",
            "import React from 'react';\n\
             function useA() {}\nfunction useB() {}\n\
             function useC() {}\nfunction useD() {}",
        )];

        let pattern = HookNamingHeuristic.evaluate(&facts).await.unwrap();
        assert_eq!(pattern.frequency, 4);
        assert_eq!(pattern.examples.len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_hook_names_count_per_declaration_site() {
        let facts = vec![
            fact("a.ts", "import React from 'react';\nfunction useFoo() {}"),
            fact("b.ts", "import React from 'react';\nfunction useFoo() {}"),
        ];

        let pattern = HookNamingHeuristic.evaluate(&facts).await.unwrap();
        assert_eq!(pattern.frequency, 2);
        assert_eq!(pattern.examples, vec!["useFoo".to_string()]);
    }
}
