//! Aggregation of the completed fact set into a `ProjectSnapshot`.
//!
//! This stage is a pure function of the facts plus the manifest already
//! read during the scan; it performs no I/O and never fails, degrading to
//! empty or `unknown` fields when the inputs are sparse. Everything here
//! commutes over the fact collection (sums, set unions, first-match
//! tables), so the snapshot does not depend on discovery order.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::classify::{
    self, BACKEND_RULES, ClassificationEvidence, DATABASE_RULES, FRAMEWORK_RULES, FRONTEND_RULES,
    TEST_FRAMEWORK_RULES,
};
use crate::conventions;
use crate::heuristics::registry::HeuristicRegistry;
use crate::manifest::ProjectManifest;
use crate::types::fact::FileFact;
use crate::types::snapshot::{
    ArchitectureGuess, ConventionReport, DependencyEdge, DependencyReport, ProjectSnapshot,
    ProjectSummary,
};

/// Build the snapshot. `facts` must be the complete extraction result,
/// sorted by relative path.
pub async fn build_snapshot(
    facts: &[Arc<FileFact>],
    manifest: Option<&ProjectManifest>,
    heuristics: &HeuristicRegistry,
) -> ProjectSnapshot {
    let relative_paths: Vec<String> = facts.iter().map(|f| f.relative_path.clone()).collect();
    let evidence = ClassificationEvidence {
        relative_paths: &relative_paths,
        has_manifest: manifest.is_some(),
    };

    let import_set: BTreeSet<&str> = facts
        .iter()
        .flat_map(|f| f.imports.keys().map(String::as_str))
        .collect();

    let mut patterns = Vec::new();
    for heuristic in heuristics.all() {
        if let Some(pattern) = heuristic.evaluate(facts).await {
            patterns.push(pattern);
        }
    }

    ProjectSnapshot {
        summary: build_summary(facts, &import_set),
        architecture: build_architecture(&evidence, &import_set),
        patterns,
        dependencies: build_dependencies(facts, manifest),
        conventions: build_conventions(facts, &evidence),
    }
}

fn build_summary(facts: &[Arc<FileFact>], imports: &BTreeSet<&str>) -> ProjectSummary {
    let mut lines_by_language = BTreeMap::new();
    let mut total_lines = 0;
    for fact in facts {
        total_lines += fact.line_count;
        *lines_by_language.entry(fact.language).or_insert(0) += fact.line_count;
    }

    let file_names: BTreeSet<String> = facts
        .iter()
        .map(|f| {
            f.relative_path
                .rsplit('/')
                .next()
                .unwrap_or(&f.relative_path)
                .to_string()
        })
        .collect();

    ProjectSummary {
        total_files: facts.len(),
        total_lines,
        lines_by_language,
        frameworks: classify::detect_all(&FRAMEWORK_RULES, imports.iter().copied()),
        package_managers: classify::detect_package_managers(&file_names),
        test_frameworks: classify::detect_all(&TEST_FRAMEWORK_RULES, imports.iter().copied()),
    }
}

fn build_architecture(
    evidence: &ClassificationEvidence,
    imports: &BTreeSet<&str>,
) -> ArchitectureGuess {
    ArchitectureGuess {
        kind: classify::classify_architecture(evidence),
        structure: classify::classify_structure(evidence),
        frontend_framework: classify::detect_first(&FRONTEND_RULES, imports.iter().copied()),
        backend_framework: classify::detect_first(&BACKEND_RULES, imports.iter().copied()),
        database: classify::detect_first(&DATABASE_RULES, imports.iter().copied()),
    }
}

fn build_dependencies(
    facts: &[Arc<FileFact>],
    manifest: Option<&ProjectManifest>,
) -> DependencyReport {
    let mut internal = Vec::new();
    for fact in facts {
        for (specifier, count) in &fact.imports {
            // Relative-path heuristic for "internal"; never resolved.
            if specifier.starts_with('.') || specifier.starts_with('/') {
                internal.push(DependencyEdge {
                    from: fact.relative_path.clone(),
                    to: specifier.clone(),
                    count: *count,
                });
            }
        }
    }

    DependencyReport {
        internal,
        external: manifest
            .map(ProjectManifest::external_dependencies)
            .unwrap_or_default(),
    }
}

fn build_conventions(
    facts: &[Arc<FileFact>],
    evidence: &ClassificationEvidence,
) -> ConventionReport {
    let type_names: BTreeSet<&str> = facts
        .iter()
        .flat_map(|f| f.declared_types.iter().map(String::as_str))
        .collect();
    let function_names: BTreeSet<&str> = facts
        .iter()
        .flat_map(|f| f.declared_functions.iter().map(String::as_str))
        .collect();

    ConventionReport {
        type_naming: conventions::detect_naming_style(type_names),
        function_naming: conventions::detect_naming_style(function_names),
        file_organization: classify::classify_organization(evidence),
        code_style: conventions::detect_code_style(facts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::extract::fact_from_content;
    use crate::language::Language;
    use crate::types::snapshot::{ArchitectureKind, NamingStyle};

    fn fact(path: &str, content: &str) -> Arc<FileFact> {
        Arc::new(fact_from_content(
            Path::new("/proj"),
            &Path::new("/proj").join(path),
            content,
        ))
    }

    fn sorted(mut facts: Vec<Arc<FileFact>>) -> Vec<Arc<FileFact>> {
        facts.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        facts
    }

    #[tokio::test]
    async fn test_empty_fact_set_degrades_to_defaults() {
        let registry = HeuristicRegistry::with_builtin_heuristics();
        let snapshot = build_snapshot(&[], None, &registry).await;

        assert_eq!(snapshot.summary.total_files, 0);
        assert_eq!(snapshot.summary.total_lines, 0);
        assert_eq!(snapshot.architecture.kind, ArchitectureKind::Unknown);
        assert!(snapshot.patterns.is_empty());
        assert!(snapshot.dependencies.internal.is_empty());
        assert!(snapshot.dependencies.external.is_empty());
    }

    #[tokio::test]
    async fn test_line_count_additivity() {
        let facts = sorted(vec![
            fact("src/a.ts", "1\n2\n3"),
            fact("src/b.py", "1\n2"),
            fact("notes.txt", "1"),
        ]);
        let registry = HeuristicRegistry::new();
        let snapshot = build_snapshot(&facts, None, &registry).await;

        assert_eq!(snapshot.summary.total_files, 3);
        assert_eq!(snapshot.summary.total_lines, 6);
        let by_language: usize = snapshot.summary.lines_by_language.values().sum();
        assert_eq!(by_language, snapshot.summary.total_lines);
        assert_eq!(
            snapshot.summary.lines_by_language[&Language::Typescript],
            3
        );
        assert_eq!(snapshot.summary.lines_by_language[&Language::Python], 2);
        assert_eq!(snapshot.summary.lines_by_language[&Language::Unknown], 1);
    }

    #[tokio::test]
    async fn test_framework_detection_from_imports() {
        let facts = sorted(vec![
            fact("src/a.tsx", "import React from 'react';"),
            fact("src/server.ts", "import express from 'express';"),
            fact("src/a.test.ts", "import { it } from 'vitest';"),
        ]);
        let registry = HeuristicRegistry::new();
        let snapshot = build_snapshot(&facts, None, &registry).await;

        assert!(snapshot.summary.frameworks.contains(&"React".to_string()));
        assert!(snapshot.summary.frameworks.contains(&"Express".to_string()));
        assert_eq!(snapshot.summary.test_frameworks, vec!["Vitest".to_string()]);
        assert_eq!(
            snapshot.architecture.frontend_framework.as_deref(),
            Some("React")
        );
        assert_eq!(
            snapshot.architecture.backend_framework.as_deref(),
            Some("Express")
        );
    }

    #[tokio::test]
    async fn test_package_manager_detection_by_filename() {
        let facts = sorted(vec![fact("yarn.lock", ""), fact("index.js", "")]);
        let registry = HeuristicRegistry::new();
        let snapshot = build_snapshot(&facts, None, &registry).await;

        assert_eq!(snapshot.summary.package_managers, vec!["yarn".to_string()]);
    }

    #[tokio::test]
    async fn test_internal_edges_are_counted_not_resolved() {
        let facts = sorted(vec![fact(
            "src/a.ts",
            "import { a } from './utils';\nimport { b } from './utils';\nimport x from 'lodash';",
        )]);
        let registry = HeuristicRegistry::new();
        let snapshot = build_snapshot(&facts, None, &registry).await;

        assert_eq!(
            snapshot.dependencies.internal,
            vec![DependencyEdge {
                from: "src/a.ts".to_string(),
                to: "./utils".to_string(),
                count: 2,
            }]
        );
    }

    #[tokio::test]
    async fn test_external_dependencies_come_from_manifest() {
        let manifest = ProjectManifest {
            name: Some("demo".to_string()),
            dependencies: BTreeMap::from([("react".to_string(), "^18.0.0".to_string())]),
            dev_dependencies: BTreeMap::from([("jest".to_string(), "^29.0.0".to_string())]),
        };
        let registry = HeuristicRegistry::new();
        let snapshot = build_snapshot(&[], Some(&manifest), &registry).await;

        assert_eq!(snapshot.dependencies.external["react"], "^18.0.0");
        assert_eq!(snapshot.dependencies.external["jest"], "^29.0.0");
    }

    #[tokio::test]
    async fn test_hook_pattern_scenario() {
        let facts = sorted(vec![
            fact("a.ts", "import React from 'react';\nfunction useFoo() {}"),
            fact("b.ts", "import React from 'react';\nfunction useBar() {}"),
        ]);
        let registry = HeuristicRegistry::with_builtin_heuristics();
        let snapshot = build_snapshot(&facts, None, &registry).await;

        assert!(snapshot.summary.frameworks.contains(&"React".to_string()));
        assert_eq!(snapshot.patterns.len(), 1);
        let pattern = &snapshot.patterns[0];
        assert_eq!(pattern.frequency, 2);
        let examples: BTreeSet<_> = pattern.examples.iter().cloned().collect();
        assert_eq!(
            examples,
            BTreeSet::from(["useFoo".to_string(), "useBar".to_string()])
        );
    }

    #[tokio::test]
    async fn test_naming_conventions_all_or_nothing() {
        let mixed = sorted(vec![fact("a.ts", "class Foo {}\nclass bar {}")]);
        let registry = HeuristicRegistry::new();
        let snapshot = build_snapshot(&mixed, None, &registry).await;
        assert_eq!(snapshot.conventions.type_naming, None);

        let uniform = sorted(vec![fact("a.ts", "class Foo {}\nclass Bar {}")]);
        let snapshot = build_snapshot(&uniform, None, &registry).await;
        assert_eq!(
            snapshot.conventions.type_naming,
            Some(NamingStyle::PascalCase)
        );
    }

    #[tokio::test]
    async fn test_aggregation_is_order_independent() {
        let a = fact("src/a.ts", "import React from 'react';\nfunction useFoo() {}");
        let b = fact("src/b.ts", "import './a';");
        let manifest = ProjectManifest::default();
        let registry = HeuristicRegistry::with_builtin_heuristics();

        let forward =
            build_snapshot(&sorted(vec![a.clone(), b.clone()]), Some(&manifest), &registry).await;
        let reverse =
            build_snapshot(&sorted(vec![b, a]), Some(&manifest), &registry).await;

        assert_eq!(forward, reverse);
    }
}
