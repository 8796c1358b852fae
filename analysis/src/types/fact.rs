use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Structural facts extracted from a single file.
///
/// A `FileFact` is derived from one file's contents alone; extraction never
/// consults other files, which keeps the fan-out order-independent. Facts are
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileFact {
    /// Absolute path of the file.
    pub path: String,
    /// Path relative to the scan root, `/`-separated. Unique key within a scan.
    pub relative_path: String,
    pub size_bytes: u64,
    /// Number of newline-split segments (an empty file has one).
    pub line_count: usize,
    pub language: Language,
    /// Import specifiers mapped to their occurrence count.
    ///
    /// The key set is the deduplicated import set; the counts feed the
    /// dependency-edge occurrence counters during aggregation.
    pub imports: BTreeMap<String, u32>,
    /// Exported identifier names, best-effort.
    pub exports: BTreeSet<String>,
    /// Class / interface / type-alias / struct names.
    pub declared_types: BTreeSet<String>,
    /// Function, arrow-function and `def`/`fn`/`func` names.
    pub declared_functions: BTreeSet<String>,
    /// Textual decision-point count with a base of 1. Never 0.
    pub cyclomatic_complexity: u32,
    /// Formatting counters feeding the project-level code-style guess.
    pub style: StyleSample,
}

/// Formatting counters sampled while a file is being extracted.
///
/// Aggregation is a pure function of the fact set, so anything the code-style
/// guess needs has to be captured here rather than re-read from disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSample {
    pub tab_indent_lines: u32,
    pub two_space_indent_lines: u32,
    pub four_space_indent_lines: u32,
    pub single_quote_count: u32,
    pub double_quote_count: u32,
    pub semicolon_lines: u32,
    pub trailing_comma_lines: u32,
    /// Non-blank lines in the file.
    pub source_lines: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fact() -> FileFact {
        FileFact {
            path: "/tmp/proj/src/a.ts".to_string(),
            relative_path: "src/a.ts".to_string(),
            size_bytes: 42,
            line_count: 3,
            language: Language::Typescript,
            imports: BTreeMap::from([("react".to_string(), 1)]),
            exports: BTreeSet::from(["useFoo".to_string()]),
            declared_types: BTreeSet::new(),
            declared_functions: BTreeSet::from(["useFoo".to_string()]),
            cyclomatic_complexity: 1,
            style: StyleSample::default(),
        }
    }

    #[test]
    fn test_fact_clone_equals_original() {
        let fact = sample_fact();
        assert_eq!(fact.clone(), fact);
    }

    #[test]
    fn test_fact_serde_round_trip() {
        let fact = sample_fact();
        let json = serde_json::to_string(&fact).expect("serialization should succeed");
        let back: FileFact = serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, fact);
    }

    #[test]
    fn test_style_sample_default_is_zeroed() {
        let style = StyleSample::default();
        assert_eq!(style.tab_indent_lines, 0);
        assert_eq!(style.source_lines, 0);
    }
}
