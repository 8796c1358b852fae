//! Per-file fact extraction.
//!
//! Extraction is deliberately textual: each kind of fact is produced by a
//! fixed, ordered list of patterns whose capture groups are unioned. The
//! lists are not gated by language, so a file can match patterns from
//! several languages at once, and matches inside strings or comments are
//! counted. That imprecision is the contract, not an oversight; a
//! higher-fidelity extractor would be a second strategy behind the same
//! `FileFact` shape, not a replacement for this one.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::FileError;
use crate::language::Language;
use crate::types::fact::{FileFact, StyleSample};

static IMPORT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // ES `import <bindings> from '<specifier>'`
        r#"import\s+[\w$*{},\s]+?\s+from\s+['"]([^'"]+)['"]"#,
        // ES side-effect `import '<specifier>'`
        r#"import\s+['"]([^'"]+)['"]"#,
        // CommonJS `require('<specifier>')`
        r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#,
        // Python `from <module> import ...`
        r#"(?m)^\s*from\s+([\w.]+)\s+import\b"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("import pattern is valid regex"))
    .collect()
});

static EXPORT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"export\s+(?:default\s+)?(?:async\s+)?function\s+([A-Za-z_$][\w$]*)"#,
        r#"export\s+(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][\w$]*)"#,
        r#"export\s+(?:const|let|var)\s+([A-Za-z_$][\w$]*)"#,
        r#"export\s+(?:interface|type|enum)\s+([A-Za-z_$][\w$]*)"#,
        r#"module\.exports\.([A-Za-z_$][\w$]*)"#,
        r#"pub\s+fn\s+([A-Za-z_]\w*)"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("export pattern is valid regex"))
    .collect()
});

static TYPE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"\bclass\s+([A-Za-z_$][\w$]*)"#,
        r#"\binterface\s+([A-Za-z_$][\w$]*)"#,
        r#"\btype\s+([A-Za-z_$][\w$]*)\s*="#,
        r#"\benum\s+([A-Za-z_$][\w$]*)"#,
        r#"\bstruct\s+([A-Za-z_]\w*)"#,
        r#"\btrait\s+([A-Za-z_]\w*)"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("type pattern is valid regex"))
    .collect()
});

static FUNCTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"\bfunction\s+([A-Za-z_$][\w$]*)"#,
        // Arrow functions bound to a declaration.
        r#"(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?(?:\([^)\n]*\)|[A-Za-z_$][\w$]*)\s*=>"#,
        r#"\bdef\s+([A-Za-z_]\w*)"#,
        r#"\bfn\s+([A-Za-z_]\w*)"#,
        r#"\bfunc\s+([A-Za-z_]\w*)"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("function pattern is valid regex"))
    .collect()
});

/// Decision-point tokens. The complexity score is 1 plus the total number of
/// non-overlapping matches, an intentionally rough stand-in for cyclomatic
/// complexity.
static COMPLEXITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bif\b",
        r"\belse\s+if\b",
        r"\bwhile\b",
        r"\bfor\b",
        r"\bcase\b",
        r"\bcatch\b",
        r"&&",
        r"\|\|",
        r"\?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("complexity pattern is valid regex"))
    .collect()
});

/// Read one file and derive its `FileFact`, or fail that file only.
pub async fn extract_file_fact(root: &Path, path: &Path) -> Result<FileFact, FileError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| FileError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let content = String::from_utf8(bytes).map_err(|_| FileError::Encoding {
        path: path.display().to_string(),
    })?;
    Ok(fact_from_content(root, path, &content))
}

/// Derive a fact from already-read content. Infallible; all the failure
/// modes live in the read.
pub fn fact_from_content(root: &Path, path: &Path, content: &str) -> FileFact {
    let relative_path = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");
    let language = path
        .extension()
        .and_then(|e| e.to_str())
        .map(Language::from_extension)
        .unwrap_or(Language::Unknown);

    FileFact {
        path: path.display().to_string(),
        relative_path,
        size_bytes: content.len() as u64,
        line_count: content.split('\n').count(),
        language,
        imports: collect_counted(&IMPORT_PATTERNS, content),
        exports: collect_names(&EXPORT_PATTERNS, content),
        declared_types: collect_names(&TYPE_PATTERNS, content),
        declared_functions: collect_names(&FUNCTION_PATTERNS, content),
        cyclomatic_complexity: complexity(content),
        style: sample_style(content),
    }
}

/// Union of first-capture-group matches across a pattern list, with
/// per-match occurrence counts.
fn collect_counted(patterns: &[Regex], content: &str) -> BTreeMap<String, u32> {
    let mut counted = BTreeMap::new();
    for pattern in patterns {
        for captures in pattern.captures_iter(content) {
            if let Some(m) = captures.get(1) {
                *counted.entry(m.as_str().to_string()).or_insert(0) += 1;
            }
        }
    }
    counted
}

/// Union of first-capture-group matches across a pattern list, deduplicated.
fn collect_names(patterns: &[Regex], content: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for pattern in patterns {
        for captures in pattern.captures_iter(content) {
            if let Some(m) = captures.get(1) {
                names.insert(m.as_str().to_string());
            }
        }
    }
    names
}

fn complexity(content: &str) -> u32 {
    let mut score: u32 = 1;
    for pattern in COMPLEXITY_PATTERNS.iter() {
        score += pattern.find_iter(content).count() as u32;
    }
    score
}

fn sample_style(content: &str) -> StyleSample {
    let mut style = StyleSample::default();
    let mut previous_ended_with_comma = false;

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            previous_ended_with_comma = false;
            continue;
        }
        style.source_lines += 1;

        if line.starts_with('\t') {
            style.tab_indent_lines += 1;
        } else {
            let leading = line.len() - line.trim_start_matches(' ').len();
            if leading > 0 && leading % 4 == 0 {
                style.four_space_indent_lines += 1;
            } else if leading > 0 && leading % 2 == 0 {
                style.two_space_indent_lines += 1;
            }
        }

        style.single_quote_count += line.matches('\'').count() as u32;
        style.double_quote_count += line.matches('"').count() as u32;

        if trimmed.ends_with(';') {
            style.semicolon_lines += 1;
        }
        if previous_ended_with_comma
            && (trimmed.starts_with(')') || trimmed.starts_with(']') || trimmed.starts_with('}'))
        {
            style.trailing_comma_lines += 1;
        }
        previous_ended_with_comma = trimmed.ends_with(',');
    }

    style
}
