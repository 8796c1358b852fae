use serde::{Deserialize, Serialize};

/// Languages the analyzer can classify.
///
/// Classification is an exact lookup on the file extension. There is no
/// content sniffing or shebang detection; anything unmapped is `Unknown`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Typescript,
    Javascript,
    Python,
    Go,
    Rust,
    Java,
    Unknown,
}

impl Language {
    /// Display name used in summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Typescript => "TypeScript",
            Language::Javascript => "JavaScript",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Java => "Java",
            Language::Unknown => "Unknown",
        }
    }

    /// Classify a file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "ts" | "tsx" => Language::Typescript,
            "js" | "jsx" | "mjs" | "cjs" => Language::Javascript,
            "py" => Language::Python,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "java" => Language::Java,
            _ => Language::Unknown,
        }
    }
}
