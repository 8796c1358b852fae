//! Classification tables.
//!
//! Every classifier here is an ordered list of (predicate, result) pairs
//! evaluated in sequence; the first match wins and the ordering is part of
//! the contract. A tree with both `packages/` and `services/` is a
//! monorepo, because the packages rule precedes the services rule.
//!
//! Framework detection runs a fixed name → pattern table over import
//! specifiers. Within the summary table every matching rule contributes;
//! within the frontend/backend/database tables each category independently
//! picks its first matching rule.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::snapshot::{ArchitectureKind, FileOrganization, StructureStyle};

/// Evidence the path-based classifiers look at.
pub struct ClassificationEvidence<'a> {
    /// Relative paths of every extracted fact, `/`-separated.
    pub relative_paths: &'a [String],
    pub has_manifest: bool,
}

impl ClassificationEvidence<'_> {
    fn any_path_contains(&self, needle: &str) -> bool {
        self.relative_paths.iter().any(|p| p.contains(needle))
    }
}

type ArchRule = (fn(&ClassificationEvidence) -> bool, ArchitectureKind);

static ARCHITECTURE_RULES: &[ArchRule] = &[
    (has_packages_dir, ArchitectureKind::Monorepo),
    (has_services_dir, ArchitectureKind::Microservices),
    (is_monolith, ArchitectureKind::Monolith),
    (is_library, ArchitectureKind::Library),
];

fn has_packages_dir(ev: &ClassificationEvidence) -> bool {
    ev.any_path_contains("packages/")
}

fn has_services_dir(ev: &ClassificationEvidence) -> bool {
    ev.any_path_contains("services/")
}

fn is_monolith(ev: &ClassificationEvidence) -> bool {
    ev.has_manifest && ev.any_path_contains("src/")
}

fn is_library(ev: &ClassificationEvidence) -> bool {
    ev.has_manifest
}

pub fn classify_architecture(ev: &ClassificationEvidence) -> ArchitectureKind {
    for (predicate, kind) in ARCHITECTURE_RULES {
        if predicate(ev) {
            return *kind;
        }
    }
    ArchitectureKind::Unknown
}

type StructureRule = (fn(&ClassificationEvidence) -> bool, StructureStyle);

static STRUCTURE_RULES: &[StructureRule] = &[
    (has_feature_dirs, StructureStyle::FeatureBased),
    (has_mvc_dirs, StructureStyle::Mvc),
    (has_clean_dirs, StructureStyle::Clean),
    (has_layer_dirs, StructureStyle::Layered),
];

fn has_feature_dirs(ev: &ClassificationEvidence) -> bool {
    ev.any_path_contains("features/") || ev.any_path_contains("modules/")
}

fn has_mvc_dirs(ev: &ClassificationEvidence) -> bool {
    ev.any_path_contains("model") && ev.any_path_contains("view")
}

fn has_clean_dirs(ev: &ClassificationEvidence) -> bool {
    ev.any_path_contains("domain") && ev.any_path_contains("infrastructure")
}

fn has_layer_dirs(ev: &ClassificationEvidence) -> bool {
    ev.any_path_contains("layers/") || ev.any_path_contains("core/")
}

pub fn classify_structure(ev: &ClassificationEvidence) -> StructureStyle {
    for (predicate, style) in STRUCTURE_RULES {
        if predicate(ev) {
            return *style;
        }
    }
    StructureStyle::Unknown
}

type OrganizationRule = (fn(&ClassificationEvidence) -> bool, FileOrganization);

static ORGANIZATION_RULES: &[OrganizationRule] = &[
    (has_feature_dirs, FileOrganization::FeatureBased),
    (has_type_dirs, FileOrganization::TypeBased),
    (is_flat, FileOrganization::Flat),
];

fn has_type_dirs(ev: &ClassificationEvidence) -> bool {
    ["components/", "controllers/", "services/", "models/", "views/", "utils/"]
        .iter()
        .any(|d| ev.any_path_contains(d))
}

fn is_flat(ev: &ClassificationEvidence) -> bool {
    !ev.relative_paths.is_empty() && ev.relative_paths.iter().all(|p| !p.contains('/'))
}

pub fn classify_organization(ev: &ClassificationEvidence) -> FileOrganization {
    for (predicate, organization) in ORGANIZATION_RULES {
        if predicate(ev) {
            return *organization;
        }
    }
    FileOrganization::Unknown
}

/// A named detection rule matched against import specifiers.
pub struct DetectRule {
    pub name: &'static str,
    pub pattern: Regex,
}

fn rules(table: &[(&'static str, &str)]) -> Vec<DetectRule> {
    table
        .iter()
        .map(|&(name, pattern)| DetectRule {
            name,
            pattern: Regex::new(pattern).expect("detection pattern is valid regex"),
        })
        .collect()
}

/// Frameworks reported in the summary. Every matching rule contributes.
pub static FRAMEWORK_RULES: LazyLock<Vec<DetectRule>> = LazyLock::new(|| {
    rules(&[
        ("React", r"^react($|[-/])"),
        ("Vue", r"^vue($|[-/])"),
        ("Angular", r"^@angular"),
        ("Svelte", r"^svelte"),
        ("Next.js", r"^next($|/)"),
        ("Nuxt", r"^nuxt"),
        ("Express", r"^express$"),
        ("Fastify", r"^fastify$"),
        ("NestJS", r"^@nestjs"),
        ("Koa", r"^koa$"),
        ("Django", r"^django"),
        ("Flask", r"^flask$"),
        ("FastAPI", r"^fastapi$"),
        ("Axum", r"^axum$"),
        ("Actix Web", r"^actix"),
    ])
});

pub static TEST_FRAMEWORK_RULES: LazyLock<Vec<DetectRule>> = LazyLock::new(|| {
    rules(&[
        ("Jest", r"^(@jest|jest)"),
        ("Vitest", r"^vitest$"),
        ("Mocha", r"^mocha$"),
        ("Pytest", r"^pytest$"),
        ("Cypress", r"^cypress$"),
        ("Playwright", r"^@?playwright"),
    ])
});

/// Package managers are detected by filename presence, not imports.
pub static PACKAGE_MANAGER_FILES: &[(&str, &str)] = &[
    ("npm", "package-lock.json"),
    ("yarn", "yarn.lock"),
    ("pnpm", "pnpm-lock.yaml"),
    ("bun", "bun.lockb"),
    ("pip", "requirements.txt"),
    ("poetry", "poetry.lock"),
    ("cargo", "Cargo.lock"),
    ("go modules", "go.sum"),
];

pub static FRONTEND_RULES: LazyLock<Vec<DetectRule>> = LazyLock::new(|| {
    rules(&[
        ("React", r"^react($|[-/])"),
        ("Vue", r"^vue($|[-/])"),
        ("Angular", r"^@angular"),
        ("Svelte", r"^svelte"),
    ])
});

pub static BACKEND_RULES: LazyLock<Vec<DetectRule>> = LazyLock::new(|| {
    rules(&[
        ("Express", r"^express$"),
        ("NestJS", r"^@nestjs"),
        ("Fastify", r"^fastify$"),
        ("Koa", r"^koa$"),
        ("Django", r"^django"),
        ("Flask", r"^flask$"),
        ("FastAPI", r"^fastapi$"),
        ("Axum", r"^axum$"),
        ("Actix Web", r"^actix"),
    ])
});

pub static DATABASE_RULES: LazyLock<Vec<DetectRule>> = LazyLock::new(|| {
    rules(&[
        ("PostgreSQL", r"^(pg$|postgres)"),
        ("MySQL", r"^mysql"),
        ("MongoDB", r"^(mongodb|mongoose)"),
        ("SQLite", r"sqlite"),
        ("Redis", r"^(redis|ioredis)$"),
        ("Prisma", r"^@?prisma"),
    ])
});

/// Every rule matched by at least one specifier, in table order.
pub fn detect_all<'a>(
    table: &[DetectRule],
    specifiers: impl IntoIterator<Item = &'a str> + Clone,
) -> Vec<String> {
    let mut detected = Vec::new();
    for rule in table {
        if specifiers
            .clone()
            .into_iter()
            .any(|s| rule.pattern.is_match(s))
        {
            detected.push(rule.name.to_string());
        }
    }
    detected
}

/// First rule in table order matched by any specifier.
pub fn detect_first<'a>(
    table: &[DetectRule],
    specifiers: impl IntoIterator<Item = &'a str> + Clone,
) -> Option<String> {
    table
        .iter()
        .find(|rule| {
            specifiers
                .clone()
                .into_iter()
                .any(|s| rule.pattern.is_match(s))
        })
        .map(|rule| rule.name.to_string())
}

/// True when any specifier matches any framework rule.
pub fn is_framework_import(specifier: &str) -> bool {
    FRAMEWORK_RULES
        .iter()
        .any(|rule| rule.pattern.is_match(specifier))
}

/// Package managers whose lock/manifest files appear among the given
/// file names.
pub fn detect_package_managers(file_names: &BTreeSet<String>) -> Vec<String> {
    PACKAGE_MANAGER_FILES
        .iter()
        .filter(|(_, file)| file_names.contains(*file))
        .map(|(name, _)| name.to_string())
        .collect()
}
