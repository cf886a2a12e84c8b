// kubefed-config-cli/src/report.rs
// ============================================================================
// Module: Reports
// Description: Per-file validation reports and feature listings.
// Purpose: Shape validation outcomes for text and JSON output.
// Dependencies: kubefed-config, serde
// ============================================================================

//! ## Overview
//! A [`FileReport`] captures either a load failure or one
//! [`DocumentReport`] per document in the file. Text rendering emits one line
//! per violation, prefixed with the file and zero-based document index.

use std::path::Path;

use kubefed_config::ErrorList;
use kubefed_config::FeatureRegistry;
use kubefed_config::FeatureSpec;
use kubefed_config::Validators;
use kubefed_config::load_manifests;
use serde::Serialize;

// ============================================================================
// SECTION: Validation Reports
// ============================================================================

/// Validation outcome for one document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    /// Zero-based position of the document in its file.
    pub index: usize,
    /// Document kind.
    pub kind: &'static str,
    /// Object name.
    pub name: String,
    /// Every violation found.
    pub violations: ErrorList,
}

impl DocumentReport {
    /// Returns true when the document has no violations.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validation outcome for one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Path as given on the command line.
    pub file: String,
    /// Load or decode failure, when the file could not be validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-document outcomes.
    pub documents: Vec<DocumentReport>,
}

impl FileReport {
    /// Returns true when the file loaded and every document is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none() && self.documents.iter().all(DocumentReport::is_valid)
    }

    /// Renders the report as text lines.
    #[must_use]
    pub fn text_lines(&self) -> Vec<String> {
        if let Some(error) = &self.error {
            return vec![format!("{}: {error}", self.file)];
        }
        let mut lines = Vec::new();
        for document in &self.documents {
            let prefix =
                format!("{}[{}] {}/{}", self.file, document.index, document.kind, document.name);
            if document.is_valid() {
                lines.push(format!("{prefix}: valid"));
            }
            for violation in &document.violations {
                lines.push(format!("{prefix}: {violation}"));
            }
        }
        lines
    }
}

/// Loads and validates every document in `path`.
#[must_use]
pub fn validate_file(
    path: &Path,
    validators: &Validators,
    status_sub_resource: bool,
) -> FileReport {
    let file = path.display().to_string();
    match load_manifests(path) {
        Ok(manifests) => {
            let documents = manifests
                .iter()
                .enumerate()
                .map(|(index, manifest)| DocumentReport {
                    index,
                    kind: manifest.kind(),
                    name: manifest.name().to_string(),
                    violations: manifest.validate(validators, status_sub_resource),
                })
                .collect();
            FileReport {
                file,
                error: None,
                documents,
            }
        }
        Err(err) => FileReport {
            file,
            error: Some(err.to_string()),
            documents: Vec::new(),
        },
    }
}

// ============================================================================
// SECTION: Feature Listings
// ============================================================================

/// Renders registered features as tab-separated text lines.
#[must_use]
pub fn feature_lines(registry: &FeatureRegistry) -> Vec<String> {
    registry
        .specs()
        .iter()
        .map(|FeatureSpec { name, stage, default_enabled }| {
            format!("{name}\t{stage}\tdefault={default_enabled}")
        })
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
