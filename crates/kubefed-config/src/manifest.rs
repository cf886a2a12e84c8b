// kubefed-config/src/manifest.rs
// ============================================================================
// Module: Manifest Loading
// Description: Bounded reading and kind dispatch for config manifests.
// Purpose: Turn YAML, JSON, or TOML documents into typed config objects.
// Dependencies: serde, serde_json, serde_yaml, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! Manifests are read with hard size and path limits, decoded according to
//! their file extension, and dispatched on the `kind` field. YAML input may
//! carry several `---`-separated documents; JSON and TOML carry one.
//!
//! Loading never validates on its own except through
//! [`OperatorConfig::load`], which fails closed on any violation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::field::ErrorList;
use crate::model::OperatorConfig;
use crate::model::TypeConfig;
use crate::validation::Validators;
use crate::validation::validate_operator_config;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Environment variable naming the operator config path.
pub const CONFIG_ENV_VAR: &str = "KUBEFED_CONFIG";
/// Operator config path used when neither an argument nor the environment names one.
pub const DEFAULT_CONFIG_NAME: &str = "kubefed-config.yaml";
/// Maximum manifest size in bytes.
pub const MAX_MANIFEST_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Manifest loading, decoding, or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading a manifest.
    #[error("config io error: {0}")]
    Io(String),
    /// Decoding failure or unsupported document kind.
    #[error("config parse error: {0}")]
    Parse(String),
    /// The document decoded but failed validation.
    #[error("invalid config: {0}")]
    Invalid(ErrorList),
    /// A size or path limit was exceeded.
    #[error("config limit exceeded: {0}")]
    Limit(String),
    /// A validator option is out of range.
    #[error("invalid validator option: {0}")]
    Options(String),
}

// ============================================================================
// SECTION: Formats
// ============================================================================

/// Encoding of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// YAML, possibly multi-document.
    Yaml,
    /// A single JSON document.
    Json,
    /// A single TOML document.
    Toml,
}

impl ManifestFormat {
    /// Picks the format from a file extension; anything unrecognized is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

// ============================================================================
// SECTION: Manifests
// ============================================================================

/// A decoded config document, dispatched on its `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind")]
pub enum Manifest {
    /// `FederatedTypeConfig` document.
    FederatedTypeConfig(TypeConfig),
    /// `KubeFedConfig` document.
    KubeFedConfig(OperatorConfig),
}

impl Manifest {
    /// Returns the document kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FederatedTypeConfig(_) => "FederatedTypeConfig",
            Self::KubeFedConfig(_) => "KubeFedConfig",
        }
    }

    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::FederatedTypeConfig(obj) => obj.name(),
            Self::KubeFedConfig(cfg) => cfg.name(),
        }
    }

    /// Validates the document with the matching validator.
    ///
    /// `status_sub_resource` only affects type configs.
    #[must_use]
    pub fn validate(&self, validators: &Validators, status_sub_resource: bool) -> ErrorList {
        match self {
            Self::FederatedTypeConfig(obj) => {
                validators.type_config.validate(obj, status_sub_resource)
            }
            Self::KubeFedConfig(cfg) => validators.operator.validate(cfg),
        }
    }
}

/// Decodes every document in `text`.
///
/// Empty YAML documents are skipped.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when a document cannot be decoded or names
/// an unsupported kind.
pub fn parse_manifests(text: &str, format: ManifestFormat) -> Result<Vec<Manifest>, ConfigError> {
    match format {
        ManifestFormat::Json => {
            let manifest =
                serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
            Ok(vec![manifest])
        }
        ManifestFormat::Toml => {
            let manifest =
                toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
            Ok(vec![manifest])
        }
        ManifestFormat::Yaml => {
            let mut manifests = Vec::new();
            for document in serde_yaml::Deserializer::from_str(text) {
                let value = serde_yaml::Value::deserialize(document)
                    .map_err(|err| ConfigError::Parse(err.to_string()))?;
                if value.is_null() {
                    continue;
                }
                let manifest = serde_yaml::from_value(value)
                    .map_err(|err| ConfigError::Parse(err.to_string()))?;
                manifests.push(manifest);
            }
            Ok(manifests)
        }
    }
}

/// Reads and decodes every document in the manifest at `path`.
///
/// # Errors
///
/// Returns [`ConfigError`] when the path or file exceeds a limit, cannot be
/// read, or does not decode.
pub fn load_manifests(path: &Path) -> Result<Vec<Manifest>, ConfigError> {
    let text = read_bounded(path)?;
    let manifests = parse_manifests(&text, ManifestFormat::from_path(path))?;
    debug!(path = %path.display(), documents = manifests.len(), "manifests loaded");
    Ok(manifests)
}

impl OperatorConfig {
    /// Loads and validates an operator config.
    ///
    /// The path is taken from `path`, then the `KUBEFED_CONFIG` environment
    /// variable, then `kubefed-config.yaml`. The file must hold exactly one
    /// `KubeFedConfig` document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading fails, and
    /// [`ConfigError::Invalid`] with every violation when validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let mut manifests = load_manifests(&resolved)?;
        if manifests.len() != 1 {
            return Err(ConfigError::Parse(format!(
                "expected exactly one KubeFedConfig document, found {}",
                manifests.len()
            )));
        }
        let cfg = match manifests.pop() {
            Some(Manifest::KubeFedConfig(cfg)) => cfg,
            Some(other) => {
                return Err(ConfigError::Parse(format!(
                    "expected a KubeFedConfig document, found {}",
                    other.kind()
                )));
            }
            None => return Err(ConfigError::Parse("config file has no documents".to_string())),
        };
        let errs = validate_operator_config(&cfg);
        if !errs.is_empty() {
            return Err(ConfigError::Invalid(errs));
        }
        Ok(cfg)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the operator config path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Limit("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates a path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Limit("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Limit("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Reads a UTF-8 manifest no larger than [`MAX_MANIFEST_FILE_SIZE`].
fn read_bounded(path: &Path) -> Result<String, ConfigError> {
    validate_path(path)?;
    let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    if bytes.len() > MAX_MANIFEST_FILE_SIZE {
        return Err(ConfigError::Limit("manifest file exceeds size limit".to_string()));
    }
    String::from_utf8(bytes)
        .map_err(|_| ConfigError::Parse("manifest file must be utf-8".to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
