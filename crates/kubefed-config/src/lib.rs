// kubefed-config/src/lib.rs
// ============================================================================
// Module: KubeFed Config Library
// Description: Canonical KubeFed config model, field validation, and loading.
// Purpose: Single source of truth for FederatedTypeConfig and KubeFedConfig semantics.
// Dependencies: regex, serde, serde_json, serde_yaml, thiserror, time, toml, tracing
// ============================================================================

//! ## Overview
//! `kubefed-config` defines the configuration objects consumed by a federation
//! control plane and validates them before they are persisted or acted upon.
//! Validators never stop at the first problem: every check runs and the caller
//! receives the complete, path-annotated [`ErrorList`].
//!
//! Two independent objects are covered:
//! - [`TypeConfig`] (`FederatedTypeConfig`): how a target resource type is
//!   wrapped by a federated type and which controllers act on it.
//! - [`OperatorConfig`] (`KubeFedConfig`): leader election, health checks,
//!   feature gates, and sync policy for the controller manager.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod dns;
pub mod duration;
pub mod enums;
pub mod features;
pub mod field;
pub mod manifest;
pub mod model;
pub mod naming;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use enums::*;
pub use features::FeatureRegistry;
pub use features::FeatureSpec;
pub use features::FeatureStage;
pub use field::ErrorList;
pub use field::ErrorType;
pub use field::FieldError;
pub use field::FieldPath;
pub use field::FieldValue;
pub use manifest::ConfigError;
pub use manifest::Manifest;
pub use manifest::ManifestFormat;
pub use manifest::load_manifests;
pub use manifest::parse_manifests;
pub use model::*;
pub use naming::GroupQualifiedName;
pub use naming::NameConvention;
pub use validation::DEFAULT_JITTER_FACTOR;
pub use validation::JitterFactor;
pub use validation::LEASE_DURATION_ERROR;
pub use validation::OperatorConfigValidator;
pub use validation::RENEW_DEADLINE_ERROR;
pub use validation::TYPE_CONFIG_NAME_ERROR;
pub use validation::TypeConfigValidator;
pub use validation::Validators;
pub use validation::validate_api_resource;
pub use validation::validate_enum;
pub use validation::validate_enum_strings;
pub use validation::validate_federated_api_resource;
pub use validation::validate_operator_config;
pub use validation::validate_status_api_resource;
pub use validation::validate_type_config;
pub use validation::validate_type_config_status;
