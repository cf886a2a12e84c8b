// kubefed-config/src/features.rs
// ============================================================================
// Module: Feature Registry
// Description: Closed set of known controller feature gates and their defaults.
// Purpose: Pass the known-feature set explicitly instead of reading global state.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`FeatureRegistry`] lists the feature gates a controller manager
//! understands, with their maturity stage and default enablement. Validators
//! take the registry as an argument, so tests can supply a custom set without
//! any process-wide setup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::enums::GateConfiguration;
use crate::model::FeatureGate;

// ============================================================================
// SECTION: Known Features
// ============================================================================

/// Push-based reconciliation of federated resources.
pub const PUSH_RECONCILER: &str = "PushReconciler";
/// Cluster placement preferences for replica scheduling.
pub const SCHEDULER_PREFERENCES: &str = "SchedulerPreferences";
/// Multi-cluster service DNS discovery.
pub const CROSS_CLUSTER_SERVICE_DISCOVERY: &str = "CrossClusterServiceDiscovery";
/// Multi-cluster ingress DNS.
pub const FEDERATED_INGRESS: &str = "FederatedIngress";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Maturity stage of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeatureStage {
    /// Early, may change without notice.
    Alpha,
    /// Well tested, enabled by default.
    Beta,
    /// Generally available.
    #[serde(rename = "GA")]
    GeneralAvailability,
}

impl fmt::Display for FeatureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::GeneralAvailability => "GA",
        })
    }
}

/// Registered feature description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSpec {
    /// Feature gate name.
    pub name: String,
    /// Maturity stage.
    pub stage: FeatureStage,
    /// Enablement when no override is configured.
    pub default_enabled: bool,
}

/// Closed set of known feature gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRegistry {
    /// Registered features in registration order.
    features: Vec<FeatureSpec>,
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::kubefed_defaults()
    }
}

impl FeatureRegistry {
    /// Creates a registry from explicit feature specs.
    ///
    /// Later entries with an already registered name are ignored.
    #[must_use]
    pub fn new(features: impl IntoIterator<Item = FeatureSpec>) -> Self {
        let mut seen = BTreeSet::new();
        let features =
            features.into_iter().filter(|feature| seen.insert(feature.name.clone())).collect();
        Self {
            features,
        }
    }

    /// Returns the feature set shipped with the federation controller manager.
    #[must_use]
    pub fn kubefed_defaults() -> Self {
        Self::new([
            spec(PUSH_RECONCILER, FeatureStage::Beta, true),
            spec(SCHEDULER_PREFERENCES, FeatureStage::Alpha, true),
            spec(CROSS_CLUSTER_SERVICE_DISCOVERY, FeatureStage::Alpha, true),
            spec(FEDERATED_INGRESS, FeatureStage::Alpha, true),
        ])
    }

    /// Returns true when `name` is a registered feature.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|feature| feature.name == name)
    }

    /// Returns the registered feature names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(|feature| feature.name.as_str()).collect()
    }

    /// Returns the registered feature specs.
    #[must_use]
    pub fn specs(&self) -> &[FeatureSpec] {
        &self.features
    }

    /// Resolves effective enablement for every registered feature.
    ///
    /// The first override per name wins; unknown names and overrides with an
    /// unrecognized configuration are ignored.
    #[must_use]
    pub fn resolve(&self, gates: &[FeatureGate]) -> BTreeMap<String, bool> {
        let mut resolved: BTreeMap<String, bool> = self
            .features
            .iter()
            .map(|feature| (feature.name.clone(), feature.default_enabled))
            .collect();
        let mut overridden = BTreeSet::new();
        for gate in gates {
            if !overridden.insert(gate.name.as_str()) {
                continue;
            }
            let Some(configuration) = gate.configuration.known() else {
                continue;
            };
            if let Some(enabled) = resolved.get_mut(&gate.name) {
                *enabled = configuration == GateConfiguration::Enabled;
            }
        }
        resolved
    }
}

/// Builds a feature spec.
fn spec(name: &str, stage: FeatureStage, default_enabled: bool) -> FeatureSpec {
    FeatureSpec {
        name: name.to_string(),
        stage,
        default_enabled,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
