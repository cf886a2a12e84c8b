// kubefed-config/src/model.rs
// ============================================================================
// Module: Configuration Model
// Description: FederatedTypeConfig and KubeFedConfig object shapes.
// Purpose: Deserializable, read-only snapshots handed to the validators.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The model mirrors the `core.kubefed.io/v1beta1` wire shapes. Every field
//! is defaulted during deserialization so an incomplete document still loads
//! and the validators can report each missing value individually.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::Duration;

use crate::duration::serde_go;
use crate::enums::AdoptResourcesMode;
use crate::enums::ControllerStatus;
use crate::enums::EnumField;
use crate::enums::GateConfiguration;
use crate::enums::PropagationMode;
use crate::enums::ResourceLockType;
use crate::enums::ResourceScope;
use crate::enums::StatusCollectionMode;

// ============================================================================
// SECTION: Shared Types
// ============================================================================

/// Object metadata subset used by the validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Object name.
    #[serde(default)]
    pub name: String,
    /// Object namespace, when namespaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// API resource descriptor (group, version, kind, plural, scope).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResource {
    /// API group; empty for core types.
    #[serde(default)]
    pub group: String,
    /// API version.
    #[serde(default)]
    pub version: String,
    /// Resource kind.
    #[serde(default)]
    pub kind: String,
    /// Lower-case plural resource name.
    #[serde(default)]
    pub plural_name: String,
    /// Resource scope.
    #[serde(default)]
    pub scope: EnumField<ResourceScope>,
}

// ============================================================================
// SECTION: Type Config
// ============================================================================

/// Federated type configuration (`FederatedTypeConfig`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeConfig {
    /// API version of the document.
    #[serde(default)]
    pub api_version: String,
    /// Object metadata.
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired configuration.
    #[serde(default)]
    pub spec: TypeConfigSpec,
    /// Observed controller state.
    #[serde(default)]
    pub status: TypeConfigStatus,
}

impl TypeConfig {
    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Returns the federated target type.
    #[must_use]
    pub const fn target_type(&self) -> &ApiResource {
        &self.spec.target_type
    }
}

/// Desired state of a federated type configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeConfigSpec {
    /// Resource type being federated.
    #[serde(default)]
    pub target_type: ApiResource,
    /// Wrapper type carrying the federated template, placement, and overrides.
    #[serde(default)]
    pub federated_type: ApiResource,
    /// Optional type holding collected per-cluster status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<ApiResource>,
    /// Whether propagation to member clusters is active.
    #[serde(default)]
    pub propagation: EnumField<PropagationMode>,
    /// Whether per-cluster status collection is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_collection: Option<EnumField<StatusCollectionMode>>,
}

/// Observed state of a federated type configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeConfigStatus {
    /// Generation most recently observed by the controllers.
    #[serde(default)]
    pub observed_generation: i64,
    /// Run state of the propagation controller.
    #[serde(default)]
    pub propagation_controller: EnumField<ControllerStatus>,
    /// Run state of the status controller, when status collection is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_controller: Option<EnumField<ControllerStatus>>,
}

// ============================================================================
// SECTION: Operator Config
// ============================================================================

/// Controller manager configuration (`KubeFedConfig`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorConfig {
    /// API version of the document.
    #[serde(default)]
    pub api_version: String,
    /// Object metadata.
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Controller manager settings.
    #[serde(default)]
    pub spec: OperatorConfigSpec,
}

impl OperatorConfig {
    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

/// Controller manager settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorConfigSpec {
    /// Scope the control plane watches.
    #[serde(default)]
    pub scope: EnumField<ResourceScope>,
    /// Cluster availability delays.
    #[serde(default)]
    pub controller_duration: ControllerDuration,
    /// Leader election timing and lock.
    #[serde(default)]
    pub leader_elect: LeaderElectConfig,
    /// Ordered feature gate overrides.
    #[serde(default)]
    pub feature_gates: Vec<FeatureGate>,
    /// Member cluster health probing.
    #[serde(default)]
    pub cluster_health_check: ClusterHealthCheckConfig,
    /// Sync controller policy.
    #[serde(default)]
    pub sync_controller: SyncControllerConfig,
}

/// Delays applied when member clusters change availability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerDuration {
    /// Delay before reconciling after a cluster becomes available.
    #[serde(default, with = "serde_go")]
    pub available_delay: Duration,
    /// Delay before reconciling after a cluster becomes unavailable.
    #[serde(default, with = "serde_go")]
    pub unavailable_delay: Duration,
}

/// Leader election timing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderElectConfig {
    /// How long non-leaders wait before trying to take the lease.
    #[serde(default, with = "serde_go")]
    pub lease_duration: Duration,
    /// How long the leader keeps retrying renewal before giving up.
    #[serde(default, with = "serde_go")]
    pub renew_deadline: Duration,
    /// Wait between acquisition or renewal attempts.
    #[serde(default, with = "serde_go")]
    pub retry_period: Duration,
    /// Lock resource kind.
    #[serde(default)]
    pub resource_lock: EnumField<ResourceLockType>,
}

/// Single feature gate override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGate {
    /// Feature name.
    #[serde(default)]
    pub name: String,
    /// Enablement override.
    #[serde(default)]
    pub configuration: EnumField<GateConfiguration>,
}

/// Member cluster health probing thresholds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterHealthCheckConfig {
    /// Seconds between probes.
    #[serde(default)]
    pub period_seconds: i64,
    /// Consecutive failures before a cluster is marked offline.
    #[serde(default)]
    pub failure_threshold: i64,
    /// Consecutive successes before a cluster is marked ready.
    #[serde(default)]
    pub success_threshold: i64,
    /// Seconds before a probe times out.
    #[serde(default)]
    pub timeout_seconds: i64,
}

/// Sync controller policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncControllerConfig {
    /// Whether pre-existing resources are adopted.
    #[serde(default)]
    pub adopt_resources: EnumField<AdoptResourcesMode>,
}
