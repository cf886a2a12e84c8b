// kubefed-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures and assertions for validation tests.
// Purpose: Reduce duplication across integration tests for kubefed-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use kubefed_config::AdoptResourcesMode;
use kubefed_config::ApiResource;
use kubefed_config::ClusterHealthCheckConfig;
use kubefed_config::ControllerDuration;
use kubefed_config::ControllerStatus;
use kubefed_config::ErrorList;
use kubefed_config::ErrorType;
use kubefed_config::FeatureGate;
use kubefed_config::GateConfiguration;
use kubefed_config::LeaderElectConfig;
use kubefed_config::ObjectMeta;
use kubefed_config::OperatorConfig;
use kubefed_config::OperatorConfigSpec;
use kubefed_config::PropagationMode;
use kubefed_config::ResourceLockType;
use kubefed_config::ResourceScope;
use kubefed_config::SyncControllerConfig;
use kubefed_config::TypeConfig;
use kubefed_config::TypeConfigSpec;
use kubefed_config::TypeConfigStatus;
use time::Duration;

pub type TestResult = Result<(), String>;

/// Builds a resource descriptor.
pub fn resource(group: &str, version: &str, kind: &str, plural: &str) -> ApiResource {
    ApiResource {
        group: group.to_string(),
        version: version.to_string(),
        kind: kind.to_string(),
        plural_name: plural.to_string(),
        scope: ResourceScope::Namespaced.into(),
    }
}

/// Returns a valid type config federating core `Pod` objects.
pub fn pod_type_config() -> TypeConfig {
    TypeConfig {
        api_version: "core.kubefed.io/v1beta1".to_string(),
        metadata: ObjectMeta {
            name: "pods".to_string(),
            namespace: Some("kube-federation-system".to_string()),
        },
        spec: TypeConfigSpec {
            target_type: resource("", "v1", "Pod", "pods"),
            federated_type: resource(
                "types.kubefed.io",
                "v1beta1",
                "FederatedPod",
                "federatedpods",
            ),
            status_type: None,
            propagation: PropagationMode::Enabled.into(),
            status_collection: None,
        },
        status: TypeConfigStatus {
            observed_generation: 1,
            propagation_controller: ControllerStatus::Running.into(),
            status_controller: None,
        },
    }
}

/// Returns a valid type config federating grouped `Deployment` objects.
pub fn deployment_type_config() -> TypeConfig {
    let mut obj = pod_type_config();
    obj.metadata.name = "deployments.apps".to_string();
    obj.spec.target_type = resource("apps", "v1", "Deployment", "deployments");
    obj.spec.federated_type =
        resource("types.kubefed.io", "v1beta1", "FederatedDeployment", "federateddeployments");
    obj
}

/// Returns a valid operator config.
pub fn operator_config() -> OperatorConfig {
    OperatorConfig {
        api_version: "core.kubefed.io/v1beta1".to_string(),
        metadata: ObjectMeta {
            name: "kubefed".to_string(),
            namespace: Some("kube-federation-system".to_string()),
        },
        spec: OperatorConfigSpec {
            scope: ResourceScope::Cluster.into(),
            controller_duration: ControllerDuration {
                available_delay: Duration::seconds(20),
                unavailable_delay: Duration::seconds(60),
            },
            leader_elect: LeaderElectConfig {
                lease_duration: Duration::seconds(15),
                renew_deadline: Duration::seconds(10),
                retry_period: Duration::seconds(5),
                resource_lock: ResourceLockType::ConfigMaps.into(),
            },
            feature_gates: vec![
                gate("PushReconciler", GateConfiguration::Enabled),
                gate("SchedulerPreferences", GateConfiguration::Enabled),
            ],
            cluster_health_check: ClusterHealthCheckConfig {
                period_seconds: 10,
                failure_threshold: 3,
                success_threshold: 1,
                timeout_seconds: 3,
            },
            sync_controller: SyncControllerConfig {
                adopt_resources: AdoptResourcesMode::Enabled.into(),
            },
        },
    }
}

/// Builds a feature gate override.
pub fn gate(name: &str, configuration: GateConfiguration) -> FeatureGate {
    FeatureGate {
        name: name.to_string(),
        configuration: configuration.into(),
    }
}

/// Renders each violation path for compact comparisons.
pub fn paths(errs: &ErrorList) -> Vec<String> {
    errs.iter().map(|error| error.field.to_string()).collect()
}

/// Checks that `errs` is empty.
pub fn expect_valid(errs: &ErrorList) -> TestResult {
    if errs.is_empty() {
        Ok(())
    } else {
        Err(format!("expected no violations, got {errs}"))
    }
}

/// Checks that `errs` holds exactly one violation of `kind` at `path`.
pub fn expect_single(errs: &ErrorList, kind: ErrorType, path: &str) -> TestResult {
    match errs.as_slice() {
        [error] if error.kind == kind && error.field.to_string() == path => Ok(()),
        _ => Err(format!("expected a single {kind} at {path}, got {errs}")),
    }
}

/// Checks that some violation of `kind` sits at `path`.
pub fn expect_contains(errs: &ErrorList, kind: ErrorType, path: &str) -> TestResult {
    if errs.iter().any(|error| error.kind == kind && error.field.to_string() == path) {
        Ok(())
    } else {
        Err(format!("expected {kind} at {path}, got {errs}"))
    }
}
