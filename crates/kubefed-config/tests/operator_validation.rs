//! Operator config validation tests for kubefed-config.
// kubefed-config/tests/operator_validation.rs
// =============================================================================
// Module: Operator Config Validation Tests
// Description: Timing, feature gate, health check, and sync policy checks.
// Purpose: Ensure operator configs report every violation with its field path.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use kubefed_config::ConfigError;
use kubefed_config::EnumField;
use kubefed_config::ErrorType;
use kubefed_config::FeatureRegistry;
use kubefed_config::FeatureSpec;
use kubefed_config::FeatureStage;
use kubefed_config::FieldValue;
use kubefed_config::GateConfiguration;
use kubefed_config::JitterFactor;
use kubefed_config::LEASE_DURATION_ERROR;
use kubefed_config::OperatorConfigValidator;
use kubefed_config::RENEW_DEADLINE_ERROR;
use kubefed_config::ResourceScope;
use kubefed_config::validate_operator_config;
use time::Duration;

mod common;

use common::TestResult;
use common::expect_contains;
use common::expect_single;
use common::expect_valid;
use common::gate;

fn registry_with(names: &[&str]) -> FeatureRegistry {
    FeatureRegistry::new(names.iter().map(|name| FeatureSpec {
        name: (*name).to_string(),
        stage: FeatureStage::Alpha,
        default_enabled: false,
    }))
}

#[test]
fn default_operator_config_is_valid() -> TestResult {
    expect_valid(&validate_operator_config(&common::operator_config()))
}

#[test]
fn namespaced_scope_is_accepted() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.scope = ResourceScope::Namespaced.into();
    expect_valid(&validate_operator_config(&cfg))
}

#[test]
fn lease_equal_to_renew_deadline_is_rejected() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.leader_elect.lease_duration = Duration::seconds(10);
    cfg.spec.leader_elect.renew_deadline = Duration::seconds(10);
    cfg.spec.leader_elect.retry_period = Duration::seconds(2);

    let errs = validate_operator_config(&cfg);
    expect_single(&errs, ErrorType::Invalid, "spec.leaderElect.leaseDuration")?;
    let error = &errs.as_slice()[0];
    if error.detail != LEASE_DURATION_ERROR {
        return Err(format!("unexpected detail: {}", error.detail));
    }
    if error.bad_value != FieldValue::Duration(Duration::seconds(10)) {
        return Err(format!("unexpected value: {}", error.bad_value));
    }
    Ok(())
}

#[test]
fn renew_deadline_must_outlast_jittered_retry() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.leader_elect.renew_deadline = Duration::seconds(5);
    cfg.spec.leader_elect.retry_period = Duration::seconds(5);

    let errs = validate_operator_config(&cfg);
    expect_single(&errs, ErrorType::Invalid, "spec.leaderElect.renewDeadline")?;
    if errs.as_slice()[0].detail != RENEW_DEADLINE_ERROR {
        return Err(format!("unexpected detail: {}", errs.as_slice()[0].detail));
    }
    Ok(())
}

#[test]
fn renew_deadline_comparison_is_strict() -> TestResult {
    let jitter = JitterFactor::new(1.0).map_err(|err| err.to_string())?;
    let validator = OperatorConfigValidator::new(jitter, FeatureRegistry::default());
    let mut cfg = common::operator_config();
    cfg.spec.leader_elect.renew_deadline = Duration::seconds(5);
    cfg.spec.leader_elect.retry_period = Duration::seconds(5);
    let errs = validator.validate(&cfg);
    expect_single(&errs, ErrorType::Invalid, "spec.leaderElect.renewDeadline")?;

    cfg.spec.leader_elect.renew_deadline = Duration::seconds(5) + Duration::nanoseconds(1);
    expect_valid(&validator.validate(&cfg))
}

#[test]
fn jitter_factor_is_configurable() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.leader_elect.renew_deadline = Duration::seconds(5);
    cfg.spec.leader_elect.retry_period = Duration::seconds(5);

    let jitter = JitterFactor::new(0.9).map_err(|err| err.to_string())?;
    let validator = OperatorConfigValidator::new(jitter, FeatureRegistry::default());
    expect_valid(&validator.validate(&cfg))
}

#[test]
fn jitter_factor_rejects_out_of_range_values() -> TestResult {
    match JitterFactor::new(0.0) {
        Err(ConfigError::Options(message)) if message.contains("jitter factor") => Ok(()),
        other => Err(format!("expected options error, got {other:?}")),
    }
}

#[test]
fn non_positive_durations_accumulate_with_ordering_checks() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.controller_duration.available_delay = Duration::ZERO;
    cfg.spec.controller_duration.unavailable_delay = Duration::seconds(-5);
    cfg.spec.leader_elect.lease_duration = Duration::ZERO;
    cfg.spec.leader_elect.renew_deadline = Duration::ZERO;
    cfg.spec.leader_elect.retry_period = Duration::ZERO;

    let errs = validate_operator_config(&cfg);
    assert_eq!(
        common::paths(&errs),
        vec![
            "spec.controllerDuration.availableDelay",
            "spec.controllerDuration.unavailableDelay",
            "spec.leaderElect.leaseDuration",
            "spec.leaderElect.renewDeadline",
            "spec.leaderElect.retryPeriod",
            "spec.leaderElect.leaseDuration",
            "spec.leaderElect.renewDeadline",
        ]
    );
    Ok(())
}

#[test]
fn health_check_thresholds_must_be_positive() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.cluster_health_check.period_seconds = 0;
    cfg.spec.cluster_health_check.failure_threshold = -1;
    cfg.spec.cluster_health_check.success_threshold = 0;
    cfg.spec.cluster_health_check.timeout_seconds = 0;

    let errs = validate_operator_config(&cfg);
    assert_eq!(errs.len(), 4);
    for field in ["periodSeconds", "failureThreshold", "successThreshold", "timeoutSeconds"] {
        expect_contains(&errs, ErrorType::Invalid, &format!("spec.clusterHealthCheck.{field}"))?;
    }
    if !errs.iter().all(|error| error.detail == "should be greater than 0") {
        return Err(format!("unexpected details: {errs}"));
    }
    Ok(())
}

#[test]
fn enum_fields_report_missing_and_unsupported() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.scope = EnumField::Missing;
    cfg.spec.leader_elect.resource_lock = EnumField::from_raw("leases");
    cfg.spec.sync_controller.adopt_resources = EnumField::from_raw("Yes");

    let errs = validate_operator_config(&cfg);
    assert_eq!(errs.len(), 3);
    expect_contains(&errs, ErrorType::Required, "spec.scope")?;
    expect_contains(&errs, ErrorType::NotSupported, "spec.leaderElect.resourceLock")?;
    expect_contains(&errs, ErrorType::NotSupported, "spec.syncController.adoptResources")
}

#[test]
fn repeated_feature_gate_reports_second_entry() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.feature_gates =
        vec![gate("X", GateConfiguration::Enabled), gate("X", GateConfiguration::Disabled)];
    let validator = OperatorConfigValidator::new(JitterFactor::default(), registry_with(&["X"]));

    let errs = validator.validate(&cfg);
    expect_single(&errs, ErrorType::Duplicate, "spec.featureGates[1].name")
}

#[test]
fn every_repeat_is_reported_once() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.feature_gates = vec![
        gate("PushReconciler", GateConfiguration::Enabled),
        gate("FederatedIngress", GateConfiguration::Enabled),
        gate("PushReconciler", GateConfiguration::Disabled),
        gate("PushReconciler", GateConfiguration::Enabled),
    ];

    let errs = validate_operator_config(&cfg);
    assert_eq!(
        common::paths(&errs),
        vec!["spec.featureGates[2].name", "spec.featureGates[3].name"]
    );
    if !errs.iter().all(|error| error.kind == ErrorType::Duplicate) {
        return Err(format!("expected only duplicates, got {errs}"));
    }
    Ok(())
}

#[test]
fn repeated_entry_skips_its_other_checks() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.feature_gates = vec![
        gate("PushReconciler", GateConfiguration::Enabled),
        kubefed_config::FeatureGate {
            name: "PushReconciler".to_string(),
            configuration: EnumField::from_raw("Maybe"),
        },
    ];

    let errs = validate_operator_config(&cfg);
    expect_single(&errs, ErrorType::Duplicate, "spec.featureGates[1].name")
}

#[test]
fn unknown_feature_and_configuration_are_reported() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.feature_gates = vec![
        kubefed_config::FeatureGate {
            name: "pushreconciler".to_string(),
            configuration: EnumField::Missing,
        },
        kubefed_config::FeatureGate {
            name: String::new(),
            configuration: EnumField::from_raw("enabled"),
        },
    ];

    let errs = validate_operator_config(&cfg);
    assert_eq!(errs.len(), 4);
    expect_contains(&errs, ErrorType::NotSupported, "spec.featureGates[0].name")?;
    expect_contains(&errs, ErrorType::Required, "spec.featureGates[0].configuration")?;
    expect_contains(&errs, ErrorType::Required, "spec.featureGates[1].name")?;
    expect_contains(&errs, ErrorType::NotSupported, "spec.featureGates[1].configuration")
}

#[test]
fn custom_registry_replaces_known_features() -> TestResult {
    let cfg = common::operator_config();
    let validator =
        OperatorConfigValidator::new(JitterFactor::default(), registry_with(&["PushReconciler"]));

    let errs = validator.validate(&cfg);
    expect_single(&errs, ErrorType::NotSupported, "spec.featureGates[1].name")?;
    if errs.as_slice()[0].supported != vec!["PushReconciler".to_string()] {
        return Err(format!("unexpected supported values: {errs}"));
    }
    Ok(())
}

#[test]
fn rendered_messages_follow_field_error_format() -> TestResult {
    let mut cfg = common::operator_config();
    cfg.spec.leader_elect.resource_lock = EnumField::from_raw("leases");
    let errs = validate_operator_config(&cfg);
    let rendered = errs.to_string();
    let expected = "spec.leaderElect.resourceLock: Unsupported value: \"leases\": \
                    supported values: \"configmaps\", \"endpoints\"";
    if rendered != expected {
        return Err(format!("unexpected rendering: {rendered}"));
    }
    Ok(())
}
