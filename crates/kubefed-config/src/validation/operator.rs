// kubefed-config/src/validation/operator.rs
// ============================================================================
// Module: Operator Config Validation
// Description: Timing, feature gate, health check, and sync policy checks.
// Purpose: Validate a KubeFedConfig before the controller manager acts on it.
// Dependencies: crate::{features, field, model}, time, tracing
// ============================================================================

//! ## Overview
//! All checks are independent and additive. Leader election timing is held to
//! two ordering constraints: the lease must outlast the renew deadline, and
//! the renew deadline must outlast a jittered retry period so a renewal
//! attempt cannot be starved by retry jitter. Feature gates are checked in
//! declared order; a repeated name is reported once per repeat and the repeat
//! is otherwise skipped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use time::Duration;
use tracing::debug;

use crate::enums::GateConfiguration;
use crate::features::FeatureRegistry;
use crate::field::ErrorList;
use crate::field::FieldError;
use crate::field::FieldPath;
use crate::manifest::ConfigError;
use crate::model::ClusterHealthCheckConfig;
use crate::model::ControllerDuration;
use crate::model::FeatureGate;
use crate::model::LeaderElectConfig;
use crate::model::OperatorConfig;
use crate::validation::common::validate_enum;
use crate::validation::common::validate_enum_strings;
use crate::validation::common::validate_positive;
use crate::validation::common::validate_positive_duration;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Leader-election retry jitter used by the upstream client library.
pub const DEFAULT_JITTER_FACTOR: f64 = 1.2;
/// Detail for lease durations that do not exceed the renew deadline.
pub const LEASE_DURATION_ERROR: &str = "leaseDuration must be greater than renewDeadline";
/// Detail for renew deadlines that do not exceed the jittered retry period.
pub const RENEW_DEADLINE_ERROR: &str = "renewDeadline must be greater than retryPeriod*JitterFactor";

// ============================================================================
// SECTION: Jitter Factor
// ============================================================================

/// Multiplier bounding how far a retry may be delayed by jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterFactor(f64);

impl Default for JitterFactor {
    fn default() -> Self {
        Self(DEFAULT_JITTER_FACTOR)
    }
}

impl JitterFactor {
    /// Creates a jitter factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Options`] when the factor is not a finite,
    /// positive number.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Options(format!(
                "jitter factor must be a finite number greater than 0, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns true when `deadline` is strictly longer than the jittered `period`.
    ///
    /// The jittered period is truncated to whole nanoseconds before comparing.
    #[allow(
        clippy::cast_precision_loss,
        reason = "Durations beyond 2^53 ns only lose sub-microsecond precision."
    )]
    fn exceeds_jittered(self, deadline: Duration, period: Duration) -> bool {
        let jittered = (period.whole_nanoseconds() as f64 * self.0).trunc();
        deadline.whole_nanoseconds() as f64 > jittered
    }
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Validator for controller manager configs.
#[derive(Debug, Clone, Default)]
pub struct OperatorConfigValidator {
    /// Jitter applied to the retry period in the renew deadline check.
    jitter: JitterFactor,
    /// Known feature gates.
    features: FeatureRegistry,
}

impl OperatorConfigValidator {
    /// Creates a validator with an explicit jitter factor and feature registry.
    #[must_use]
    pub const fn new(jitter: JitterFactor, features: FeatureRegistry) -> Self {
        Self {
            jitter,
            features,
        }
    }

    /// Returns the configured jitter factor.
    #[must_use]
    pub const fn jitter(&self) -> JitterFactor {
        self.jitter
    }

    /// Returns the configured feature registry.
    #[must_use]
    pub const fn features(&self) -> &FeatureRegistry {
        &self.features
    }

    /// Validates an operator config.
    #[must_use]
    pub fn validate(&self, cfg: &OperatorConfig) -> ErrorList {
        debug!(name = cfg.name(), "validating operator config");
        let spec = &cfg.spec;
        let path = FieldPath::new("spec");

        let mut errs = validate_enum(&path.child("scope"), &spec.scope);
        errs.append(validate_controller_duration(
            &spec.controller_duration,
            &path.child("controllerDuration"),
        ));
        errs.append(self.validate_leader_elect(&spec.leader_elect, &path.child("leaderElect")));
        errs.append(self.validate_feature_gates(&spec.feature_gates, &path.child("featureGates")));
        errs.append(validate_health_check(
            &spec.cluster_health_check,
            &path.child("clusterHealthCheck"),
        ));
        errs.append(validate_enum(
            &path.child("syncController").child("adoptResources"),
            &spec.sync_controller.adopt_resources,
        ));

        debug!(name = cfg.name(), violations = errs.len(), "operator config validated");
        errs
    }

    /// Validates leader election timing and lock type.
    fn validate_leader_elect(&self, elect: &LeaderElectConfig, path: &FieldPath) -> ErrorList {
        let lease_path = path.child("leaseDuration");
        let renew_path = path.child("renewDeadline");

        let mut errs = validate_positive_duration(&lease_path, elect.lease_duration);
        errs.append(validate_positive_duration(&renew_path, elect.renew_deadline));
        errs.append(validate_positive_duration(&path.child("retryPeriod"), elect.retry_period));
        if elect.lease_duration <= elect.renew_deadline {
            errs.push(FieldError::invalid(lease_path, elect.lease_duration, LEASE_DURATION_ERROR));
        }
        if !self.jitter.exceeds_jittered(elect.renew_deadline, elect.retry_period) {
            errs.push(FieldError::invalid(renew_path, elect.renew_deadline, RENEW_DEADLINE_ERROR));
        }
        errs.append(validate_enum(&path.child("resourceLock"), &elect.resource_lock));
        errs
    }

    /// Validates feature gates in declared order, reporting repeated names.
    fn validate_feature_gates(&self, gates: &[FeatureGate], path: &FieldPath) -> ErrorList {
        let known = self.features.names();
        let mut seen = BTreeSet::new();
        let mut errs = ErrorList::new();
        for (idx, gate) in gates.iter().enumerate() {
            let gate_path = path.index(idx);
            if !seen.insert(gate.name.as_str()) {
                errs.push(FieldError::duplicate(gate_path.child("name"), gate.name.as_str()));
                continue;
            }
            errs.append(validate_enum_strings(&gate_path.child("name"), &gate.name, &known));
            errs.append(validate_enum::<GateConfiguration>(
                &gate_path.child("configuration"),
                &gate.configuration,
            ));
        }
        errs
    }
}

/// Validates an operator config with the default jitter factor and features.
#[must_use]
pub fn validate_operator_config(cfg: &OperatorConfig) -> ErrorList {
    OperatorConfigValidator::default().validate(cfg)
}

/// Validates cluster availability delays.
fn validate_controller_duration(duration: &ControllerDuration, path: &FieldPath) -> ErrorList {
    let mut errs =
        validate_positive_duration(&path.child("availableDelay"), duration.available_delay);
    errs.append(validate_positive_duration(
        &path.child("unavailableDelay"),
        duration.unavailable_delay,
    ));
    errs
}

/// Validates health check thresholds.
fn validate_health_check(health: &ClusterHealthCheckConfig, path: &FieldPath) -> ErrorList {
    let mut errs = validate_positive(&path.child("periodSeconds"), health.period_seconds);
    errs.append(validate_positive(&path.child("failureThreshold"), health.failure_threshold));
    errs.append(validate_positive(&path.child("successThreshold"), health.success_threshold));
    errs.append(validate_positive(&path.child("timeoutSeconds"), health.timeout_seconds));
    errs
}

// ============================================================================
// SECTION: Tests
// ============================================================================
