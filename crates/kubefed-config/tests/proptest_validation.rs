//! Validation property-based tests.
//!
//! ## Purpose
//! These tests exercise the validators with randomized inputs to show that
//! results depend only on the object, repeated keys are counted exactly, and
//! the type config name check agrees with the naming convention.
// kubefed-config/tests/proptest_validation.rs
// ============================================================================
// Module: Validation Property-Based Tests
// Description: Randomized checks over operator and type config validation.
// Purpose: Ensure validation is deterministic and its counting rules hold.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use kubefed_config::ErrorType;
use kubefed_config::GateConfiguration;
use kubefed_config::naming::group_qualified_name;
use kubefed_config::validate_operator_config;
use kubefed_config::validate_type_config;
use proptest::prelude::*;
use time::Duration;

mod common;

const GATE_POOL: &[&str] =
    &["PushReconciler", "SchedulerPreferences", "CrossClusterServiceDiscovery", "Unknown"];

fn gate_names() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(GATE_POOL), 0..12)
}

proptest! {
    #[test]
    fn operator_validation_is_deterministic(
        lease in -5_000i64..20_000,
        renew in -5_000i64..20_000,
        retry in -5_000i64..20_000,
        period in -3i64..30,
        names in gate_names(),
    ) {
        let mut cfg = common::operator_config();
        cfg.spec.leader_elect.lease_duration = Duration::milliseconds(lease);
        cfg.spec.leader_elect.renew_deadline = Duration::milliseconds(renew);
        cfg.spec.leader_elect.retry_period = Duration::milliseconds(retry);
        cfg.spec.cluster_health_check.period_seconds = period;
        cfg.spec.feature_gates =
            names.iter().map(|name| common::gate(name, GateConfiguration::Enabled)).collect();

        let first = validate_operator_config(&cfg);
        let second = validate_operator_config(&cfg.clone());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_repeated_gate_is_reported_once(names in gate_names()) {
        let mut cfg = common::operator_config();
        cfg.spec.feature_gates =
            names.iter().map(|name| common::gate(name, GateConfiguration::Disabled)).collect();

        let distinct: BTreeSet<&str> = names.iter().copied().collect();
        let errs = validate_operator_config(&cfg);
        let duplicates = errs.iter().filter(|error| error.kind == ErrorType::Duplicate).count();
        prop_assert_eq!(duplicates, names.len() - distinct.len());
    }

    #[test]
    fn lease_ordering_matches_durations(lease in 1i64..20_000, renew in 1i64..20_000) {
        let mut cfg = common::operator_config();
        cfg.spec.leader_elect.lease_duration = Duration::milliseconds(lease);
        cfg.spec.leader_elect.renew_deadline = Duration::milliseconds(renew);
        cfg.spec.leader_elect.retry_period = Duration::milliseconds(1);

        let errs = validate_operator_config(&cfg);
        let flagged = errs
            .iter()
            .any(|error| error.field.to_string() == "spec.leaderElect.leaseDuration");
        prop_assert_eq!(flagged, lease <= renew);
    }

    #[test]
    fn derived_name_always_passes(
        plural in "[a-z][a-z0-9]{0,20}",
        group in prop::option::of("[a-z]{1,10}(\\.[a-z]{1,10}){0,2}"),
    ) {
        let mut obj = common::pod_type_config();
        obj.spec.target_type.plural_name = plural;
        obj.spec.target_type.group = group.unwrap_or_default();
        obj.metadata.name = group_qualified_name(&obj.spec.target_type);

        prop_assert!(validate_type_config(&obj, false).is_empty());
    }

    #[test]
    fn any_other_name_is_the_only_violation(name in "[a-z.]{0,30}") {
        let obj = common::pod_type_config();
        prop_assume!(name != group_qualified_name(&obj.spec.target_type));
        let mut obj = obj;
        obj.metadata.name = name;
        obj.spec.federated_type.group = "nodots".to_string();

        let errs = validate_type_config(&obj, false);
        prop_assert_eq!(errs.len(), 1);
        prop_assert_eq!(errs.as_slice()[0].field.to_string(), "name");
    }
}
