// kubefed-config/src/naming.rs
// ============================================================================
// Module: Type Config Naming
// Description: Derivation of a type config's expected name from its target type.
// Purpose: Injectable naming strategy for the name-convention check.
// Dependencies: crate::model
// ============================================================================

//! ## Overview
//! A type config must be named after the resource type it federates. The
//! derivation is a pure function of the target [`ApiResource`] and sits behind
//! [`NameConvention`] so it can evolve or be replaced in tests without touching
//! the validator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::model::ApiResource;

// ============================================================================
// SECTION: Naming Strategy
// ============================================================================

/// Derives the expected type config name for a target type.
pub trait NameConvention: Send + Sync {
    /// Returns the name a type config for `target` must carry.
    fn expected_name(&self, target: &ApiResource) -> String;
}

impl<F> NameConvention for F
where
    F: Fn(&ApiResource) -> String + Send + Sync,
{
    fn expected_name(&self, target: &ApiResource) -> String {
        self(target)
    }
}

/// Default convention: `PLURAL` for core types, `PLURAL.GROUP` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupQualifiedName;

impl NameConvention for GroupQualifiedName {
    fn expected_name(&self, target: &ApiResource) -> String {
        group_qualified_name(target)
    }
}

/// Returns the plural name, suffixed by `.group` when the group is non-empty.
#[must_use]
pub fn group_qualified_name(resource: &ApiResource) -> String {
    if resource.group.is_empty() {
        resource.plural_name.clone()
    } else {
        format!("{}.{}", resource.plural_name, resource.group)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
