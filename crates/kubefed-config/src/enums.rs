// kubefed-config/src/enums.rs
// ============================================================================
// Module: Closed Enumerations
// Description: Tagged enum domains and the raw-preserving field wrapper.
// Purpose: Keep enum legality in the type system while still reporting bad input.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every enumerated configuration value (scope, propagation, controller run
//! state, resource lock, toggles) is a Rust enum implementing [`ClosedSet`].
//! Objects hold these values inside an [`EnumField`], which keeps the raw
//! string when it is empty or outside the closed set. Deserialization never
//! fails on an unknown enum value; validation reports it instead, alongside
//! every other violation in the object.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Closed Set Trait
// ============================================================================

/// Enumerated domain with a fixed set of wire values.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Canonical wire values, in declaration order.
    const ACCEPTED: &'static [&'static str];

    /// Parses a wire value, including accepted aliases.
    fn parse(value: &str) -> Option<Self>;

    /// Returns the canonical wire value.
    fn as_str(self) -> &'static str;
}

/// Declares a [`ClosedSet`] enum with its wire values and optional aliases.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl ClosedSet for $name {
            const ACCEPTED: &'static [&'static str] = &[$($wire),+];

            fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $wire $(| $alias)* => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ============================================================================
// SECTION: Enumerated Domains
// ============================================================================

closed_set! {
    /// Scope of an API resource or of the control plane itself.
    pub enum ResourceScope {
        /// Cluster-scoped resources.
        Cluster => "Cluster",
        /// Namespace-scoped resources. `Namespace` is accepted as an alias.
        Namespaced => "Namespaced" | "Namespace",
    }
}

closed_set! {
    /// Whether federated objects of a type are propagated to member clusters.
    pub enum PropagationMode {
        /// Propagation is active.
        Enabled => "Enabled",
        /// Propagation is paused.
        Disabled => "Disabled",
    }
}

closed_set! {
    /// Whether per-cluster status is collected for a type.
    pub enum StatusCollectionMode {
        /// Status collection is active.
        Enabled => "Enabled",
        /// Status collection is off.
        Disabled => "Disabled",
    }
}

closed_set! {
    /// Run state reported for a type's controllers.
    pub enum ControllerStatus {
        /// Controller is running.
        Running => "Running",
        /// Controller is stopped.
        NotRunning => "NotRunning",
    }
}

closed_set! {
    /// Resource kind used to hold the leader-election lock.
    pub enum ResourceLockType {
        /// ConfigMap-backed lock.
        ConfigMaps => "configmaps",
        /// Endpoints-backed lock.
        Endpoints => "endpoints",
    }
}

closed_set! {
    /// Enablement override for a feature gate.
    pub enum GateConfiguration {
        /// Force the feature on.
        Enabled => "Enabled",
        /// Force the feature off.
        Disabled => "Disabled",
    }
}

closed_set! {
    /// Whether the sync controller adopts pre-existing resources.
    pub enum AdoptResourcesMode {
        /// Adopt matching resources in member clusters.
        Enabled => "Enabled",
        /// Leave pre-existing resources untouched.
        Disabled => "Disabled",
    }
}

// ============================================================================
// SECTION: Enum Field Wrapper
// ============================================================================

/// Enum-typed field that preserves unrecognized input for validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumField<T> {
    /// Field is absent or empty.
    Missing,
    /// Field holds a value from the closed set.
    Known(T),
    /// Field holds a value outside the closed set.
    Unrecognized(String),
}

impl<T> Default for EnumField<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T: ClosedSet> EnumField<T> {
    /// Classifies a raw wire string.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Missing;
        }
        T::parse(raw).map_or_else(|| Self::Unrecognized(raw.to_string()), Self::Known)
    }

    /// Returns the wire string held by the field (empty when missing).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Missing => "",
            Self::Known(value) => value.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns the typed value when the field is recognized.
    #[must_use]
    pub const fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Missing | Self::Unrecognized(_) => None,
        }
    }
}

impl<T: ClosedSet> From<T> for EnumField<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: ClosedSet> Serialize for EnumField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: ClosedSet> Deserialize<'de> for EnumField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::Missing, |raw| Self::from_raw(&raw)))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn scope_accepts_namespace_alias() {
        assert_eq!(ResourceScope::parse("Namespace"), Some(ResourceScope::Namespaced));
        assert_eq!(ResourceScope::parse("Namespaced"), Some(ResourceScope::Namespaced));
        assert_eq!(ResourceScope::Namespaced.as_str(), "Namespaced");
        assert_eq!(ResourceScope::ACCEPTED, &["Cluster", "Namespaced"]);
    }

    #[test]
    fn lock_types_use_lowercase_wire_values() {
        assert_eq!(ResourceLockType::parse("configmaps"), Some(ResourceLockType::ConfigMaps));
        assert_eq!(ResourceLockType::parse("ConfigMaps"), None);
        assert_eq!(ResourceLockType::Endpoints.to_string(), "endpoints");
    }

    #[test]
    fn enum_field_classifies_raw_strings() {
        assert_eq!(EnumField::<ControllerStatus>::from_raw(""), EnumField::Missing);
        assert_eq!(
            EnumField::<ControllerStatus>::from_raw("Running"),
            EnumField::Known(ControllerStatus::Running)
        );
        assert_eq!(
            EnumField::<ControllerStatus>::from_raw("running"),
            EnumField::Unrecognized("running".to_string())
        );
    }

    #[test]
    fn enum_field_deserializes_without_failing_on_unknown_values() {
        let field: EnumField<PropagationMode> = serde_json::from_str("\"Paused\"").unwrap();
        assert_eq!(field.as_str(), "Paused");
        assert_eq!(field.known(), None);
        let field: EnumField<PropagationMode> = serde_json::from_str("null").unwrap();
        assert_eq!(field, EnumField::Missing);
        let field: EnumField<PropagationMode> = serde_json::from_str("\"Enabled\"").unwrap();
        assert_eq!(field.known(), Some(PropagationMode::Enabled));
    }

    #[test]
    fn enum_field_serializes_canonical_value() {
        let field = EnumField::<ResourceScope>::from_raw("Namespace");
        assert_eq!(serde_json::to_string(&field).unwrap(), "\"Namespaced\"");
    }
}
