// kubefed-config/src/validation/mod.rs
// ============================================================================
// Module: Validation
// Description: Field validators for type configs and operator configs.
// Purpose: Produce the complete, ordered violation list for an object in one pass.
// Dependencies: crate::{field, model, naming, features}, tracing
// ============================================================================

//! ## Overview
//! Every validator is a pure function from an immutable object (and a field
//! path prefix) to an [`ErrorList`](crate::field::ErrorList). Validators
//! compose by concatenation: every applicable check runs regardless of earlier
//! failures, so callers see all violations at once. The only exclusive branch
//! is the type config name check, which replaces spec validation when the name
//! does not match its target type.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod common;
mod operator;
mod resource;
mod type_config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use common::validate_enum;
pub use common::validate_enum_strings;
pub use operator::DEFAULT_JITTER_FACTOR;
pub use operator::JitterFactor;
pub use operator::LEASE_DURATION_ERROR;
pub use operator::OperatorConfigValidator;
pub use operator::RENEW_DEADLINE_ERROR;
pub use operator::validate_operator_config;
pub use resource::validate_api_resource;
pub use resource::validate_federated_api_resource;
pub use resource::validate_status_api_resource;
pub use type_config::TYPE_CONFIG_NAME_ERROR;
pub use type_config::TypeConfigValidator;
pub use type_config::validate_type_config;
pub use type_config::validate_type_config_status;

// ============================================================================
// SECTION: Validator Bundle
// ============================================================================

/// Configured validators for every supported object kind.
#[derive(Default)]
pub struct Validators {
    /// Type config validator.
    pub type_config: TypeConfigValidator,
    /// Operator config validator.
    pub operator: OperatorConfigValidator,
}

impl Validators {
    /// Bundles explicitly configured validators.
    #[must_use]
    pub const fn new(type_config: TypeConfigValidator, operator: OperatorConfigValidator) -> Self {
        Self {
            type_config,
            operator,
        }
    }
}
