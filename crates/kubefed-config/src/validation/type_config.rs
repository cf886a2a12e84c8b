// kubefed-config/src/validation/type_config.rs
// ============================================================================
// Module: Type Config Validation
// Description: Name convention, spec, and status checks for type configs.
// Purpose: Validate a FederatedTypeConfig in its main or status pass.
// Dependencies: crate::{field, model, naming}, tracing
// ============================================================================

//! Type config validation runs in one of two mutually exclusive passes: the
//! main pass (name convention, then spec) or the status sub-resource pass.

use tracing::debug;

use crate::field::ErrorList;
use crate::field::FieldError;
use crate::field::FieldPath;
use crate::model::TypeConfig;
use crate::model::TypeConfigSpec;
use crate::model::TypeConfigStatus;
use crate::naming::GroupQualifiedName;
use crate::naming::NameConvention;
use crate::validation::common::validate_enum;
use crate::validation::common::validate_nonnegative;
use crate::validation::resource::validate_api_resource;
use crate::validation::resource::validate_federated_api_resource;
use crate::validation::resource::validate_status_api_resource;

/// Detail reported when a type config name does not follow its target type.
pub const TYPE_CONFIG_NAME_ERROR: &str = "name must be 'TARGET_PLURAL_NAME(.TARGET_GROUP_NAME)'";

/// Validator for federated type configs.
pub struct TypeConfigValidator {
    /// Strategy deriving the expected object name.
    naming: Box<dyn NameConvention>,
}

impl Default for TypeConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeConfigValidator {
    /// Creates a validator using [`GroupQualifiedName`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_naming(GroupQualifiedName)
    }

    /// Creates a validator with a custom naming convention.
    #[must_use]
    pub fn with_naming(naming: impl NameConvention + 'static) -> Self {
        Self {
            naming: Box::new(naming),
        }
    }

    /// Validates a type config.
    ///
    /// With `status_sub_resource` unset, the name is checked first; a mismatch
    /// is the only reported violation and `spec` is not examined. Otherwise
    /// only the status is validated.
    #[must_use]
    pub fn validate(&self, obj: &TypeConfig, status_sub_resource: bool) -> ErrorList {
        debug!(name = obj.name(), status_sub_resource, "validating type config");
        let errs = if status_sub_resource {
            validate_type_config_status(&obj.status, &FieldPath::new("status"))
        } else {
            let name_errs = self.validate_name(obj);
            if name_errs.is_empty() {
                validate_spec(&obj.spec, &FieldPath::new("spec"))
            } else {
                name_errs
            }
        };
        debug!(name = obj.name(), violations = errs.len(), "type config validated");
        errs
    }

    /// Checks that the object name matches the one derived from its target type.
    #[must_use]
    pub fn validate_name(&self, obj: &TypeConfig) -> ErrorList {
        let expected = self.naming.expected_name(obj.target_type());
        if expected == obj.name() {
            return ErrorList::new();
        }
        FieldError::invalid(FieldPath::new("name"), obj.name(), TYPE_CONFIG_NAME_ERROR).into()
    }
}

/// Validates a type config with the default naming convention.
#[must_use]
pub fn validate_type_config(obj: &TypeConfig, status_sub_resource: bool) -> ErrorList {
    TypeConfigValidator::new().validate(obj, status_sub_resource)
}

/// Validates the `spec` section of a type config.
fn validate_spec(spec: &TypeConfigSpec, path: &FieldPath) -> ErrorList {
    let mut errs = validate_api_resource(&spec.target_type, &path.child("targetType"));
    errs.append(validate_enum(&path.child("propagation"), &spec.propagation));
    errs.append(validate_federated_api_resource(
        &spec.federated_type,
        &path.child("federatedType"),
    ));
    if let Some(status_type) = &spec.status_type {
        errs.append(validate_status_api_resource(status_type, &path.child("statusType")));
    }
    if let Some(status_collection) = &spec.status_collection {
        errs.append(validate_enum(&path.child("statusCollection"), status_collection));
    }
    errs
}

/// Validates the status of a type config.
#[must_use]
pub fn validate_type_config_status(status: &TypeConfigStatus, path: &FieldPath) -> ErrorList {
    let mut errs =
        validate_nonnegative(&path.child("observedGeneration"), status.observed_generation);
    errs.append(validate_enum(
        &path.child("propagationController"),
        &status.propagation_controller,
    ));
    if let Some(status_controller) = &status.status_controller {
        errs.append(validate_enum(&path.child("statusController"), status_controller));
    }
    errs
}
