// kubefed-config/src/validation/resource.rs
// ============================================================================
// Module: Resource Descriptor Validation
// Description: Checks for group/version/kind/plural/scope descriptors.
// Purpose: Validate target, federated, and status type descriptors.
// Dependencies: crate::{dns, field, model}
// ============================================================================

//! Descriptor checks. The lenient form accepts an empty (core) group; the
//! strict form used for federated and status types requires a dotted group.

use crate::dns::is_dns1035_label;
use crate::dns::is_dns1123_subdomain;
use crate::dns::label_count;
use crate::field::ErrorList;
use crate::field::FieldError;
use crate::field::FieldPath;
use crate::model::ApiResource;
use crate::validation::common::validate_enum;

/// Detail for federated groups without a dot.
pub(crate) const DOMAIN_WITH_AT_LEAST_ONE_DOT: &str = "should be a domain with at least one dot";

/// Validates an API resource descriptor.
///
/// An empty group denotes a core type and is accepted.
#[must_use]
pub fn validate_api_resource(obj: &ApiResource, path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();

    if !obj.group.is_empty() {
        let problems = is_dns1123_subdomain(&obj.group);
        if !problems.is_empty() {
            errs.push(FieldError::invalid(
                path.child("group"),
                obj.group.as_str(),
                problems.join(","),
            ));
        }
    }

    errs.append(validate_label(&path.child("version"), &obj.version, &obj.version));
    errs.append(validate_label(&path.child("kind"), &obj.kind, &obj.kind.to_lowercase()));
    errs.append(validate_label(&path.child("pluralName"), &obj.plural_name, &obj.plural_name));
    errs.append(validate_enum(&path.child("scope"), &obj.scope));

    errs
}

/// Validates a federated type descriptor.
///
/// The group is mandatory and must have at least two `.`-separated labels so a
/// federated type never lands in a core or single-label group.
#[must_use]
pub fn validate_federated_api_resource(obj: &ApiResource, path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();

    if obj.group.is_empty() {
        errs.push(FieldError::required(path.child("group"), ""));
    } else if label_count(&obj.group) < 2 {
        errs.push(FieldError::invalid(
            path.child("group"),
            obj.group.as_str(),
            DOMAIN_WITH_AT_LEAST_ONE_DOT,
        ));
    }

    errs.append(validate_api_resource(obj, path));
    errs
}

/// Validates a status type descriptor with the federated group rules.
#[must_use]
pub fn validate_status_api_resource(obj: &ApiResource, path: &FieldPath) -> ErrorList {
    validate_federated_api_resource(obj, path)
}

/// Requires `value` and checks `normalized` as an RFC 1035 label.
///
/// The violation reports the original spelling.
fn validate_label(path: &FieldPath, value: &str, normalized: &str) -> ErrorList {
    if value.is_empty() {
        return FieldError::required(path.clone(), "").into();
    }
    let problems = is_dns1035_label(normalized);
    if problems.is_empty() {
        return ErrorList::new();
    }
    FieldError::invalid(path.clone(), value, problems.join(",")).into()
}
