// kubefed-config/src/validation/common.rs
// ============================================================================
// Module: Shared Validators
// Description: Enum membership and numeric sign checks.
// Purpose: Leaf checks reused by every object validator.
// Dependencies: crate::{enums, field}, time
// ============================================================================

//! Leaf checks shared by the object validators.

use time::Duration;

use crate::enums::ClosedSet;
use crate::enums::EnumField;
use crate::field::ErrorList;
use crate::field::FieldError;
use crate::field::FieldPath;

/// Detail for values that must be strictly positive.
pub(crate) const GREATER_THAN_ZERO: &str = "should be greater than 0";
/// Detail for values that must not be negative.
pub(crate) const NON_NEGATIVE: &str = "must be greater than or equal to 0";

/// Checks a string against an accepted set.
///
/// An empty value is [`Required`](crate::field::ErrorType::Required); a value
/// outside `accepted` is [`NotSupported`](crate::field::ErrorType::NotSupported)
/// and lists the accepted set.
#[must_use]
pub fn validate_enum_strings<S: AsRef<str>>(
    path: &FieldPath,
    value: &str,
    accepted: &[S],
) -> ErrorList {
    if value.is_empty() {
        return FieldError::required(path.clone(), "").into();
    }
    if accepted.iter().any(|candidate| candidate.as_ref() == value) {
        return ErrorList::new();
    }
    FieldError::not_supported(path.clone(), value, accepted).into()
}

/// Checks a typed enum field, reporting missing or unrecognized values.
#[must_use]
pub fn validate_enum<T: ClosedSet>(path: &FieldPath, field: &EnumField<T>) -> ErrorList {
    match field {
        EnumField::Known(_) => ErrorList::new(),
        EnumField::Missing => FieldError::required(path.clone(), "").into(),
        EnumField::Unrecognized(raw) => {
            FieldError::not_supported(path.clone(), raw.as_str(), T::ACCEPTED).into()
        }
    }
}

/// Checks that an integer is strictly positive.
pub(crate) fn validate_positive(path: &FieldPath, value: i64) -> ErrorList {
    if value <= 0 {
        return FieldError::invalid(path.clone(), value, GREATER_THAN_ZERO).into();
    }
    ErrorList::new()
}

/// Checks that a duration is strictly positive.
pub(crate) fn validate_positive_duration(path: &FieldPath, value: Duration) -> ErrorList {
    if !value.is_positive() {
        return FieldError::invalid(path.clone(), value, GREATER_THAN_ZERO).into();
    }
    ErrorList::new()
}

/// Checks that an integer is not negative.
pub(crate) fn validate_nonnegative(path: &FieldPath, value: i64) -> ErrorList {
    if value < 0 {
        return FieldError::invalid(path.clone(), value, NON_NEGATIVE).into();
    }
    ErrorList::new()
}
