// kubefed-config/src/field.rs
// ============================================================================
// Module: Field Errors
// Description: Path-annotated validation errors and their aggregate list.
// Purpose: Report every violation with the field path, kind, and offending value.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Validation results are expressed as an [`ErrorList`] of [`FieldError`]
//! entries. Each entry names the field through a segmented [`FieldPath`]
//! (`spec.featureGates[1].name`), the violation kind, the offending value when
//! one applies, and either an explanatory detail or the accepted value set.
//! Rendering follows the Kubernetes field-error wording so messages read the
//! same as API server rejections.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde::Serializer;
use time::Duration;

use crate::duration::format_go_duration;

// ============================================================================
// SECTION: Field Paths
// ============================================================================

/// One segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PathSegment {
    /// Named struct field.
    Field(String),
    /// Positional index into a sequence.
    Index(usize),
}

/// Segmented path to a field inside a validated object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Ordered path segments from the root.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates a root path with a single named segment.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(root.into())],
        }
    }

    /// Returns a new path extended by a named child field.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self {
            segments,
        }
    }

    /// Returns a new path extended by a sequence index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self {
            segments,
        }
    }

    /// Returns the number of segments in the path.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if idx == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// SECTION: Field Values
// ============================================================================

/// Offending value carried by a field error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// No value is reported (required fields).
    Omitted,
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Duration value.
    Duration(Duration),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Omitted => f.write_str("null"),
            Self::String(value) => write!(f, "\"{}\"", value.escape_default()),
            Self::Int(value) => write!(f, "{value}"),
            Self::Duration(value) => write!(f, "\"{}\"", format_go_duration(*value)),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Omitted => serializer.serialize_none(),
            Self::String(value) => serializer.serialize_str(value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Duration(value) => serializer.collect_str(&format_go_duration(*value)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Duration> for FieldValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

// ============================================================================
// SECTION: Field Errors
// ============================================================================

/// Kind of field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorType {
    /// A mandatory field is absent or empty.
    #[serde(rename = "FieldValueRequired")]
    Required,
    /// A value is present but syntactically or semantically wrong.
    #[serde(rename = "FieldValueInvalid")]
    Invalid,
    /// A value is outside a closed enumerated set.
    #[serde(rename = "FieldValueNotSupported")]
    NotSupported,
    /// A key that must be unique within a sequence appeared again.
    #[serde(rename = "FieldValueDuplicate")]
    Duplicate,
}

impl ErrorType {
    /// Returns the human-readable label for the violation kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Required => "Required value",
            Self::Invalid => "Invalid value",
            Self::NotSupported => "Unsupported value",
            Self::Duplicate => "Duplicate value",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single path-annotated validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Violation kind.
    #[serde(rename = "type")]
    pub kind: ErrorType,
    /// Path of the offending field.
    pub field: FieldPath,
    /// Offending value, when applicable.
    pub bad_value: FieldValue,
    /// Explanatory detail.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
    /// Accepted values for [`ErrorType::NotSupported`] violations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported: Vec<String>,
}

impl FieldError {
    /// Builds a [`ErrorType::Required`] violation.
    #[must_use]
    pub fn required(field: FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorType::Required,
            field,
            bad_value: FieldValue::Omitted,
            detail: detail.into(),
            supported: Vec::new(),
        }
    }

    /// Builds an [`ErrorType::Invalid`] violation.
    #[must_use]
    pub fn invalid(
        field: FieldPath,
        value: impl Into<FieldValue>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorType::Invalid,
            field,
            bad_value: value.into(),
            detail: detail.into(),
            supported: Vec::new(),
        }
    }

    /// Builds an [`ErrorType::NotSupported`] violation listing the accepted values.
    #[must_use]
    pub fn not_supported<S: AsRef<str>>(
        field: FieldPath,
        value: impl Into<FieldValue>,
        supported: &[S],
    ) -> Self {
        let supported: Vec<String> =
            supported.iter().map(|value| value.as_ref().to_string()).collect();
        let detail = if supported.is_empty() {
            String::new()
        } else {
            let quoted: Vec<String> =
                supported.iter().map(|value| format!("\"{value}\"")).collect();
            format!("supported values: {}", quoted.join(", "))
        };
        Self {
            kind: ErrorType::NotSupported,
            field,
            bad_value: value.into(),
            detail,
            supported,
        }
    }

    /// Builds an [`ErrorType::Duplicate`] violation.
    #[must_use]
    pub fn duplicate(field: FieldPath, value: impl Into<FieldValue>) -> Self {
        Self {
            kind: ErrorType::Duplicate,
            field,
            bad_value: value.into(),
            detail: String::new(),
            supported: Vec::new(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)?;
        match self.kind {
            ErrorType::Required => {}
            ErrorType::Invalid | ErrorType::NotSupported | ErrorType::Duplicate => {
                write!(f, ": {}", self.bad_value)?;
            }
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Error Lists
// ============================================================================

/// Ordered collection of field violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<FieldError>);

impl ErrorList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a single violation.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Appends every violation from another list, preserving order.
    pub fn append(&mut self, mut other: Self) {
        self.0.append(&mut other.0);
    }

    /// Returns true when no violations were recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of recorded violations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the recorded violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Returns the violations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Consumes the list and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<FieldError> for ErrorList {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl From<Vec<FieldError>> for ErrorList {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => Ok(()),
            [single] => single.fmt(f),
            errors => {
                f.write_str("[")?;
                for (idx, error) in errors.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    error.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
