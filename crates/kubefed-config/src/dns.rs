// kubefed-config/src/dns.rs
// ============================================================================
// Module: DNS Name Predicates
// Description: RFC 1123 subdomain and RFC 1035 label syntax checks.
// Purpose: Reusable string-validity predicates for API group and name fields.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! Each predicate returns the list of human-readable problems with the input;
//! an empty list means the value is valid. The messages match the Kubernetes
//! apimachinery wording so violations read the same as API server responses.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum length of an RFC 1123 subdomain.
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
/// Maximum length of an RFC 1035 label.
pub const DNS1035_LABEL_MAX_LENGTH: usize = 63;

/// Pattern for an RFC 1123 subdomain.
const DNS1123_SUBDOMAIN_FMT: &str =
    "[a-z0-9]([-a-z0-9]*[a-z0-9])?(\\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*";
/// Pattern for an RFC 1035 label.
const DNS1035_LABEL_FMT: &str = "[a-z]([-a-z0-9]*[a-z0-9])?";

/// Anchored RFC 1123 subdomain matcher.
#[allow(clippy::expect_used, reason = "The pattern is a compile-time constant.")]
static DNS1123_SUBDOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DNS1123_SUBDOMAIN_FMT}$")).expect("valid subdomain pattern")
});

/// Anchored RFC 1035 label matcher.
#[allow(clippy::expect_used, reason = "The pattern is a compile-time constant.")]
static DNS1035_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DNS1035_LABEL_FMT}$")).expect("valid label pattern")
});

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Checks that `value` is a lowercase RFC 1123 subdomain.
#[must_use]
pub fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errs.push(max_len_error(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    if !DNS1123_SUBDOMAIN_RE.is_match(value) {
        errs.push(format!(
            "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, \
             '-' or '.', and must start and end with an alphanumeric character (e.g. \
             'example.com', regex used for validation is '{DNS1123_SUBDOMAIN_FMT}')"
        ));
    }
    errs
}

/// Checks that `value` is an RFC 1035 label.
#[must_use]
pub fn is_dns1035_label(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > DNS1035_LABEL_MAX_LENGTH {
        errs.push(max_len_error(DNS1035_LABEL_MAX_LENGTH));
    }
    if !DNS1035_LABEL_RE.is_match(value) {
        errs.push(format!(
            "a DNS-1035 label must consist of lower case alphanumeric characters or '-', start \
             with an alphabetic character, and end with an alphanumeric character (e.g. \
             'my-name', or 'abc-123', regex used for validation is '{DNS1035_LABEL_FMT}')"
        ));
    }
    errs
}

/// Returns the number of `.`-separated labels in a domain.
#[must_use]
pub fn label_count(value: &str) -> usize {
    value.split('.').count()
}

/// Formats the maximum-length problem message.
fn max_len_error(length: usize) -> String {
    format!("must be no more than {length} characters")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
