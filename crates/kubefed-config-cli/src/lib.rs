// kubefed-config-cli/src/lib.rs
// ============================================================================
// Module: KubeFed Config CLI Library
// Description: Shared helpers for the kubefed-config command-line interface.
// Purpose: Keep report building and rendering testable apart from the binary.
// Dependencies: kubefed-config, serde
// ============================================================================

//! This library houses the report types the `kubefed-config` binary prints.
//! The entry point (`src/main.rs`) parses arguments and writes whatever these
//! helpers produce.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Validation reports and feature listings.
pub mod report;
