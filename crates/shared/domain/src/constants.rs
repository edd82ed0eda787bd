//! Names shared between the HTTP layer, the CLI and the docs.

/// `OpenAPI` tag for health and diagnostics endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the CURP analysis endpoints.
pub const ANALYSIS_TAG: &str = "Analysis";

/// Prefix for environment overrides (`CURP__SERVER__PORT`).
pub const ENV_PREFIX: &str = "CURP";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Config file stem looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";
