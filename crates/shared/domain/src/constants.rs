//! Well-known names shared between the router, the handlers and the `OpenAPI` document.

/// Prefix under which every data endpoint is mounted.
pub const API_PREFIX: &str = "/api";

/// Path of the interactive API reference.
pub const DOCS_PATH: &str = "/api/docs";

/// Environment variable prefix for configuration overrides (`GNOMIX__SERVER__PORT`).
pub const ENV_PREFIX: &str = "GNOMIX";

/// Default configuration file, resolved relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/server.toml";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const STATS_TAG: &str = "Stats";
pub const CONTENT_TAG: &str = "Content";
