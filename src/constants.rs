//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and API paths so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "usermgr";

/// Crate version as reported by `usermgr version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.usermgr.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".usermgr.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "usermgr";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

// ── API paths ───────────────────────────────────────────────────────

/// Collection endpoint for the users resource.
pub const USERS_PATH: &str = "/api/users";

/// Health check endpoint.
pub const HEALTH_PATH: &str = "/health";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERMGR_BASE_URL";
pub const ENV_LOCALE: &str = "USERMGR_LOCALE";
pub const ENV_TIMEOUT_SECS: &str = "USERMGR_TIMEOUT_SECS";
