//! usermgr — user management console for a REST users API (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod api;
pub mod config;
pub mod console;
pub mod constants;
pub mod env;
pub mod logging;
pub mod messages;
pub mod models;
pub mod output;
