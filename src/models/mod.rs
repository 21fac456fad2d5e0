//! Shared types used across all modules.
//!
//! The users resource, the request bodies sent to the API, and the
//! uniform result record every API call produces. Other modules import
//! from here rather than reaching into each other's internals.

pub mod result;
pub mod user;

use strum::{Display, EnumString};

pub use result::RequestResult;
pub use user::{NewUser, User, UserPatch};

/// HTTP method used by the request helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}
