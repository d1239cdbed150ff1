//! Confluence domain module.
//!
//! Upstream access for the tools: credentials, the REST client and the wire
//! models the projections read from.

mod auth;
mod client;
mod error;
pub mod model;

pub use auth::Credentials;
pub use client::{ConfluenceClient, QueryParams};
pub use error::ConfluenceError;
