//! Domains module containing business logic organized by bounded contexts.
//!
//! - **confluence**: upstream REST client, credentials and wire models
//! - **tools**: the MCP tools built on top of it

pub mod confluence;
pub mod tools;
