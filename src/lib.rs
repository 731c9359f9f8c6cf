//! Schema-validated HTTP contract tests for the reqres.in demo REST service.
//!
//! Each [`case::ContractCase`] issues one request through the
//! [`client::ApiClient`], checks literal expectations on the response, and
//! validates the whole body against a JSON Schema from a
//! [`schema::SchemaStore`]. A [`suite::Suite`] runs cases independently and
//! collects a pass/fail [`suite::SuiteReport`].

pub mod assertion;
pub mod case;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod schema;
pub mod suite;

pub use error::{ErrorKind, HarnessError, SchemaLoadError};
