//! HTTP inbound adapter exposing REST endpoints.

pub mod answers;
pub mod envelope;
pub mod error;
pub mod health;
pub mod questions;
pub mod routing;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;
