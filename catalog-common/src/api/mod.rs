//! HTTP-facing types shared by the catalog services

pub mod error;
pub mod types;

pub use error::ApiError;
pub use types::{HealthResponse, MessageBody, GREETING};
