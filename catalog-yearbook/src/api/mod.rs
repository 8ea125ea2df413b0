//! HTTP API handlers for catalog-yearbook

pub mod courses;
pub mod health;

pub use courses::{greeting, name_and_specialization, published_courses, sorted_by_name};
pub use health::health_routes;
