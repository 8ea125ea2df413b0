//! # Course Catalog Common Library
//!
//! Shared code for the course catalog services including:
//! - Course and year-document models
//! - Flattening of year documents into a course list
//! - Query engine (sorting, name/specialization search, tag and code filters)
//! - Projection to reduced course views
//! - Full-record validation for writes
//! - Document store access and seed import
//! - Configuration resolution
//! - HTTP error mapping

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod normalize;
pub mod projection;
pub mod query;
pub mod seed;
pub mod validation;

pub use error::{Error, Result};
pub use model::{Course, CourseRecord, ProjectedCourse, YearDocument, YearKey};
