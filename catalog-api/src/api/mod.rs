//! HTTP API handlers for catalog-api

pub mod courses;
pub mod health;
pub mod search;

pub use courses::{create_course, delete_course, get_course, greeting, update_course};
pub use health::health_routes;
pub use search::{
    all_courses, backend_courses, course_by_name, courses_by_specialization, program_courses,
};
