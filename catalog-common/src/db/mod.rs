//! Document store access
//!
//! The store owns persisted documents; handlers only hold request-scoped
//! copies returned from these repositories.

pub mod courses;
pub mod init;
pub mod years;

pub use courses::CourseStore;
pub use init::*;
pub use years::YearStore;
