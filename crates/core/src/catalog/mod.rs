mod error;
mod operations;
mod types;

pub use error::CatalogError;
pub use operations::{build_user_directory, filter_published, join_enrollments, UserDirectory};
pub use types::{Course, CourseWithEnrollments, EnrolledUser, Enrollment, User};
