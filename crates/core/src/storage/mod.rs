mod error;
mod http_mapping;
mod pagination;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use pagination::{crawl_pages, Page, PaginationMeta};
pub use traits::{CourseRepository, EnrollmentRepository, UserRepository};
