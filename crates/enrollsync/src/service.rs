//! The published-courses aggregation.
//!
//! This is the imperative shell around the pure operations in
//! `enrollsync_core::catalog`: it performs the fetches in order and hands
//! the results to the core for filtering and joining.

use std::sync::Arc;

use enrollsync_core::catalog::{
    build_user_directory, filter_published, join_enrollments, CourseWithEnrollments,
};
use enrollsync_core::storage::{CourseRepository, EnrollmentRepository, Result, UserRepository};

/// Builds the list of published courses with their enrolled students.
pub struct PublishedCoursesService {
    courses: Arc<dyn CourseRepository>,
    users: Arc<dyn UserRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl PublishedCoursesService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        users: Arc<dyn UserRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            courses,
            users,
            enrollments,
        }
    }

    /// Runs the aggregation.
    ///
    /// Courses are processed one at a time in upstream order. The first
    /// failure from any fetch, or an enrollment naming an unknown user, aborts
    /// the whole run.
    pub async fn execute(&self) -> Result<Vec<CourseWithEnrollments>> {
        let published = filter_published(self.courses.get_courses().await?);
        let directory = build_user_directory(&self.users.get_users().await?);

        let mut result = Vec::with_capacity(published.len());
        for course in &published {
            let enrollments = self.enrollments.get_enrollments_by_course(course.id).await?;
            tracing::debug!(
                course_id = course.id,
                enrollments = enrollments.len(),
                "Joining course enrollments"
            );
            result.push(join_enrollments(course, &enrollments, &directory)?);
        }

        Ok(result)
    }
}
