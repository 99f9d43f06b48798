//! Pure functions that shape the published courses view.
//!
//! The aggregation service fetches data and hands it to these functions;
//! nothing here performs I/O.

use std::collections::HashMap;

use super::{CatalogError, Course, CourseWithEnrollments, EnrolledUser, Enrollment, User};

/// Lookup table from user id to the details shown for an enrolled user.
pub type UserDirectory = HashMap<u64, EnrolledUser>;

/// Keeps only published courses, preserving upstream order.
pub fn filter_published(courses: Vec<Course>) -> Vec<Course> {
    courses.into_iter().filter(|c| c.is_published).collect()
}

/// Builds the user lookup table.
///
/// Duplicate ids are not expected upstream; if they occur the last user wins.
pub fn build_user_directory(users: &[User]) -> UserDirectory {
    users
        .iter()
        .map(|user| (user.id, EnrolledUser::from(user)))
        .collect()
}

/// Resolves every enrollment of `course` against `directory`.
///
/// Enrollment order is preserved. An enrollment whose user is missing from
/// the directory fails the whole course with [`CatalogError::UnknownUser`].
pub fn join_enrollments(
    course: &Course,
    enrollments: &[Enrollment],
    directory: &UserDirectory,
) -> Result<CourseWithEnrollments, CatalogError> {
    let enrollments = enrollments
        .iter()
        .map(|enrollment| {
            directory
                .get(&enrollment.user_id)
                .cloned()
                .ok_or(CatalogError::UnknownUser {
                    course_id: course.id,
                    user_id: enrollment.user_id,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CourseWithEnrollments {
        course_name: course.name.clone(),
        course_heading: course.heading.clone(),
        enrollments,
    })
}
