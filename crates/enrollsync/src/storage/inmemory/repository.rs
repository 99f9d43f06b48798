//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use enrollsync_core::catalog::{Course, Enrollment, User};
use enrollsync_core::storage::{
    CourseRepository, EnrollmentRepository, RepositoryError, Result, UserRepository,
};

/// In-memory storage backend for testing.
///
/// Collections are returned in insertion order. A course without fixture
/// enrollments yields an empty list. Failures can be injected per resource.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    courses: RwLock<Vec<Course>>,
    users: RwLock<Vec<User>>,
    enrollments: RwLock<HashMap<u64, Vec<Enrollment>>>,
    course_failure: Option<RepositoryError>,
    user_failure: Option<RepositoryError>,
    enrollment_failures: HashMap<u64, RepositoryError>,
    course_calls: AtomicUsize,
    user_calls: AtomicUsize,
    enrollment_calls: AtomicUsize,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = RwLock::new(courses);
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = RwLock::new(users);
        self
    }

    pub fn with_enrollments(mut self, course_id: u64, enrollments: Vec<Enrollment>) -> Self {
        self.enrollments.get_mut().insert(course_id, enrollments);
        self
    }

    /// Makes every `get_courses` call fail with `err`.
    pub fn with_course_failure(mut self, err: RepositoryError) -> Self {
        self.course_failure = Some(err);
        self
    }

    /// Makes every `get_users` call fail with `err`.
    pub fn with_user_failure(mut self, err: RepositoryError) -> Self {
        self.user_failure = Some(err);
        self
    }

    /// Makes enrollment fetches for `course_id` fail with `err`.
    pub fn with_enrollment_failure(mut self, course_id: u64, err: RepositoryError) -> Self {
        self.enrollment_failures.insert(course_id, err);
        self
    }

    /// Replaces the stored courses.
    pub async fn set_courses(&self, courses: Vec<Course>) {
        *self.courses.write().await = courses;
    }

    pub fn course_calls(&self) -> usize {
        self.course_calls.load(Ordering::SeqCst)
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    pub fn enrollment_calls(&self) -> usize {
        self.enrollment_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn get_courses(&self) -> Result<Vec<Course>> {
        self.course_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.course_failure {
            return Err(err.clone());
        }
        Ok(self.courses.read().await.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_users(&self) -> Result<Vec<User>> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.user_failure {
            return Err(err.clone());
        }
        Ok(self.users.read().await.clone())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryRepository {
    async fn get_enrollments_by_course(&self, course_id: u64) -> Result<Vec<Enrollment>> {
        self.enrollment_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.enrollment_failures.get(&course_id) {
            return Err(err.clone());
        }
        Ok(self
            .enrollments
            .read()
            .await
            .get(&course_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_fixtures_and_counts_calls() {
        let repo = InMemoryRepository::new()
            .with_courses(vec![Course::new(1, "Course 1")])
            .with_users(vec![User::new(1, "Mat", "m@x.com")])
            .with_enrollments(1, vec![Enrollment::new(1, "2023-01-01")]);

        assert_eq!(repo.get_courses().await.unwrap().len(), 1);
        assert_eq!(repo.get_users().await.unwrap().len(), 1);
        assert_eq!(repo.get_enrollments_by_course(1).await.unwrap().len(), 1);
        assert!(repo.get_enrollments_by_course(2).await.unwrap().is_empty());

        assert_eq!(repo.course_calls(), 1);
        assert_eq!(repo.user_calls(), 1);
        assert_eq!(repo.enrollment_calls(), 2);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let repo = InMemoryRepository::new()
            .with_course_failure(RepositoryError::internal("down"))
            .with_enrollment_failure(3, RepositoryError::not_found("Enrollments", "gone"));

        assert_eq!(
            repo.get_courses().await,
            Err(RepositoryError::internal("down"))
        );
        assert!(repo.get_users().await.unwrap().is_empty());
        assert!(matches!(
            repo.get_enrollments_by_course(3).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
