use serde::{Deserialize, Serialize};

/// A course as published by the upstream school API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub description: Option<String>,
    pub name: String,
    pub heading: String,
    pub is_published: bool,
    pub image_url: String,
}

impl Course {
    /// Creates an unpublished course with empty heading and image.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            description: None,
            name: name.into(),
            heading: String::new(),
            is_published: false,
            image_url: String::new(),
        }
    }

    /// Sets the heading shown under the course name.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Sets the description for this course.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the cover image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Marks the course as published or not.
    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }
}

/// A student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A user's enrollment in a course.
///
/// The course is implied by the fetch that produced the enrollment; it is
/// not part of the record. Timestamps are kept exactly as the upstream API
/// sends them so cached snapshots stay byte-for-byte comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: u64,
    pub enrolled_at: String,
    pub completed_at: Option<String>,
    /// Progress between 0 and 100.
    pub percent_complete: f64,
    pub expires_at: Option<String>,
}

impl Enrollment {
    /// Creates an in-progress enrollment with no completion or expiry date.
    pub fn new(user_id: u64, enrolled_at: impl Into<String>) -> Self {
        Self {
            user_id,
            enrolled_at: enrolled_at.into(),
            completed_at: None,
            percent_complete: 0.0,
            expires_at: None,
        }
    }

    /// Sets the completion percentage.
    pub fn with_progress(mut self, percent_complete: f64) -> Self {
        self.percent_complete = percent_complete;
        self
    }

    /// Sets the completion timestamp.
    pub fn with_completed_at(mut self, completed_at: impl Into<String>) -> Self {
        self.completed_at = Some(completed_at.into());
        self
    }

    /// Sets the expiry timestamp.
    pub fn with_expires_at(mut self, expires_at: impl Into<String>) -> Self {
        self.expires_at = Some(expires_at.into());
        self
    }
}

/// The contact details of an enrolled student, as shown in the aggregated view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledUser {
    pub name: String,
    pub email: String,
}

impl From<&User> for EnrolledUser {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// A published course together with the students enrolled in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseWithEnrollments {
    pub course_name: String,
    pub course_heading: String,
    pub enrollments: Vec<EnrolledUser>,
}
