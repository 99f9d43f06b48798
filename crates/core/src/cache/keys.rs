/// Returns the cache key for the full course collection.
pub fn courses_key() -> String {
    "courses".to_string()
}

/// Returns the cache key for the full user collection.
pub fn users_key() -> String {
    "users".to_string()
}

/// Returns the cache key for the enrollments of one course.
pub fn enrollments_key(course_id: u64) -> String {
    format!("enrollments-{}", course_id)
}
