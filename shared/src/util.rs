/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a unique resource ID.
///
/// UUID v4 rather than a timestamp-derived ID: two rapid successive
/// creations on a coarse clock must never collide.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
