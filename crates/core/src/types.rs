/// Producer ids are PostgreSQL BIGSERIAL values.
pub type DbId = i64;

/// Creation and update times, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
