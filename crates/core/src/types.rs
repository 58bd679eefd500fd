/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Current UTC time as an RFC 3339 string with millisecond precision.
///
/// Used for the `timestamp` field of error payloads.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
