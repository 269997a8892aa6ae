use chrono::{DateTime, Utc};

/// Epoch milliseconds, the wire and storage representation of every instant.
pub type EpochMillis = i64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("timestamp {0} is outside the supported calendar range")]
pub struct InvalidTimestamp(pub EpochMillis);

pub fn datetime_from_millis(millis: EpochMillis) -> Result<DateTime<Utc>, InvalidTimestamp> {
    DateTime::from_timestamp_millis(millis).ok_or(InvalidTimestamp(millis))
}

pub fn millis_from_datetime(datetime: DateTime<Utc>) -> EpochMillis {
    datetime.timestamp_millis()
}
