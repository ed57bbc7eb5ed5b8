//! Timestamp formatting for JSON responses.

use mongodb::bson::DateTime;

/// Format a stored timestamp as RFC 3339, falling back to epoch milliseconds
/// for values outside the representable range.
pub(crate) fn to_rfc3339(timestamp: DateTime) -> String {
    timestamp
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| timestamp.timestamp_millis().to_string())
}
