use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub type DBConnection = Arc<Mutex<Connection>>;

/// Dates arrive either as a full RFC 3339 timestamp or as a bare
/// `YYYY-MM-DD`, which is taken as midnight UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Record identifiers are sqlite rowids internally but cross the wire as
/// strings. Deserialization accepts the stringified integer back.
pub mod id_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<i64>().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parse_date_accepts_both_forms() {
        let midnight = parse_date("2099-01-01").unwrap();
        assert_eq!(midnight.hour(), 0);
        assert!(parse_date("2099-01-01T12:30:00Z").is_some());
        assert!(parse_date("January 1st").is_none());
    }
}
