//! The `VaultEntry` record stored in a vault.
//!
//! Entries serialize with the field names `id`, `secret`, `label` and
//! `createdAt`. The timestamp is written as RFC 3339 with millisecond
//! precision so a stored collection re-serializes to the same bytes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single saved credential.
///
/// Entries are immutable once created: the vault only ever inserts or
/// removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEntry {
    /// Opaque unique identifier (UUID v4).
    pub id: String,

    /// The saved password. Older stores call this field `password`.
    #[serde(alias = "password")]
    pub secret: String,

    /// Account or app name. Older stores call this field `account`.
    #[serde(alias = "account")]
    pub label: String,

    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,
}

impl VaultEntry {
    /// Shortened id for display in tables.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map_or(self.id.len(), |(i, _)| i);
        &self.id[..end]
    }
}

/// Truncate a timestamp to the precision that is persisted.
pub(crate) fn to_stored_precision(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

// ---------------------------------------------------------------------------
// Serde helpers for the millisecond RFC 3339 timestamp
// ---------------------------------------------------------------------------

fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VaultEntry {
        VaultEntry {
            id: "0b7d9a3e-8f51-4c0a-9d6e-2b1f4a7c5e90".into(),
            secret: "Ab3x!k9Q".into(),
            label: "Email".into(),
            created_at: DateTime::parse_from_rfc3339("2024-05-01T12:30:45.123Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"0b7d9a3e-8f51-4c0a-9d6e-2b1f4a7c5e90","secret":"Ab3x!k9Q","label":"Email","createdAt":"2024-05-01T12:30:45.123Z"}"#
        );
    }

    #[test]
    fn reads_legacy_field_names() {
        let json = r#"{"id":"abc","password":"pw","account":"Bank","createdAt":"2024-05-01T12:30:45.123Z"}"#;
        let entry: VaultEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.secret, "pw");
        assert_eq!(entry.label, "Bank");
    }

    #[test]
    fn rejects_bad_timestamp() {
        let json = r#"{"id":"abc","secret":"pw","label":"Bank","createdAt":"yesterday"}"#;
        assert!(serde_json::from_str::<VaultEntry>(json).is_err());
    }

    #[test]
    fn short_id_truncates() {
        assert_eq!(sample().short_id(), "0b7d9a3e");
        let tiny = VaultEntry {
            id: "abc".into(),
            ..sample()
        };
        assert_eq!(tiny.short_id(), "abc");
    }

    #[test]
    fn stored_precision_drops_sub_millisecond_digits() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T12:30:45.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let truncated = to_stored_precision(ts);
        assert_eq!(
            truncated.to_rfc3339_opts(SecondsFormat::Millis, true),
            "2024-05-01T12:30:45.123Z"
        );
        assert_eq!(truncated.timestamp_subsec_nanos(), 123_000_000);
    }
}
