use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Donation {
    pub id: String,
    pub amount: f64,
    pub donor_name: String,
    pub donor_email: String,
    pub message: String,
    #[serde(with = "rfc3339_micros")]
    pub created_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(with = "rfc3339_micros")]
    pub created_at: DateTime<Utc>,
}

// Timestamps are persisted in their wire form, so the serialized string must
// sort the same way the instants do. Fixed microsecond precision keeps
// lexicographic and chronological order identical.
pub mod rfc3339_micros {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
