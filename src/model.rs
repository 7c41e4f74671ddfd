// src/model.rs
//
// One scouted prospect as it is persisted.
//
// Absent values are `None` in memory. They turn into the display sentinel
// ("unknown", or 0 for age) only when written out: the JSON store via the
// serde helpers below, and CSV in `csv.rs`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::consts::UNKNOWN;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutRecord {
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "youthteam_id", default, with = "sentinel")]
    pub team_id: Option<String>,
    #[serde(default, with = "sentinel")]
    pub name: Option<String>,
    #[serde(default, with = "zero_age")]
    pub age: Option<u32>,
    #[serde(default, with = "sentinel")]
    pub speciality: Option<String>,
    #[serde(flatten)]
    pub skills: Skills,
    #[serde(default)]
    pub selected: bool,
    #[serde(flatten)]
    pub scout: ScoutInfo,
}

/// The seven skill slots, as displayed tokens ("5/7", "passable", ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default, with = "sentinel")]
    pub gk: Option<String>,
    #[serde(default, with = "sentinel")]
    pub def: Option<String>,
    #[serde(default, with = "sentinel")]
    pub pm: Option<String>,
    #[serde(default, with = "sentinel")]
    pub w: Option<String>,
    #[serde(default, with = "sentinel")]
    pub pa: Option<String>,
    #[serde(default, with = "sentinel")]
    pub sc: Option<String>,
    #[serde(default, with = "sentinel")]
    pub overall: Option<String>,
}

/// Who found the prospect, and with which search criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutInfo {
    #[serde(rename = "scout_name", default, with = "sentinel")]
    pub name: Option<String>,
    #[serde(rename = "scout_age", default, with = "sentinel")]
    pub age: Option<String>,
    #[serde(rename = "scout_country", default, with = "sentinel")]
    pub country: Option<String>,
    #[serde(rename = "scout_region", default, with = "sentinel")]
    pub region: Option<String>,
    #[serde(rename = "scout_focus", default, with = "sentinel")]
    pub focus: Option<String>,
}

impl ScoutRecord {
    /// A record with every field absent, captured at `timestamp`.
    pub fn blank(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            team_id: None,
            name: None,
            age: None,
            speciality: None,
            skills: Skills::default(),
            selected: false,
            scout: ScoutInfo::default(),
        }
    }

    /// `2024-03-01T10:15:00.000Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn name_or_unknown(&self) -> &str {
        or_unknown(&self.name)
    }
}

#[inline]
pub fn or_unknown(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or(UNKNOWN)
}

mod sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::config::consts::UNKNOWN;

    pub fn serialize<S: Serializer>(v: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(v.as_deref().unwrap_or(UNKNOWN))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.filter(|v| v != UNKNOWN))
    }
}

mod zero_age {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<u32>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u32(v.unwrap_or(0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        let raw = Option::<u32>::deserialize(d)?;
        Ok(raw.filter(|&a| a != 0))
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&v.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
