use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)] // position, direction and calls are carried, not consumed
pub struct VehicleJourney {
    pub id: String,
    pub line: Option<JourneyLine>,
    pub direction: Option<JourneyDirection>,
    pub destination: Option<String>,
    pub calls: Option<Vec<JourneyCall>>,
    pub position: JourneyPosition,
    pub network_ref: String,
    pub journey_ref: Option<String>,
    pub operator_ref: Option<String>,
    pub vehicle_ref: Option<String>,
    pub service_date: Option<NaiveDate>,
    #[serde(deserialize_with = "parse_zoned_datetime")]
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyLine {
    #[serde(rename = "ref")]
    pub line_ref: String,
    pub number: String,
    #[serde(rename = "type")]
    pub line_type: LineType,
    pub color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineType {
    Tramway,
    Subway,
    Rail,
    Bus,
    Ferry,
    Coach,
    #[serde(other)]
    Unknown,
}

impl LineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Tramway => "TRAMWAY",
            LineType::Subway => "SUBWAY",
            LineType::Rail => "RAIL",
            LineType::Bus => "BUS",
            LineType::Ferry => "FERRY",
            LineType::Coach => "COACH",
            LineType::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JourneyDirection {
    Outbound,
    Inbound,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct JourneyCall {
    pub aimed_time: String,
    pub expected_time: Option<String>,
    pub stop_ref: String,
    pub stop_name: String,
    pub stop_order: u32,
    pub call_status: CallStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CallStatus {
    Scheduled,
    Skipped,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct JourneyPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub at_stop: bool,
    #[serde(rename = "type")]
    pub position_type: PositionType,
    pub recorded_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionType {
    Gps,
    Computed,
}

/// A feed payload holds either a single journey or a batch of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JourneyPayload {
    Batch(Vec<VehicleJourney>),
    Single(Box<VehicleJourney>),
}

impl JourneyPayload {
    pub fn into_journeys(self) -> Vec<VehicleJourney> {
        match self {
            JourneyPayload::Batch(journeys) => journeys,
            JourneyPayload::Single(journey) => vec![*journey],
        }
    }
}

/// Parses an RFC 3339 timestamp, tolerating a trailing `[Area/City]` zone annotation.
pub fn parse_zoned_str(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let trimmed = raw.trim();
    let without_zone = match trimmed.find('[') {
        Some(idx) if trimmed.ends_with(']') => &trimmed[..idx],
        _ => trimmed,
    };
    DateTime::parse_from_rfc3339(without_zone)
}

fn parse_zoned_datetime<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_zoned_str(&raw).map_err(serde::de::Error::custom)
}
