use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::photo::PhotoData;

/// The four event kinds, tagged with their Indonesian labels as shown in the
/// app and in serialized records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum AttendanceType {
    #[serde(rename = "DATANG")]
    #[strum(serialize = "DATANG")]
    Arrival,
    #[serde(rename = "PULANG")]
    #[strum(serialize = "PULANG")]
    Departure,
    #[serde(rename = "IJIN")]
    #[strum(serialize = "IJIN")]
    Leave,
    #[serde(rename = "SAKIT")]
    #[strum(serialize = "SAKIT")]
    Sick,
}

impl AttendanceType {
    /// Arrival and departure go through the camera + GPS capture flow; leave
    /// and sick go through the note + attachment form instead.
    pub fn requires_capture(&self) -> bool {
        matches!(self, AttendanceType::Arrival | AttendanceType::Departure)
    }
}

/// One GPS fix, degrees. No accuracy or altitude is retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single attendance event. Built once by the record builder and never
/// mutated afterwards; the user fields are a value copy taken at build time so
/// history stays intact even if the profile changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_nip: String,
    #[serde(rename = "type")]
    pub kind: AttendanceType,
    pub timestamp: DateTime<Local>,
    pub note: Option<String>,
    pub location: Option<AttendanceLocation>,
    pub photo_data: Option<PhotoData>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn types_round_trip_through_indonesian_tags() {
        assert_eq!(AttendanceType::Arrival.to_string(), "DATANG");
        assert_eq!(AttendanceType::Departure.to_string(), "PULANG");
        assert_eq!(AttendanceType::from_str("IJIN").unwrap(), AttendanceType::Leave);
        assert_eq!(AttendanceType::from_str("SAKIT").unwrap(), AttendanceType::Sick);
    }

    #[test]
    fn only_arrival_and_departure_require_capture() {
        assert!(AttendanceType::Arrival.requires_capture());
        assert!(AttendanceType::Departure.requires_capture());
        assert!(!AttendanceType::Leave.requires_capture());
        assert!(!AttendanceType::Sick.requires_capture());
    }
}
