use crate::models::journey::{JourneyLine, VehicleJourney};
use chrono::{DateTime, FixedOffset, NaiveDate};

/// The parts of a journey the activity registration consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityObservation {
    pub network_ref: String,
    pub vehicle_ref: String,
    pub operator_ref: Option<String>,
    pub line: JourneyLine,
    pub service_date: Option<NaiveDate>,
    pub recorded_at: DateTime<FixedOffset>,
}

impl ActivityObservation {
    /// Operational day of the observation, falling back to the calendar date of
    /// `recorded_at` in its own offset when the feed omits it.
    pub fn effective_service_date(&self) -> NaiveDate {
        self.service_date
            .unwrap_or_else(|| self.recorded_at.date_naive())
    }
}

/// Returns `None` when the journey is not assigned to both a line and a vehicle.
pub fn normalize(journey: VehicleJourney) -> Option<ActivityObservation> {
    let VehicleJourney {
        line: Some(line),
        vehicle_ref: Some(vehicle_ref),
        network_ref,
        operator_ref,
        service_date,
        updated_at,
        ..
    } = journey
    else {
        return None;
    };

    Some(ActivityObservation {
        network_ref,
        vehicle_ref,
        operator_ref,
        line,
        service_date,
        recorded_at: updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::journey::{parse_zoned_str, JourneyPosition, LineType, PositionType};

    fn journey(line: Option<JourneyLine>, vehicle_ref: Option<&str>) -> VehicleJourney {
        VehicleJourney {
            id: "VJ:1".to_string(),
            line,
            direction: None,
            destination: None,
            calls: None,
            position: JourneyPosition {
                latitude: 49.44,
                longitude: 1.09,
                at_stop: false,
                position_type: PositionType::Gps,
                recorded_at: "2025-03-01T23:30:00+01:00".to_string(),
            },
            network_ref: "ASTUCE".to_string(),
            journey_ref: None,
            operator_ref: Some("TCAR".to_string()),
            vehicle_ref: vehicle_ref.map(str::to_string),
            service_date: None,
            updated_at: parse_zoned_str("2025-03-01T23:30:00+01:00").unwrap(),
        }
    }

    fn line() -> JourneyLine {
        JourneyLine {
            line_ref: "LINE:F1".to_string(),
            number: "F1".to_string(),
            line_type: LineType::Bus,
            color: None,
            text_color: None,
        }
    }

    #[test]
    fn test_missing_line_is_skipped() {
        assert!(normalize(journey(None, Some("TCAR:812"))).is_none());
    }

    #[test]
    fn test_missing_vehicle_is_skipped() {
        assert!(normalize(journey(Some(line()), None)).is_none());
    }

    #[test]
    fn test_assigned_journey_is_normalized() {
        let observation = normalize(journey(Some(line()), Some("TCAR:812"))).unwrap();

        assert_eq!(observation.network_ref, "ASTUCE");
        assert_eq!(observation.vehicle_ref, "TCAR:812");
        assert_eq!(observation.operator_ref.as_deref(), Some("TCAR"));
        assert_eq!(observation.line, line());
    }

    #[test]
    fn test_service_date_falls_back_to_local_date() {
        let observation = normalize(journey(Some(line()), Some("TCAR:812"))).unwrap();

        // 23:30 at +01:00 is already 22:30 UTC; the local calendar day wins.
        assert_eq!(
            observation.effective_service_date(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );

        let explicit = ActivityObservation {
            service_date: NaiveDate::from_ymd_opt(2025, 2, 28),
            ..observation
        };
        assert_eq!(
            explicit.effective_service_date(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
