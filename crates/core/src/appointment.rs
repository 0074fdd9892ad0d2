//! Appointment domain model.
//!
//! Appointments are translated from the service's wire format by
//! `carelink-client` and consumed here as immutable values: each fetch
//! replaces the previous list wholesale, and no identity is carried across
//! fetches.

use chrono::{DateTime, Local};

/// Lifecycle classification of an appointment as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Booked and not yet taken place.
    Upcoming,
    /// Already taken place.
    Past,
    /// Any status value we do not recognise.
    Unknown,
}

impl AppointmentStatus {
    /// Classify the server's free-text status field.
    ///
    /// Matching is exact and case-sensitive; the service capitalises its
    /// status values, and unrecognised variants (including case variants)
    /// classify as [`AppointmentStatus::Unknown`] rather than failing.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "Scheduled" => AppointmentStatus::Upcoming,
            "Occurred" => AppointmentStatus::Past,
            _ => AppointmentStatus::Unknown,
        }
    }
}

/// A single appointment in the viewer's timezone.
#[derive(Clone, Debug, PartialEq)]
pub struct Appointment {
    /// Unique identifier for this appointment record.
    pub id: String,
    pub patient_id: String,
    pub provider_id: String,
    /// Display name of the provider, e.g. `"Jane Williams, RD"`.
    pub provider_name: String,
    pub status: AppointmentStatus,
    /// Appointment type label, e.g. `"Consultation"`.
    pub kind: String,
    /// Recurrence label, e.g. `"Weekly"`.
    pub recurrence: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub duration_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_statuses() {
        assert_eq!(
            AppointmentStatus::from_wire("Scheduled"),
            AppointmentStatus::Upcoming
        );
        assert_eq!(
            AppointmentStatus::from_wire("Occurred"),
            AppointmentStatus::Past
        );
    }

    #[test]
    fn unrecognised_statuses_classify_as_unknown() {
        for status in ["Cancelled", "Unknown", "Invalid", ""] {
            assert_eq!(
                AppointmentStatus::from_wire(status),
                AppointmentStatus::Unknown,
                "status {status:?}"
            );
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        for status in ["scheduled", "SCHEDULED", "occurred", "OCCURRED"] {
            assert_eq!(
                AppointmentStatus::from_wire(status),
                AppointmentStatus::Unknown,
                "status {status:?}"
            );
        }
    }
}
