//! Display formatting for appointments.
//!
//! Pure translation from the domain model to the strings the appointments
//! screen renders: a month/day date block, a 12-hour time range with the
//! viewer's zone, and a one-line description.

use chrono::{DateTime, Datelike, Local};

use crate::appointment::{Appointment, AppointmentStatus};

const TIME_FORMAT: &str = "%-I:%M %p";

/// Formatted, display-ready projection of an [`Appointment`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentCard {
    pub id: String,
    /// `"<type> with <provider>"`, e.g. `"Consultation with Jane Williams, RD"`.
    pub description: String,
    /// Three-letter uppercase month abbreviation, e.g. `"JAN"`.
    pub month: String,
    /// Day of month without padding.
    pub day: String,
    /// `"<start> - <end> (<zone>)"` on a 12-hour clock with AM/PM.
    pub time_range: String,
}

impl AppointmentCard {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        let start = appointment.start;
        Self {
            id: appointment.id.clone(),
            description: format!("{} with {}", appointment.kind, appointment.provider_name),
            month: start.format("%b").to_string().to_uppercase(),
            day: start.day().to_string(),
            time_range: format!(
                "{} - {} ({})",
                start.format(TIME_FORMAT),
                appointment.end.format(TIME_FORMAT),
                zone_label(&start)
            ),
        }
    }
}

/// Select the appointments matching `status` and format them for display.
///
/// Relative order of the input is preserved.
pub fn cards_for_status(
    appointments: &[Appointment],
    status: AppointmentStatus,
) -> Vec<AppointmentCard> {
    appointments
        .iter()
        .filter(|appointment| appointment.status == status)
        .map(AppointmentCard::from_appointment)
        .collect()
}

/// Label for the viewer's timezone at `at`.
///
/// Zone names are not recoverable from an offset alone, so the label is the
/// offset itself: `"UTC"`, `"UTC+5:30"`, `"UTC-4"`.
fn zone_label(at: &DateTime<Local>) -> String {
    offset_label(at.offset().local_minus_utc())
}

fn offset_label(offset_secs: i32) -> String {
    if offset_secs == 0 {
        return "UTC".to_string();
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let total_minutes = offset_secs.abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}
