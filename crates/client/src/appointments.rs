//! Appointments endpoint: fetch, translate, classify.
//!
//! This module owns the wire model for the listing response and its
//! translation to the domain [`Appointment`]. The wire shape is lenient by
//! design: every field is nullable, and a malformed individual entry is
//! recovered locally (dropped or defaulted) rather than failing the batch.

use chrono::{DateTime, Local};
use serde::Deserialize;

use carelink_core::{ApiError, ApiResult, Appointment, AppointmentStatus};

use crate::http::{ApiClient, RawResponse};

/// Display name the service renders for the provider. The API does not
/// carry one, so the label is fixed client-side.
const PROVIDER_NAME: &str = "Jane Williams, RD";

#[derive(Clone, Debug, Deserialize)]
struct AppointmentsBody {
    appointments: Option<Vec<AppointmentWire>>,
}

/// Wire representation of one listing entry. Every field is nullable.
#[derive(Clone, Debug, Deserialize)]
struct AppointmentWire {
    appointment_id: Option<String>,
    patient_id: Option<String>,
    provider_id: Option<String>,
    status: Option<String>,
    appointment_type: Option<String>,
    start: Option<String>,
    end: Option<String>,
    duration_in_minutes: Option<u32>,
    recurrence_type: Option<String>,
}

impl AppointmentWire {
    /// Translate one wire entry into the domain model.
    ///
    /// An entry with no `appointment_id` is unusable and yields `None`;
    /// every other absent field falls back to an empty or zero default.
    fn into_appointment(self) -> Option<Appointment> {
        let id = self.appointment_id?;
        Some(Appointment {
            id,
            patient_id: self.patient_id.unwrap_or_default(),
            provider_id: self.provider_id.unwrap_or_default(),
            provider_name: PROVIDER_NAME.to_string(),
            status: self
                .status
                .as_deref()
                .map(AppointmentStatus::from_wire)
                .unwrap_or(AppointmentStatus::Unknown),
            kind: self.appointment_type.unwrap_or_default(),
            recurrence: self.recurrence_type.unwrap_or_default(),
            start: local_timestamp(self.start.as_deref()),
            end: local_timestamp(self.end.as_deref()),
            duration_minutes: self.duration_in_minutes.unwrap_or(0),
        })
    }
}

/// Parse an RFC 3339 timestamp into the viewer's zone.
///
/// The listing is display-only, so a missing, blank, or malformed timestamp
/// falls back to the current time instead of rejecting the entry.
fn local_timestamp(value: Option<&str>) -> DateTime<Local> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Local::now();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.with_timezone(&Local),
        Err(error) => {
            tracing::debug!("unparsable appointment timestamp {raw:?}: {error}");
            Local::now()
        }
    }
}

/// Client for the appointments listing.
pub struct AppointmentsApi {
    client: ApiClient,
}

impl AppointmentsApi {
    /// `client` should be the decorated client; the endpoint rejects
    /// anonymous calls.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the current user's appointments.
    ///
    /// One GET per call; the returned list replaces any previous fetch
    /// wholesale. Entries the server sends without an identifier are
    /// dropped, preserving the order of the rest.
    pub async fn list(&self) -> ApiResult<Vec<Appointment>> {
        let response = self.client.get("appointments").await?;
        appointments_from_response(response)
    }
}

/// Decode and translate a raw listing response.
///
/// A 2xx response with an empty body is treated as a failure carrying the
/// response's own status code and reason, the same as a non-2xx answer.
fn appointments_from_response(response: RawResponse) -> ApiResult<Vec<Appointment>> {
    if !response.is_success() || response.body.is_empty() {
        return Err(ApiError::Status {
            code: response.status,
            message: response.reason,
        });
    }

    let body: AppointmentsBody = serde_json::from_slice(&response.body)
        .map_err(|error| ApiError::Unexpected(error.to_string()))?;

    let wires = body.appointments.unwrap_or_default();
    let total = wires.len();
    let appointments: Vec<Appointment> = wires
        .into_iter()
        .filter_map(AppointmentWire::into_appointment)
        .collect();
    if appointments.len() < total {
        tracing::warn!(
            "dropped {} appointment entries without an id",
            total - appointments.len()
        );
    }

    Ok(appointments)
}
