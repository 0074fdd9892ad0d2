//! Per-screen view state.
//!
//! Each screen's state is recomputed wholesale from the latest request
//! result; there are no partial updates. The lifecycle per refresh is
//! idle → pending → success or error, and retries are always explicit
//! user-triggered refetches.

use crate::appointment::{Appointment, AppointmentStatus};
use crate::error::ApiResult;
use crate::view::{cards_for_status, AppointmentCard};

/// View state for the appointments screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentsScreen {
    pub loading: bool,
    pub error_message: Option<String>,
    pub upcoming: Vec<AppointmentCard>,
    pub past: Vec<AppointmentCard>,
}

impl AppointmentsScreen {
    /// State shown while the refresh request is in flight.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Fold the result of one fetch into the next screen state.
    pub fn reduce(result: ApiResult<Vec<Appointment>>) -> Self {
        match result {
            Ok(appointments) => Self {
                upcoming: cards_for_status(&appointments, AppointmentStatus::Upcoming),
                past: cards_for_status(&appointments, AppointmentStatus::Past),
                ..Self::default()
            },
            Err(error) => Self {
                error_message: Some(error.user_message()),
                ..Self::default()
            },
        }
    }
}

/// View state for the login screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginScreen {
    pub loading: bool,
    pub authenticated: bool,
    pub error_message: Option<String>,
}

impl LoginScreen {
    /// State shown while the sign-in request is in flight.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Fold the result of one sign-in attempt into the next screen state.
    pub fn reduce(result: ApiResult<()>) -> Self {
        match result {
            Ok(()) => Self {
                authenticated: true,
                ..Self::default()
            },
            Err(error) => Self {
                error_message: Some(error.user_message()),
                ..Self::default()
            },
        }
    }
}
