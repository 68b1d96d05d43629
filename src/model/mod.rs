//! Entity Models
//!
//! Shapes consumed from the clinic API. The console owns none of these
//! entities; fields are decoded leniently so that a partially populated
//! payload still renders.

mod appointment;
mod availability;
mod clinic;
mod patient;
mod user;

pub use appointment::{
    Appointment, AppointmentQuery, AppointmentReceipt, AppointmentStatus, AppointmentUpdate, NewAppointment,
};
pub use availability::{DayAvailability, Slot, SlotBooking, WorkingHours, BOOKED_PLACEHOLDER};
pub use clinic::{Clinic, ClinicSummary, DashboardStats, Dentist};
pub use patient::{BloodType, NewPatient, Patient};
pub use user::{LoginResponse, User};

use serde::Deserialize;

/// Clinic assumed when creating patients; tenant selection is not offered.
pub const DEFAULT_CLINIC_ID: u64 = 1;

/// Collection payload: either a bare array or a paginated `{results: [...]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Plain(items) => items,
            ListResponse::Paged { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_accepts_both_shapes() {
        let plain: ListResponse<Clinic> =
            serde_json::from_str(r#"[{"id": 1, "name": "Merkez"}]"#).unwrap();
        assert_eq!(plain.into_vec().len(), 1);

        let paged: ListResponse<Clinic> = serde_json::from_str(
            r#"{"count": 2, "next": null, "results": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]}"#,
        )
        .unwrap();
        let clinics = paged.into_vec();
        assert_eq!(clinics.len(), 2);
        assert_eq!(clinics[1].name, "B");
    }
}
