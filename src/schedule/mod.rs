//! Scheduling
//!
//! Booking-form model and the calendar's day read model. Conflict
//! detection and slot classification belong to the server; this module
//! only prepares requests and arranges responses for display.

mod day;

pub use day::{DayCursor, DaySchedule, FetchTicket, SlotState, SlotTile};

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use std::str::FromStr;

use crate::client::{ApiClient, Transport};
use crate::form::{FormError, SubmitError};
use crate::model::{AppointmentReceipt, AppointmentStatus, Dentist, NewAppointment, Patient};

/// First bookable hour
pub const WORK_START_HOUR: u32 = 9;
/// Hour at which the last slot ends
pub const WORK_END_HOUR: u32 = 17;
/// Granularity of the start-time roster
pub const SLOT_MINUTES: u32 = 30;

/// Start times offered by the booking form: `09:00` through `16:30`
pub fn time_slot_roster() -> Vec<String> {
    (WORK_START_HOUR * 60..WORK_END_HOUR * 60)
        .step_by(SLOT_MINUTES as usize)
        .map(|minute| format!("{:02}:{:02}", minute / 60, minute % 60))
        .collect()
}

/// Appointment length choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitLength {
    #[default]
    HalfHour,
    Hour,
    HourAndHalf,
    TwoHours,
}

impl VisitLength {
    pub const ALL: [VisitLength; 4] = [
        VisitLength::HalfHour,
        VisitLength::Hour,
        VisitLength::HourAndHalf,
        VisitLength::TwoHours,
    ];

    pub fn minutes(&self) -> i64 {
        match self {
            VisitLength::HalfHour => 30,
            VisitLength::Hour => 60,
            VisitLength::HourAndHalf => 90,
            VisitLength::TwoHours => 120,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisitLength::HalfHour => "30 dakika",
            VisitLength::Hour => "1 saat",
            VisitLength::HourAndHalf => "1.5 saat",
            VisitLength::TwoHours => "2 saat",
        }
    }
}

impl FromStr for VisitLength {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes: i64 = s.trim().parse().map_err(|_| FormError::InvalidTime(s.to_string()))?;
        Self::ALL
            .into_iter()
            .find(|length| length.minutes() == minutes)
            .ok_or_else(|| FormError::InvalidTime(s.to_string()))
    }
}

/// Dentist and patient lists backing the booking form's selects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingOptions {
    pub dentists: Vec<Dentist>,
    pub patients: Vec<Patient>,
}

/// Booking form contents
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    pub dentist: Option<u64>,
    pub patient: Option<u64>,
    pub date: NaiveDate,
    pub start_time: String,
    pub length: VisitLength,
    pub treatment_type: String,
    pub notes: String,
}

impl AppointmentDraft {
    /// Empty draft for the given day, starting at the first slot
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            dentist: None,
            patient: None,
            date,
            start_time: format!("{:02}:00", WORK_START_HOUR),
            length: VisitLength::default(),
            treatment_type: String::new(),
            notes: String::new(),
        }
    }

    /// Start instant, reading the wall-clock time in `tz`
    pub fn start_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, FormError> {
        let time = NaiveTime::parse_from_str(self.start_time.trim(), "%H:%M")
            .map_err(|_| FormError::InvalidTime(self.start_time.clone()))?;
        let local = self.date.and_time(time);

        tz.from_local_datetime(&local)
            .earliest()
            .ok_or_else(|| FormError::NonexistentLocalTime(local.format("%Y-%m-%dT%H:%M").to_string()))
    }

    /// Request body; `end_time` is `start_time` plus the chosen length
    pub fn to_request<Tz: TimeZone>(&self, tz: &Tz) -> Result<NewAppointment, FormError> {
        let dentist = self.dentist.ok_or(FormError::Required("Diş hekimi"))?;
        let patient = self.patient.ok_or(FormError::Required("Hasta"))?;

        let start = self.start_in(tz)?;
        let end = start.clone() + chrono::Duration::minutes(self.length.minutes());

        Ok(NewAppointment {
            dentist,
            patient,
            start_time: start.with_timezone(&Utc),
            end_time: end.with_timezone(&Utc),
            status: AppointmentStatus::Scheduled,
            treatment_type: self.treatment_type.trim().to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Validate the draft in the local timezone and create the appointment
pub async fn submit_appointment<T: Transport>(
    client: &ApiClient<T>,
    draft: &AppointmentDraft,
) -> Result<AppointmentReceipt, SubmitError> {
    let request = draft.to_request(&Local)?;
    Ok(client.create_appointment(&request).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeTransport;
    use crate::client::Method;
    use crate::form::ModalForm;
    use chrono::FixedOffset;

    fn draft() -> AppointmentDraft {
        AppointmentDraft {
            dentist: Some(1),
            patient: Some(2),
            ..AppointmentDraft::for_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        }
    }

    #[test]
    fn test_roster_is_sixteen_half_hours() {
        let roster = time_slot_roster();
        assert_eq!(roster.len(), 16);
        assert_eq!(roster.first().map(String::as_str), Some("09:00"));
        assert_eq!(roster[1], "09:30");
        assert_eq!(roster.last().map(String::as_str), Some("16:30"));
        assert!(!roster.contains(&"17:00".to_string()));
    }

    #[test]
    fn test_visit_length_parse() {
        assert_eq!("60".parse::<VisitLength>().unwrap(), VisitLength::Hour);
        assert_eq!("120".parse::<VisitLength>().unwrap().minutes(), 120);
        assert!("45".parse::<VisitLength>().is_err());
        assert!("abc".parse::<VisitLength>().is_err());
    }

    #[test]
    fn test_end_is_one_hour_later_in_any_offset() {
        let mut d = draft();
        d.length = "60".parse().unwrap();

        for hours in [-8, 0, 3, 5] {
            let tz = FixedOffset::east_opt(hours * 3600).unwrap();
            let request = d.to_request(&tz).unwrap();
            assert_eq!(request.end_time - request.start_time, chrono::Duration::hours(1));
            assert_eq!(
                request.start_time.with_timezone(&tz).format("%Y-%m-%dT%H:%M").to_string(),
                "2025-01-01T09:00"
            );
        }
    }

    #[test]
    fn test_start_is_read_as_local_wall_clock() {
        let istanbul = FixedOffset::east_opt(3 * 3600).unwrap();
        let request = draft().to_request(&istanbul).unwrap();
        assert_eq!(request.start_time.to_rfc3339(), "2025-01-01T06:00:00+00:00");
        assert_eq!(request.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_missing_selection_is_rejected() {
        let mut d = draft();
        d.patient = None;
        assert_eq!(d.to_request(&Utc), Err(FormError::Required("Hasta")));

        d.dentist = None;
        assert_eq!(d.to_request(&Utc), Err(FormError::Required("Diş hekimi")));
    }

    #[test]
    fn test_bad_start_time() {
        let mut d = draft();
        d.start_time = "9am".to_string();
        assert!(matches!(d.to_request(&Utc), Err(FormError::InvalidTime(_))));
    }

    #[tokio::test]
    async fn test_rejected_booking_keeps_form_open() {
        let fake = FakeTransport::new();
        fake.respond(Method::Post, "/appointments/", 400, r#"{"detail": "X"}"#);
        let client = fake.client();

        let mut form = ModalForm::opened();
        let mut refreshed = false;
        assert!(form.begin());
        let result = submit_appointment(&client, &draft()).await;
        form.finish(result, |_| refreshed = true);

        assert_eq!(form.error.as_deref(), Some("X"));
        assert!(form.open);
        assert!(!refreshed);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_calls_server() {
        let fake = FakeTransport::new();
        let client = fake.client();

        let mut d = draft();
        d.dentist = None;
        let err = submit_appointment(&client, &d).await.unwrap_err();
        assert_eq!(err.to_string(), "Diş hekimi zorunludur");
        assert!(fake.sent().is_empty());
    }
}
