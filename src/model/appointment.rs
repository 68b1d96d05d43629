use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Appointment lifecycle state
///
/// Values outside the known set are kept verbatim in `Other` so a newer
/// server never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Other(raw) => raw,
        }
    }

    /// Still occupying its slot
    pub fn is_active(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Confirmed)
    }
}

impl From<String> for AppointmentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "scheduled" => AppointmentStatus::Scheduled,
            "confirmed" => AppointmentStatus::Confirmed,
            "completed" => AppointmentStatus::Completed,
            "cancelled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Other(value),
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(value: &str) -> Self {
        AppointmentStatus::from(value.to_string())
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appointment as listed by `/appointments/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    #[serde(default)]
    pub dentist: Option<u64>,
    #[serde(default)]
    pub dentist_name: String,
    #[serde(default)]
    pub patient: Option<u64>,
    #[serde(default)]
    pub patient_name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub treatment_type: String,
    #[serde(default)]
    pub notes: String,
}

/// Body of `POST /appointments/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAppointment {
    pub dentist: u64,
    pub patient: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub treatment_type: String,
    pub notes: String,
}

/// What create/update calls echo back: the stored fields, without the
/// display names a listing carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentReceipt {
    #[serde(default)]
    pub id: Option<u64>,
    pub dentist: u64,
    pub patient: u64,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub treatment_type: String,
    #[serde(default)]
    pub notes: String,
}

/// Body of `PATCH /appointments/{id}/`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppointmentUpdate {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Filters for `GET /appointments/`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentQuery {
    pub date: Option<NaiveDate>,
    pub dentist: Option<u64>,
    pub patient: Option<u64>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentQuery {
    /// Appointments starting on the given calendar day
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    /// Query-string pairs in a stable order
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(dentist) = self.dentist {
            pairs.push(("dentist", dentist.to_string()));
        }
        if let Some(patient) = self.patient {
            pairs.push(("patient", patient.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_round_trip_keeps_unknown() {
        let status: AppointmentStatus = serde_json::from_str(r#""no_show""#).unwrap();
        assert_eq!(status, AppointmentStatus::Other("no_show".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""no_show""#);
        assert!(!status.is_active());
        assert!(AppointmentStatus::Confirmed.is_active());
    }

    #[test]
    fn test_appointment_decodes_offset_instants() {
        let json = r#"{
            "id": 12,
            "dentist": 1,
            "dentist_name": "Mehmet Öz",
            "patient": 3,
            "patient_name": "Ahmet Yılmaz",
            "start_time": "2025-01-01T09:00:00+03:00",
            "end_time": "2025-01-01T09:30:00+03:00",
            "status": "confirmed",
            "status_display": "Onaylandı",
            "treatment_type": "Dolgu",
            "treatment_cost": null,
            "notes": ""
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(
            appointment.start_time.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_new_appointment_serializes_utc_instants() {
        let body = NewAppointment {
            dentist: 1,
            patient: 2,
            start_time: Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 1, 1, 7, 0, 0).unwrap(),
            status: AppointmentStatus::Scheduled,
            treatment_type: String::new(),
            notes: String::new(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["status"], "scheduled");
        assert_eq!(value["start_time"], "2025-01-01T06:00:00Z");
        assert_eq!(value["end_time"], "2025-01-01T07:00:00Z");
    }

    #[test]
    fn test_update_sends_only_set_fields() {
        let value = serde_json::to_value(AppointmentUpdate::status(AppointmentStatus::Cancelled)).unwrap();
        assert_eq!(value, serde_json::json!({"status": "cancelled"}));
    }

    #[test]
    fn test_query_pairs() {
        let query = AppointmentQuery {
            dentist: Some(4),
            ..AppointmentQuery::on(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
        };
        assert_eq!(
            query.pairs(),
            vec![("date", "2025-03-09".to_string()), ("dentist", "4".to_string())]
        );
        assert!(AppointmentQuery::default().pairs().is_empty());
    }
}
