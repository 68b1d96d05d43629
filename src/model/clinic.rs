use serde::{Deserialize, Serialize};

/// Full clinic record from `/clinics/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

/// Clinic reference embedded in a user payload or the public listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicSummary {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Dentist roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dentist {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub clinic: Option<u64>,
}

fn default_active() -> bool {
    true
}

impl Dentist {
    /// Option label used in dentist selects
    pub fn select_label(&self) -> String {
        if self.specialty.is_empty() {
            format!("Dr. {}", self.name)
        } else {
            format!("Dr. {} - {}", self.name, self.specialty)
        }
    }
}

/// Aggregate counters for the dashboard
///
/// Older servers report `total_dentists`/`total_patients`; both spellings
/// are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, alias = "total_dentists")]
    pub dentist_count: u64,
    #[serde(default, alias = "total_patients")]
    pub patient_count: u64,
    #[serde(default)]
    pub today_appointments: u64,
    #[serde(default)]
    pub today_completed: u64,
    #[serde(default)]
    pub today_pending: u64,
    #[serde(default)]
    pub today_cancelled: u64,
}
