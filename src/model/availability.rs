use serde::{Deserialize, Serialize};

/// Placeholder shown on a booked slot when the booking carries no name
pub const BOOKED_PLACEHOLDER: &str = "Dolu";

/// Opening hours reported with a day's availability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Booking that occupies a slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotBooking {
    #[serde(default)]
    pub appointment_id: Option<u64>,
    #[serde(default)]
    pub dentist_id: Option<u64>,
    #[serde(default)]
    pub dentist_name: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub treatment_type: Option<String>,
}

/// A fixed-length interval inside working hours, labelled `HH:MM`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<SlotBooking>,
}

impl Slot {
    /// Name shown on a booked slot
    pub fn occupant(&self) -> &str {
        self.booking
            .as_ref()
            .and_then(|b| b.patient_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(BOOKED_PLACEHOLDER)
    }
}

/// Server-computed slot partition for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub working_hours: WorkingHours,
    #[serde(default)]
    pub slot_duration_minutes: Option<u32>,
    #[serde(default)]
    pub total_slots: u32,
    #[serde(default)]
    pub available_count: u32,
    #[serde(default)]
    pub booked_count: u32,
    #[serde(default)]
    pub available_slots: Vec<Slot>,
    #[serde(default)]
    pub booked_slots: Vec<Slot>,
}
