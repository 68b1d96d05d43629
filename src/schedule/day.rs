use chrono::{Local, NaiveDate};

use crate::model::{Appointment, DayAvailability, Slot};

/// Date selected in the calendar view
///
/// Every change bumps a generation counter, so a response fetched for an
/// earlier selection can be told apart from the current one even when the
/// user navigates back to the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    date: NaiveDate,
    generation: u64,
}

/// Identifies the selection a day fetch was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub date: NaiveDate,
    generation: u64,
}

impl DayCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, generation: 0 }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn next(&mut self) -> NaiveDate {
        let date = self.date.succ_opt().unwrap_or(self.date);
        self.set(date);
        self.date
    }

    pub fn previous(&mut self) -> NaiveDate {
        let date = self.date.pred_opt().unwrap_or(self.date);
        self.set(date);
        self.date
    }

    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
        self.generation += 1;
    }

    pub fn go_today(&mut self) {
        self.set(Local::now().date_naive());
    }

    /// Same date, new generation; forces a re-fetch
    pub fn refresh(&mut self) {
        self.generation += 1;
    }

    /// Parse an `<input type="date">` value; malformed input leaves the
    /// cursor unchanged
    pub fn set_from_input(&mut self, value: &str) -> bool {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => {
                self.set(date);
                true
            }
            Err(_) => false,
        }
    }

    pub fn input_value(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Ticket for a fetch of the current selection
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            date: self.date,
            generation: self.generation,
        }
    }

    /// A response is applied only if nothing changed since its ticket
    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        self.generation == ticket.generation && self.date == ticket.date
    }
}

impl Default for DayCursor {
    fn default() -> Self {
        Self::today()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    /// Opens the booking form at this start time
    Available,
    /// Read-only; carries the name shown on the tile
    Booked { occupant: String },
}

/// One tile of the calendar slot grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTile {
    pub start_time: String,
    pub end_time: String,
    pub state: SlotState,
}

impl SlotTile {
    fn available(slot: &Slot) -> Self {
        Self {
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            state: SlotState::Available,
        }
    }

    fn booked(slot: &Slot) -> Self {
        Self {
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            state: SlotState::Booked {
                occupant: slot.occupant().to_string(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.state == SlotState::Available
    }

    pub fn css_class(&self) -> &'static str {
        match self.state {
            SlotState::Available => "time-slot time-slot-available",
            SlotState::Booked { .. } => "time-slot time-slot-booked",
        }
    }
}

/// Everything the calendar renders for one date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    pub date: Option<NaiveDate>,
    pub availability: DayAvailability,
    pub appointments: Vec<Appointment>,
}

impl DaySchedule {
    /// Appointments are kept in chronological order
    pub fn new(date: NaiveDate, availability: DayAvailability, mut appointments: Vec<Appointment>) -> Self {
        appointments.sort_by_key(|a| a.start_time);
        Self {
            date: Some(date),
            availability,
            appointments,
        }
    }

    /// Available slots first, then booked ones, in server order
    pub fn slot_tiles(&self) -> Vec<SlotTile> {
        self.availability
            .available_slots
            .iter()
            .map(SlotTile::available)
            .chain(self.availability.booked_slots.iter().map(SlotTile::booked))
            .collect()
    }

    /// `(total, available, booked)` counters
    pub fn counters(&self) -> (u32, u32, u32) {
        (
            self.availability.total_slots,
            self.availability.available_count,
            self.availability.booked_count,
        )
    }
}
