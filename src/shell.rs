//! Shell navigation: sidebar tabs and the signed-out screens.

use crate::client::ClientError;
use crate::model::ClinicSummary;

/// Clinic count shown on the landing screen when the listing is unavailable
pub const LANDING_CLINIC_FALLBACK: usize = 737;

pub const LOGOUT_LABEL: &str = "Çıkış";

pub const REGISTER_NOTICE: &str =
    "Kayıt özelliği yakında aktif olacak!\n\nDemo için \"demo\" kullanıcı adı ve \"demo123\" şifresi ile giriş yapın.";

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Calendar,
    Patients,
    Dentists,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Dashboard, Tab::Calendar, Tab::Patients, Tab::Dentists, Tab::Reports];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Calendar => "calendar",
            Tab::Patients => "patients",
            Tab::Dentists => "dentists",
            Tab::Reports => "reports",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Calendar => "📅",
            Tab::Patients => "👥",
            Tab::Dentists => "👨‍⚕️",
            Tab::Reports => "📄",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Calendar => "Randevular",
            Tab::Patients => "Hastalar",
            Tab::Dentists => "Hekimler",
            Tab::Reports => "Raporlar",
        }
    }

    /// `appointments` is accepted for the calendar; unknown ids land on the dashboard
    pub fn from_id(id: &str) -> Self {
        match id {
            "calendar" | "appointments" => Tab::Calendar,
            "patients" => Tab::Patients,
            "dentists" => Tab::Dentists,
            "reports" => Tab::Reports,
            _ => Tab::Dashboard,
        }
    }
}

/// What renders while nobody is signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Landing,
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    /// Errors stay up longer
    pub fn lifetime_ms(&self) -> u32 {
        match self {
            ToastKind::Success => 3000,
            ToastKind::Error => 5000,
        }
    }
}

/// One toast position; only the timer of the latest message may clear it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    message: Option<String>,
    shown: u64,
}

impl ToastSlot {
    /// Replace the message; returns the ticket its timer must present
    pub fn show(&mut self, message: &str) -> u64 {
        self.shown += 1;
        self.message = Some(message.to_string());
        self.shown
    }

    /// Clear the slot if `ticket` belongs to the message still shown
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.shown || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Number of clinics advertised on the landing screen
pub fn landing_clinic_count(listing: &Result<Vec<ClinicSummary>, ClientError>) -> usize {
    match listing {
        Ok(clinics) if !clinics.is_empty() => clinics.len(),
        _ => LANDING_CLINIC_FALLBACK,
    }
}
