//! UI Components
//!
//! Reusable Leptos components for the console.

pub mod appointment_form;
pub mod loading;
pub mod patient_form;
pub mod sidebar;
pub mod status_badge;
pub mod toast;

pub use appointment_form::AppointmentForm;
pub use loading::Loading;
pub use patient_form::PatientForm;
pub use sidebar::Sidebar;
pub use status_badge::StatusBadge;
pub use toast::Toast;
