//! Pages
//!
//! Signed-out screens and one component per sidebar tab.

pub mod calendar;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod placeholders;
pub mod reports;

pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::{Login, Register};
pub use placeholders::{Dentists, Patients};
pub use reports::Reports;
