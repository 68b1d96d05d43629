//! # DentCare
//!
//! Client core of the DentCare clinic console: typed access to the clinic
//! REST API plus the state behind the console's screens. The browser
//! single-page app (`dentcare-ui`) and the `dentcare` command-line tool
//! are both built on it.
//!
//! ## Modules
//!
//! - [`model`]: Entities exchanged with the clinic API
//! - [`client`]: Typed API client over a pluggable transport
//! - [`session`]: Signed-in user and token, persisted through a storage port
//! - [`schedule`]: Booking form and the calendar's day view
//! - [`intake`]: Two-step patient registration
//! - [`display`]: Status badges and Turkish date/time strings
//! - [`shell`]: Navigation tabs and signed-out screens
//! - [`reports`]: Report download notices
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dentcare::client::{ApiClient, HttpTransport};
//! use dentcare::session::{MemoryStorage, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(HttpTransport::new(), "http://localhost:8000/api");
//!     let login = client.login("demo", "demo123").await?;
//!
//!     let mut session = SessionStore::new(MemoryStorage::new());
//!     session.login(login.user, login.token.clone())?;
//!
//!     let client = client.with_token(Some(login.token));
//!     let stats = client.dashboard_stats().await?;
//!     println!("{} appointments today", stats.today_appointments);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
#[cfg(feature = "native")]
pub mod config;
pub mod display;
pub mod form;
pub mod intake;
pub mod model;
pub mod reports;
pub mod schedule;
pub mod session;
pub mod shell;

// Re-export top-level types for convenience
pub use client::{ApiClient, ClientError, Transport};

pub use form::{FormError, ModalForm, SubmitError};

pub use intake::{IntakeStep, IntakeWizard, PatientDraft};

pub use schedule::{AppointmentDraft, BookingOptions, DayCursor, DaySchedule, VisitLength};

pub use session::{Session, SessionCheck, SessionStorage, SessionStore, StorageError};

pub use shell::{AuthScreen, Tab};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
