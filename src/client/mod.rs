//! Clinic API Client
//!
//! Typed access to the external clinic REST API.
//!
//! ## Architecture
//!
//! - **ApiClient**: one method per endpoint, central header/URL handling
//! - **Transport**: pluggable byte mover (`reqwest` natively, `gloo-net`
//!   in the browser)
//! - **ClientError**: tagged failure with the server's message

mod api;
mod error;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, DashboardOverview, DEFAULT_API_BASE};
pub use error::{error_message, ClientError};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

#[cfg(feature = "native")]
pub use transport::HttpTransport;
