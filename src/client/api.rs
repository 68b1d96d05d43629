//! Typed API Client
//!
//! One method per clinic API endpoint. Header and URL construction live
//! here so views never assemble requests themselves.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ClientError, HttpRequest, Method, Transport};
use crate::model::{
    Appointment, AppointmentQuery, AppointmentReceipt, AppointmentUpdate, Clinic, ClinicSummary,
    DashboardStats, DayAvailability, Dentist, ListResponse, LoginResponse, NewAppointment,
    NewPatient, Patient, User,
};
use crate::schedule::{BookingOptions, DaySchedule};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Dashboard data; each half succeeds or fails on its own
#[derive(Debug)]
pub struct DashboardOverview {
    pub stats: Result<DashboardStats, ClientError>,
    /// Chronological
    pub today: Result<Vec<Appointment>, ClientError>,
}

/// Clinic API client over a pluggable transport
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client; a trailing slash on `base_url` is ignored
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach (or clear) the session token sent with every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request for `path` (relative to the base URL)
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type", "application/json".to_string()),
            ("Accept", "application/json".to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Token {}", token)));
        }

        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        }
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ClientError> {
        tracing::debug!(%method, path, "clinic api request");

        let response = self
            .transport
            .send(self.build_request(method, path, body))
            .await
            .map_err(|e| {
                tracing::warn!(%method, path, "clinic api unreachable: {}", e);
                e
            })?;

        if !response.is_success() {
            let err = ClientError::from_response(response.status, &response.body);
            tracing::warn!(%method, path, status = response.status, "clinic api error: {}", err);
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.execute(Method::Get, path, None).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError> {
        let body = serde_json::to_string(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.execute(method, path, Some(body)).await
    }

    async fn list<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>, ClientError> {
        let response: ListResponse<R> = self.get(path).await?;
        Ok(response.into_vec())
    }

    // ============ Auth ============

    /// Exchange credentials for a token and user profile
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        self.send_json(Method::Post, "/auth/login/", &LoginRequest { username, password })
            .await
    }

    /// Invalidate the token server-side
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: serde_json::Value = self.execute(Method::Post, "/auth/logout/", None).await?;
        Ok(())
    }

    /// Profile of the token's owner
    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.get("/auth/me/").await
    }

    /// Public clinic listing shown on the landing screen
    pub async fn public_clinics(&self) -> Result<Vec<ClinicSummary>, ClientError> {
        self.list("/auth/clinics/").await
    }

    // ============ Clinic data ============

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get("/dashboard-stats/").await
    }

    /// Slot partition for a day, optionally narrowed to one dentist
    pub async fn check_availability(
        &self,
        date: NaiveDate,
        dentist_id: Option<u64>,
    ) -> Result<DayAvailability, ClientError> {
        let mut path = format!("/check-availability/?date={}", date.format("%Y-%m-%d"));
        if let Some(id) = dentist_id {
            path.push_str(&format!("&dentist_id={}", id));
        }
        self.get(&path).await
    }

    pub async fn appointments(&self, query: &AppointmentQuery) -> Result<Vec<Appointment>, ClientError> {
        let pairs = query.pairs();
        let path = if pairs.is_empty() {
            "/appointments/".to_string()
        } else {
            let query_string = pairs
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            format!("/appointments/?{}", query_string)
        };
        self.list(&path).await
    }

    pub async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<AppointmentReceipt, ClientError> {
        self.send_json(Method::Post, "/appointments/", appointment).await
    }

    pub async fn update_appointment(
        &self,
        id: u64,
        update: &AppointmentUpdate,
    ) -> Result<AppointmentReceipt, ClientError> {
        self.send_json(Method::Patch, &format!("/appointments/{}/", id), update)
            .await
    }

    pub async fn dentists(&self, clinic: Option<u64>) -> Result<Vec<Dentist>, ClientError> {
        match clinic {
            Some(id) => self.list(&format!("/dentists/?clinic={}", id)).await,
            None => self.list("/dentists/").await,
        }
    }

    pub async fn patients(&self, clinic: Option<u64>) -> Result<Vec<Patient>, ClientError> {
        match clinic {
            Some(id) => self.list(&format!("/patients/?clinic={}", id)).await,
            None => self.list("/patients/").await,
        }
    }

    pub async fn create_patient(&self, patient: &NewPatient) -> Result<Patient, ClientError> {
        self.send_json(Method::Post, "/patients/", patient).await
    }

    pub async fn clinics(&self) -> Result<Vec<Clinic>, ClientError> {
        self.list("/clinics/").await
    }

    // ============ Composite reads ============

    /// Availability and that day's appointments, fetched concurrently
    pub async fn day_schedule(
        &self,
        date: NaiveDate,
        dentist_id: Option<u64>,
    ) -> Result<DaySchedule, ClientError> {
        let query = AppointmentQuery {
            dentist: dentist_id,
            ..AppointmentQuery::on(date)
        };
        let (availability, appointments) = futures_util::future::try_join(
            self.check_availability(date, dentist_id),
            self.appointments(&query),
        )
        .await?;

        Ok(DaySchedule::new(date, availability, appointments))
    }

    /// Counters and one day's appointments, fetched concurrently
    pub async fn dashboard_overview(&self, today: NaiveDate) -> DashboardOverview {
        let query = AppointmentQuery::on(today);
        let (stats, appointments) =
            futures_util::future::join(self.dashboard_stats(), self.appointments(&query)).await;

        DashboardOverview {
            stats,
            today: appointments.map(|mut list| {
                list.sort_by_key(|a| a.start_time);
                list
            }),
        }
    }

    /// Dentist and patient lists for the booking form, fetched concurrently
    pub async fn booking_options(&self) -> Result<BookingOptions, ClientError> {
        let (dentists, patients) =
            futures_util::future::try_join(self.dentists(None), self.patients(None)).await?;
        Ok(BookingOptions { dentists, patients })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, TEST_BASE};
    use crate::model::{AppointmentStatus, BloodType};
    use chrono::{TimeZone, Utc};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_headers_and_token() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/dashboard-stats/", 200, r#"{"dentist_count": 2}"#);

        let client = fake.client().with_token(Some("tok-1".to_string()));
        let stats = client.dashboard_stats().await.unwrap();
        assert_eq!(stats.dentist_count, 2);

        let sent = fake.sent();
        assert_eq!(sent[0].url, format!("{}/dashboard-stats/", TEST_BASE));
        assert_eq!(sent[0].header("authorization"), Some("Token tok-1"));
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_no_authorization_without_token() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/auth/clinics/", 200, r#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]"#);

        let client = fake.client().with_token(Some(String::new()));
        let clinics = client.public_clinics().await.unwrap();
        assert_eq!(clinics.len(), 2);
        assert!(fake.sent()[0].header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let fake = FakeTransport::new();
        fake.respond(
            Method::Post,
            "/auth/login/",
            200,
            r#"{"token": "abc", "user": {"username": "demo", "role_display": "Asistan"}}"#,
        );

        let response = fake.client().login("demo", "demo123").await.unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.user.username, "demo");

        let body: serde_json::Value = serde_json::from_str(fake.sent()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"username": "demo", "password": "demo123"}));
    }

    #[tokio::test]
    async fn test_login_failure_carries_server_error() {
        let fake = FakeTransport::new();
        fake.respond(
            Method::Post,
            "/auth/login/",
            401,
            r#"{"error": "Geçersiz kullanıcı adı veya şifre."}"#,
        );

        let err = fake.client().login("demo", "wrong").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Geçersiz kullanıcı adı veya şifre.");
    }

    #[tokio::test]
    async fn test_create_failure_detail_message() {
        let fake = FakeTransport::new();
        fake.respond(Method::Post, "/appointments/", 400, r#"{"detail": "X"}"#);

        let body = NewAppointment {
            dentist: 1,
            patient: 2,
            start_time: Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 1, 1, 6, 30, 0).unwrap(),
            status: AppointmentStatus::Scheduled,
            treatment_type: String::new(),
            notes: String::new(),
        };
        let err = fake.client().create_appointment(&body).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Api {
                status: 400,
                message: "X".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_list_endpoints_accept_paged_and_plain() {
        let fake = FakeTransport::new();
        fake.respond(
            Method::Get,
            "/dentists/",
            200,
            r#"{"count": 1, "results": [{"id": 1, "name": "Mehmet Öz", "specialty": "Ortodonti"}]}"#,
        );
        fake.respond(
            Method::Get,
            "/patients/",
            200,
            r#"[{"id": 5, "name": "Ahmet Yılmaz", "phone": "0532"}]"#,
        );

        let client = fake.client();
        let dentists = client.dentists(Some(1)).await.unwrap();
        let patients = client.patients(None).await.unwrap();
        assert_eq!(dentists[0].specialty, "Ortodonti");
        assert_eq!(patients[0].blood_type, BloodType::Unknown);

        let sent = fake.sent();
        assert!(sent[0].url.ends_with("/dentists/?clinic=1"));
        assert!(sent[1].url.ends_with("/patients/"));
    }

    #[tokio::test]
    async fn test_availability_query_string() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/check-availability/", 200, r#"{"total_slots": 16}"#);

        let client = fake.client();
        client.check_availability(day(), None).await.unwrap();
        client.check_availability(day(), Some(3)).await.unwrap();

        let sent = fake.sent();
        assert!(sent[0].url.ends_with("/check-availability/?date=2025-01-01"));
        assert!(sent[1].url.ends_with("/check-availability/?date=2025-01-01&dentist_id=3"));
    }

    #[tokio::test]
    async fn test_update_appointment_patches() {
        let fake = FakeTransport::new();
        fake.respond(
            Method::Patch,
            "/appointments/12/",
            200,
            r#"{"dentist": 1, "patient": 2, "start_time": "2025-01-01T09:00:00+03:00",
                "end_time": "2025-01-01T09:30:00+03:00", "status": "confirmed"}"#,
        );

        let receipt = fake
            .client()
            .update_appointment(12, &AppointmentUpdate::status(AppointmentStatus::Confirmed))
            .await
            .unwrap();
        assert_eq!(receipt.status, AppointmentStatus::Confirmed);
        assert_eq!(fake.sent()[0].body.as_deref(), Some(r#"{"status":"confirmed"}"#));
    }

    #[tokio::test]
    async fn test_day_schedule_joins_both_fetches() {
        let fake = FakeTransport::new();
        fake.respond(
            Method::Get,
            "/check-availability/",
            200,
            r#"{"total_slots": 16, "available_count": 15, "booked_count": 1,
                "working_hours": {"start": "09:00", "end": "17:00"},
                "available_slots": [], "booked_slots": []}"#,
        );
        fake.respond(
            Method::Get,
            "/appointments/",
            200,
            r#"{"results": [
                {"id": 2, "patient_name": "B", "start_time": "2025-01-01T11:00:00+03:00", "end_time": "2025-01-01T11:30:00+03:00", "status": "scheduled"},
                {"id": 1, "patient_name": "A", "start_time": "2025-01-01T09:00:00+03:00", "end_time": "2025-01-01T09:30:00+03:00", "status": "confirmed"}
            ]}"#,
        );

        let schedule = fake.client().day_schedule(day(), None).await.unwrap();
        assert_eq!(schedule.availability.total_slots, 16);
        let ids: Vec<u64> = schedule.appointments.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let urls: Vec<String> = fake.sent().into_iter().map(|r| r.url).collect();
        assert!(urls.iter().any(|u| u.ends_with("/appointments/?date=2025-01-01")));
    }

    #[tokio::test]
    async fn test_day_schedule_fails_if_either_fails() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/check-availability/", 200, r#"{"total_slots": 16}"#);
        fake.respond(Method::Get, "/appointments/", 500, "oops");

        let err = fake.client().day_schedule(day(), None).await.unwrap_err();
        assert_eq!(err.to_string(), "API Error: 500");
    }

    #[tokio::test]
    async fn test_dashboard_overview_halves_fail_independently() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/dashboard-stats/", 500, r#"{"detail": "stats down"}"#);
        fake.respond(
            Method::Get,
            "/appointments/",
            200,
            r#"[
                {"id": 7, "patient_name": "B", "start_time": "2025-01-01T14:00:00+03:00", "end_time": "2025-01-01T14:30:00+03:00", "status": "scheduled"},
                {"id": 4, "patient_name": "A", "start_time": "2025-01-01T10:00:00+03:00", "end_time": "2025-01-01T10:30:00+03:00", "status": "completed"}
            ]"#,
        );

        let overview = fake.client().dashboard_overview(day()).await;
        assert_eq!(overview.stats.unwrap_err().to_string(), "stats down");
        let ids: Vec<u64> = overview.today.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![4, 7]);

        let urls: Vec<String> = fake.sent().into_iter().map(|r| r.url).collect();
        assert_eq!(urls.len(), 2);
        assert!(urls.iter().any(|u| u.ends_with("/dashboard-stats/")));
        assert!(urls.iter().any(|u| u.ends_with("/appointments/?date=2025-01-01")));
    }

    #[tokio::test]
    async fn test_decode_error_on_unexpected_shape() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/clinics/", 200, r#"{"unexpected": true}"#);

        let err = fake.client().clinics().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_error_passthrough() {
        let fake = FakeTransport::new();
        let err = fake.client().current_user().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new(FakeTransport::new(), "http://clinic.test/api/");
        assert_eq!(client.base_url(), "http://clinic.test/api");
        let request = client.build_request(Method::Get, "/clinics/", None);
        assert_eq!(request.url, "http://clinic.test/api/clinics/");
    }
}
