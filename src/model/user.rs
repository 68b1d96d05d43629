use serde::{Deserialize, Serialize};

use super::ClinicSummary;

/// Signed-in staff member as returned by `/auth/login/` and `/auth/me/`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub role_display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic: Option<ClinicSummary>,
}

impl User {
    /// Full name when the server has one, otherwise the login name
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }

    /// Single character shown in the sidebar avatar
    pub fn initial(&self) -> char {
        self.full_name
            .chars()
            .next()
            .or_else(|| self.username.chars().next())
            .unwrap_or('U')
    }
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut user = User {
            username: "demo".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "demo");
        assert_eq!(user.initial(), 'd');

        user.full_name = "Ayşe Kaya".to_string();
        assert_eq!(user.display_name(), "Ayşe Kaya");
        assert_eq!(user.initial(), 'A');
    }

    #[test]
    fn test_initial_falls_back() {
        assert_eq!(User::default().initial(), 'U');
    }

    #[test]
    fn test_login_response_decodes_nested_clinic() {
        let json = r#"{
            "token": "abc123",
            "user": {
                "id": 4,
                "username": "demo",
                "email": "demo@klinik.com",
                "full_name": "Demo Kullanıcı",
                "role": "admin",
                "role_display": "Klinik Yöneticisi",
                "clinic": {"id": 1, "name": "Gülümseten Diş", "address": "İstanbul", "phone": ""}
            }
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc123");
        assert_eq!(response.user.role_display, "Klinik Yöneticisi");
        assert_eq!(response.user.clinic.unwrap().name, "Gülümseten Diş");
    }
}
