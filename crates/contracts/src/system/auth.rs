use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload of endpoints that only acknowledge with a human-readable note
/// (password reset/change).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    #[serde(default)]
    pub message: String,
}

/// Payload of successful `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponseData {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<UserModel>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetConfirmation {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_model_parses_backend_response() {
        let json = r#"{
            "id": "u-1",
            "username": "admin",
            "email": "admin@example.com",
            "role": "ADMIN",
            "firstName": "Олена",
            "createdAt": "2025-01-15T08:30:00Z",
            "isActive": true
        }"#;
        let user: UserModel = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.first_name.as_deref(), Some("Олена"));
        assert!(user.last_login.is_none());
    }

    #[test]
    fn create_user_request_omits_absent_name_parts() {
        let request = CreateUserRequest {
            email: "new@example.com".to_string(),
            username: "new-editor".to_string(),
            password: "secret".to_string(),
            first_name: None,
            last_name: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "new-editor");
        assert!(json.get("firstName").is_none());
    }

    #[test]
    fn auth_response_tolerates_missing_user() {
        let data: AuthResponseData =
            serde_json::from_str(r#"{"access_token": "jwt-abc"}"#).unwrap();
        assert_eq!(data.access_token, "jwt-abc");
        assert!(data.user.is_none());
    }
}
