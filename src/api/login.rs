// Login endpoint envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::User;

/// Login credentials. `id` is the login identity: an email or a username,
/// the service resolves whichever matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub application_id: Option<Uuid>,
    pub id: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(
        application_id: Uuid,
        login_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        LoginRequest {
            application_id: Some(application_id),
            id: Some(login_id.into()),
            password: Some(password.into()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub user: Option<User>,
}

/// Returned when a temporal action with `prevent_login` blocks the login.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginPreventedResponse {
    pub action_id: Option<Uuid>,
    pub actioner_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    pub localized_name: Option<String>,
    pub localized_option: Option<String>,
    pub localized_reason: Option<String>,
    pub name: Option<String>,
    pub option: Option<String>,
    pub reason: Option<String>,
    pub reason_code: Option<String>,
}
