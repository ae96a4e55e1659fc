// User, registration, action, and comment endpoint envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::action::{UserAction, UserActionLog, UserActionReason};
use crate::domain::user::{User, UserComment, UserRegistration};

/// Body for creating or updating a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRequest {
    pub send_set_password_email: bool,
    pub skip_verification: bool,
    pub user: Option<User>,
}

impl UserRequest {
    pub fn new(user: User) -> Self {
        UserRequest {
            user: Some(user),
            ..UserRequest::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserResponse {
    pub user: Option<User>,
    pub users: Option<Vec<User>>,
}

/// Body for registering a user for an application. With `user` present this
/// is a full registration (the user is created too); without it the user
/// must already exist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRequest {
    pub registration: Option<UserRegistration>,
    pub send_set_password_email: bool,
    pub skip_verification: bool,
    pub user: Option<User>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationResponse {
    pub registration: Option<UserRegistration>,
    pub user: Option<User>,
}

/// The action being taken, modified, or cancelled on a user. The actionee
/// is addressed in the URL; the actioner rides in the body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionData {
    pub actioner_user_id: Option<Uuid>,
    pub application_ids: Vec<Uuid>,
    pub comment: Option<String>,
    pub email_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    pub notify_user: bool,
    pub option: Option<String>,
    pub reason_id: Option<Uuid>,
    pub user_action_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionRequest {
    pub action: Option<ActionData>,
    pub broadcast: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionResponse {
    pub action: Option<UserActionLog>,
    pub actions: Option<Vec<UserActionLog>>,
}

/// Body for creating or updating a user action definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionRequest {
    pub user_action: Option<UserAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionResponse {
    pub user_action: Option<UserAction>,
    pub user_actions: Option<Vec<UserAction>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionReasonRequest {
    pub user_action_reason: Option<UserActionReason>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionReasonResponse {
    pub user_action_reason: Option<UserActionReason>,
    pub user_action_reasons: Option<Vec<UserActionReason>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCommentRequest {
    pub user_comment: Option<UserComment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCommentResponse {
    pub user_comment: Option<UserComment>,
    pub user_comments: Option<Vec<UserComment>>,
}

/// Body for changing a password through a verification id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForgotPasswordResponse {
    pub verification_id: Option<String>,
}

/// Body for the bulk user import endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportRequest {
    pub users: Vec<User>,
}

/// Response of the search-by-ids endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub total: u64,
    pub users: Option<Vec<User>>,
}

/// Body for confirming a two-factor code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwoFactorRequest {
    pub code: Option<String>,
    pub secret: Option<String>,
}
