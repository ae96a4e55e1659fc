// Events published to webhooks when users change. The wire form carries a
// "type" discriminator string; the enum is closed and matched exhaustively.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::action::UserActionPhase;
use crate::domain::email::Email;
use crate::domain::user::User;

/// Discriminator for the event kinds, in its wire spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "user.action")]
    UserAction,
    #[serde(rename = "user.bulk.create")]
    UserBulkCreate,
    #[serde(rename = "user.create")]
    UserCreate,
    #[serde(rename = "user.deactivate")]
    UserDeactivate,
    #[serde(rename = "user.delete")]
    UserDelete,
    #[serde(rename = "user.reactivate")]
    UserReactivate,
    #[serde(rename = "user.update")]
    UserUpdate,
}

impl EventType {
    /// The wire spelling of this event type.
    pub fn name(&self) -> &'static str {
        match self {
            EventType::UserAction => "user.action",
            EventType::UserBulkCreate => "user.bulk.create",
            EventType::UserCreate => "user.create",
            EventType::UserDeactivate => "user.deactivate",
            EventType::UserDelete => "user.delete",
            EventType::UserReactivate => "user.reactivate",
            EventType::UserUpdate => "user.update",
        }
    }

    /// Looks up a type by its wire spelling. Unknown names are `None`, not
    /// a silent fallback.
    pub fn from_name(name: &str) -> Option<EventType> {
        match name {
            "user.action" => Some(EventType::UserAction),
            "user.bulk.create" => Some(EventType::UserBulkCreate),
            "user.create" => Some(EventType::UserCreate),
            "user.deactivate" => Some(EventType::UserDeactivate),
            "user.delete" => Some(EventType::UserDelete),
            "user.reactivate" => Some(EventType::UserReactivate),
            "user.update" => Some(EventType::UserUpdate),
            _ => None,
        }
    }
}

/// Payload published when an action is taken on a user (or when a temporal
/// action is modified, cancelled, or ends).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionPayload {
    pub action: Option<String>,
    pub action_id: Option<Uuid>,
    pub actionee_user_id: Option<Uuid>,
    pub actioner_user_id: Option<Uuid>,
    pub application_ids: Vec<Uuid>,
    pub comment: Option<String>,
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    pub localized_action: Option<String>,
    pub localized_duration: Option<String>,
    pub localized_option: Option<String>,
    pub localized_reason: Option<String>,
    pub notify_user: bool,
    pub option: Option<String>,
    pub phase: Option<UserActionPhase>,
    pub reason: Option<String>,
    pub reason_code: Option<String>,
}

/// Payload carrying the affected user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub user: Option<User>,
}

/// Payload carrying the user before and after an update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdatePayload {
    pub original: Option<User>,
    pub user: Option<User>,
}

/// Payload carrying every user created by a bulk import.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBulkCreatePayload {
    pub users: Vec<User>,
}

/// A webhook event. The wire discriminator is the `type` property; an
/// unknown discriminator fails deserialization rather than mapping to a
/// null event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "user.action")]
    UserAction(UserActionPayload),
    #[serde(rename = "user.bulk.create")]
    UserBulkCreate(UserBulkCreatePayload),
    #[serde(rename = "user.create")]
    UserCreate(UserPayload),
    #[serde(rename = "user.deactivate")]
    UserDeactivate(UserPayload),
    #[serde(rename = "user.delete")]
    UserDelete(UserPayload),
    #[serde(rename = "user.reactivate")]
    UserReactivate(UserPayload),
    #[serde(rename = "user.update")]
    UserUpdate(UserUpdatePayload),
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::UserAction(_) => EventType::UserAction,
            Event::UserBulkCreate(_) => EventType::UserBulkCreate,
            Event::UserCreate(_) => EventType::UserCreate,
            Event::UserDeactivate(_) => EventType::UserDeactivate,
            Event::UserDelete(_) => EventType::UserDelete,
            Event::UserReactivate(_) => EventType::UserReactivate,
            Event::UserUpdate(_) => EventType::UserUpdate,
        }
    }
}
