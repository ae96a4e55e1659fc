// User actions: the moderation verbs an admin can take on a user (ban,
// mute, warn...), the reasons for taking them, and the log of applications.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::normalize::trim;

/// Lifecycle phase of a temporal action, carried on action events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserActionPhase {
    Start,
    Modify,
    Cancel,
    End,
}

/// A selectable option on a user action (e.g. the duration bucket), with
/// localized display names keyed by locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionOption {
    pub localized_names: BTreeMap<String, String>,
    pub name: Option<String>,
}

/// An action definition. Once created it can be applied to any user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAction {
    pub active: bool,
    pub cancel_email_template_id: Option<Uuid>,
    pub end_email_template_id: Option<Uuid>,
    pub id: Option<Uuid>,
    pub localized_names: BTreeMap<String, String>,
    pub modify_email_template_id: Option<Uuid>,
    pub name: Option<String>,
    pub options: Vec<UserActionOption>,
    /// Temporal actions with this flag set block login while active.
    pub prevent_login: bool,
    pub send_end_event: bool,
    pub start_email_template_id: Option<Uuid>,
    /// Temporal actions expire; non-temporal ones are point-in-time.
    pub temporal: bool,
    pub user_emailing_enabled: bool,
    pub user_notifications_enabled: bool,
}

impl UserAction {
    pub fn normalize(&mut self) {
        trim(&mut self.name);
        for option in &mut self.options {
            trim(&mut option.name);
        }
    }
}

/// A canned reason an admin can attach when actioning a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionReason {
    pub code: Option<String>,
    pub id: Option<Uuid>,
    pub localized_texts: BTreeMap<String, String>,
    pub text: Option<String>,
}

impl UserActionReason {
    pub fn normalize(&mut self) {
        trim(&mut self.code);
        trim(&mut self.text);
    }
}

/// One modification to an applied action, kept in the action's history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogHistoryItem {
    pub actioner_user_id: Option<Uuid>,
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_instant: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

/// The modification history of an applied action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogHistory {
    pub history_items: Vec<LogHistoryItem>,
}

/// A single application of an action to a user: who actioned whom, with
/// which action, why, and until when.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionLog {
    pub actionee_user_id: Option<Uuid>,
    pub actioner_user_id: Option<Uuid>,
    pub application_ids: Vec<Uuid>,
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_instant: Option<DateTime<Utc>>,
    pub email_user_on_end: bool,
    pub end_notification_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    pub history: Option<LogHistory>,
    pub id: Option<Uuid>,
    pub localized_option: Option<String>,
    pub localized_reason: Option<String>,
    pub notify_user_on_end: bool,
    pub option: Option<String>,
    pub reason: Option<String>,
    pub reason_code: Option<String>,
    pub user_action_id: Option<Uuid>,
}

impl UserActionLog {
    /// True while a temporal action has not yet expired.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| expiry > now)
    }

    pub fn normalize(&mut self) {
        trim(&mut self.comment);
    }
}
