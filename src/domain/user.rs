// User, per-application registration, and free-form user data.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use crate::domain::normalize::{remove_empty_entries, remove_empty_values, to_lower_case, trim};

/// Moderation state of user-supplied content (usernames).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentStatus {
    Active,
    Pending,
    Rejected,
}

/// How a parent granted consent for a child account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParentalConsentType {
    Email,
    EmailPlus,
    Full,
    Revoked,
}

/// Free-form attributes plus preferred languages, attached to a user
/// globally or to a single registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub attributes: Map<String, Value>,
    pub preferred_languages: Vec<String>,
}

impl UserData {
    pub fn normalize(&mut self) {
        remove_empty_values(&mut self.attributes);
        remove_empty_entries(&mut self.preferred_languages);
    }
}

/// A user's registration for a single application: the role names they hold
/// there and any per-application data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRegistration {
    pub application_id: Option<Uuid>,
    pub data: Option<UserData>,
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_instant: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_instant: Option<DateTime<Utc>>,
    pub moderation_id: Option<Uuid>,
    pub roles: BTreeSet<String>,
    pub user_id: Option<Uuid>,
    pub username: Option<String>,
    pub username_status: Option<ContentStatus>,
}

impl UserRegistration {
    pub fn normalize(&mut self) {
        trim(&mut self.username);
        if let Some(data) = self.data.as_mut() {
            data.normalize();
        }
    }
}

/// The global view of a user: identity, credentials, consent metadata, and
/// all of their per-application registrations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub active: bool,
    pub birth_date: Option<NaiveDate>,
    pub child_ids: Vec<Uuid>,
    pub data: Option<UserData>,
    pub email: Option<String>,
    pub encryption_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    pub factor: Option<i32>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub id: Option<Uuid>,
    pub image_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_instant: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_instant: Option<DateTime<Utc>>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub mobile_phone: Option<String>,
    pub moderation_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub parental_consent_type: Option<ParentalConsentType>,
    pub password: Option<String>,
    pub password_change_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_last_update_instant: Option<DateTime<Utc>>,
    pub registrations: Vec<UserRegistration>,
    pub salt: Option<String>,
    pub timezone: Option<String>,
    pub two_factor_enabled: bool,
    pub two_factor_secret: Option<String>,
    pub username: Option<String>,
    pub username_status: Option<ContentStatus>,
    pub verification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_id_create_instant: Option<DateTime<Utc>>,
    pub verified: bool,
}

impl User {
    /// The single login identity, preferring email over username.
    pub fn login(&self) -> Option<&str> {
        self.email.as_deref().or(self.username.as_deref())
    }

    /// Display name: the full name when present, otherwise first + last.
    pub fn name(&self) -> Option<String> {
        if let Some(full_name) = &self.full_name {
            return Some(full_name.clone());
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            _ => None,
        }
    }

    pub fn registration_for_application(&self, application_id: Uuid) -> Option<&UserRegistration> {
        self.registrations
            .iter()
            .find(|registration| registration.application_id == Some(application_id))
    }

    pub fn role_names_for_application(&self, application_id: Uuid) -> Option<&BTreeSet<String>> {
        self.registration_for_application(application_id)
            .map(|registration| &registration.roles)
    }

    /// True if any attributes exist on the user or on any registration.
    pub fn has_user_data(&self) -> bool {
        if self.data.as_ref().is_some_and(|d| !d.attributes.is_empty()) {
            return true;
        }
        self.registrations
            .iter()
            .any(|r| r.data.as_ref().is_some_and(|d| !d.attributes.is_empty()))
    }

    /// Normalizes all string fields and cascades into nested data and
    /// registrations. Email is the identity field and is lower-cased.
    pub fn normalize(&mut self) {
        trim(&mut self.email);
        to_lower_case(&mut self.email);
        if let Some(data) = self.data.as_mut() {
            data.normalize();
        }
        trim(&mut self.encryption_scheme);
        trim(&mut self.first_name);
        trim(&mut self.full_name);
        trim(&mut self.last_name);
        trim(&mut self.middle_name);
        trim(&mut self.mobile_phone);
        trim(&mut self.timezone);
        trim(&mut self.username);
        for registration in &mut self.registrations {
            registration.normalize();
        }
    }

    /// Clears credential material before the user is handed to an untrusted
    /// channel. Safe to call repeatedly.
    pub fn secure(&mut self) {
        self.salt = None;
        self.password = None;
        self.factor = None;
        self.encryption_scheme = None;
        self.two_factor_enabled = self.two_factor_enabled || self.two_factor_secret.is_some();
        self.two_factor_secret = None;
    }
}

/// A moderation or support comment left on a user's account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserComment {
    pub comment: Option<String>,
    pub commenter_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_instant: Option<DateTime<Utc>>,
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

impl UserComment {
    pub fn normalize(&mut self) {
        trim(&mut self.comment);
    }
}
