// Outbound event delivery: webhooks and legacy notification servers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::domain::normalize::trim;

/// A webhook endpoint that receives user events. Global webhooks receive
/// events for every application; scoped ones only for the listed ids.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Webhook {
    pub application_ids: Vec<Uuid>,
    pub connect_timeout: Option<u32>,
    pub description: Option<String>,
    pub global: bool,
    /// Extra headers sent with every delivery.
    pub headers: BTreeMap<String, String>,
    pub http_authentication_password: Option<String>,
    pub http_authentication_username: Option<String>,
    pub id: Option<Uuid>,
    pub read_timeout: Option<u32>,
    pub ssl_certificate: Option<String>,
    pub url: Option<Url>,
}

impl Webhook {
    pub fn normalize(&mut self) {
        self.headers.retain(|_, value| !value.trim().is_empty());
        trim(&mut self.description);
        trim(&mut self.http_authentication_password);
        trim(&mut self.http_authentication_username);
        trim(&mut self.ssl_certificate);
    }

    /// Clears delivery credentials. Safe to call repeatedly.
    pub fn secure(&mut self) {
        self.http_authentication_password = None;
    }
}

/// A notification server: the original single-URL event sink predating
/// webhooks. Kept for deployments that still use it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationServer {
    pub connect_timeout: Option<u32>,
    pub data: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub http_authentication_password: Option<String>,
    pub http_authentication_username: Option<String>,
    pub id: Option<Uuid>,
    pub read_timeout: Option<u32>,
    pub url: Option<Url>,
}

impl NotificationServer {
    pub fn normalize(&mut self) {
        self.headers.retain(|_, value| !value.trim().is_empty());
        trim(&mut self.http_authentication_password);
        trim(&mut self.http_authentication_username);
    }
}
