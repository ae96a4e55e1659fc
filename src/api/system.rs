// System configuration, audit log, notification server, and webhook
// endpoint envelopes.

use serde::{Deserialize, Serialize};

use crate::domain::audit::AuditLog;
use crate::domain::configuration::SystemConfiguration;
use crate::domain::webhook::{NotificationServer, Webhook};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfigurationRequest {
    pub system_configuration: Option<SystemConfiguration>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfigurationResponse {
    pub system_configuration: Option<SystemConfiguration>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogRequest {
    pub audit_log: Option<AuditLog>,
}

impl AuditLogRequest {
    pub fn new(audit_log: AuditLog) -> Self {
        AuditLogRequest {
            audit_log: Some(audit_log),
        }
    }
}

/// Search results for the audit log endpoint. `total` counts every match,
/// not just the returned page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogResponse {
    pub audit_logs: Option<Vec<AuditLog>>,
    pub total: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationServerRequest {
    pub notification_server: Option<NotificationServer>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationServerResponse {
    pub notification_server: Option<NotificationServer>,
    pub notification_servers: Option<Vec<NotificationServer>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookRequest {
    pub webhook: Option<Webhook>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookResponse {
    pub webhook: Option<Webhook>,
    pub webhooks: Option<Vec<Webhook>>,
}
