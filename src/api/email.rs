// Email template and send endpoint envelopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::core::errors::Errors;
use crate::domain::email::{Email, EmailTemplate};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailTemplateRequest {
    pub email_template: Option<EmailTemplate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailTemplateResponse {
    pub email_template: Option<EmailTemplate>,
    pub email_templates: Option<Vec<EmailTemplate>>,
}

/// Body for rendering a template that may not be saved yet. The preview is
/// built from whatever template fields are provided.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewRequest {
    pub email_template: Option<EmailTemplate>,
    pub locale: Option<String>,
}

/// The rendered preview. Template render problems come back in `errors`
/// even on a successful render of the remaining parts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewResponse {
    pub email: Option<Email>,
    pub errors: Option<Errors>,
}

/// Body for sending a stored template to a set of users.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendRequest {
    pub bcc_addresses: Vec<String>,
    pub cc_addresses: Vec<String>,
    /// Key/value pairs exposed to the template at render time.
    pub request_data: Map<String, Value>,
    pub user_ids: Vec<Uuid>,
}

/// Per-recipient outcome of a send.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendResult {
    pub success: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendResponse {
    pub results: BTreeMap<Uuid, SendResult>,
}
