// Email templates and rendered email messages.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::normalize::trim;

/// One addressee on a rendered email.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAddress {
    pub address: Option<String>,
    pub display: Option<String>,
}

impl EmailAddress {
    pub fn new(address: impl Into<String>) -> Self {
        EmailAddress {
            address: Some(address.into()),
            display: None,
        }
    }
}

/// A fully rendered email, as produced by the template preview endpoint and
/// as attached to action notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Email {
    pub bcc: Vec<EmailAddress>,
    pub cc: Vec<EmailAddress>,
    pub from: Option<EmailAddress>,
    pub html: Option<String>,
    pub reply_to: Option<EmailAddress>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub to: Vec<EmailAddress>,
}

/// A stored, localizable email template. Bodies are template source, not
/// rendered output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailTemplate {
    pub default_from_name: Option<String>,
    pub default_html_template: Option<String>,
    pub default_subject: Option<String>,
    pub default_text_template: Option<String>,
    pub from_email: Option<String>,
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

impl EmailTemplate {
    pub fn normalize(&mut self) {
        trim(&mut self.default_from_name);
        trim(&mut self.default_subject);
        trim(&mut self.from_email);
        trim(&mut self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        let mut template = EmailTemplate {
            name: Some("  Welcome  ".to_string()),
            default_subject: Some(" Hello ".to_string()),
            ..EmailTemplate::default()
        };
        template.normalize();
        assert_eq!(template.name.as_deref(), Some("Welcome"));
        let once = template.clone();
        template.normalize();
        assert_eq!(template, once);
    }
}
