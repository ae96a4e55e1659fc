// Application, its roles, and its OAuth2 / moderation configuration.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::domain::normalize::trim;

/// A role that can be granted to users registered for an application. Role
/// names are unique within their application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRole {
    pub description: Option<String>,
    pub id: Option<Uuid>,
    pub is_default: bool,
    pub name: Option<String>,
}

impl ApplicationRole {
    pub fn new(name: impl Into<String>) -> Self {
        ApplicationRole {
            name: Some(name.into()),
            ..ApplicationRole::default()
        }
    }

    pub fn normalize(&mut self) {
        trim(&mut self.description);
        trim(&mut self.name);
    }
}

impl PartialOrd for ApplicationRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApplicationRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

/// OAuth2 settings for an application: client credentials, URL allow-lists,
/// and token/code lifetimes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OAuth2Configuration {
    pub authorized_origin_urls: Vec<Url>,
    pub authorized_redirect_urls: Vec<Url>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Lifetime of an authorization code, in seconds.
    pub code_expires_in_seconds: i32,
    pub logout_url: Option<Url>,
    /// Lifetime of an access token, in seconds.
    pub token_expires_in_seconds: i32,
}

impl Default for OAuth2Configuration {
    fn default() -> Self {
        OAuth2Configuration {
            authorized_origin_urls: Vec::new(),
            authorized_redirect_urls: Vec::new(),
            client_id: None,
            client_secret: None,
            code_expires_in_seconds: 30,
            logout_url: None,
            token_expires_in_seconds: 3600,
        }
    }
}

impl OAuth2Configuration {
    pub fn normalize(&mut self) {
        trim(&mut self.client_id);
        trim(&mut self.client_secret);
    }
}

/// Hookup to the content moderation service used to screen usernames and
/// other user-generated content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModerationConfiguration {
    pub api_key: Option<String>,
    pub application_ids: Vec<Uuid>,
    pub url: Option<Url>,
    pub username_application_id: Option<Uuid>,
}

impl ModerationConfiguration {
    pub fn normalize(&mut self) {
        trim(&mut self.api_key);
    }
}

/// An application registered with Gatehouse. Users hold one registration
/// per application; each registration carries a subset of the application's
/// roles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub active: bool,
    pub id: Option<Uuid>,
    pub moderation_configuration: Option<ModerationConfiguration>,
    pub name: Option<String>,
    pub oauth_configuration: OAuth2Configuration,
    pub roles: Vec<ApplicationRole>,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Application {
            name: Some(name.into()),
            active: true,
            ..Application::default()
        }
    }

    /// Look up a role by name.
    pub fn role(&self, name: &str) -> Option<&ApplicationRole> {
        self.roles.iter().find(|role| role.name.as_deref() == Some(name))
    }

    pub fn normalize(&mut self) {
        trim(&mut self.name);
        if let Some(moderation) = self.moderation_configuration.as_mut() {
            moderation.normalize();
        }
        self.oauth_configuration.normalize();
        for role in &mut self.roles {
            role.normalize();
        }
    }

    /// Clears the OAuth2 client secret before the application is handed to
    /// an untrusted channel. Safe to call repeatedly.
    pub fn secure(&mut self) {
        self.oauth_configuration.client_secret = None;
    }

    /// Sorts the role list by name.
    pub fn sort_roles(&mut self) {
        self.roles.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_name_and_roles() {
        let mut application = Application::new("  Forum  ");
        application.roles.push(ApplicationRole::new(" admin "));
        application.normalize();

        assert_eq!(application.name.as_deref(), Some("Forum"));
        assert_eq!(application.roles[0].name.as_deref(), Some("admin"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut once = Application::new(" Forum ");
        once.oauth_configuration.client_id = Some(" client ".to_string());
        once.normalize();
        let mut twice = once.clone();
        twice.normalize();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_secure_clears_client_secret() {
        let mut application = Application::new("Forum");
        application.oauth_configuration.client_secret = Some("hunter2".to_string());
        application.secure();
        assert_eq!(application.oauth_configuration.client_secret, None);
        application.secure();
        assert_eq!(application.oauth_configuration.client_secret, None);
    }

    #[test]
    fn test_sort_roles_orders_by_name() {
        let mut application = Application::new("Forum");
        application.roles = vec![
            ApplicationRole::new("moderator"),
            ApplicationRole::new("admin"),
            ApplicationRole::new("editor"),
        ];
        application.sort_roles();

        let names: Vec<&str> = application
            .roles
            .iter()
            .filter_map(|role| role.name.as_deref())
            .collect();
        assert_eq!(names, vec!["admin", "editor", "moderator"]);
    }

    #[test]
    fn test_role_lookup_by_name() {
        let mut application = Application::new("Forum");
        application.roles.push(ApplicationRole::new("admin"));
        assert!(application.role("admin").is_some());
        assert!(application.role("missing").is_none());
    }

    #[test]
    fn test_oauth_defaults() {
        let configuration = OAuth2Configuration::default();
        assert_eq!(configuration.code_expires_in_seconds, 30);
        assert_eq!(configuration.token_expires_in_seconds, 3600);
    }
}
