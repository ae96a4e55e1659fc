// Global system configuration: email server, password rules, lockout
// thresholds, JWT signing, and the frontend/backed URL wiring.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::domain::application::ModerationConfiguration;
use crate::domain::normalize::trim;

/// Transport security for the outbound email server connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailSecurityType {
    None,
    Ssl,
    Tls,
}

/// SMTP server settings used for verification and notification email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailConfiguration {
    pub host: String,
    pub password: Option<String>,
    pub port: u16,
    pub security: Option<EmailSecurityType>,
    pub username: Option<String>,
}

impl Default for EmailConfiguration {
    fn default() -> Self {
        EmailConfiguration {
            host: "localhost".to_string(),
            password: None,
            port: 25,
            security: None,
            username: None,
        }
    }
}

/// Password strength rules enforced on create and change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordValidationRules {
    pub max_length: u32,
    pub min_length: u32,
    pub require_mixed_case: bool,
    pub require_non_alpha: bool,
}

impl Default for PasswordValidationRules {
    fn default() -> Self {
        PasswordValidationRules {
            max_length: 256,
            min_length: 8,
            require_mixed_case: false,
            require_non_alpha: false,
        }
    }
}

/// How stored passwords are hashed, and whether older hashes are upgraded
/// when a user next logs in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordEncryptionConfiguration {
    pub default_encryption_scheme: Option<String>,
    pub default_encryption_scheme_factor: u32,
    pub upgrade_encryption_scheme_on_login: bool,
    pub upgraded_encryption_scheme: Option<String>,
    pub upgraded_encryption_scheme_factor: u32,
}

/// Failed-authentication lockout thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FailedAuthenticationConfiguration {
    /// Seconds after which the failure count resets.
    pub reset_count_in_seconds: u32,
    /// Number of failures that triggers the lockout.
    pub too_many_attempts: u32,
}

impl Default for FailedAuthenticationConfiguration {
    fn default() -> Self {
        FailedAuthenticationConfiguration {
            reset_count_in_seconds: 60,
            too_many_attempts: 5,
        }
    }
}

/// Signing algorithm for issued JWTs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    ES256,
    ES384,
    ES512,
    HS256,
    HS384,
    HS512,
    RS256,
    RS384,
    RS512,
    #[serde(rename = "none")]
    None,
}

/// JWT issuing and signing configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JwtConfiguration {
    pub algorithm: Option<Algorithm>,
    pub enabled: bool,
    pub issuer: Option<String>,
    pub private_key: Option<String>,
    pub public_key: Option<String>,
    pub refresh_token_time_to_live_in_minutes: u32,
    pub secret: Option<String>,
    pub time_to_live_in_seconds: u32,
}

impl JwtConfiguration {
    /// Normalizes line endings inside the PEM key material.
    pub fn normalize(&mut self) {
        for key in [&mut self.public_key, &mut self.private_key] {
            if let Some(pem) = key.as_mut() {
                let unified = pem.replace("\r\n", "\n").replace('\r', "\n");
                *pem = unified;
            }
        }
    }

    /// Clears the signing material. Safe to call repeatedly.
    pub fn secure(&mut self) {
        self.private_key = None;
        self.secret = None;
    }
}

/// Singleton global settings for a Gatehouse deployment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfiguration {
    pub cookie_encryption_iv: Option<String>,
    pub cookie_encryption_key: Option<String>,
    pub email_configuration: EmailConfiguration,
    pub failed_authentication_configuration: FailedAuthenticationConfiguration,
    pub forgot_email_template_id: Option<Uuid>,
    pub frontend_url: Option<Url>,
    pub jwt_configuration: JwtConfiguration,
    pub logout_url: Option<Url>,
    pub moderation_configuration: Option<ModerationConfiguration>,
    pub password_encryption_configuration: PasswordEncryptionConfiguration,
    pub password_validation_rules: PasswordValidationRules,
    /// IANA zone id the reporting endpoints bucket their intervals in.
    pub report_timezone: Option<String>,
    pub set_password_email_template_id: Option<Uuid>,
    pub verification_email_template_id: Option<Uuid>,
    pub verify_email: bool,
    pub verify_email_when_changed: bool,
}

impl SystemConfiguration {
    pub fn normalize(&mut self) {
        if let Some(moderation) = self.moderation_configuration.as_mut() {
            moderation.normalize();
        }
        self.jwt_configuration.normalize();
        trim(&mut self.email_configuration.username);
    }

    /// Clears key material and credentials that must never leave a trusted
    /// channel. Safe to call repeatedly.
    pub fn secure(&mut self) {
        self.cookie_encryption_iv = None;
        self.cookie_encryption_key = None;
        self.email_configuration.password = None;
        self.jwt_configuration.secure();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_documented_contract() {
        let configuration = SystemConfiguration::default();
        assert_eq!(configuration.email_configuration.host, "localhost");
        assert_eq!(configuration.email_configuration.port, 25);
        assert_eq!(configuration.password_validation_rules.min_length, 8);
        assert_eq!(configuration.password_validation_rules.max_length, 256);
        assert_eq!(
            configuration.failed_authentication_configuration.too_many_attempts,
            5
        );
    }

    #[test]
    fn test_secure_clears_key_material() {
        let mut configuration = SystemConfiguration {
            cookie_encryption_key: Some("key".to_string()),
            cookie_encryption_iv: Some("iv".to_string()),
            ..SystemConfiguration::default()
        };
        configuration.jwt_configuration.private_key = Some("-----BEGIN...".to_string());
        configuration.jwt_configuration.secret = Some("hmac-secret".to_string());
        configuration.email_configuration.password = Some("smtp-pass".to_string());

        configuration.secure();
        assert_eq!(configuration.cookie_encryption_key, None);
        assert_eq!(configuration.cookie_encryption_iv, None);
        assert_eq!(configuration.jwt_configuration.private_key, None);
        assert_eq!(configuration.jwt_configuration.secret, None);
        assert_eq!(configuration.email_configuration.password, None);

        let once = configuration.clone();
        configuration.secure();
        assert_eq!(configuration, once);
    }

    #[test]
    fn test_jwt_normalize_unifies_line_endings() {
        let mut configuration = JwtConfiguration {
            public_key: Some("line1\r\nline2\rline3".to_string()),
            ..JwtConfiguration::default()
        };
        configuration.normalize();
        assert_eq!(configuration.public_key.as_deref(), Some("line1\nline2\nline3"));
        configuration.normalize();
        assert_eq!(configuration.public_key.as_deref(), Some("line1\nline2\nline3"));
    }
}
