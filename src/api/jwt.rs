// JWT and refresh token endpoint envelopes.

use serde::{Deserialize, Serialize};

use crate::domain::jwt::{AccessToken, JwtClaims, RefreshToken};

/// Response of the issue endpoint: a freshly signed JWT for the requested
/// application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueResponse {
    pub token: Option<String>,
}

/// Body for exchanging a refresh token for a new access token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshRequest {
    pub token: Option<String>,
}

impl RefreshRequest {
    pub fn new(token: impl Into<String>) -> Self {
        RefreshRequest {
            token: Some(token.into()),
        }
    }
}

/// Either the new access token (exchange) or the user's outstanding refresh
/// tokens (retrieval), depending on the method called.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshResponse {
    pub refresh_tokens: Option<Vec<RefreshToken>>,
    pub token: Option<AccessToken>,
}

/// Response of the validate endpoint: the decoded claims of a valid token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateResponse {
    pub jwt: Option<JwtClaims>,
    pub token: Option<String>,
}

/// Response of the public key endpoint, used to verify signatures locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicKeyResponse {
    pub public_key: Option<String>,
}
