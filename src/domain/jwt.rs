// Tokens: OAuth2 access tokens, refresh tokens, and decoded JWT claims.

use std::collections::BTreeMap;
use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// OAuth2 token type. Only bearer tokens are issued today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    Bearer,
}

/// An access token as returned by the OAuth2 token endpoints, in its
/// RFC 6749 wire spelling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    pub token: Option<String>,
    #[serde(rename = "expires_in")]
    pub expires_in: Option<i64>,
    #[serde(rename = "refresh_token", skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(rename = "token_type")]
    pub token_type: Option<TokenType>,
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// OAuth2 error body, in its RFC 6749 wire spelling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthError {
    #[serde(rename = "error")]
    pub error: Option<OAuthErrorType>,
    #[serde(rename = "error_description")]
    pub description: Option<String>,
    #[serde(rename = "error_uri")]
    pub error_uri: Option<String>,
    pub state: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthErrorType {
    InvalidRequest,
    InvalidClient,
    InvalidGrant,
    UnauthorizedClient,
    InvalidScope,
    ServerError,
}

/// Kind of device a refresh token was issued to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    Browser,
    Desktop,
    Laptop,
    Mobile,
    Server,
    Tablet,
    Tv,
    #[default]
    Unknown,
}

/// Device details attached to a refresh token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceInfo {
    pub description: Option<String>,
    pub last_accessed_address: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_instant: Option<DateTime<Utc>>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshTokenMetaData {
    pub device: DeviceInfo,
}

/// A long-lived refresh token for one (user, application) pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshToken {
    pub application_id: Option<Uuid>,
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_instant: Option<DateTime<Utc>>,
    pub meta_data: RefreshTokenMetaData,
    pub token: Option<String>,
    pub user_id: Option<Uuid>,
}

/// The decoded claim set of a validated JWT: the registered claims plus any
/// custom claims the deployment adds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<Uuid>,
    #[serde(flatten)]
    pub other_claims: BTreeMap<String, Value>,
}
