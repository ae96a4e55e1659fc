// Application endpoint envelopes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::application::{Application, ApplicationRole};

/// Body for creating or updating an application, or one of its roles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notification_server_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ApplicationRole>,
}

impl ApplicationRequest {
    pub fn with_application(application: Application) -> Self {
        ApplicationRequest {
            application: Some(application),
            ..ApplicationRequest::default()
        }
    }

    pub fn with_role(role: ApplicationRole) -> Self {
        ApplicationRequest {
            role: Some(role),
            ..ApplicationRequest::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationResponse {
    pub application: Option<Application>,
    pub applications: Option<Vec<Application>>,
    pub role: Option<ApplicationRole>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_response_round_trip() {
        let response = ApplicationResponse {
            application: Some(Application::new("Forum")),
            applications: None,
            role: Some(ApplicationRole::new("admin")),
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: ApplicationResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, back);
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let json = json!({
            "application": {"id": Uuid::new_v4(), "name": "Forum"},
            "addedInSomeLaterVersion": {"nested": true}
        });
        let response: ApplicationResponse = serde_json::from_value(json).unwrap();
        assert_eq!(
            response.application.unwrap().name.as_deref(),
            Some("Forum")
        );
    }

    #[test]
    fn test_request_omits_absent_sections() {
        let request = ApplicationRequest::with_role(ApplicationRole::new("admin"));
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("application").is_none() || json["application"].is_null());
        assert_eq!(json["role"]["name"], "admin");
    }
}
