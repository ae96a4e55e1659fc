// Integration tests for the system, report, and JWT operations.

use chrono::{TimeZone, Utc};
use gatehouse_client::api::RefreshRequest;
use gatehouse_client::domain::search::AuditLogSearchCriteria;
use gatehouse_client::GatehouseClient;
use mockito::{Matcher, Server};
use serde_json::json;
use uuid::Uuid;

fn test_client(url: &str) -> GatehouseClient {
    GatehouseClient::new("test-api-key", url).unwrap()
}

#[tokio::test]
async fn test_create_audit_log_wraps_the_entry() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());

    let mock = server
        .mock("POST", "/api/system/audit-log")
        .match_body(Matcher::PartialJson(json!({
            "auditLog": {
                "insertUser": "admin@example.com",
                "message": "Deleted user 42"
            }
        })))
        .with_status(200)
        .create_async()
        .await;

    let response = client
        .create_audit_log("Deleted user 42", "admin@example.com")
        .await;

    mock.assert_async().await;
    assert!(response.was_successful());
}

#[tokio::test]
async fn test_search_audit_logs_sends_instants_as_epoch_millis() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let start = Utc.with_ymd_and_hms(2016, 6, 1, 0, 0, 0).unwrap();

    let mock = server
        .mock("GET", "/api/system/audit-log")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search.user".into(), "admin@example.com".into()),
            Matcher::UrlEncoded("search.start".into(), start.timestamp_millis().to_string()),
            Matcher::UrlEncoded("search.startRow".into(), "0".into()),
            Matcher::UrlEncoded("search.numberOfResults".into(), "25".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "auditLogs": [
                    {"insertUser": "admin@example.com", "message": "Deleted user 42"}
                ],
                "total": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let search = AuditLogSearchCriteria {
        user: Some("admin@example.com".to_string()),
        start: Some(start),
        ..AuditLogSearchCriteria::default()
    };
    let response = client.search_audit_logs(&search).await;

    mock.assert_async().await;
    assert!(response.was_successful());
    let payload = response.success_response.unwrap();
    assert_eq!(payload.total, 1);
    assert_eq!(payload.audit_logs.unwrap().len(), 1);
}

#[tokio::test]
async fn test_system_configuration_round_trip() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());

    let mock = server
        .mock("GET", "/api/system-configuration")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "systemConfiguration": {
                    "emailConfiguration": {"host": "smtp.example.com", "port": 587},
                    "passwordValidationRules": {"minLength": 12, "maxLength": 256},
                    "verifyEmail": true
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client.retrieve_system_configuration().await;

    mock.assert_async().await;
    let configuration = response
        .success_response
        .unwrap()
        .system_configuration
        .unwrap();
    assert_eq!(configuration.email_configuration.host, "smtp.example.com");
    assert_eq!(configuration.email_configuration.port, 587);
    assert_eq!(configuration.password_validation_rules.min_length, 12);
    assert!(configuration.verify_email);
}

#[tokio::test]
async fn test_totals_report_parses_per_application_counts() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let application_id = Uuid::new_v4();

    let mock = server
        .mock("GET", "/api/report/totals")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"applicationTotals": {{"{}": {{"logins": 100, "registrations": 42}}}}, "globalRegistrations": 42}}"#,
            application_id
        ))
        .create_async()
        .await;

    let response = client.retrieve_totals_report().await;

    mock.assert_async().await;
    let payload = response.success_response.unwrap();
    assert_eq!(payload.global_registrations, 42);
    assert_eq!(payload.application_totals[&application_id].logins, 100);
}

#[tokio::test]
async fn test_login_report_narrows_to_an_application() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let application_id = Uuid::new_v4();

    let mock = server
        .mock("GET", "/api/report/login")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "1464739200000".into()),
            Matcher::UrlEncoded("end".into(), "1467331200000".into()),
            Matcher::UrlEncoded("applicationId".into(), application_id.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "logins": [{"applicationId": application_id, "count": 7, "interval": 16953}],
                "total": 7
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client
        .retrieve_login_report(Some(application_id), 1_464_739_200_000, 1_467_331_200_000)
        .await;

    mock.assert_async().await;
    let payload = response.success_response.unwrap();
    assert_eq!(payload.total, 7);
    assert_eq!(payload.logins[0].count, 7);
}

#[tokio::test]
async fn test_refresh_jwt_exchanges_the_token() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());

    let mock = server
        .mock("POST", "/api/jwt/refresh")
        .match_body(Matcher::PartialJson(json!({"token": "refresh-abc"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": {
                    "access_token": "jwt-xyz",
                    "expires_in": 3600,
                    "token_type": "Bearer"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client.refresh_jwt(&RefreshRequest::new("refresh-abc")).await;

    mock.assert_async().await;
    let token = response.success_response.unwrap().token.unwrap();
    assert_eq!(token.token.as_deref(), Some("jwt-xyz"));
    assert_eq!(token.expires_in, Some(3600));
}

#[tokio::test]
async fn test_validate_jwt_returns_the_decoded_claims() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let user_id = Uuid::new_v4();

    let mock = server
        .mock("GET", "/api/jwt/validate")
        .match_query(Matcher::UrlEncoded("token".into(), "jwt-xyz".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jwt": {
                    "exp": 1467331200,
                    "iss": "gatehouse.example.com",
                    "sub": user_id,
                    "applicationId": Uuid::new_v4()
                },
                "token": "jwt-xyz"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client.validate_jwt("jwt-xyz").await;

    mock.assert_async().await;
    let payload = response.success_response.unwrap();
    let claims = payload.jwt.unwrap();
    assert_eq!(claims.sub, Some(user_id));
    assert!(claims.other_claims.contains_key("applicationId"));
}

#[tokio::test]
async fn test_revoke_refresh_token_omits_absent_parameters() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let user_id = Uuid::new_v4();

    let mock = server
        .mock("DELETE", "/api/jwt/refresh")
        .match_query(Matcher::UrlEncoded("userId".into(), user_id.to_string()))
        .with_status(200)
        .create_async()
        .await;

    let response = client.revoke_refresh_token(None, Some(user_id), None).await;

    mock.assert_async().await;
    assert!(response.was_successful());
}

#[tokio::test]
async fn test_email_template_preview_reports_render_problems() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());

    let mock = server
        .mock("POST", "/api/email/template/preview")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "email": {"subject": "Welcome!"},
                "errors": {
                    "fieldErrors": {},
                    "generalErrors": [
                        {"code": "[invalid]template.html", "message": "Unclosed tag"}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = gatehouse_client::api::PreviewRequest::default();
    let response = client.retrieve_email_template_preview(&request).await;

    mock.assert_async().await;
    assert!(response.was_successful());
    let payload = response.success_response.unwrap();
    assert_eq!(payload.email.unwrap().subject.as_deref(), Some("Welcome!"));
    assert_eq!(payload.errors.unwrap().general_errors.len(), 1);
}
