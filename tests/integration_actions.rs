// Integration tests for user actions, action reasons, email templates,
// notification servers, and webhooks.

use gatehouse_client::api::{
    ActionRequest, EmailTemplateRequest, SendRequest, UserActionReasonRequest, UserActionRequest,
    WebhookRequest,
};
use gatehouse_client::api::ActionData;
use gatehouse_client::domain::action::{UserAction, UserActionReason};
use gatehouse_client::domain::email::EmailTemplate;
use gatehouse_client::domain::webhook::Webhook;
use gatehouse_client::GatehouseClient;
use mockito::{Matcher, Server};
use serde_json::json;
use uuid::Uuid;

fn test_client(url: &str) -> GatehouseClient {
    GatehouseClient::new("test-api-key", url).unwrap()
}

#[tokio::test]
async fn test_action_user_addresses_the_actionee() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let actionee_user_id = Uuid::new_v4();
    let actioner_user_id = Uuid::new_v4();
    let user_action_id = Uuid::new_v4();

    let mock = server
        .mock("POST", format!("/api/user/action/{}", actionee_user_id).as_str())
        .match_body(Matcher::PartialJson(json!({
            "action": {
                "actionerUserId": actioner_user_id,
                "userActionId": user_action_id,
                "comment": "spamming the forum"
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "action": {
                    "actioneeUserId": actionee_user_id,
                    "actionerUserId": actioner_user_id,
                    "userActionId": user_action_id,
                    "comment": "spamming the forum"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = ActionRequest {
        action: Some(ActionData {
            actioner_user_id: Some(actioner_user_id),
            user_action_id: Some(user_action_id),
            comment: Some("spamming the forum".to_string()),
            ..ActionData::default()
        }),
        broadcast: false,
    };
    let response = client.action_user(actionee_user_id, &request).await;

    mock.assert_async().await;
    assert!(response.was_successful());
    let log = response.success_response.unwrap().action.unwrap();
    assert_eq!(log.actionee_user_id, Some(actionee_user_id));
}

#[tokio::test]
async fn test_retrieve_actions_filters_by_user() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let user_id = Uuid::new_v4();

    let mock = server
        .mock("GET", "/api/user/action")
        .match_query(Matcher::UrlEncoded("userId".into(), user_id.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "actions": [
                    {"actioneeUserId": user_id, "comment": "first"},
                    {"actioneeUserId": user_id, "comment": "second"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client.retrieve_actions(user_id).await;

    mock.assert_async().await;
    assert_eq!(response.success_response.unwrap().actions.unwrap().len(), 2);
}

#[tokio::test]
async fn test_user_action_lifecycle_paths() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let user_action_id = Uuid::new_v4();

    let create_mock = server
        .mock("POST", "/api/user-action")
        .match_body(Matcher::PartialJson(json!({
            "userAction": {"name": "Ban", "preventLogin": true}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"userAction": {"id": user_action_id, "name": "Ban", "preventLogin": true}})
                .to_string(),
        )
        .create_async()
        .await;

    let inactive_mock = server
        .mock("GET", "/api/user-action")
        .match_query(Matcher::UrlEncoded("inactive".into(), "true".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"userActions": []}).to_string())
        .create_async()
        .await;

    let request = UserActionRequest {
        user_action: Some(UserAction {
            name: Some("Ban".to_string()),
            prevent_login: true,
            ..UserAction::default()
        }),
    };
    let response = client.create_user_action(None, &request).await;
    create_mock.assert_async().await;
    let action = response.success_response.unwrap().user_action.unwrap();
    assert_eq!(action.id, Some(user_action_id));
    assert!(action.prevent_login);

    let response = client.retrieve_inactive_user_actions().await;
    inactive_mock.assert_async().await;
    assert!(response
        .success_response
        .unwrap()
        .user_actions
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_user_action_reason_crud_paths() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let reason_id = Uuid::new_v4();

    let update_mock = server
        .mock("PUT", format!("/api/user-action-reason/{}", reason_id).as_str())
        .match_body(Matcher::PartialJson(json!({
            "userActionReason": {"code": "SPAM", "text": "Spamming"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"userActionReason": {"id": reason_id, "code": "SPAM", "text": "Spamming"}})
                .to_string(),
        )
        .create_async()
        .await;

    let request = UserActionReasonRequest {
        user_action_reason: Some(UserActionReason {
            code: Some("SPAM".to_string()),
            text: Some("Spamming".to_string()),
            ..UserActionReason::default()
        }),
    };
    let response = client.update_user_action_reason(reason_id, &request).await;

    update_mock.assert_async().await;
    let reason = response.success_response.unwrap().user_action_reason.unwrap();
    assert_eq!(reason.code.as_deref(), Some("SPAM"));
}

#[tokio::test]
async fn test_email_template_crud_and_send() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let template_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let create_mock = server
        .mock("POST", "/api/email/template")
        .match_body(Matcher::PartialJson(json!({
            "emailTemplate": {"name": "Welcome", "defaultSubject": "Hello"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"emailTemplate": {"id": template_id, "name": "Welcome"}}).to_string(),
        )
        .create_async()
        .await;

    let send_mock = server
        .mock("POST", format!("/api/email/send/{}", template_id).as_str())
        .match_body(Matcher::PartialJson(json!({"userIds": [user_id]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"results": {}}).to_string())
        .create_async()
        .await;

    let request = EmailTemplateRequest {
        email_template: Some(EmailTemplate {
            name: Some("Welcome".to_string()),
            default_subject: Some("Hello".to_string()),
            ..EmailTemplate::default()
        }),
    };
    let response = client.create_email_template(None, &request).await;
    create_mock.assert_async().await;
    assert!(response.was_successful());

    let send = SendRequest {
        user_ids: vec![user_id],
        ..SendRequest::default()
    };
    let response = client.send_email(template_id, &send).await;
    send_mock.assert_async().await;
    assert!(response.was_successful());
}

#[tokio::test]
async fn test_webhook_crud_paths() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());
    let webhook_id = Uuid::new_v4();

    let create_mock = server
        .mock("POST", "/api/webhook")
        .match_body(Matcher::PartialJson(json!({
            "webhook": {"url": "https://hooks.example.com/gatehouse", "global": true}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "webhook": {
                    "id": webhook_id,
                    "url": "https://hooks.example.com/gatehouse",
                    "global": true
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let delete_mock = server
        .mock("DELETE", format!("/api/webhook/{}", webhook_id).as_str())
        .with_status(200)
        .create_async()
        .await;

    let request = WebhookRequest {
        webhook: Some(Webhook {
            url: Some("https://hooks.example.com/gatehouse".parse().unwrap()),
            global: true,
            ..Webhook::default()
        }),
    };
    let response = client.create_webhook(None, &request).await;
    create_mock.assert_async().await;
    assert_eq!(
        response.success_response.unwrap().webhook.unwrap().id,
        Some(webhook_id)
    );

    let response = client.delete_webhook(webhook_id).await;
    delete_mock.assert_async().await;
    assert!(response.was_successful());
}

#[tokio::test]
async fn test_notification_server_collection_retrieval() {
    let mut server = Server::new_async().await;
    let client = test_client(&server.url());

    let mock = server
        .mock("GET", "/api/notification-server")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "notificationServers": [
                    {"id": Uuid::new_v4(), "url": "https://events.example.com"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client.retrieve_notification_servers().await;

    mock.assert_async().await;
    assert_eq!(
        response
            .success_response
            .unwrap()
            .notification_servers
            .unwrap()
            .len(),
        1
    );
}
