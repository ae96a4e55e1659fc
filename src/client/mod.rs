// The facade: one async method per Gatehouse endpoint.

use std::time::Duration;

use url::Url;
use uuid::Uuid;

use crate::api::{
    ActionRequest, ActionResponse, ApplicationRequest, ApplicationResponse, AuditLogRequest,
    AuditLogResponse, ChangePasswordRequest, DailyActiveUserReportResponse, EmailTemplateRequest,
    EmailTemplateResponse, ForgotPasswordRequest, ForgotPasswordResponse, ImportRequest,
    IssueResponse, LoginReportResponse, LoginRequest, LoginResponse,
    MonthlyActiveUserReportResponse, NotificationServerRequest, NotificationServerResponse,
    PreviewRequest, PreviewResponse, PublicKeyResponse, RefreshRequest, RefreshResponse,
    RegistrationReportResponse, RegistrationRequest, RegistrationResponse, SearchResponse,
    SendRequest, SendResponse, SystemConfigurationRequest, SystemConfigurationResponse,
    TotalsReportResponse, TwoFactorRequest, UserActionReasonRequest, UserActionReasonResponse,
    UserActionRequest, UserActionResponse, UserCommentRequest, UserCommentResponse,
    UserLoginReportResponse, UserRequest, UserResponse, ValidateResponse, WebhookRequest,
    WebhookResponse,
};
use crate::client::rest::{ClientResponse, RestRequest};
use crate::core::errors::{ClientError, Errors};
use crate::domain::audit::AuditLog;
use crate::domain::search::{AuditLogSearchCriteria, UserSearchCriteria};

pub mod rest;

/// Client for the Gatehouse identity and user-management API.
///
/// Every method is one synchronous round trip against the configured base
/// URL, authenticated with the API key. Methods never return `Err`:
/// validation failures come back as a populated [`Errors`] payload,
/// transport failures as a captured [`ClientError`], both inside the
/// [`ClientResponse`]. Branch on
/// [`was_successful`](ClientResponse::was_successful).
///
/// Methods that take an `Option<Uuid>` dispatch on it: `Some` addresses a
/// single resource, `None` the whole collection.
///
/// The client holds no state beyond its configuration and the pooled HTTP
/// connection; it is safe to share across tasks.
pub struct GatehouseClient {
    api_key: String,
    base_url: Url,
    http_client: reqwest::Client,
    /// Per-call deadline, covering the full round trip. May be adjusted
    /// between calls; concurrent mutation is the caller's responsibility.
    pub request_timeout: Duration,
}

impl GatehouseClient {
    /// Default for both the connect and the per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeouts(api_key, base_url, Self::DEFAULT_TIMEOUT, Self::DEFAULT_TIMEOUT)
    }

    /// Builds a client with explicit timeouts. The connect timeout is fixed
    /// for the life of the client because the pooled connections own it;
    /// the request timeout stays adjustable via the public field.
    pub fn with_timeouts(
        api_key: impl Into<String>,
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|error| ClientError::InvalidUrl(error.to_string()))?;

        let http_client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|error| {
                ClientError::Request(format!("failed to create HTTP client: {}", error))
            })?;

        Ok(GatehouseClient {
            api_key: api_key.into(),
            base_url,
            http_client,
            request_timeout,
        })
    }

    /// Pre-configured call expecting a JSON body on both the success and
    /// the error channel.
    fn start(&self) -> RestRequest {
        RestRequest::new(
            self.http_client.clone(),
            self.base_url.clone(),
            self.api_key.clone(),
            self.request_timeout,
            true,
        )
    }

    /// Pre-configured call for endpoints that declare no error payload:
    /// only a success body or a bare status.
    fn start_success_only(&self) -> RestRequest {
        RestRequest::new(
            self.http_client.clone(),
            self.base_url.clone(),
            self.api_key.clone(),
            self.request_timeout,
            false,
        )
    }

    // ----- users ---------------------------------------------------------

    /// Creates a user, with an optional caller-chosen id.
    pub async fn create_user(
        &self,
        user_id: Option<Uuid>,
        request: &UserRequest,
    ) -> ClientResponse<UserResponse, Errors> {
        self.start()
            .uri("/api/user")
            .url_segment(user_id)
            .body(request)
            .post()
            .await
    }

    pub async fn retrieve_user(&self, user_id: Uuid) -> ClientResponse<UserResponse, Errors> {
        self.start()
            .uri("/api/user")
            .url_segment(Some(user_id))
            .get()
            .await
    }

    pub async fn retrieve_user_by_email(
        &self,
        email: &str,
    ) -> ClientResponse<UserResponse, Errors> {
        self.start()
            .uri("/api/user")
            .url_parameter("email", Some(email))
            .get()
            .await
    }

    pub async fn retrieve_user_by_username(
        &self,
        username: &str,
    ) -> ClientResponse<UserResponse, Errors> {
        self.start()
            .uri("/api/user")
            .url_parameter("username", Some(username))
            .get()
            .await
    }

    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: &UserRequest,
    ) -> ClientResponse<UserResponse, Errors> {
        self.start()
            .uri("/api/user")
            .url_segment(Some(user_id))
            .body(request)
            .put()
            .await
    }

    /// Deactivates the user: they remain in the database but cannot log in.
    pub async fn deactivate_user(&self, user_id: Uuid) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user")
            .url_segment(Some(user_id))
            .no_success_body()
            .delete()
            .await
    }

    /// Permanently deletes the user and everything attached to them.
    pub async fn delete_user(&self, user_id: Uuid) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user")
            .url_segment(Some(user_id))
            .url_parameter("hardDelete", Some(true))
            .no_success_body()
            .delete()
            .await
    }

    pub async fn reactivate_user(&self, user_id: Uuid) -> ClientResponse<UserResponse, Errors> {
        self.start()
            .uri("/api/user")
            .url_segment(Some(user_id))
            .url_parameter("reactivate", Some(true))
            .put()
            .await
    }

    /// Retrieves the users for the given ids. Invalid ids are ignored.
    pub async fn search_users(&self, ids: &[Uuid]) -> ClientResponse<SearchResponse, Errors> {
        self.start()
            .uri("/api/user/search")
            .url_parameters("ids", ids.iter())
            .get()
            .await
    }

    /// Free-text user search with pagination.
    pub async fn search_users_by_query_string(
        &self,
        search: &UserSearchCriteria,
    ) -> ClientResponse<UserResponse, Errors> {
        self.start()
            .uri("/api/user/search")
            .url_parameter("queryString", search.query_string.as_deref())
            .url_parameter("numberOfResults", Some(search.number_of_results))
            .url_parameter("startRow", Some(search.start_row))
            .get()
            .await
    }

    /// Bulk imports users with pre-hashed credentials.
    pub async fn import_users(&self, request: &ImportRequest) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user/import")
            .body(request)
            .no_success_body()
            .post()
            .await
    }

    /// Kicks off the forgot-password flow, emailing the user a
    /// verification link.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> ClientResponse<ForgotPasswordResponse, Errors> {
        self.start()
            .uri("/api/user/forgot-password")
            .body(request)
            .post()
            .await
    }

    /// Changes the password of the user addressed by a verification id,
    /// usually from a reset link.
    pub async fn change_password(
        &self,
        verification_id: &str,
        request: &ChangePasswordRequest,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user/change-password")
            .url_segment(Some(verification_id))
            .body(request)
            .no_success_body()
            .post()
            .await
    }

    /// Confirms an email verification id sent to the user.
    pub async fn verify_email(&self, verification_id: &str) -> ClientResponse<(), ()> {
        self.start_success_only()
            .uri("/api/user/verify-email")
            .url_segment(Some(verification_id))
            .no_success_body()
            .post()
            .await
    }

    pub async fn resend_email_verification(&self, email: &str) -> ClientResponse<(), ()> {
        self.start_success_only()
            .uri("/api/user/verify-email")
            .url_parameter("email", Some(email))
            .no_success_body()
            .put()
            .await
    }

    pub async fn verify_two_factor(
        &self,
        request: &TwoFactorRequest,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/two-factor")
            .body(request)
            .no_success_body()
            .post()
            .await
    }

    /// Adds a comment to the user's account.
    pub async fn comment_on_user(
        &self,
        request: &UserCommentRequest,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user/comment")
            .body(request)
            .no_success_body()
            .post()
            .await
    }

    pub async fn retrieve_user_comments(
        &self,
        user_id: Uuid,
    ) -> ClientResponse<UserCommentResponse, Errors> {
        self.start()
            .uri("/api/user/comment")
            .url_segment(Some(user_id))
            .get()
            .await
    }

    // ----- login ---------------------------------------------------------

    /// Logs a user in. `caller_ip_address` overrides the source address
    /// recorded for the login, for calls proxied through a backend.
    pub async fn login(
        &self,
        request: &LoginRequest,
        caller_ip_address: Option<&str>,
    ) -> ClientResponse<LoginResponse, Errors> {
        self.start()
            .uri("/api/login")
            .header("X-Forwarded-For", caller_ip_address)
            .body(request)
            .post()
            .await
    }

    /// Records that an already-authenticated user accessed an application,
    /// keeping login counts correct for SSO setups.
    pub async fn login_ping(
        &self,
        user_id: Uuid,
        application_id: Uuid,
        caller_ip_address: Option<&str>,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/login")
            .url_segment(Some(user_id))
            .url_segment(Some(application_id))
            .header("X-Forwarded-For", caller_ip_address)
            .no_success_body()
            .put()
            .await
    }

    // ----- registrations -------------------------------------------------

    /// Registers a user for an application. With a `user` in the request
    /// this also creates the user (a full registration).
    pub async fn register(
        &self,
        user_id: Option<Uuid>,
        request: &RegistrationRequest,
    ) -> ClientResponse<RegistrationResponse, Errors> {
        self.start()
            .uri("/api/user/registration")
            .url_segment(user_id)
            .body(request)
            .post()
            .await
    }

    pub async fn retrieve_registration(
        &self,
        user_id: Uuid,
        application_id: Uuid,
    ) -> ClientResponse<RegistrationResponse, Errors> {
        self.start()
            .uri("/api/user/registration")
            .url_segment(Some(user_id))
            .url_segment(Some(application_id))
            .get()
            .await
    }

    /// Updates the registration for the application named in the request.
    pub async fn update_registration(
        &self,
        user_id: Uuid,
        request: &RegistrationRequest,
    ) -> ClientResponse<RegistrationResponse, Errors> {
        self.start()
            .uri("/api/user/registration")
            .url_segment(Some(user_id))
            .body(request)
            .put()
            .await
    }

    pub async fn delete_registration(
        &self,
        user_id: Uuid,
        application_id: Uuid,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user/registration")
            .url_segment(Some(user_id))
            .url_segment(Some(application_id))
            .no_success_body()
            .delete()
            .await
    }

    // ----- applications --------------------------------------------------

    /// Creates an application, with an optional caller-chosen id.
    pub async fn create_application(
        &self,
        application_id: Option<Uuid>,
        request: &ApplicationRequest,
    ) -> ClientResponse<ApplicationResponse, Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .body(request)
            .post()
            .await
    }

    /// Retrieves one application, or every application when `None`.
    pub async fn retrieve_application(
        &self,
        application_id: Option<Uuid>,
    ) -> ClientResponse<ApplicationResponse, ()> {
        self.start_success_only()
            .uri("/api/application")
            .url_segment(application_id)
            .get()
            .await
    }

    pub async fn retrieve_applications(&self) -> ClientResponse<ApplicationResponse, ()> {
        self.retrieve_application(None).await
    }

    pub async fn retrieve_inactive_applications(
        &self,
    ) -> ClientResponse<ApplicationResponse, ()> {
        self.start_success_only()
            .uri("/api/application")
            .url_parameter("inactive", Some(true))
            .get()
            .await
    }

    pub async fn update_application(
        &self,
        application_id: Uuid,
        request: &ApplicationRequest,
    ) -> ClientResponse<ApplicationResponse, Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(Some(application_id))
            .body(request)
            .put()
            .await
    }

    pub async fn deactivate_application(
        &self,
        application_id: Uuid,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(Some(application_id))
            .no_success_body()
            .delete()
            .await
    }

    pub async fn reactivate_application(
        &self,
        application_id: Uuid,
    ) -> ClientResponse<ApplicationResponse, Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(Some(application_id))
            .url_parameter("reactivate", Some(true))
            .put()
            .await
    }

    /// Permanently deletes the application, its registrations, roles, and
    /// metrics. This can take a long time on large deployments.
    pub async fn delete_application(&self, application_id: Uuid) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(Some(application_id))
            .url_parameter("hardDelete", Some(true))
            .no_success_body()
            .delete()
            .await
    }

    /// Creates a role on the application. The application id is required;
    /// the role id inside the request is optional.
    pub async fn create_application_role(
        &self,
        application_id: Uuid,
        request: &ApplicationRequest,
    ) -> ClientResponse<ApplicationResponse, Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(Some(application_id))
            .url_segment(Some("role"))
            .body(request)
            .post()
            .await
    }

    pub async fn update_application_role(
        &self,
        application_id: Uuid,
        role_id: Uuid,
        request: &ApplicationRequest,
    ) -> ClientResponse<ApplicationResponse, Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(Some(application_id))
            .url_segment(Some("role"))
            .url_segment(Some(role_id))
            .body(request)
            .put()
            .await
    }

    /// Permanently removes the role from the application and from every
    /// registration that held it.
    pub async fn delete_application_role(
        &self,
        application_id: Uuid,
        role_id: Uuid,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/application")
            .url_segment(Some(application_id))
            .url_segment(Some("role"))
            .url_segment(Some(role_id))
            .no_success_body()
            .delete()
            .await
    }

    // ----- user actions --------------------------------------------------

    /// Takes an action on a user. The actionee is addressed by id; the
    /// actioner and the action details ride in the request.
    pub async fn action_user(
        &self,
        actionee_user_id: Uuid,
        request: &ActionRequest,
    ) -> ClientResponse<ActionResponse, Errors> {
        self.start()
            .uri("/api/user/action")
            .url_segment(Some(actionee_user_id))
            .body(request)
            .post()
            .await
    }

    /// Cancels a temporal action before it expires.
    pub async fn cancel_action(
        &self,
        action_id: Uuid,
        request: &ActionRequest,
    ) -> ClientResponse<ActionResponse, Errors> {
        self.start()
            .uri("/api/user/action")
            .url_segment(Some(action_id))
            .body(request)
            .delete()
            .await
    }

    /// Changes the expiry of a temporal action, optionally adding a
    /// comment.
    pub async fn modify_action(
        &self,
        action_id: Uuid,
        request: &ActionRequest,
    ) -> ClientResponse<ActionResponse, Errors> {
        self.start()
            .uri("/api/user/action")
            .url_segment(Some(action_id))
            .body(request)
            .put()
            .await
    }

    pub async fn retrieve_action(&self, action_id: Uuid) -> ClientResponse<ActionResponse, Errors> {
        self.start()
            .uri("/api/user/action")
            .url_segment(Some(action_id))
            .get()
            .await
    }

    /// Retrieves every action ever taken on the user.
    pub async fn retrieve_actions(&self, user_id: Uuid) -> ClientResponse<ActionResponse, Errors> {
        self.start()
            .uri("/api/user/action")
            .url_parameter("userId", Some(user_id))
            .get()
            .await
    }

    pub async fn create_user_action(
        &self,
        user_action_id: Option<Uuid>,
        request: &UserActionRequest,
    ) -> ClientResponse<UserActionResponse, Errors> {
        self.start()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .body(request)
            .post()
            .await
    }

    /// Retrieves one action definition, or all of them when `None`.
    pub async fn retrieve_user_action(
        &self,
        user_action_id: Option<Uuid>,
    ) -> ClientResponse<UserActionResponse, ()> {
        self.start_success_only()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .get()
            .await
    }

    pub async fn retrieve_user_actions(&self) -> ClientResponse<UserActionResponse, ()> {
        self.retrieve_user_action(None).await
    }

    pub async fn retrieve_inactive_user_actions(
        &self,
    ) -> ClientResponse<UserActionResponse, ()> {
        self.start_success_only()
            .uri("/api/user-action")
            .url_parameter("inactive", Some(true))
            .get()
            .await
    }

    pub async fn update_user_action(
        &self,
        user_action_id: Uuid,
        request: &UserActionRequest,
    ) -> ClientResponse<UserActionResponse, Errors> {
        self.start()
            .uri("/api/user-action")
            .url_segment(Some(user_action_id))
            .body(request)
            .put()
            .await
    }

    pub async fn deactivate_user_action(
        &self,
        user_action_id: Uuid,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user-action")
            .url_segment(Some(user_action_id))
            .no_success_body()
            .delete()
            .await
    }

    pub async fn reactivate_user_action(
        &self,
        user_action_id: Uuid,
    ) -> ClientResponse<UserActionResponse, Errors> {
        self.start()
            .uri("/api/user-action")
            .url_segment(Some(user_action_id))
            .url_parameter("reactivate", Some(true))
            .put()
            .await
    }

    /// Permanently deletes the action definition and every log of it being
    /// applied.
    pub async fn delete_user_action(&self, user_action_id: Uuid) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user-action")
            .url_segment(Some(user_action_id))
            .url_parameter("hardDelete", Some(true))
            .no_success_body()
            .delete()
            .await
    }

    pub async fn create_user_action_reason(
        &self,
        user_action_reason_id: Option<Uuid>,
        request: &UserActionReasonRequest,
    ) -> ClientResponse<UserActionReasonResponse, Errors> {
        self.start()
            .uri("/api/user-action-reason")
            .url_segment(user_action_reason_id)
            .body(request)
            .post()
            .await
    }

    /// Retrieves one action reason, or all of them when `None`.
    pub async fn retrieve_user_action_reason(
        &self,
        user_action_reason_id: Option<Uuid>,
    ) -> ClientResponse<UserActionReasonResponse, ()> {
        self.start_success_only()
            .uri("/api/user-action-reason")
            .url_segment(user_action_reason_id)
            .get()
            .await
    }

    pub async fn retrieve_user_action_reasons(
        &self,
    ) -> ClientResponse<UserActionReasonResponse, ()> {
        self.retrieve_user_action_reason(None).await
    }

    pub async fn update_user_action_reason(
        &self,
        user_action_reason_id: Uuid,
        request: &UserActionReasonRequest,
    ) -> ClientResponse<UserActionReasonResponse, Errors> {
        self.start()
            .uri("/api/user-action-reason")
            .url_segment(Some(user_action_reason_id))
            .body(request)
            .put()
            .await
    }

    pub async fn delete_user_action_reason(
        &self,
        user_action_reason_id: Uuid,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/user-action-reason")
            .url_segment(Some(user_action_reason_id))
            .no_success_body()
            .delete()
            .await
    }

    // ----- email ---------------------------------------------------------

    pub async fn create_email_template(
        &self,
        email_template_id: Option<Uuid>,
        request: &EmailTemplateRequest,
    ) -> ClientResponse<EmailTemplateResponse, Errors> {
        self.start()
            .uri("/api/email/template")
            .url_segment(email_template_id)
            .body(request)
            .post()
            .await
    }

    /// Retrieves one email template, or all of them when `None`.
    pub async fn retrieve_email_template(
        &self,
        email_template_id: Option<Uuid>,
    ) -> ClientResponse<EmailTemplateResponse, ()> {
        self.start_success_only()
            .uri("/api/email/template")
            .url_segment(email_template_id)
            .get()
            .await
    }

    pub async fn retrieve_email_templates(&self) -> ClientResponse<EmailTemplateResponse, ()> {
        self.retrieve_email_template(None).await
    }

    pub async fn update_email_template(
        &self,
        email_template_id: Uuid,
        request: &EmailTemplateRequest,
    ) -> ClientResponse<EmailTemplateResponse, Errors> {
        self.start()
            .uri("/api/email/template")
            .url_segment(Some(email_template_id))
            .body(request)
            .put()
            .await
    }

    pub async fn delete_email_template(
        &self,
        email_template_id: Uuid,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/email/template")
            .url_segment(Some(email_template_id))
            .no_success_body()
            .delete()
            .await
    }

    /// Renders a template that need not be saved yet; render problems come
    /// back on the error channel.
    pub async fn retrieve_email_template_preview(
        &self,
        request: &PreviewRequest,
    ) -> ClientResponse<PreviewResponse, Errors> {
        self.start()
            .uri("/api/email/template/preview")
            .body(request)
            .post()
            .await
    }

    /// Sends the stored template to the users named in the request.
    pub async fn send_email(
        &self,
        email_template_id: Uuid,
        request: &SendRequest,
    ) -> ClientResponse<SendResponse, Errors> {
        self.start()
            .uri("/api/email/send")
            .url_segment(Some(email_template_id))
            .body(request)
            .post()
            .await
    }

    // ----- notification servers and webhooks -----------------------------

    pub async fn create_notification_server(
        &self,
        notification_server_id: Option<Uuid>,
        request: &NotificationServerRequest,
    ) -> ClientResponse<NotificationServerResponse, Errors> {
        self.start()
            .uri("/api/notification-server")
            .url_segment(notification_server_id)
            .body(request)
            .post()
            .await
    }

    /// Retrieves one notification server, or all of them when `None`.
    pub async fn retrieve_notification_server(
        &self,
        notification_server_id: Option<Uuid>,
    ) -> ClientResponse<NotificationServerResponse, ()> {
        self.start_success_only()
            .uri("/api/notification-server")
            .url_segment(notification_server_id)
            .get()
            .await
    }

    pub async fn retrieve_notification_servers(
        &self,
    ) -> ClientResponse<NotificationServerResponse, ()> {
        self.retrieve_notification_server(None).await
    }

    pub async fn update_notification_server(
        &self,
        notification_server_id: Uuid,
        request: &NotificationServerRequest,
    ) -> ClientResponse<NotificationServerResponse, Errors> {
        self.start()
            .uri("/api/notification-server")
            .url_segment(Some(notification_server_id))
            .body(request)
            .put()
            .await
    }

    pub async fn delete_notification_server(
        &self,
        notification_server_id: Uuid,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/notification-server")
            .url_segment(Some(notification_server_id))
            .no_success_body()
            .delete()
            .await
    }

    pub async fn create_webhook(
        &self,
        webhook_id: Option<Uuid>,
        request: &WebhookRequest,
    ) -> ClientResponse<WebhookResponse, Errors> {
        self.start()
            .uri("/api/webhook")
            .url_segment(webhook_id)
            .body(request)
            .post()
            .await
    }

    /// Retrieves one webhook, or all of them when `None`.
    pub async fn retrieve_webhook(
        &self,
        webhook_id: Option<Uuid>,
    ) -> ClientResponse<WebhookResponse, ()> {
        self.start_success_only()
            .uri("/api/webhook")
            .url_segment(webhook_id)
            .get()
            .await
    }

    pub async fn retrieve_webhooks(&self) -> ClientResponse<WebhookResponse, ()> {
        self.retrieve_webhook(None).await
    }

    pub async fn update_webhook(
        &self,
        webhook_id: Uuid,
        request: &WebhookRequest,
    ) -> ClientResponse<WebhookResponse, Errors> {
        self.start()
            .uri("/api/webhook")
            .url_segment(Some(webhook_id))
            .body(request)
            .put()
            .await
    }

    pub async fn delete_webhook(&self, webhook_id: Uuid) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/webhook")
            .url_segment(Some(webhook_id))
            .no_success_body()
            .delete()
            .await
    }

    // ----- system --------------------------------------------------------

    pub async fn retrieve_system_configuration(
        &self,
    ) -> ClientResponse<SystemConfigurationResponse, ()> {
        self.start_success_only()
            .uri("/api/system-configuration")
            .get()
            .await
    }

    pub async fn update_system_configuration(
        &self,
        request: &SystemConfigurationRequest,
    ) -> ClientResponse<SystemConfigurationResponse, Errors> {
        self.start()
            .uri("/api/system-configuration")
            .body(request)
            .put()
            .await
    }

    /// Writes an audit log entry. Anything that changes the Gatehouse
    /// database through this API should be logged this way.
    pub async fn create_audit_log(
        &self,
        message: &str,
        insert_user: &str,
    ) -> ClientResponse<(), Errors> {
        let request = AuditLogRequest::new(AuditLog::new(insert_user, message));
        self.start()
            .uri("/api/system/audit-log")
            .body(&request)
            .no_success_body()
            .post()
            .await
    }

    /// Searches the audit logs. Instants are sent as epoch milliseconds.
    pub async fn search_audit_logs(
        &self,
        search: &AuditLogSearchCriteria,
    ) -> ClientResponse<AuditLogResponse, ()> {
        self.start_success_only()
            .uri("/api/system/audit-log")
            .url_parameter("search.user", search.user.as_deref())
            .url_parameter("search.message", search.message.as_deref())
            .url_parameter("search.end", search.end.map(|end| end.timestamp_millis()))
            .url_parameter(
                "search.start",
                search.start.map(|start| start.timestamp_millis()),
            )
            .url_parameter("search.orderBy", search.order_by.as_deref())
            .url_parameter("search.startRow", Some(search.start_row))
            .url_parameter("search.numberOfResults", Some(search.number_of_results))
            .get()
            .await
    }

    // ----- reports -------------------------------------------------------

    /// Daily active user counts between two instants (epoch milliseconds),
    /// optionally narrowed to one application.
    pub async fn retrieve_daily_active_report(
        &self,
        application_id: Option<Uuid>,
        start: i64,
        end: i64,
    ) -> ClientResponse<DailyActiveUserReportResponse, Errors> {
        self.start()
            .uri("/api/report/daily-active-user")
            .url_parameter("start", Some(start))
            .url_parameter("end", Some(end))
            .url_parameter("applicationId", application_id)
            .get()
            .await
    }

    pub async fn retrieve_login_report(
        &self,
        application_id: Option<Uuid>,
        start: i64,
        end: i64,
    ) -> ClientResponse<LoginReportResponse, Errors> {
        self.start()
            .uri("/api/report/login")
            .url_parameter("start", Some(start))
            .url_parameter("end", Some(end))
            .url_parameter("applicationId", application_id)
            .get()
            .await
    }

    pub async fn retrieve_monthly_active_report(
        &self,
        application_id: Option<Uuid>,
        start: i64,
        end: i64,
    ) -> ClientResponse<MonthlyActiveUserReportResponse, Errors> {
        self.start()
            .uri("/api/report/monthly-active-user")
            .url_parameter("start", Some(start))
            .url_parameter("end", Some(end))
            .url_parameter("applicationId", application_id)
            .get()
            .await
    }

    pub async fn retrieve_registration_report(
        &self,
        application_id: Option<Uuid>,
        start: i64,
        end: i64,
    ) -> ClientResponse<RegistrationReportResponse, Errors> {
        self.start()
            .uri("/api/report/registration")
            .url_parameter("start", Some(start))
            .url_parameter("end", Some(end))
            .url_parameter("applicationId", application_id)
            .get()
            .await
    }

    /// Lifetime totals for every application plus the global registration
    /// count.
    pub async fn retrieve_totals_report(&self) -> ClientResponse<TotalsReportResponse, ()> {
        self.start_success_only()
            .uri("/api/report/totals")
            .get()
            .await
    }

    /// One page of a user's login history. `offset` 0 is the most recent
    /// login; `limit` defaults to 10.
    pub async fn retrieve_user_login_report(
        &self,
        user_id: Uuid,
        offset: u32,
        limit: Option<u32>,
    ) -> ClientResponse<UserLoginReportResponse, Errors> {
        self.start()
            .uri("/api/report/user-login")
            .url_parameter("userId", Some(user_id))
            .url_parameter("offset", Some(offset))
            .url_parameter("limit", Some(limit.unwrap_or(10)))
            .get()
            .await
    }

    // ----- JWT and refresh tokens ----------------------------------------

    /// Issues a signed JWT for the application, for a user already
    /// authenticated with the API key's backend.
    pub async fn issue_jwt(&self, application_id: Uuid) -> ClientResponse<IssueResponse, Errors> {
        self.start()
            .uri("/api/jwt/issue")
            .url_parameter("applicationId", Some(application_id))
            .get()
            .await
    }

    /// Exchanges a refresh token for a fresh access token.
    pub async fn refresh_jwt(
        &self,
        request: &RefreshRequest,
    ) -> ClientResponse<RefreshResponse, Errors> {
        self.start()
            .uri("/api/jwt/refresh")
            .body(request)
            .post()
            .await
    }

    /// Retrieves the user's outstanding refresh tokens.
    pub async fn retrieve_refresh_tokens(
        &self,
        user_id: Uuid,
    ) -> ClientResponse<RefreshResponse, Errors> {
        self.start()
            .uri("/api/jwt/refresh")
            .url_parameter("userId", Some(user_id))
            .get()
            .await
    }

    /// Revokes refresh tokens by token value, user, or (user, application)
    /// pair, whichever parameters are provided.
    pub async fn revoke_refresh_token(
        &self,
        token: Option<&str>,
        user_id: Option<Uuid>,
        application_id: Option<Uuid>,
    ) -> ClientResponse<(), Errors> {
        self.start()
            .uri("/api/jwt/refresh")
            .url_parameter("token", token)
            .url_parameter("userId", user_id)
            .url_parameter("applicationId", application_id)
            .no_success_body()
            .delete()
            .await
    }

    /// Validates an access token and returns its decoded claims.
    pub async fn validate_jwt(&self, encoded_jwt: &str) -> ClientResponse<ValidateResponse, ()> {
        self.start_success_only()
            .uri("/api/jwt/validate")
            .url_parameter("token", Some(encoded_jwt))
            .get()
            .await
    }

    /// The public key used to verify JWT signatures locally.
    pub async fn retrieve_jwt_public_key(&self) -> ClientResponse<PublicKeyResponse, ()> {
        self.start_success_only()
            .uri("/api/jwt/public-key")
            .get()
            .await
    }
}
