// The REST call builder and the three-way result every facade method
// returns. One builder instance is one request; nothing is retried.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::core::errors::ClientError;

/// The outcome of one call. Exactly one of the three payload slots is
/// populated (or none, for endpoints that return only a status code):
///
/// * 2xx with a body      -> `success_response`
/// * non-2xx with a body  -> `error_response`
/// * no HTTP response     -> `exception`, and `status` is 0
///
/// The facade never returns `Err`; inspect [`was_successful`] and branch.
///
/// [`was_successful`]: ClientResponse::was_successful
#[derive(Debug)]
pub struct ClientResponse<T, E> {
    /// HTTP status code, or 0 when no response was obtained.
    pub status: u16,
    pub success_response: Option<T>,
    pub error_response: Option<E>,
    pub exception: Option<ClientError>,
}

impl<T, E> ClientResponse<T, E> {
    pub(crate) fn from_exception(exception: ClientError) -> Self {
        ClientResponse {
            status: 0,
            success_response: None,
            error_response: None,
            exception: Some(exception),
        }
    }

    /// True when an HTTP response was obtained and its status was 2xx.
    pub fn was_successful(&self) -> bool {
        self.exception.is_none() && (200..300).contains(&self.status)
    }

    /// Collapses the three-way outcome: on success the payload is passed
    /// through `transform`; otherwise the whole response is handed to
    /// `on_error` and the result is `None`.
    pub fn map_success<U, F, G>(self, transform: F, on_error: G) -> Option<U>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(&ClientResponse<T, E>),
    {
        if !self.was_successful() {
            on_error(&self);
            return None;
        }
        self.success_response.map(transform)
    }

    /// Like [`map_success`](ClientResponse::map_success) but yields the
    /// payload itself.
    pub fn success_or_else<G>(self, on_error: G) -> Option<T>
    where
        G: FnOnce(&ClientResponse<T, E>),
    {
        self.map_success(|payload| payload, on_error)
    }
}

/// A single pre-configured REST call. Built by the facade's private
/// factories with the API key and timeout already attached; the facade
/// method adds the path, optional segments/parameters, and the body.
///
/// `None` segments and parameters are omitted, which is how one method can
/// address either a single resource or the whole collection.
pub(crate) struct RestRequest {
    client: reqwest::Client,
    base_url: Url,
    authorization: String,
    timeout: Duration,
    parse_error_body: bool,
    parse_success_body: bool,
    path: &'static str,
    segments: Vec<String>,
    parameters: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    body_error: Option<ClientError>,
}

impl RestRequest {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: Url,
        authorization: String,
        timeout: Duration,
        parse_error_body: bool,
    ) -> Self {
        RestRequest {
            client,
            base_url,
            authorization,
            timeout,
            parse_error_body,
            parse_success_body: true,
            path: "",
            segments: Vec::new(),
            parameters: Vec::new(),
            headers: Vec::new(),
            body: None,
            body_error: None,
        }
    }

    pub(crate) fn uri(mut self, path: &'static str) -> Self {
        self.path = path;
        self
    }

    /// Appends a path segment. `None` omits the segment entirely.
    pub(crate) fn url_segment<S: ToString>(mut self, segment: Option<S>) -> Self {
        if let Some(segment) = segment {
            self.segments.push(segment.to_string());
        }
        self
    }

    /// Appends a query parameter. `None` omits the parameter entirely.
    pub(crate) fn url_parameter<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.parameters.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Appends one query parameter per value, under the same name.
    pub(crate) fn url_parameters<V, I>(mut self, name: &str, values: I) -> Self
    where
        V: ToString,
        I: IntoIterator<Item = V>,
    {
        for value in values {
            self.parameters.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Adds a header. `None` omits the header entirely.
    pub(crate) fn header(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Attaches a JSON body. Serialization problems are captured and
    /// surfaced through the response, keeping the no-throw contract.
    pub(crate) fn body<B: Serialize>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(error) => self.body_error = Some(ClientError::Serialization(error.to_string())),
        }
        self
    }

    /// Declares that a 2xx response carries no body worth parsing. Used by
    /// operations that return only a status code.
    pub(crate) fn no_success_body(mut self) -> Self {
        self.parse_success_body = false;
        self
    }

    pub(crate) async fn get<T, E>(self) -> ClientResponse<T, E>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        self.go(Method::GET).await
    }

    pub(crate) async fn post<T, E>(self) -> ClientResponse<T, E>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        self.go(Method::POST).await
    }

    pub(crate) async fn put<T, E>(self) -> ClientResponse<T, E>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        self.go(Method::PUT).await
    }

    pub(crate) async fn delete<T, E>(self) -> ClientResponse<T, E>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        self.go(Method::DELETE).await
    }

    fn build_url(&self) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ClientError::InvalidUrl(format!("base URL {} cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(self.path.split('/').filter(|part| !part.is_empty()));
            path.extend(self.segments.iter());
        }
        if !self.parameters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.parameters {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    async fn go<T, E>(mut self, method: Method) -> ClientResponse<T, E>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        if let Some(error) = self.body_error.take() {
            return ClientResponse::from_exception(error);
        }

        let url = match self.build_url() {
            Ok(url) => url,
            Err(error) => return ClientResponse::from_exception(error),
        };

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .timeout(self.timeout)
            .header(AUTHORIZATION, self.authorization.as_str());
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &self.body {
            request = request.json(body);
        }

        debug!(method = %method, url = %url, "sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(method = %method, url = %url, error = %error, "request failed");
                return ClientResponse::from_exception(ClientError::from_send_error(error));
            }
        };

        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!(status, url = %url, error = %error, "failed to read response body");
                return ClientResponse {
                    status,
                    success_response: None,
                    error_response: None,
                    exception: Some(ClientError::from_send_error(error)),
                };
            }
        };

        debug!(method = %method, url = %url, status, "received response");

        let mut result = ClientResponse {
            status,
            success_response: None,
            error_response: None,
            exception: None,
        };

        if (200..300).contains(&status) {
            if self.parse_success_body && !bytes.is_empty() {
                match serde_json::from_slice::<T>(&bytes) {
                    Ok(payload) => result.success_response = Some(payload),
                    Err(error) => {
                        warn!(status, url = %url, error = %error, "malformed success body");
                        result.exception = Some(ClientError::MalformedResponse(error.to_string()));
                    }
                }
            }
        } else if self.parse_error_body && !bytes.is_empty() {
            match serde_json::from_slice::<E>(&bytes) {
                Ok(errors) => result.error_response = Some(errors),
                Err(error) => {
                    warn!(status, url = %url, error = %error, "malformed error body");
                    result.exception = Some(ClientError::MalformedResponse(error.to_string()));
                }
            }
        }

        result
    }
}
