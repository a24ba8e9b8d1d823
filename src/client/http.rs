//! HTTP client implementation for the Postmark API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::api::{
    BouncesService, DataRemovalsService, DomainsService, EmailService, InboundMessagesService,
    InboundRulesService, MessageStreamsService, OutboundMessagesService, SenderSignaturesService,
    ServersService, StatsService, SuppressionsService, TemplatesService, WebhooksService,
};
use crate::{Error, Result};

use super::config::ClientConfig;

/// Header carrying the server token.
const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";
/// Header carrying the account token.
const ACCOUNT_TOKEN_HEADER: &str = "X-Postmark-Account-Token";

/// The main client for interacting with the Postmark API.
///
/// The client holds both Postmark credentials and hands out per-resource
/// service structs. It is cheap to clone and safe to share across tasks:
/// all state is read-only after construction.
///
/// # Example
///
/// ```no_run
/// use postmark_rs::{Email, PostmarkClient};
///
/// # async fn example() -> postmark_rs::Result<()> {
/// let client = PostmarkClient::new("server-token", "account-token")?;
///
/// let response = client.email().send(&Email {
///     from: "sender@example.com".into(),
///     to: "receiver@example.com".into(),
///     subject: "Hello".into(),
///     text_body: "Hello from postmark-rs".into(),
///     ..Default::default()
/// }).await?;
/// println!("sent {}", response.message_id);
/// # Ok(())
/// # }
/// ```
pub struct PostmarkClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    server_token: SecretString,
    account_token: SecretString,
}

/// Which of the two Postmark credentials authorizes a call.
///
/// The set is closed and every use site matches exhaustively, so a call can
/// never fall back to the wrong credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenScope {
    /// Server-level privileges (`X-Postmark-Server-Token`).
    Server,
    /// Account-level privileges (`X-Postmark-Account-Token`).
    Account,
}

impl TokenScope {
    fn header_name(self) -> &'static str {
        match self {
            TokenScope::Server => SERVER_TOKEN_HEADER,
            TokenScope::Account => ACCOUNT_TOKEN_HEADER,
        }
    }
}

impl PostmarkClient {
    /// Create a new client with the default configuration.
    ///
    /// The server token authorizes server-level calls (sending, bounces,
    /// templates); the account token authorizes account-level calls
    /// (domains, sender signatures, server management). Pass an empty
    /// string for a scope you never use.
    pub fn new(
        server_token: impl Into<String>,
        account_token: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(server_token, account_token, ClientConfig::default())
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(
        server_token: impl Into<String>,
        account_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                server_token: SecretString::from(server_token.into()),
                account_token: SecretString::from(account_token.into()),
            }),
        })
    }

    /// Get the email sending service.
    pub fn email(&self) -> EmailService {
        EmailService::new(self.inner.clone())
    }

    /// Get the bounces service.
    pub fn bounces(&self) -> BouncesService {
        BouncesService::new(self.inner.clone())
    }

    /// Get the templates service.
    pub fn templates(&self) -> TemplatesService {
        TemplatesService::new(self.inner.clone())
    }

    /// Get the domains service.
    pub fn domains(&self) -> DomainsService {
        DomainsService::new(self.inner.clone())
    }

    /// Get the sender signatures service.
    pub fn sender_signatures(&self) -> SenderSignaturesService {
        SenderSignaturesService::new(self.inner.clone())
    }

    /// Get the server management service.
    pub fn servers(&self) -> ServersService {
        ServersService::new(self.inner.clone())
    }

    /// Get the outbound messages service.
    pub fn outbound_messages(&self) -> OutboundMessagesService {
        OutboundMessagesService::new(self.inner.clone())
    }

    /// Get the inbound messages service.
    pub fn inbound_messages(&self) -> InboundMessagesService {
        InboundMessagesService::new(self.inner.clone())
    }

    /// Get the message streams service.
    pub fn message_streams(&self) -> MessageStreamsService {
        MessageStreamsService::new(self.inner.clone())
    }

    /// Get the suppressions service.
    pub fn suppressions(&self) -> SuppressionsService {
        SuppressionsService::new(self.inner.clone())
    }

    /// Get the statistics service.
    pub fn stats(&self) -> StatsService {
        StatsService::new(self.inner.clone())
    }

    /// Get the inbound rule triggers service.
    pub fn inbound_rules(&self) -> InboundRulesService {
        InboundRulesService::new(self.inner.clone())
    }

    /// Get the data removals service.
    pub fn data_removals(&self) -> DataRemovalsService {
        DataRemovalsService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }
}

/// Status envelope returned with a 200 by delete-style operations.
/// A non-zero code inside a success response still means failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct CommandResponse {
    pub(crate) error_code: i64,
    pub(crate) message: String,
}

impl ClientInner {
    fn token_for(&self, scope: TokenScope) -> &SecretString {
        match scope {
            TokenScope::Server => &self.server_token,
            TokenScope::Account => &self.account_token,
        }
    }

    /// Build request headers for the given scope.
    fn build_headers(&self, scope: TokenScope, has_payload: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if has_payload {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let token = self.token_for(scope);
        let mut value = HeaderValue::from_str(token.expose_secret())
            .map_err(|_| Error::InvalidInput("token is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        headers.insert(scope.header_name(), value);

        Ok(headers)
    }

    /// Perform one API call and return the raw success body.
    ///
    /// This is the single funnel every operation goes through: compose the
    /// URL, encode the payload before any network activity, attach headers,
    /// execute, read the full body, and classify non-success statuses.
    /// Each step is terminal on first failure; there are no retries.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
        scope: TokenScope,
    ) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = Url::parse(&format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        ))?;

        let body = match payload {
            Some(payload) => Some(serde_json::to_vec(payload).map_err(Error::Encode)?),
            None => None,
        };

        let headers = self.build_headers(scope, body.is_some())?;

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        if status >= 400 {
            return Err(Error::from_response(status, &body));
        }

        Ok(body.to_vec())
    }

    /// Perform a call and decode the success body into `T`.
    pub(crate) async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
        scope: TokenScope,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.dispatch(method, path, payload, scope).await?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Perform a call whose 200 body is the `{ErrorCode, Message}` status
    /// envelope, failing when the embedded code is non-zero.
    pub(crate) async fn execute_command(
        &self,
        method: Method,
        path: &str,
        scope: TokenScope,
    ) -> Result<()> {
        let res: CommandResponse = self.execute(method, path, None::<&()>, scope).await?;
        if res.error_code != 0 {
            return Err(Error::Api {
                error_code: res.error_code,
                message: res.message,
            });
        }
        Ok(())
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: TokenScope,
    ) -> Result<T> {
        self.execute(Method::GET, path, None::<&()>, scope).await
    }

    /// Make a POST request with a JSON payload.
    pub(crate) async fn post<T, B>(&self, path: &str, payload: &B, scope: TokenScope) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(payload), scope).await
    }

    /// Make a POST request with no payload.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: TokenScope,
    ) -> Result<T> {
        self.execute(Method::POST, path, None::<&()>, scope).await
    }

    /// Make a PUT request with a JSON payload.
    pub(crate) async fn put<T, B>(&self, path: &str, payload: &B, scope: TokenScope) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, path, Some(payload), scope).await
    }

    /// Make a PUT request with no payload.
    pub(crate) async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: TokenScope,
    ) -> Result<T> {
        self.execute(Method::PUT, path, None::<&()>, scope).await
    }

    /// Make a PATCH request with a JSON payload.
    pub(crate) async fn patch<T, B>(&self, path: &str, payload: &B, scope: TokenScope) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, path, Some(payload), scope)
            .await
    }
}

impl Clone for PostmarkClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for PostmarkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostmarkClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;

    fn test_client(base_url: &str) -> PostmarkClient {
        PostmarkClient::with_config(
            "server-token",
            "account-token",
            ClientConfig::default().with_base_url(base_url),
        )
        .expect("client should build")
    }

    #[test]
    fn scope_header_names() {
        assert_eq!(TokenScope::Server.header_name(), "X-Postmark-Server-Token");
        assert_eq!(
            TokenScope::Account.header_name(),
            "X-Postmark-Account-Token"
        );
    }

    #[tokio::test]
    async fn dispatch_joins_base_url_with_single_slash() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/deliverystats");
                then.status(200).body("{}");
            })
            .await;

        // Trailing slash on the base URL must not produce a double slash.
        let client = test_client(&format!("{}/", server.base_url()));
        let result: Result<serde_json::Value> = client
            .inner
            .get("deliverystats", TokenScope::Server)
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn invalid_base_url_fails_before_sending() {
        let client = test_client("not a url");
        let result: Result<serde_json::Value> = client.inner.get("path", TokenScope::Server).await;
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[tokio::test]
    async fn success_body_is_not_decoded_until_a_destination_asks() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST).path("/fire-and-forget");
                // Deliberately not JSON; decoding into a destination would
                // fail, reading the raw exchange must not.
                then.status(200).body("this is not json");
            })
            .await;

        let client = test_client(&server.base_url());
        let result = client
            .inner
            .dispatch(Method::POST, "fire-and-forget", None::<&()>, TokenScope::Server)
            .await;

        assert_eq!(result.unwrap(), b"this is not json");
    }

    #[tokio::test]
    async fn command_envelope_with_nonzero_code_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::DELETE).path("/things/1");
                then.status(200)
                    .body(r#"{"ErrorCode":402,"Message":"Invalid JSON"}"#);
            })
            .await;

        let client = test_client(&server.base_url());
        let result = client
            .inner
            .execute_command(Method::DELETE, "things/1", TokenScope::Server)
            .await;

        match result {
            Err(Error::Api {
                error_code,
                message,
            }) => {
                assert_eq!(error_code, 402);
                assert_eq!(message, "Invalid JSON");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn exactly_one_token_header_is_sent() {
        let server = MockServer::start_async().await;
        // A request carrying the server token would match this mock first
        // and fail the call with a 500.
        let wrong_scope = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/scoped")
                    .header("X-Postmark-Server-Token", "server-token");
                then.status(500).body("wrong token header");
            })
            .await;
        let right_scope = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/scoped")
                    .header("X-Postmark-Account-Token", "account-token");
                then.status(200).body("{}");
            })
            .await;

        let client = test_client(&server.base_url());
        let result: Result<serde_json::Value> =
            client.inner.get("scoped", TokenScope::Account).await;

        assert!(result.is_ok());
        assert_eq!(wrong_scope.hits_async().await, 0);
        right_scope.assert_async().await;
    }

    #[tokio::test]
    async fn content_type_only_present_with_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path("/with-body")
                    .header("Content-Type", "application/json")
                    .header("Accept", "application/json");
                then.status(200).body("{}");
            })
            .await;

        let client = test_client(&server.base_url());
        let payload = serde_json::json!({"test": "data"});
        let result: Result<serde_json::Value> = client
            .inner
            .post("with-body", &payload, TokenScope::Server)
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }
}
