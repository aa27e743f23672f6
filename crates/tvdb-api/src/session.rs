//! Session manager: bearer token lifecycle and authenticated requests.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::instrument;
use url::Url;

use crate::error::ApiError;
use crate::params::QueryParams;
use crate::transport::{Transport, TransportRequest};

/// Default base URL for TVDB API v4.
pub const DEFAULT_BASE_URL: &str = "https://api4.thetvdb.com/v4/";

/// Default whole-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Path of the authentication endpoint.
const LOGIN_PATH: &str = "login";

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    pin: Option<String>,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    apikey: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pin: Option<&'a str>,
}

#[derive(Deserialize)]
struct LoginData {
    token: String,
}

/// Holds the session token and performs authenticated requests.
///
/// The token is written only by a successful [`Session::login`]. Every other
/// request reads a snapshot of it when the request is built, so a request
/// racing a concurrent login may carry either token.
#[derive(Debug)]
pub struct Session {
    transport: Transport,
    base_url: Url,
    state: RwLock<SessionState>,
}

/// Builder for [`Session`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SessionBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    https_only: bool,
}

impl SessionBuilder {
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
            https_only: false,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the whole-request timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout (default: 10s).
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Refuses plain-HTTP URLs when set.
    #[must_use]
    pub const fn https_only(mut self, enabled: bool) -> Self {
        self.https_only = enabled;
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<Session> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .https_only(self.https_only)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Session {
            transport: Transport::new(http_client),
            base_url: with_trailing_slash(base_url),
            state: RwLock::new(SessionState::default()),
        })
    }
}

/// `Url::join` replaces the last segment unless the base ends with '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl Session {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Current session token, if a login has succeeded.
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    /// Pin used by the last successful login.
    pub async fn pin(&self) -> Option<String> {
        self.state.read().await.pin.clone()
    }

    /// Exchanges an API key (and optional subscriber pin) for a session token.
    ///
    /// The token and pin are stored only when the login succeeds; on failure
    /// the previous token stays in effect.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the server rejects the
    /// credentials.
    #[instrument(skip_all)]
    pub async fn login(&self, api_key: &str, pin: Option<&str>) -> Result<(), ApiError> {
        let body = LoginBody { apikey: api_key, pin };
        let query = QueryParams::new();
        let request = TransportRequest {
            method: Method::POST,
            url: self.resolve(LOGIN_PATH)?,
            token: None,
            query: &query,
            body: Some(serde_json::to_vec(&body).map_err(ApiError::Encode)?),
        };

        let data: LoginData = self.transport.execute(request).await?;

        let mut state = self.state.write().await;
        state.token = Some(data.token);
        state.pin = pin.map(String::from);
        drop(state);

        tracing::debug!("TVDB login succeeded");
        Ok(())
    }

    /// Sends an authenticated GET request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-200 responses and
    /// payloads that do not match `T`.
    #[instrument(skip_all, fields(path = path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, ApiError> {
        self.send(Method::GET, path, query, None).await
    }

    /// Sends an authenticated POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the body cannot be encoded, for transport
    /// failures, non-200 responses and payloads that do not match `T`.
    #[instrument(skip_all, fields(path = path))]
    pub async fn post<T, B>(
        &self,
        path: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let encoded = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ApiError::Encode)?;
        self.send(Method::POST, path, query, encoded).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<Vec<u8>>,
    ) -> Result<T, ApiError> {
        let url = self.resolve(path)?;
        let token = self.token().await;
        let request = TransportRequest {
            method,
            url,
            token: token.as_deref(),
            query,
            body,
        };
        self.transport.execute(request).await
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::Url {
                path: String::from(path),
                source,
            })
    }
}
