//! HTTP client for the Slay the Relics extension backend
//!
//! Every call is one blocking JSON round trip. Auth headers are attached when
//! the config reports valid credentials; otherwise the request goes out
//! unauthenticated and the server decides.

pub mod http;
pub mod model;
pub mod timestamp;

pub use model::User;
pub use timestamp::LastSuccess;

use crate::config::{ApiConfig, Config};
use crate::error::{Error, Result};
use model::AuthRequest;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Credential verification endpoint
pub const AUTH_PATH: &str = "/api/v1/auth";
/// Chat/overlay message endpoint
pub const MESSAGE_PATH: &str = "/api/v1/message";
/// Game state endpoint
pub const GAME_STATE_PATH: &str = "/api/v2/game-state";

/// Header carrying the broadcaster id next to the bearer token
pub const USER_ID_HEADER: &str = "User-ID";

/// Client for the EBS API
///
/// The config is read on every call and never modified. Pass an
/// `Arc<RwLock<Config>>` to let the owner swap credentials while the
/// client is in use.
#[derive(Debug)]
pub struct EbsClient<C = Config> {
    config: Arc<C>,
    http: reqwest::blocking::Client,
    last_success: LastSuccess,
}

impl<C: ApiConfig> EbsClient<C> {
    /// Create a client with the default HTTP settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Arc<C>) -> Result<Self> {
        Ok(Self::with_http_client(config, http::create_client()?))
    }

    /// Create a client on top of a caller-built HTTP client
    pub fn with_http_client(config: Arc<C>, http: reqwest::blocking::Client) -> Self {
        Self {
            config,
            http,
            last_success: LastSuccess::new(),
        }
    }

    /// Config this client reads from
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Time of the last successful response; clone it to watch from elsewhere
    pub const fn last_success(&self) -> &LastSuccess {
        &self.last_success
    }

    /// Exchange a one-time code for the broadcaster's account
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx responses, or a body that is not a user.
    pub fn verify_credentials(&self, code: &str) -> Result<User> {
        let body = serde_json::to_string(&AuthRequest { code })?;
        self.execute(Method::POST, AUTH_PATH, &body)
    }

    /// Send `message` as-is to the extension
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx responses.
    pub fn broadcast_message(&self, message: &str) -> Result<()> {
        let _: IgnoredAny = self.execute(Method::POST, MESSAGE_PATH, message)?;
        Ok(())
    }

    /// Post an already-serialized game state
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx responses, or a reply that is not a JSON object.
    pub fn post_game_state(&self, state: &str) -> Result<()> {
        let _: Option<HashMap<String, serde_json::Value>> =
            self.execute(Method::POST, GAME_STATE_PATH, state)?;
        Ok(())
    }

    fn execute<T: DeserializeOwned>(&self, method: Method, path: &str, body: &str) -> Result<T> {
        let url = format!("{}{path}", self.config.api_url());
        let credentials = self.config.credentials();
        debug!(%method, path, authenticated = credentials.is_some(), "sending request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(auth) = &credentials {
            request = request
                .bearer_auth(&auth.oauth_token)
                .header(USER_ID_HEADER, auth.user.as_str());
        }

        if !body.is_empty() {
            request = request.body(body.to_owned());
        }

        let response = request
            .send()
            .map_err(|e| transport_error(&method, path, &e))?;
        let status = response.status();

        if status.is_success() {
            let bytes = response
                .bytes()
                .map_err(|e| transport_error(&method, path, &e))?;
            let value = decode(&bytes).map_err(|e| Error::Decode {
                method: method.to_string(),
                path: path.to_string(),
                reason: e.to_string(),
            })?;
            let at = self.last_success.record_now();
            debug!(%method, path, status = status.as_u16(), at, "request succeeded");
            return Ok(value);
        }

        // Diagnostics only; an unreadable body must not hide the status
        let body = response
            .bytes()
            .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
            .unwrap_or_default();
        warn!(%method, path, status = status.as_u16(), body = %body, "request rejected");

        Err(Error::Request {
            method: method.to_string(),
            path: path.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

/// Bodies are UTF-8 whatever charset the server labels them with; empty
/// bodies decode as JSON `null`
fn decode<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    }
}

fn transport_error(method: &Method, path: &str, err: &reqwest::Error) -> Error {
    let mut reason = err.to_string();
    let mut source = StdError::source(err);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    warn!(%method, path, reason = %reason, "request failed");

    Error::Transport {
        method: method.to_string(),
        path: path.to_string(),
        reason,
    }
}
