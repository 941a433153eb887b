//! HTTP client for the remote playback-control API

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::{Command, Method};
use crate::error::{ApiError, Result};

/// Fixed API version prefix on every request path
pub const API_VERSION: &str = "v1";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Network endpoint of the remote player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub address: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 3333,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

/// Client for issuing single typed requests to the remote player
///
/// Builds requests against `http://{address}:{port}/v1/{path}` and collapses
/// any non-success status or transport error into a single [`ApiError`].
/// The client carries no retry logic; resilience is layered above it.
///
/// Cloning is cheap and clones share the endpoint, so an endpoint swap is
/// visible to every handle.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    endpoint: Arc<RwLock<Endpoint>>,
}

impl RemoteClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: Arc::new(RwLock::new(endpoint)),
        })
    }

    /// Current remote endpoint
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint.read().clone()
    }

    /// Swap the remote endpoint at runtime
    pub fn set_endpoint(&self, endpoint: Endpoint) {
        *self.endpoint.write() = endpoint;
    }

    /// Send a command to the remote player
    ///
    /// `body` is attached as JSON for `PUT`/`POST` commands and ignored for
    /// queries; commands sent without a body get an empty JSON object, which
    /// is what the remote expects. Returns the parsed response body on
    /// success.
    pub async fn send(&self, command: Command, body: Option<Value>) -> Result<Value> {
        let url = {
            let endpoint = self.endpoint.read();
            format!(
                "http://{}:{}/{}/{}",
                endpoint.address,
                endpoint.port,
                API_VERSION,
                command.path()
            )
        };

        let request = match command.method() {
            Method::Get => self.http.get(&url),
            Method::Put => self
                .http
                .put(&url)
                .json(&body.unwrap_or_else(|| Value::Object(Default::default()))),
            Method::Post => self
                .http
                .post(&url)
                .json(&body.unwrap_or_else(|| Value::Object(Default::default()))),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send a query command and decode the response into `T`
    pub async fn query<T: DeserializeOwned>(&self, command: Command) -> Result<T> {
        let value = self.send(command, None).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
