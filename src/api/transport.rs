//! # Transport
//!
//! The HTTP seam. A [`Transport`] takes a fully described request and hands
//! back decoded JSON. It knows nothing about games or endpoints.

use crate::config::API_KEY_HEADER;
use crate::{ConsiditionError, ConsiditionResult, VERSION};
use serde_json::Value;
use std::future::Future;

/// HTTP verbs used by the game API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A single call against the API, relative to the base path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path below the base path, starting with `/`
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    /// JSON body for POST requests
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Value of a query parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Sends requests to the game server.
///
/// Calls are independent: implementations must not rely on ordering between
/// them, and the API key travels with every call.
pub trait Transport: Send + Sync {
    /// Issues `request`, failing on connection problems, non-2xx statuses
    /// and bodies that are not JSON.
    fn send(
        &self,
        api_key: &str,
        request: ApiRequest,
    ) -> impl Future<Output = ConsiditionResult<Value>> + Send;
}

/// Transport backed by a pooled `ureq` agent.
///
/// The agent keeps connections alive between calls and verifies TLS
/// certificates. Each blocking call runs on tokio's blocking pool, so
/// [`Transport::send`] must be awaited inside a tokio runtime and panics
/// when polled outside one.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    base_path: String,
}

impl UreqTransport {
    pub fn new(base_path: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&format!("considition-starter-kit/{}", VERSION))
            .build();
        Self {
            agent,
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

impl Transport for UreqTransport {
    async fn send(&self, api_key: &str, request: ApiRequest) -> ConsiditionResult<Value> {
        let agent = self.agent.clone();
        let url = self.url(request.path);
        let api_key = api_key.to_string();

        tokio::task::spawn_blocking(move || send_blocking(&agent, &url, &api_key, request))
            .await
            .map_err(|err| ConsiditionError::Transport(format!("request worker failed: {}", err)))?
    }
}

fn send_blocking(
    agent: &ureq::Agent,
    url: &str,
    api_key: &str,
    request: ApiRequest,
) -> ConsiditionResult<Value> {
    let mut call = agent
        .request(request.method.as_str(), url)
        .set(API_KEY_HEADER, api_key);
    for (name, value) in &request.query {
        call = call.query(name, value);
    }

    let response = match request.body {
        Some(body) => call.send_json(body),
        None => call.call(),
    };

    match response {
        Ok(response) => {
            let body = response
                .into_string()
                .map_err(|err| ConsiditionError::Transport(format!("reading body: {}", err)))?;
            decode_body(&body)
        }
        Err(ureq::Error::Status(status, response)) => Err(ConsiditionError::Server {
            status,
            message: response.into_string().unwrap_or_default(),
        }),
        Err(ureq::Error::Transport(err)) => Err(ConsiditionError::Transport(err.to_string())),
    }
}

/// Parses a response body; an empty body is JSON `null`.
pub(crate) fn decode_body(body: &str) -> ConsiditionResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}
