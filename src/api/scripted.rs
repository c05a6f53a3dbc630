//! # Scripted Transport
//!
//! An in-memory [`Transport`] that replays queued responses and records what
//! was sent. Lets the client and the bot run without a server.

use super::transport::{ApiRequest, Transport};
use crate::{ConsiditionError, ConsiditionResult};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// A request as seen by the [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub api_key: String,
    pub request: ApiRequest,
}

/// Replays responses in FIFO order. Once the script runs out every call fails
/// with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<ConsiditionResult<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push_response`](Self::push_response).
    pub fn with_response(self, response: Value) -> Self {
        self.push_response(response);
        self
    }

    pub fn push_response(&self, response: Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(response));
    }

    pub fn push_failure(&self, error: ConsiditionError) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(error));
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of queued responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn next_response(&self, api_key: &str, request: ApiRequest) -> ConsiditionResult<Value> {
        let path = request.path;
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                api_key: api_key.to_string(),
                request,
            });

        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(ConsiditionError::Transport(format!(
                    "no scripted response left for {}",
                    path
                )))
            })
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, api_key: &str, request: ApiRequest) -> ConsiditionResult<Value> {
        self.next_response(api_key, request)
    }
}
