//! Mock dispatcher for testing.
//!
//! `MockDispatcher` runs requests through the real [`Codec`] and answers them
//! with canned responses, so tests see the same validation, wire bodies and
//! error classification a live transport would produce.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::codec::{Codec, WireResponse};
use crate::config::CodecConfig;
use crate::error::Error;
use crate::operation::Operation;

/// Record of a dispatched request.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Operation name (e.g., "CreateRepository")
    pub operation: String,
    /// Encoded request body
    pub body: Value,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    fn new(operation: &str, body: Value) -> Self {
        Self {
            operation: operation.to_string(),
            body,
            timestamp: Utc::now(),
        }
    }
}

/// A canned wire response for one operation.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status to answer with
    pub status: u16,
    /// Raw response body
    pub body: String,
    /// Request id reported alongside the response
    pub request_id: Option<String>,
    /// Number of times this response has been used
    pub call_count: u32,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            status: 200,
            body: "{}".to_string(),
            request_id: None,
            call_count: 0,
        }
    }
}

impl MockResponse {
    /// A success response carrying `body`.
    pub fn with_json(body: Value) -> Self {
        Self {
            body: body.to_string(),
            ..Self::default()
        }
    }

    /// A success response carrying a serialized result.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if `data` cannot be encoded.
    pub fn with_data<T: Serialize>(data: &T) -> Result<Self, Error> {
        Ok(Self {
            body: serde_json::to_string(data)?,
            ..Self::default()
        })
    }

    /// A 400 response naming a service error code.
    pub fn with_error(code: &str, message: &str) -> Self {
        Self::with_status(400, code, message)
    }

    /// An error response with an explicit status.
    pub fn with_status(status: u16, code: &str, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "__type": code, "message": message }).to_string(),
            request_id: Some("mock-request-id".to_string()),
            call_count: 0,
        }
    }
}

#[derive(Default)]
struct MockState {
    calls: Vec<MockCall>,
    responses: HashMap<&'static str, MockResponse>,
}

/// Dispatches requests against canned responses.
///
/// Operations without a configured response answer `200 {}`, which decodes
/// to the result type's default.
#[derive(Clone)]
pub struct MockDispatcher {
    codec: Codec,
    state: Arc<Mutex<MockState>>,
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            codec: Codec::new(config),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Configure the response for operation `O`.
    pub fn configure<O: Operation>(&self, response: MockResponse) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .responses
            .insert(O::NAME, response);
    }

    /// Encode `request`, record it and decode the canned response.
    ///
    /// A request rejected by validation is not recorded.
    ///
    /// # Errors
    ///
    /// Returns whatever the codec returns for the request and the configured
    /// response.
    pub fn dispatch<O: Operation>(&self, request: &O) -> Result<O::Output, Error> {
        let wire = self.codec.encode(request)?;
        let body: Value = serde_json::from_str(&wire.body)?;

        let response = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(MockCall::new(O::NAME, body));
            let response = state.responses.entry(O::NAME).or_default();
            response.call_count += 1;
            response.clone()
        };

        let wire_response = WireResponse {
            status: response.status,
            body: response.body.as_bytes(),
            error_type: None,
            request_id: response.request_id.as_deref(),
        };
        self.codec.decode::<O>(&wire_response)
    }

    /// Check if an operation was dispatched.
    pub fn was_called(&self, operation: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .any(|call| call.operation == operation)
    }

    /// Get the number of times an operation was dispatched.
    pub fn call_count(&self, operation: &str) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    /// Get recorded calls, optionally filtered by operation.
    pub fn get_calls(&self, operation: Option<&str>) -> Vec<MockCall> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match operation {
            Some(name) => state
                .calls
                .iter()
                .filter(|call| call.operation == name)
                .cloned()
                .collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset recorded calls. Configured responses are kept.
    pub fn reset(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).calls.clear();
    }
}
