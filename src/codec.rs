//! JSON protocol codec.
//!
//! Turns a request into the target header and body a transport sends, and a
//! raw response back into the operation's result or a typed service error.
//! Sending bytes over the network is the caller's business.

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::CodecConfig;
use crate::error::{Error, ServiceError};
use crate::operation::{Operation, CONTENT_TYPE};

/// Header carrying the error code when the body does not.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// Header carrying the service-assigned request id.
pub const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

/// An encoded request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    /// Operation name, e.g. `GetBranch`
    pub operation: &'static str,
    /// `X-Amz-Target` header value
    pub target: String,
    /// `Content-Type` header value
    pub content_type: &'static str,
    /// JSON body
    pub body: String,
}

impl WireRequest {
    /// Header pairs a transport must attach.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("X-Amz-Target", self.target.as_str()),
            ("Content-Type", self.content_type),
        ]
    }
}

/// A raw response handed back by a transport.
#[derive(Debug, Clone, Copy)]
pub struct WireResponse<'a> {
    pub status: u16,
    pub body: &'a [u8],
    /// Value of the `x-amzn-ErrorType` header, if any
    pub error_type: Option<&'a str>,
    /// Value of the `x-amzn-RequestId` header, if any
    pub request_id: Option<&'a str>,
}

impl<'a> WireResponse<'a> {
    /// A response with only a status and body.
    #[must_use]
    pub fn new(status: u16, body: &'a [u8]) -> Self {
        Self {
            status,
            body,
            error_type: None,
            request_id: None,
        }
    }

    #[must_use]
    pub fn with_error_type(mut self, error_type: &'a str) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: &'a str) -> Self {
        self.request_id = Some(request_id);
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Encoder and decoder for operation payloads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Create a codec configured from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(CodecConfig::from_env()?))
    }

    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a request.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if validation is enabled and the request
    /// breaks a constraint, or `Error::Serialization` if encoding fails.
    pub fn encode<O: Operation>(&self, request: &O) -> Result<WireRequest, Error> {
        if self.config.validate_requests {
            if let Err(e) = request.validate() {
                debug!(operation = O::NAME, error = %e, "Request rejected by validation");
                return Err(e.into());
            }
        }

        let body = serde_json::to_string(request)?;
        debug!(operation = O::NAME, bytes = body.len(), "Encoded request");
        if self.config.log_payloads {
            trace!(operation = O::NAME, body = %body, "Request payload");
        }

        Ok(WireRequest {
            operation: O::NAME,
            target: O::target(),
            content_type: CONTENT_TYPE,
            body,
        })
    }

    /// Decode a response for operation `O`.
    ///
    /// A success response with an empty body decodes as `{}`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Service` for a non-2xx status and
    /// `Error::Serialization` if a success body does not match the result
    /// type.
    pub fn decode<O: Operation>(&self, response: &WireResponse<'_>) -> Result<O::Output, Error> {
        if self.config.log_payloads {
            trace!(
                operation = O::NAME,
                status = response.status,
                body = %String::from_utf8_lossy(response.body),
                "Response payload"
            );
        }

        if !response.is_success() {
            let error = parse_service_error(response);
            warn!(
                operation = O::NAME,
                status = response.status,
                code = error.code(),
                request_id = error.request_id().unwrap_or("-"),
                "Service returned an error"
            );
            return Err(error.into());
        }

        let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            response.body
        };
        let output = serde_json::from_slice(body)?;
        debug!(operation = O::NAME, status = response.status, "Decoded response");
        Ok(output)
    }
}

/// Build a [`ServiceError`] from an error response.
///
/// The code comes from the body's `__type` field, falling back to the
/// error-type header. Both may carry a namespace (`ns#Code`) or a trailing
/// `:detail` which are stripped.
#[must_use]
pub fn parse_service_error(response: &WireResponse<'_>) -> ServiceError {
    let data: Value = serde_json::from_slice(response.body).unwrap_or(Value::Null);

    let code = data
        .get("__type")
        .and_then(Value::as_str)
        .or(response.error_type)
        .map(sanitize_code)
        .filter(|code| !code.is_empty())
        .unwrap_or("UnknownError")
        .to_string();

    let message = data
        .get("message")
        .or_else(|| data.get("Message"))
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", response.status));

    let request_id = response.request_id.map(String::from);

    ServiceError::classify(response.status, code, message, request_id)
}

fn sanitize_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code).trim()
}
