//! Binding between a request type, its result type and its wire name.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::validation::Validate;

/// Service prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "CodeCommit_20150413";

/// JSON protocol content type.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A request type for one API operation.
///
/// Implemented for every `*Request` in [`crate::operations`].
pub trait Operation: Serialize + Validate {
    /// Operation name as it appears in the target header, e.g. `GetBranch`.
    const NAME: &'static str;

    /// Result type decoded from a successful response.
    type Output: DeserializeOwned;

    /// Full `X-Amz-Target` header value.
    #[must_use]
    fn target() -> String {
        format!("{TARGET_PREFIX}.{}", Self::NAME)
    }
}

/// A request or result carrying a pagination token.
pub trait Paginated {
    fn next_token(&self) -> Option<&str>;
}

/// A list request that can resume from a previous page.
pub trait PageRequest: Paginated {
    fn set_next_token(&mut self, token: Option<String>);

    /// Point this request at the page after `result`.
    ///
    /// Returns `false` when `result` was the last page, leaving the request
    /// unchanged.
    fn resume_from<R: Paginated>(&mut self, result: &R) -> bool {
        match result.next_token() {
            Some(token) => {
                self.set_next_token(Some(token.to_string()));
                true
            }
            None => false,
        }
    }
}
