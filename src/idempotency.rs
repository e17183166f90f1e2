//! Client request tokens.
//!
//! Create calls accept a `clientRequestToken`. A retried call carrying the
//! same token and parameters is answered with the original result instead of
//! creating a duplicate.

use uuid::Uuid;

/// Generate a fresh client request token (UUID v4).
#[must_use]
pub fn client_request_token() -> String {
    Uuid::new_v4().to_string()
}
