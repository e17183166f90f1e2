//! Typed models for the CodeCommit source-control API.
//!
//! Every API operation has a request type and a result type in
//! [`operations`], built from the shared value types in [`types`]. The
//! [`codec::Codec`] turns a request into the JSON body and target header a
//! transport sends, and decodes the response into the result or a typed
//! [`ServiceError`]. No network I/O happens in this crate.
//!
//! # Quick Start
//!
//! ```rust
//! use codecommit::operations::{CreateBranchRequest, GetBranchRequest, GetBranchResult};
//! use codecommit::{Codec, WireResponse};
//!
//! let codec = Codec::default();
//!
//! let wire = codec
//!     .encode(&CreateBranchRequest::new("MyDemoRepo", "feature", "317f8570EXAMPLE"))
//!     .unwrap();
//! assert_eq!(wire.target, "CodeCommit_20150413.CreateBranch");
//!
//! let body = br#"{"branch": {"branchName": "main", "commitId": "317f8570EXAMPLE"}}"#;
//! let result: GetBranchResult = codec
//!     .decode::<GetBranchRequest>(&WireResponse::new(200, body))
//!     .unwrap();
//! assert_eq!(result.branch.unwrap().branch_name.as_deref(), Some("main"));
//! ```

pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod idempotency;
pub mod operation;
pub mod operations;
pub mod testing;
pub mod types;
pub mod validation;

// Re-exports
pub use codec::{Codec, WireRequest, WireResponse};
pub use config::CodecConfig;
pub use error::{Error, ServiceError};
pub use idempotency::client_request_token;
pub use operation::{Operation, PageRequest, Paginated, CONTENT_TYPE, TARGET_PREFIX};
pub use operations::OPERATION_NAMES;
pub use validation::{Validate, ValidationError};
