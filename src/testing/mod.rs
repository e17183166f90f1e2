//! Testing utilities.
//!
//! Provides a mock dispatcher for code that builds requests and consumes
//! results without a real transport behind it.

mod mock;

pub use mock::{MockCall, MockDispatcher, MockResponse};
