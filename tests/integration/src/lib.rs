//! Integration test utilities for the portfolio client
//!
//! Runs the real HTTP client and stores against an in-process fake of the
//! portfolio backend.


pub use backend::{CapturedRequest, FakeBackend};
pub use fixtures::*;
pub use helpers::*;
