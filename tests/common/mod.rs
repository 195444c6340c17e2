//! Common test utilities and helpers
//!
//! This module provides shared functionality for all tests.
#![allow(dead_code, unused_imports)]


pub use fixtures::{hello_world, RepoBuilder};
pub use logging::capture_logs;
pub use source::StubSource;
