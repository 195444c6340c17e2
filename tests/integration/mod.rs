//! Integration tests module
//!
//! Contains tests that exercise the services and HTTP surface end to end.

#[path = "../common/mod.rs"]
mod common;

mod github_client_test;
mod health_test;
