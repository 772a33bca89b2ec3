// ABOUTME: Test helper module exports
// ABOUTME: Gathers the axum request driver used by route integration tests
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod axum_test;
