//! HTTP API tests

pub mod upload_test;
