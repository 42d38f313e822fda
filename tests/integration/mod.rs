//! Integration tests against the assembled router and the store adapters

pub mod api;
pub mod database;
