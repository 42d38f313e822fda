//! Store adapter tests

pub mod postgres_store_test;
