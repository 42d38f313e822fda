//! Test suite for inkwell
//!
//! This module organizes all integration tests

pub mod common;
pub mod integration;
