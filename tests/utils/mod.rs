//! Shared fixtures for the integration tests
#![allow(dead_code)]

pub mod helpers;
pub mod repositories;
pub mod transport;
