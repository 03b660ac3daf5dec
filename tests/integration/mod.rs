//! Shared fixtures for the HTTP-level tests

pub mod mock_server;
