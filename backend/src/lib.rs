// --- File: backend/src/lib.rs ---

// Library half of the backend crate; the binary and the integration
// tests both build the router from here.
pub mod auth;
pub mod catalog;
pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod questions;
pub mod seed;
pub mod store;
pub mod web_server;
