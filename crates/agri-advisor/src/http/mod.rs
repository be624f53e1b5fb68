//! HTTP transport for the knowledge service.
//!
//! Implements `AdvisorClient` and `DashboardSource` over reqwest. Every
//! call is one request/response exchange; timeouts come from the client
//! configuration and surface as `TransportError::Timeout`.

mod api;
mod client;
mod config;


pub use client::HttpAdvisorClient;
pub use config::HttpConfig;
