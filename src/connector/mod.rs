//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion (OpenAI over HTTP, plus an offline mock)
//! - Secret lookup (TOML file) and credential resolution
//! - Delivery: CLI controllers and the web form

pub mod adapter;
pub mod api;
pub mod config;
pub mod web;

pub use adapter::*;
