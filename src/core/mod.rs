//! Translation API client

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
