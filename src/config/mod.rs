//! Application configuration, loaded from environment variables.
//!
//! - [`cors`]: allowed origins for the browser frontend
//! - [`database`]: PostgreSQL pool initialization and migrations
//! - [`jwt`]: token secret and expiry
//! - [`stripe`]: payment processor credentials

pub mod cors;
pub mod database;
pub mod jwt;
pub mod stripe;
