//! Shared utilities.
//!
//! - [`errors`]: application error type and HTTP mapping
//! - [`jwt`]: token creation and verification
//! - [`pagination`]: fixed-size page parameters for listing endpoints

pub mod errors;
pub mod jwt;
pub mod pagination;
