//! Request guards.
//!
//! Authorization is composed from three layers, evaluated strictly before
//! any handler body:
//!
//! 1. [`auth::AuthUser`] verifies the bearer token.
//! 2. The extractors in [`role`] resolve the caller's stored role and
//!    enforce it.
//! 3. [`auth::AuthUser::ensure_self`] compares a caller-supplied identity
//!    with the verified claims (the self-check).

pub mod auth;
pub mod role;
