//! Feature modules. Each follows the same layout: `model.rs` for DTOs and
//! database structs, `service.rs` for business logic, `controller.rs` for
//! HTTP handlers, and `router.rs` for route wiring.

pub mod auth;
pub mod blogs;
pub mod classes;
pub mod payments;
pub mod slots;
pub mod subscribers;
pub mod testimonials;
pub mod trainers;
pub mod users;
