//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.

pub mod services;
