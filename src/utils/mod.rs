//! Pure helper functions used across the application.
//!
//! These modules hold no state and perform no I/O, so they are unit-tested
//! directly without mocking persistence:
//!
//! - [`code_generator`] - Short code candidate generation
//! - [`expiry`] - Expiration timestamps and validity checks
//! - [`url_validator`] - Redirect target validation

pub mod code_generator;
pub mod expiry;
pub mod url_validator;
