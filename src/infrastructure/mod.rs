//! Infrastructure layer implementing domain storage contracts.

pub mod persistence;
