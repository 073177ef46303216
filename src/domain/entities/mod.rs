//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation and
//! partial update use separate structs (`NewShortLink`, `ShortLinkPatch`)
//! so the store controls id and timestamp assignment.

pub mod link;

pub use link::{NewShortLink, ShortLink, ShortLinkPatch};
