//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request
//! bodies with range constraints use validator derives.

pub mod create_link;
pub mod health;
pub mod link;
pub mod update_link;

pub use create_link::CreateLinkRequest;
pub use health::HealthResponse;
pub use link::LinkResponse;
pub use update_link::UpdateLinkRequest;
