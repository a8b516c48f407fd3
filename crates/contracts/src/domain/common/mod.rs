//! Common types and traits for all entity records

pub mod entity_record;

// Re-exports
pub use entity_record::{default_ativo, EntityId, EntityRecord};
