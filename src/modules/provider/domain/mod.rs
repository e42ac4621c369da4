pub mod value_objects;

// Re-exports for easy access
pub use value_objects::{ExternalRecord, PageResult};
