//! Configuration for the paste pipeline
//!
//! This module provides `PasteConfig`, its builder, and JSON loading.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::PasteConfigBuilder;
pub use types::{BulletMarker, CodeBlockStyle, HeadingStyle, PasteConfig};
