//! vframe-common - Data model for schema-driven frame previews
//!
//! Pure types shared by the UI components and the example apps. Nothing in
//! here touches the DOM, so everything is tested natively.

pub mod caption;
pub mod content;
pub mod format;
pub mod schema;

pub use content::ContentParams;
pub use format::{Format, FORMATS};
pub use schema::{FieldRow, ParameterField, ParameterSchema, SchemaBuilder, SchemaError};
