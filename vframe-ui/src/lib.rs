//! vframe-ui - Components for previewing and capturing parameterised frames
//!
//! Pure view components plus the small amount of browser glue they need:
//! local storage persistence and the render-complete flag read by external
//! capture tools.

pub mod completion;
pub mod components;
pub mod hooks;
pub mod storage;

pub use components::*;
pub use hooks::use_local_storage;
pub use vframe_common::{
    ContentParams, FieldRow, Format, ParameterField, ParameterSchema, SchemaError, FORMATS,
};
