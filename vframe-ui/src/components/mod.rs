//! Frame editing and capture components

pub mod format_panel;
pub mod preview_panel;
pub mod rendering_view;
pub mod text_input;
pub mod video_frame;
pub mod viewport;

pub use format_panel::FormatPanel;
pub use preview_panel::{FieldEdit, PreviewPanel};
pub use rendering_view::RenderingView;
pub use text_input::{TextInput, TextInputSize};
pub use video_frame::{FrameState, RenderContent, VideoFrame};
pub use viewport::{preview_scale, FrameViewport};
