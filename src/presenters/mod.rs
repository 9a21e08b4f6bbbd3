//! Presentation adapters implementing the controller's `FrameSink` port.

pub mod latest_frame;
#[cfg(feature = "gui")]
pub mod pixels;
