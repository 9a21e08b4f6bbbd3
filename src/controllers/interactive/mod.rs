//! Interactive controller for exploring the Mandelbrot set.
//!
//! This module is the application layer between raw input and the pure render
//! core. It owns the viewport and iteration budget for one session, applies
//! input events to them and hands finished frames to the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values translated from the windowing layer
//! - **Output**: `FrameSink` trait for receiving rendered frames
//! - **Core**: Uses `render_frame` from `core/` for actual computation

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::ControllerError;
pub use events::input_event::InputEvent;
pub use ports::frame_sink::FrameSink;
