//! Windowed shell for interactive exploration.
//!
//! Uses winit for window management and input, and pixels for the
//! framebuffer.

mod app;
mod translate;

pub use app::run_gui;
