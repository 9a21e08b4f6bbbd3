mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::config::{ConfigError, ExplorerConfig, ValidatedConfig};
pub use crate::controllers::interactive::{
    ControllerError, FrameData, FrameSink, InputEvent, InteractiveController, RenderRequest,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::{render_frame, RenderStrategy};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_size::{GridSize, GridSizeError};
pub use crate::core::data::iteration_budget::{
    BudgetOptions, IterationBudget, IterationBudgetError, DEFAULT_BUDGET_OPTIONS,
};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{
    Viewport, ViewportError, ZoomDirection, DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_SCALE,
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
pub use crate::core::fractals::mandelbrot::algorithm::{escape_time, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::colour_map::{
    colour_for, MandelbrotPolynomialColourMap, BOUNDED_COLOUR,
};
pub use crate::presenters::latest_frame::presenter::LatestFramePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
