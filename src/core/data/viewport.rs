//! Square window onto the complex plane and its pixel mapping.
//!
//! The viewport is the only place that converts between pixel positions and
//! complex coordinates. Zoom and pan mutate it in place; `reset` restores the
//! same constants `Default` is built from.

use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER_X: f64 = 0.0;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_SCALE: f64 = 4.0;

pub const ZOOM_IN_FACTOR: f64 = 0.9;
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteCoordinate { real: f64, imag: f64 },
    InvalidScale { scale: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { real, imag } => {
                write!(f, "viewport centre must be finite: ({}, {})", real, imag)
            }
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be finite and positive: {}", scale)
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a direction: negative (wheel up) zooms in,
    /// positive zooms out, zero does nothing.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// A square window of width `scale` centred on `(center_x, center_y)`.
///
/// Invariant: `scale > 0`. No lower bound is enforced while zooming; past the
/// resolution of `f64` the image simply degrades.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Viewport {
    pub fn new(center: Complex, scale: f64) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCoordinate {
                real: center.real,
                imag: center.imag,
            });
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        Ok(Self {
            center_x: center.real,
            center_y: center.imag,
            scale,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.center_x,
            imag: self.center_y,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Width of one pixel on the complex plane.
    #[must_use]
    pub fn pixel_step(&self, grid: GridSize) -> f64 {
        self.scale / grid.edge() as f64
    }

    /// `x = cx + (px - N/2) * (scale / N)`, likewise for `y`.
    ///
    /// `N/2` is the integer centre pixel, so `pixel_to_complex(grid.centre())`
    /// is exactly the viewport centre for every N. Pixels outside the grid are
    /// mapped by the same formula.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point, grid: GridSize) -> Complex {
        let step = self.pixel_step(grid);
        let centre = grid.centre();

        Complex {
            real: self.center_x + (pixel.x as f64 - centre.x as f64) * step,
            imag: self.center_y + (pixel.y as f64 - centre.y as f64) * step,
        }
    }

    /// Cursor-anchored zoom: the complex point under `cursor` is the same
    /// before and after the call.
    pub fn zoom(&mut self, cursor: Point, direction: ZoomDirection, grid: GridSize) {
        let anchor = self.pixel_to_complex(cursor, grid);
        let factor = direction.factor();

        self.scale *= factor;
        self.center_x = anchor.real + (self.center_x - anchor.real) * factor;
        self.center_y = anchor.imag + (self.center_y - anchor.imag) * factor;
    }

    /// Moves the view with the dragged content: a drag to the right moves the
    /// window left.
    pub fn pan(&mut self, delta: Point, grid: GridSize) {
        let step = self.pixel_step(grid);

        self.center_x -= delta.x as f64 * step;
        self.center_y -= delta.y as f64 * step;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
