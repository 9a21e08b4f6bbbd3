use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Squared-magnitude escape threshold, equivalent to |z| > 2.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape time of `c` under z ← z² + c, starting from z = 0.
///
/// Each step advances z and then tests `|z|² > 4`. The result is the
/// zero-based index of the first step that left the radius, or `budget` when
/// z stayed bounded for every step. A `c` already outside the radius escapes
/// on step 0. Overflow to infinity compares greater than 4, so finite inputs
/// never need special handling.
#[inline]
#[must_use]
pub fn escape_time(c_real: f64, c_imag: f64, budget: u32) -> u32 {
    let mut z_real = 0.0_f64;
    let mut z_imag = 0.0_f64;

    for iteration in 0..budget {
        let next_real = z_real * z_real - z_imag * z_imag + c_real;
        z_imag = 2.0 * z_real * z_imag + c_imag;
        z_real = next_real;

        if z_real * z_real + z_imag * z_imag > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    budget
}

/// Escape-time Mandelbrot over a snapshot of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    grid: GridSize,
    budget: IterationBudget,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        let c = self.viewport.pixel_to_complex(pixel, self.grid);

        escape_time(c.real, c.imag, self.budget.get())
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, grid: GridSize, budget: IterationBudget) -> Self {
        Self {
            viewport,
            grid,
            budget,
        }
    }
}
