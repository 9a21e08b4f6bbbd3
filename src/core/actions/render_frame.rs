//! Full-grid sweep producing one finished RGBA frame.
//!
//! Evaluation and colouring are fused per pixel and written straight into the
//! output rows. The buffer is only handed back once every pixel has been
//! written, so callers never see a partial frame.

use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::{write_rgba, PixelBuffer, BYTES_PER_PIXEL};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotPolynomialColourMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    Serial,
    /// Rows are spread over the rayon thread pool.
    #[default]
    Parallel,
}

impl RenderStrategy {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

/// Renders the Mandelbrot set for `viewport` onto an N×N grid.
#[must_use]
pub fn render_frame(
    viewport: &Viewport,
    budget: IterationBudget,
    grid: GridSize,
    strategy: RenderStrategy,
) -> PixelBuffer {
    let algorithm = MandelbrotAlgorithm::new(*viewport, grid, budget);
    let colour_map = MandelbrotPolynomialColourMap::new(budget);

    render_with(&algorithm, &colour_map, grid, strategy)
}

pub(crate) fn render_with<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
    grid: GridSize,
    strategy: RenderStrategy,
) -> PixelBuffer
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let mut frame = PixelBuffer::new(grid);
    let row_stride = frame.row_stride();
    let rows = frame.data_mut();

    match strategy {
        RenderStrategy::Serial => {
            for (y, row) in rows.chunks_exact_mut(row_stride).enumerate() {
                render_row(algorithm, colour_map, y as i32, row);
            }
        }
        RenderStrategy::Parallel => {
            rows.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(y, row)| render_row(algorithm, colour_map, y as i32, row));
        }
    }

    frame
}

#[inline]
fn render_row<Alg, CMap>(algorithm: &Alg, colour_map: &CMap, y: i32, row: &mut [u8])
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let value = algorithm.compute(Point { x: x as i32, y });
        write_rgba(pixel, colour_map.map(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;

    fn grid(edge: u32) -> GridSize {
        GridSize::new(edge).unwrap()
    }

    fn budget(value: u32) -> IterationBudget {
        IterationBudget::new(value).unwrap()
    }

    #[test]
    fn test_default_view_centre_is_white_and_corner_is_black() {
        let frame = render_frame(&Viewport::default(), budget(100), grid(600), RenderStrategy::Parallel);

        assert_eq!(frame.buffer_size(), 600 * 600 * 4);
        assert_eq!(frame.pixel(Point { x: 300, y: 300 }), Some([255, 255, 255, 255]));
        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_every_pixel_is_opaque() {
        let frame = render_frame(&Viewport::default(), budget(50), grid(64), RenderStrategy::Parallel);

        assert!(frame.as_bytes().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_serial_and_parallel_are_identical() {
        let viewport = Viewport::new(Complex::new(-0.75, 0.1), 0.5).unwrap();

        let serial = render_frame(&viewport, budget(200), grid(97), RenderStrategy::Serial);
        let parallel = render_frame(&viewport, budget(200), grid(97), RenderStrategy::Parallel);

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_fused_render_matches_two_stage_pipeline() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.0), 3.0).unwrap();
        let grid = grid(80);
        let budget = budget(100);
        let algorithm = MandelbrotAlgorithm::new(viewport, grid, budget);
        let colour_map = MandelbrotPolynomialColourMap::new(budget);

        let serial_counts = generate_fractal_serial(grid, &algorithm);
        let parallel_counts = generate_fractal_parallel_rayon(grid, &algorithm);
        let staged = generate_pixel_buffer(serial_counts.clone(), &colour_map, grid).unwrap();
        let fused = render_frame(&viewport, budget, grid, RenderStrategy::Parallel);

        assert_eq!(serial_counts, parallel_counts);
        assert_eq!(fused, staged);
    }

    #[test]
    fn test_far_away_view_is_all_black() {
        let viewport = Viewport::new(Complex::new(100.0, -100.0), 1.0).unwrap();

        let frame = render_frame(&viewport, budget(100), grid(16), RenderStrategy::Serial);

        assert!(frame.as_bytes().chunks_exact(4).all(|pixel| pixel == [0, 0, 0, 255]));
    }

    #[test]
    fn test_view_inside_main_cardioid_is_all_white() {
        let viewport = Viewport::new(Complex::new(-0.1, 0.0), 0.05).unwrap();

        let frame = render_frame(&viewport, budget(100), grid(16), RenderStrategy::Parallel);

        for pixel in frame.as_bytes().chunks_exact(4) {
            assert_eq!(
                Colour { r: pixel[0], g: pixel[1], b: pixel[2] },
                Colour::WHITE
            );
        }
    }

    #[test]
    fn test_single_pixel_grid() {
        let frame = render_frame(&Viewport::default(), budget(1), grid(1), RenderStrategy::Serial);

        assert_eq!(frame.as_bytes(), &[255, 255, 255, 255]);
    }
}
