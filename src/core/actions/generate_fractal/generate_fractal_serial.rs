use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Row-major sweep of `algorithm` over every pixel of `grid` on the calling thread.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    grid: GridSize,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    let edge = grid.edge() as i32;

    (0..edge)
        .flat_map(|y| (0..edge).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
