use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. The result is row-major and identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(grid: GridSize, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let edge = grid.edge() as i32;

    let rows: Vec<Vec<Alg::Success>> = (0..edge)
        .into_par_iter()
        .map(|y| (0..edge).map(|x| algorithm.compute(Point { x, y })).collect())
        .collect();

    rows.into_iter().flatten().collect()
}
