use crate::core::data::point::Point;

/// Per-pixel computation swept over the grid by the fractal generators.
///
/// Implementations are pure: the same pixel always yields the same value,
/// which is what lets the sweep be split across threads.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
