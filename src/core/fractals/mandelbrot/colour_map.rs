use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_budget::IterationBudget;

/// Colour for bounded points.
pub const BOUNDED_COLOUR: Colour = Colour::WHITE;

/// Polynomial palette over `t = iteration / budget`:
///
/// ```text
/// r = floor(9   * (1-t)   * t³ * 255)
/// g = floor(15  * (1-t)²  * t² * 255)
/// b = floor(8.5 * (1-t)³  * t  * 255)
/// ```
///
/// Each channel is floored and then clamped to `0..=255`. On `[0, 1)` the
/// polynomials peak below 1.0, so the clamp never changes a value the
/// evaluator can produce; it only pins the conversion down. Counts at or
/// above the budget are bounded points and get [`BOUNDED_COLOUR`].
#[must_use]
pub fn colour_for(iteration: u32, budget: u32) -> Colour {
    if iteration >= budget {
        return BOUNDED_COLOUR;
    }

    let t = iteration as f64 / budget as f64;
    let s = 1.0 - t;

    Colour {
        r: channel(9.0 * s * t * t * t),
        g: channel(15.0 * s * s * t * t),
        b: channel(8.5 * s * s * s * t),
    }
}

#[inline]
fn channel(intensity: f64) -> u8 {
    (intensity * 255.0).floor().clamp(0.0, 255.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotPolynomialColourMap {
    budget: IterationBudget,
}

impl ColourMap<u32> for MandelbrotPolynomialColourMap {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        colour_for(iterations, self.budget.get())
    }
}

impl MandelbrotPolynomialColourMap {
    #[must_use]
    pub fn new(budget: IterationBudget) -> Self {
        Self { budget }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_points_are_white() {
        for budget in [1, 100, 200, 300] {
            assert_eq!(colour_for(budget, budget), Colour::WHITE);
        }
    }

    #[test]
    fn test_zero_iterations_is_black() {
        assert_eq!(colour_for(0, 100), Colour::BLACK);
    }

    #[test]
    fn test_midpoint_matches_polynomial() {
        // t = 0.5: r = floor(143.4375), g = floor(239.0625), b = floor(135.46875)
        assert_eq!(colour_for(50, 100), Colour { r: 143, g: 239, b: 135 });
    }

    #[test]
    fn test_quarter_matches_polynomial() {
        // t = 0.25: r = floor(9 * .75 * .015625 * 255) = floor(26.89453125)
        //           g = floor(15 * .5625 * .0625 * 255) = floor(134.47265625)
        //           b = floor(8.5 * .421875 * .25 * 255) = floor(228.603515625)
        assert_eq!(colour_for(25, 100), Colour { r: 26, g: 134, b: 228 });
    }

    #[test]
    fn test_near_budget_is_dark() {
        let colour = colour_for(299, 300);

        assert!(colour.r < 10);
        assert_eq!(colour.g, 0);
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn test_channel_clamps_out_of_range() {
        assert_eq!(channel(1.5), 255);
        assert_eq!(channel(-0.5), 0);
        assert_eq!(channel(0.999), 254);
    }

    #[test]
    fn test_colour_map_port_uses_bound_budget() {
        let map = MandelbrotPolynomialColourMap::new(IterationBudget::new(100).unwrap());

        assert_eq!(map.map(100), Colour::WHITE);
        assert_eq!(map.map(50), colour_for(50, 100));
    }
}
