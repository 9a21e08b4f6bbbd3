use crate::core::actions::render_frame::{render_frame, RenderStrategy};
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

/// Snapshot of everything one render depends on.
///
/// `PartialEq` lets the controller skip a render when nothing changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub budget: IterationBudget,
    pub grid: GridSize,
}

impl RenderRequest {
    #[must_use]
    pub fn render(&self, strategy: RenderStrategy) -> PixelBuffer {
        render_frame(&self.viewport, self.budget, self.grid, strategy)
    }
}
