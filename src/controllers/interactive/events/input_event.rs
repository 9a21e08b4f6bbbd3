use crate::core::data::point::Point;

/// Raw user input, already translated out of the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Wheel tick over `cursor`. Negative `delta_y` (wheel up) zooms in,
    /// positive zooms out, zero is ignored.
    Wheel { cursor: Point, delta_y: f64 },
    /// Pixel distance the pointer moved while dragging.
    Drag { delta: Point },
    Reset,
    /// Pick an iteration budget; must be one of the configured options.
    SelectBudget(u32),
}
