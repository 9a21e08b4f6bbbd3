use crate::controllers::interactive::InputEvent;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_budget::BudgetOptions;
use crate::core::data::point::Point;

/// Pointer state needed to turn window events into controller events.
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    cursor: Option<Point>,
    dragging: bool,
}

impl PointerState {
    /// Records a cursor move in surface pixels. While the button is held the
    /// move becomes a drag by the grid-pixel distance travelled.
    pub(crate) fn cursor_moved(
        &mut self,
        x: f64,
        y: f64,
        surface: (u32, u32),
        grid: GridSize,
    ) -> Option<InputEvent> {
        let position = surface_to_grid(x, y, surface, grid);
        let previous = self.cursor.replace(position);

        match previous {
            Some(previous) if self.dragging && previous != position => Some(InputEvent::Drag {
                delta: Point {
                    x: position.x - previous.x,
                    y: position.y - previous.y,
                },
            }),
            _ => None,
        }
    }

    pub(crate) fn cursor_left(&mut self) {
        self.cursor = None;
        self.dragging = false;
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// `up_delta` is positive for wheel-up, as winit reports it.
    pub(crate) fn wheel(&self, up_delta: f64, grid: GridSize) -> Option<InputEvent> {
        if up_delta == 0.0 {
            return None;
        }

        Some(InputEvent::Wheel {
            cursor: self.cursor.unwrap_or_else(|| grid.centre()),
            delta_y: -up_delta,
        })
    }
}

/// `r` resets; `1`..`9` pick the matching configured budget.
pub(crate) fn key_to_event(key: &str, options: &BudgetOptions) -> Option<InputEvent> {
    match key {
        "r" | "R" => Some(InputEvent::Reset),
        digit => {
            let index = digit.parse::<usize>().ok()?.checked_sub(1)?;
            options
                .nth(index)
                .map(|budget| InputEvent::SelectBudget(budget.get()))
        }
    }
}

/// Maps a surface position to a grid pixel using the layout `pixels` draws
/// with: the frame is scaled by a whole-number factor of at least 1 and
/// centred, the rest of the surface is border. Border positions land outside
/// the grid, which is still a valid zoom anchor.
fn surface_to_grid(x: f64, y: f64, surface: (u32, u32), grid: GridSize) -> Point {
    let edge = grid.edge() as f64;
    let (width, height) = (surface.0 as f64, surface.1 as f64);
    let scale = (width / edge).min(height / edge).floor().max(1.0);
    let offset_x = (width - edge * scale) / 2.0;
    let offset_y = (height - edge * scale) / 2.0;

    Point {
        x: ((x - offset_x) / scale).floor() as i32,
        y: ((y - offset_y) / scale).floor() as i32,
    }
}
