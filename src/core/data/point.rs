/// A pixel position on the grid, or a pixel delta when used for drags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn negated(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
