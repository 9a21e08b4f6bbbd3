use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    Zero,
    TooLarge { edge: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "grid size must be greater than zero"),
            Self::TooLarge { edge } => {
                write!(f, "grid size {} exceeds the maximum of {}", edge, GridSize::MAX_EDGE)
            }
        }
    }
}

impl Error for GridSizeError {}

/// Edge length N of the square pixel grid. Width and height are both N.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridSize {
    edge: u32,
}

impl GridSize {
    /// Largest accepted edge: a 256 MiB frame, and the default wgpu limit on
    /// texture size, so the windowed surface can still hold a full frame.
    pub const MAX_EDGE: u32 = 8192;

    pub fn new(edge: u32) -> Result<Self, GridSizeError> {
        if edge == 0 {
            return Err(GridSizeError::Zero);
        }

        if edge > Self::MAX_EDGE {
            return Err(GridSizeError::TooLarge { edge });
        }

        Ok(Self { edge })
    }

    #[must_use]
    pub fn edge(&self) -> u32 {
        self.edge
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.edge as usize * self.edge as usize
    }

    /// The pixel at (N/2, N/2), which maps exactly onto the viewport centre.
    #[must_use]
    pub fn centre(&self) -> Point {
        let half = (self.edge / 2) as i32;
        Point { x: half, y: half }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let edge = self.edge as i64;
        let (x, y) = (point.x as i64, point.y as i64);

        (0..edge).contains(&x) && (0..edge).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_edge_is_rejected() {
        assert_eq!(GridSize::new(0), Err(GridSizeError::Zero));
    }

    #[test]
    fn test_oversized_edge_is_rejected() {
        for edge in [GridSize::MAX_EDGE + 1, 60_000, i32::MAX as u32 + 1, u32::MAX] {
            assert_eq!(GridSize::new(edge), Err(GridSizeError::TooLarge { edge }));
        }
    }

    #[test]
    fn test_max_edge_is_accepted() {
        let grid = GridSize::new(GridSize::MAX_EDGE).unwrap();

        assert_eq!(grid.pixel_count(), 8192 * 8192);
    }

    #[test]
    fn test_single_pixel_grid_is_valid() {
        let grid = GridSize::new(1).unwrap();

        assert_eq!(grid.pixel_count(), 1);
        assert_eq!(grid.centre(), Point { x: 0, y: 0 });
    }

    #[test]
    fn test_centre_and_pixel_count() {
        let grid = GridSize::new(600).unwrap();

        assert_eq!(grid.edge(), 600);
        assert_eq!(grid.pixel_count(), 360_000);
        assert_eq!(grid.centre(), Point { x: 300, y: 300 });
    }

    #[test]
    fn test_contains() {
        let grid = GridSize::new(10).unwrap();

        assert!(grid.contains(Point { x: 0, y: 0 }));
        assert!(grid.contains(Point { x: 9, y: 9 }));
        assert!(!grid.contains(Point { x: 10, y: 0 }));
        assert!(!grid.contains(Point { x: 0, y: -1 }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            GridSizeError::Zero.to_string(),
            "grid size must be greater than zero"
        );
        assert_eq!(
            GridSizeError::TooLarge { edge: 60_000 }.to_string(),
            "grid size 60000 exceeds the maximum of 8192"
        );
    }
}
