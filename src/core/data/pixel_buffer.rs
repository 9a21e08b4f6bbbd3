use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;
pub const OPAQUE_ALPHA: u8 = 255;

fn grid_to_buffer_size(grid: GridSize) -> usize {
    grid.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, edge: u32 },
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, edge } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x, pixel.y, edge, edge
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA frame for an N×N grid.
///
/// Pixel (px, py) lives at byte offset `4 * (py * N + px)` as `[r, g, b, 255]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    grid: GridSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Black, fully opaque frame.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        let mut buffer = vec![0; grid_to_buffer_size(grid)];

        for pixel in buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = OPAQUE_ALPHA;
        }

        Self { grid, buffer }
    }

    pub fn from_data(grid: GridSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let grid_size = grid_to_buffer_size(grid);

        if grid_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes in one row of pixels.
    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.grid.edge() as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.grid.contains(pixel) {
            return None;
        }

        let edge = self.grid.edge() as usize;
        Some((pixel.y as usize * edge + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel).ok_or(PixelBufferError::PixelOutsideBounds {
            pixel,
            edge: self.grid.edge(),
        })?;

        write_rgba(&mut self.buffer[index..index + BYTES_PER_PIXEL], colour);
        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        let index = self.index_of(pixel)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

#[inline]
pub(crate) fn write_rgba(dst: &mut [u8], colour: Colour) {
    dst[0] = colour.r;
    dst[1] = colour.g;
    dst[2] = colour.b;
    dst[3] = OPAQUE_ALPHA;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(edge: u32) -> GridSize {
        GridSize::new(edge).unwrap()
    }

    #[test]
    fn test_new_creates_opaque_black_buffer() {
        let buffer = PixelBuffer::new(grid(10));

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        for pixel in buffer.as_bytes().chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // pixel (0,0) - red
            0, 255, 0, 255, // pixel (1,0) - green
            0, 0, 255, 255, // pixel (0,1) - blue
            255, 255, 0, 255, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(grid(2), data.clone()).unwrap();

        assert_eq!(buffer.as_bytes(), data.as_slice());
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = PixelBuffer::from_data(grid(2), vec![0; 12]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                grid_size: 16,
                buffer_size: 12
            })
        );
    }

    #[test]
    fn test_index_is_row_major() {
        let buffer = PixelBuffer::new(grid(600));

        assert_eq!(buffer.index_of(Point { x: 0, y: 0 }), Some(0));
        assert_eq!(buffer.index_of(Point { x: 1, y: 0 }), Some(4));
        assert_eq!(buffer.index_of(Point { x: 0, y: 1 }), Some(2400));
        assert_eq!(buffer.index_of(Point { x: 300, y: 300 }), Some(4 * (300 * 600 + 300)));
        assert_eq!(buffer.index_of(Point { x: 600, y: 0 }), None);
        assert_eq!(buffer.row_stride(), 2400);
    }

    #[test]
    fn test_set_pixel_writes_rgba() {
        let mut buffer = PixelBuffer::new(grid(3));
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(Point { x: 2, y: 1 }, colour).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Some([1, 2, 3, 255]));
        assert_eq!(&buffer.as_bytes()[20..24], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(grid(3));
        let pixel = Point { x: 3, y: 0 };

        let result = buffer.set_pixel(pixel, Colour::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds { pixel, edge: 3 })
        );
    }
}
