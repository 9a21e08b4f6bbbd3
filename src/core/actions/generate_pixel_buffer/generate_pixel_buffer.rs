use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_buffer::{
    write_rgba, PixelBuffer, PixelBufferData, PixelBufferError, BYTES_PER_PIXEL,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours a row-major sequence of values into an RGBA buffer for `grid`.
///
/// Fails when `input` does not hold exactly one value per pixel.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    grid: GridSize,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = vec![0; input.len() * BYTES_PER_PIXEL];

    for (value, pixel) in input.into_iter().zip(buffer.chunks_exact_mut(BYTES_PER_PIXEL)) {
        write_rgba(pixel, mapper.map(value));
    }

    Ok(PixelBuffer::from_data(grid, buffer)?)
}
