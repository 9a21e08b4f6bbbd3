use crate::controllers::interactive::{FrameData, FrameSink};
use crate::core::data::grid_size::GridSize;
use log::{debug, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Presents finished frames on a `pixels` surface.
///
/// The surface texture is N×N RGBA8, the same layout as the rendered buffer,
/// so a frame is a single slice copy.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl FrameSink for PixelsPresenter {
    fn present(&mut self, frame: FrameData) {
        let src = frame.pixel_buffer.as_bytes();
        let dst = self.pixels.frame_mut();

        if dst.len() != src.len() {
            warn!(
                "Dropping frame {}: {} bytes for a {} byte surface",
                frame.generation,
                src.len(),
                dst.len()
            );
            return;
        }

        dst.copy_from_slice(src);
        debug!("Presented frame {}", frame.generation);
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, grid: GridSize) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(grid.edge(), grid.edge(), surface_texture)?;

        Ok(Self { pixels })
    }

    pub fn draw(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            warn!("Failed to resize surface to {}x{}: {}", width, height, err);
        }
    }
}
