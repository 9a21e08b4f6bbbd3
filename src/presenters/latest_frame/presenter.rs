use crate::controllers::interactive::{FrameData, FrameSink};
use crate::core::data::pixel_buffer::PixelBuffer;
use log::info;
use std::time::Duration;

/// Keeps only the most recent finished frame.
///
/// Each presented frame replaces the previous one as a whole, so a reader
/// always sees one complete buffer.
#[derive(Debug, Default)]
pub struct LatestFramePresenter {
    latest: Option<FrameData>,
    frames_presented: u64,
    total_render_time: Duration,
}

impl FrameSink for LatestFramePresenter {
    fn present(&mut self, frame: FrameData) {
        info!(
            "Frame {}: {}x{} in {} ms",
            frame.generation,
            frame.pixel_buffer.grid().edge(),
            frame.pixel_buffer.grid().edge(),
            frame.render_duration.as_millis()
        );

        self.frames_presented += 1;
        self.total_render_time += frame.render_duration;
        self.latest = Some(frame);
    }
}

impl LatestFramePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&FrameData> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn latest_buffer(&self) -> Option<&PixelBuffer> {
        self.latest.as_ref().map(|frame| &frame.pixel_buffer)
    }

    pub fn take_latest(&mut self) -> Option<FrameData> {
        self.latest.take()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn average_render_time(&self) -> Option<Duration> {
        if self.frames_presented == 0 {
            return None;
        }

        let average = self.total_render_time.as_nanos() / u128::from(self.frames_presented);

        Some(Duration::from_nanos(u64::try_from(average).unwrap_or(u64::MAX)))
    }
}
