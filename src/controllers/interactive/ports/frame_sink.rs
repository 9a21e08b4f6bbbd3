use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every completed frame. Only finished buffers are ever presented.
pub trait FrameSink {
    fn present(&mut self, frame: FrameData);
}
