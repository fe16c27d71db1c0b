// Media access: video metadata, raw frames, and the seekable frame source.

pub mod ffmpeg;
pub mod ffprobe;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metadata for a loaded video. Created once the source is probed,
/// immutable afterward; discarded when a new video is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMeta {
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
}

impl VideoMeta {
    /// Whether the source yielded usable metadata.
    pub fn is_usable(&self) -> bool {
        self.duration_secs.is_finite()
            && self.duration_secs > 0.0
            && self.width > 0
            && self.height > 0
    }
}

/// One decoded frame as a tightly packed RGBA byte buffer
/// (width * height * 4 bytes, row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize) * 4);
        Self { width, height, data }
    }
}

/// A decodable, seekable video with observable metadata.
///
/// `seek` is the pipeline's only suspension point: it resolves exactly once,
/// when the underlying decoder settles on the requested position or reports
/// an error. No retries, no timeout. `capture` reads back the frame at the
/// current position and is pure with respect to that position.
///
/// The generator owns the source exclusively for the duration of one run;
/// captures must not race a seek that has not settled.
#[async_trait]
pub trait FrameSource: Send {
    fn meta(&self) -> &VideoMeta;

    async fn seek(&mut self, timestamp_secs: f64) -> Result<()>;

    fn capture(&mut self) -> Result<FrameBuffer>;
}
