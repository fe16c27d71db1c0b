// FFmpeg-backed frame source.
//
// Decodes exactly one RGBA frame per seek:
//   ffmpeg -ss <t> -i <file> -frames:v 1 -f rawvideo -pix_fmt rgba -
// The decode happens inside `seek` (that is where seek errors surface);
// `capture` reads back the buffer for the settled position.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{PromptReelError, Result};
use crate::media::{ffprobe, FrameBuffer, FrameSource, VideoMeta};

pub struct FfmpegClip {
    path: PathBuf,
    meta: VideoMeta,
    // Frame decoded by the most recent settled seek
    current: Option<FrameBuffer>,
}

impl FfmpegClip {
    /// Open a video file, probing its metadata. Fails with InvalidInput
    /// when the file is not a video or yields no usable metadata.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !ffprobe::is_available() {
            return Err(PromptReelError::FFprobe(
                "ffprobe is not available; check the bundled tools".to_string(),
            ));
        }

        let meta = ffprobe::probe(&path)?;

        log::debug!(
            "Opened {} ({}x{}, {:.2}s)",
            path.display(),
            meta.width,
            meta.height,
            meta.duration_secs
        );

        Ok(Self { path, meta, current: None })
    }

    fn expected_frame_bytes(&self) -> usize {
        self.meta.width as usize * self.meta.height as usize * 4
    }
}

#[async_trait]
impl FrameSource for FfmpegClip {
    fn meta(&self) -> &VideoMeta {
        &self.meta
    }

    async fn seek(&mut self, timestamp_secs: f64) -> Result<()> {
        // A new seek invalidates whatever the previous one decoded
        self.current = None;

        let seek_time = format_seek_time(timestamp_secs);

        let output = Command::new(crate::tools::ffmpeg_path())
            .args([
                "-v", "error",
                "-ss", &seek_time, // Seek before input (faster)
            ])
            .arg("-i")
            .arg(&self.path)
            .args([
                "-frames:v", "1",
                "-f", "rawvideo",
                "-pix_fmt", "rgba",
                "-",
            ])
            .output()
            .await
            .map_err(|e| PromptReelError::Seek(format!("Failed to run ffmpeg: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PromptReelError::Seek(format!(
                "ffmpeg failed at {}: {}",
                seek_time,
                stderr.trim()
            )));
        }

        let expected = self.expected_frame_bytes();
        if output.stdout.len() < expected {
            return Err(PromptReelError::Seek(format!(
                "No frame decoded at {} ({} of {} bytes)",
                seek_time,
                output.stdout.len(),
                expected
            )));
        }

        let mut data = output.stdout;
        data.truncate(expected);
        self.current = Some(FrameBuffer::new(self.meta.width, self.meta.height, data));

        Ok(())
    }

    fn capture(&mut self) -> Result<FrameBuffer> {
        self.current
            .clone()
            .ok_or_else(|| PromptReelError::Capture("No settled seek to read from".to_string()))
    }
}

/// Format seconds as HH:MM:SS.mmm for ffmpeg.
fn format_seek_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0) as u32;
    let minutes = ((seconds % 3600.0) / 60.0) as u32;
    let secs = seconds % 60.0;
    format!("{:02}:{:02}:{:06.3}", hours, minutes, secs)
}
