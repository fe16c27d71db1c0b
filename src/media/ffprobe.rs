// FFprobe wrapper for video metadata extraction

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use crate::error::{PromptReelError, Result};
use crate::media::VideoMeta;

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    streams: Option<Vec<FFprobeStream>>,
    format: Option<FFprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FFprobeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FFprobeFormat {
    duration: Option<String>,
}

/// Run ffprobe on a file and extract the video metadata the sampler needs.
/// A file with no video stream or no usable duration is invalid input.
pub fn probe(path: &Path) -> Result<VideoMeta> {
    let output = Command::new(crate::tools::ffprobe_path())
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| PromptReelError::FFprobe(format!("Failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PromptReelError::FFprobe(format!("ffprobe failed: {}", stderr)));
    }

    parse_probe_output(&output.stdout)
}

/// Parse raw ffprobe JSON into VideoMeta.
fn parse_probe_output(json: &[u8]) -> Result<VideoMeta> {
    let probe_output: FFprobeOutput = serde_json::from_slice(json)
        .map_err(|e| PromptReelError::FFprobe(format!("Failed to parse ffprobe output: {}", e)))?;

    let mut width = 0u32;
    let mut height = 0u32;
    let mut duration_secs: Option<f64> = None;
    let mut has_video = false;

    if let Some(ref streams) = probe_output.streams {
        for stream in streams {
            if stream.codec_type.as_deref() == Some("video") {
                has_video = true;
                width = stream.width.unwrap_or(0);
                height = stream.height.unwrap_or(0);
                if duration_secs.is_none() {
                    duration_secs = parse_duration_secs(stream.duration.as_deref());
                }
            }
        }
    }

    if duration_secs.is_none() {
        duration_secs = probe_output
            .format
            .as_ref()
            .and_then(|f| parse_duration_secs(f.duration.as_deref()));
    }

    if !has_video {
        return Err(PromptReelError::InvalidInput(
            "File has no video stream".to_string(),
        ));
    }

    let meta = VideoMeta {
        duration_secs: duration_secs.unwrap_or(0.0),
        width,
        height,
    };

    if !meta.is_usable() {
        return Err(PromptReelError::InvalidInput(
            "Video yields no usable metadata".to_string(),
        ));
    }

    Ok(meta)
}

/// Parse a duration string to seconds
fn parse_duration_secs(duration_str: Option<&str>) -> Option<f64> {
    let seconds: f64 = duration_str?.parse().ok()?;
    if seconds.is_finite() && seconds > 0.0 {
        Some(seconds)
    } else {
        None
    }
}

/// Check if ffprobe is available
pub fn is_available() -> bool {
    crate::tools::is_tool_available("ffprobe")
}
