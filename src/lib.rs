// Prompt Reel - Library Entry Point
//
// Samples frames from a loaded video, reduces each frame to qualitative
// visual descriptors, and renders per-scene and master prompt text for
// downstream generative-AI tools. Embedded inside a larger interactive
// shell; the UI supplies a CaptureConfig and consumes the output.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod media;
pub mod prompt;
pub mod sampler;
pub mod tools;

pub use analyzer::{analyze_frame, SceneAnalysis};
pub use config::{CaptureConfig, FocusArea, FocusSelection, Objective, StylePreset, Tone};
pub use error::{PromptReelError, Result};
pub use generate::{GenerationOutput, GenerationProgress, Generator, ProgressFn};
pub use media::ffmpeg::FfmpegClip;
pub use media::{FrameBuffer, FrameSource, VideoMeta};
pub use prompt::{build_master_prompt, build_scene_prompt, ScenePrompt};
pub use sampler::{compute_capture_points, compute_scene_count};
