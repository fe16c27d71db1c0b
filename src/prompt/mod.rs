// Prompt text assembly: per-scene sentences and the compiled master prompt.

pub mod master;
pub mod scene;

pub use master::build_master_prompt;
pub use scene::build_scene_prompt;

use serde::{Deserialize, Serialize};

use crate::analyzer::SceneAnalysis;

/// One sampled frame's analysis plus its rendered sentence.
/// Produced in timestamp order; a run replaces the whole sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePrompt {
    pub index: usize,
    pub timestamp_secs: f64,
    pub analysis: SceneAnalysis,
    pub summary: String,
}

/// Format seconds as MM:SS for display in prompt text.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(8.7), "00:08");
        assert_eq!(format_timestamp(65.2), "01:05");
        assert_eq!(format_timestamp(600.0), "10:00");
    }

    #[test]
    fn test_format_timestamp_negative_clamped() {
        assert_eq!(format_timestamp(-3.0), "00:00");
    }
}
