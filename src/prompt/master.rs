// Master prompt compiler.
//
// Deterministic concatenation of labeled lines. Optional lines are omitted
// entirely when their source field is empty, never left blank.

use crate::config::CaptureConfig;
use crate::constants::DEFAULT_PROJECT_TITLE;
use crate::prompt::{format_timestamp, ScenePrompt};

/// Compile all scene prompts plus the configuration into one document.
pub fn build_master_prompt(scenes: &[ScenePrompt], config: &CaptureConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    let title = config.project_title.trim();
    lines.push(format!(
        "Project: {}",
        if title.is_empty() { DEFAULT_PROJECT_TITLE } else { title }
    ));

    lines.push(format!("Objective: {}", config.objective));
    lines.push(format!(
        "Tone & style: {} tone, {} style",
        config.tone, config.style_preset
    ));

    if !config.focus_areas.is_empty() {
        lines.push(format!(
            "Focus priorities: {}",
            config.focus_areas.labels().join(", ")
        ));
    }

    let audience = config.audience_notes.trim();
    if !audience.is_empty() {
        lines.push(format!("Audience / usage notes: {}", audience));
    }

    lines.push("Scene ingredients:".to_string());
    for scene in scenes {
        lines.push(format!(
            "- {} · {}, {}, {}",
            format_timestamp(scene.timestamp_secs),
            scene.analysis.palette,
            scene.analysis.lighting,
            scene.analysis.energy,
        ));
    }

    lines.push("Detailed prompt instructions:".to_string());
    for scene in scenes {
        lines.push(scene.summary.clone());
    }

    let directives = config.custom_directives.trim();
    if !directives.is_empty() {
        lines.push(format!("Additional directives: {}", directives));
    }

    lines.join("\n")
}
