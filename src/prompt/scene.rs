// Per-scene sentence builder.

use crate::analyzer::SceneAnalysis;
use crate::config::CaptureConfig;
use crate::prompt::format_timestamp;

/// Render one frame's analysis into a single descriptive sentence.
///
/// Shape: scene number, timestamp, capitalised tone, the present descriptors
/// semicolon-joined in fixed order, an optional focus clause, and a closing
/// clause naming the objective and style preset verbatim.
pub fn build_scene_prompt(
    scene_index: usize,
    timestamp_secs: f64,
    analysis: &SceneAnalysis,
    config: &CaptureConfig,
) -> String {
    let descriptors = analysis.descriptors().join("; ");

    let focus_clause = if config.focus_areas.is_empty() {
        String::new()
    } else {
        format!("; emphasise {}", config.focus_areas.labels().join(", "))
    };

    format!(
        "Scene {} ({}) — {} take: {}{}; crafted for {} in {} style.",
        scene_index + 1,
        format_timestamp(timestamp_secs),
        config.tone.capitalized(),
        descriptors,
        focus_clause,
        config.objective,
        config.style_preset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_frame;
    use crate::config::{FocusArea, FocusSelection, Objective, StylePreset, Tone};

    fn blue_analysis() -> SceneAnalysis {
        let pixels: Vec<u8> = [60u8, 140, 220, 255]
            .iter()
            .copied()
            .cycle()
            .take(64 * 64 * 4)
            .collect();
        analyze_frame(&pixels, 64, 64)
    }

    fn config() -> CaptureConfig {
        CaptureConfig {
            tone: Tone::Cinematic,
            objective: Objective::SocialTeaser,
            style_preset: StylePreset::Photorealistic,
            ..CaptureConfig::default()
        }
    }

    #[test]
    fn test_scene_sentence_without_focus() {
        let sentence = build_scene_prompt(0, 8.0, &blue_analysis(), &config());

        assert_eq!(
            sentence,
            "Scene 1 (00:08) — Cinematic take: crisp Arctic blue; balanced lighting; \
             vivid look; soft contrast; balanced mood; contemplative pacing; \
             crafted for social media teaser in photorealistic style."
        );
    }

    #[test]
    fn test_scene_sentence_with_focus_clause() {
        let mut config = config();
        config.focus_areas = [FocusArea::Lighting, FocusArea::Visuals]
            .into_iter()
            .collect::<FocusSelection>();

        let sentence = build_scene_prompt(2, 65.0, &blue_analysis(), &config);

        assert!(sentence.starts_with("Scene 3 (01:05)"));
        assert!(sentence.contains("; emphasise visual details, lighting and shadows;"));
        assert!(sentence.ends_with("crafted for social media teaser in photorealistic style."));
    }

    #[test]
    fn test_degenerate_analysis_skips_absent_descriptors() {
        let sentence = build_scene_prompt(0, 0.0, &SceneAnalysis::neutral(), &config());

        assert!(sentence.contains(
            "balanced palette; neutral lighting; steady atmosphere; controlled pacing"
        ));
        assert!(!sentence.contains("contrast"));
    }

    #[test]
    fn test_scene_sentence_is_pure() {
        let analysis = blue_analysis();
        let config = config();
        let a = build_scene_prompt(4, 12.25, &analysis, &config);
        let b = build_scene_prompt(4, 12.25, &analysis, &config);
        assert_eq!(a, b);
    }
}
