// Frame sampling: how many scenes to capture and when.
//
// Both functions are pure so the UI can preview counts and timestamps
// before a run starts.

use crate::constants::{
    CAPTURE_POINT_CLAMP_SECS, CAPTURE_TAIL_MARGIN_SECS, MAX_SCENE_COUNT, MIN_SCENE_COUNT,
    SECONDS_PER_SCENE_UNIT,
};

/// How many scenes to sample for a video of the given duration.
///
/// Scales with duration and granularity, bounded to
/// [MIN_SCENE_COUNT, MAX_SCENE_COUNT] once a duration is known.
/// Returns 0 when no duration is known.
pub fn compute_scene_count(duration_secs: f64, granularity: u8) -> usize {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0;
    }

    let base = ((duration_secs / SECONDS_PER_SCENE_UNIT) * (granularity as f64 + 1.0)).round();
    let base = (base as usize).max(MIN_SCENE_COUNT);
    base.min(MAX_SCENE_COUNT)
}

/// Evenly distributed capture timestamps for the given scene count.
///
/// Divides the effective span into `scene_count + 1` equal steps and emits
/// steps 1..=scene_count, each clamped below the end of the video. The
/// result is strictly increasing with every value in [0, duration).
pub fn compute_capture_points(duration_secs: f64, scene_count: usize) -> Vec<f64> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 || scene_count == 0 {
        return Vec::new();
    }

    // The tail margin never survives the max; the effective span is
    // always the full duration.
    let span = (duration_secs - CAPTURE_TAIL_MARGIN_SECS).max(duration_secs);
    let step = span / (scene_count as f64 + 1.0);

    // On sub-second clips the ceiling would go non-positive and collapse
    // every point onto it; the raw spacing already sits inside the clip.
    let ceiling = duration_secs - CAPTURE_POINT_CLAMP_SECS;

    (1..=scene_count)
        .map(|i| {
            let point = step * i as f64;
            if ceiling > 0.0 {
                point.min(ceiling)
            } else {
                point
            }
        })
        .collect()
}
