// Generation driver: one strictly sequential pass over the capture points.
//
// The per-timestamp seek is the only suspension point. A reset bumps the
// run counter; an in-flight run notices the stale token at its next check
// and discards everything, so a stale run can never publish results.
// Any mid-run failure collapses to one generic user-facing error at the
// run boundary; the cause is logged.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::analyzer::analyze_frame;
use crate::config::CaptureConfig;
use crate::constants::ANALYSIS_FAILED_MESSAGE;
use crate::error::{PromptReelError, Result};
use crate::media::{FrameSource, VideoMeta};
use crate::prompt::{build_master_prompt, build_scene_prompt, ScenePrompt};
use crate::sampler::{compute_capture_points, compute_scene_count};

/// Progress payload emitted after each completed scene.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationProgress {
    pub run_id: u64,
    pub current: u64,
    pub total: u64,
    pub percent: f64,
}

impl GenerationProgress {
    pub fn new(run_id: u64, current: u64, total: u64) -> Self {
        let total_safe = total.max(1);
        let percent = (current as f64 / total_safe as f64) * 100.0;
        Self { run_id, current, total, percent: percent.min(100.0) }
    }
}

/// Progress observer. No-op when the caller passes None.
/// Carries a lifetime so observers may borrow from the caller's scope.
pub type ProgressFn<'a> = dyn Fn(GenerationProgress) + Send + Sync + 'a;

/// Result of one completed generation run. Replaced wholesale each run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutput {
    pub scenes: Vec<ScenePrompt>,
    pub master_prompt: String,
}

/// Drives generation runs and owns the run token.
#[derive(Debug, Default)]
pub struct Generator {
    run: AtomicU64,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard whatever the current run would produce. The in-flight run
    /// observes the stale token after its next suspension point.
    pub fn reset(&self) {
        self.run.fetch_add(1, Ordering::SeqCst);
    }

    /// Sample, analyze and compile prompts for the whole video.
    ///
    /// Fails with InvalidInput before any sampling when the source has no
    /// usable metadata; every mid-run failure surfaces as the single
    /// generic AnalysisFailed error with no partial results.
    pub async fn generate(
        &self,
        source: &mut dyn FrameSource,
        config: &CaptureConfig,
        progress: Option<&ProgressFn<'_>>,
    ) -> Result<GenerationOutput> {
        let meta = *source.meta();
        if !meta.is_usable() {
            return Err(PromptReelError::InvalidInput(
                "Video yields no usable metadata".to_string(),
            ));
        }

        let run_id = self.run.load(Ordering::SeqCst);

        match self.run_once(run_id, source, &meta, config, progress).await {
            Ok(output) => Ok(output),
            Err(PromptReelError::Cancelled) => Err(PromptReelError::Cancelled),
            Err(e) => {
                log::warn!("Generation run {} failed: {}", run_id, e);
                Err(PromptReelError::AnalysisFailed(
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                ))
            }
        }
    }

    async fn run_once(
        &self,
        run_id: u64,
        source: &mut dyn FrameSource,
        meta: &VideoMeta,
        config: &CaptureConfig,
        progress: Option<&ProgressFn<'_>>,
    ) -> Result<GenerationOutput> {
        let scene_count = compute_scene_count(meta.duration_secs, config.effective_granularity());
        let points = compute_capture_points(meta.duration_secs, scene_count);

        log::debug!(
            "Run {}: {} scenes across {:.2}s",
            run_id,
            points.len(),
            meta.duration_secs
        );

        let mut scenes: Vec<ScenePrompt> = Vec::with_capacity(points.len());

        for (index, &timestamp_secs) in points.iter().enumerate() {
            source.seek(timestamp_secs).await?;
            self.check_current(run_id)?;

            let frame = source.capture()?;
            let analysis = analyze_frame(&frame.data, frame.width, frame.height);
            let summary = build_scene_prompt(index, timestamp_secs, &analysis, config);

            scenes.push(ScenePrompt { index, timestamp_secs, analysis, summary });

            if let Some(observer) = progress {
                observer(GenerationProgress::new(
                    run_id,
                    scenes.len() as u64,
                    points.len() as u64,
                ));
            }
        }

        self.check_current(run_id)?;
        let master_prompt = build_master_prompt(&scenes, config);

        Ok(GenerationOutput { scenes, master_prompt })
    }

    fn check_current(&self, run_id: u64) -> Result<()> {
        if self.run.load(Ordering::SeqCst) != run_id {
            return Err(PromptReelError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::FrameBuffer;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory frame source: one solid color for the whole clip,
    /// optionally failing the n-th seek.
    struct FakeSource {
        meta: VideoMeta,
        rgba: [u8; 4],
        seeks: Vec<f64>,
        fail_on_seek: Option<usize>,
        settled: bool,
    }

    impl FakeSource {
        fn new(duration_secs: f64, rgba: [u8; 4]) -> Self {
            Self {
                meta: VideoMeta { duration_secs, width: 64, height: 36 },
                rgba,
                seeks: Vec::new(),
                fail_on_seek: None,
                settled: false,
            }
        }
    }

    #[async_trait]
    impl FrameSource for FakeSource {
        fn meta(&self) -> &VideoMeta {
            &self.meta
        }

        async fn seek(&mut self, timestamp_secs: f64) -> Result<()> {
            self.settled = false;
            if self.fail_on_seek == Some(self.seeks.len()) {
                return Err(PromptReelError::Seek("decoder gave up".to_string()));
            }
            self.seeks.push(timestamp_secs);
            self.settled = true;
            Ok(())
        }

        fn capture(&mut self) -> Result<FrameBuffer> {
            assert!(self.settled, "capture before seek settled");
            let data: Vec<u8> = self
                .rgba
                .iter()
                .copied()
                .cycle()
                .take(self.meta.width as usize * self.meta.height as usize * 4)
                .collect();
            Ok(FrameBuffer::new(self.meta.width, self.meta.height, data))
        }
    }

    fn config_with_granularity(granularity: u8) -> CaptureConfig {
        CaptureConfig { granularity, ..CaptureConfig::default() }
    }

    #[tokio::test]
    async fn test_forty_second_video_yields_ten_scenes() {
        let generator = Generator::new();
        let mut source = FakeSource::new(40.0, [60, 140, 220, 255]);
        let config = config_with_granularity(4);

        let recorded: Mutex<Vec<(u64, u64)>> = Mutex::new(Vec::new());
        let observer = |p: GenerationProgress| {
            recorded.lock().unwrap().push((p.current, p.total));
        };

        let output = generator
            .generate(&mut source, &config, Some(&observer))
            .await
            .unwrap();

        assert_eq!(output.scenes.len(), 10);

        // Timestamps strictly increasing, all inside the clip
        let mut prev = -1.0;
        for scene in &output.scenes {
            assert!(scene.timestamp_secs > prev);
            assert!(scene.timestamp_secs < 40.0);
            prev = scene.timestamp_secs;
        }

        // Progress fired once per scene with ascending current
        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.len(), 10);
        for (i, (current, total)) in recorded.iter().enumerate() {
            assert_eq!(*current, i as u64 + 1);
            assert_eq!(*total, 10);
        }

        // Ten ingredient lines and ten instruction sentences, in order
        let ingredient_lines = output
            .master_prompt
            .lines()
            .filter(|l| l.starts_with("- "))
            .count();
        assert_eq!(ingredient_lines, 10);
        for scene in &output.scenes {
            assert!(output.master_prompt.contains(&scene.summary));
        }
    }

    #[tokio::test]
    async fn test_seek_error_collapses_to_generic_failure() {
        let generator = Generator::new();
        let mut source = FakeSource::new(40.0, [10, 10, 10, 255]);
        source.fail_on_seek = Some(3);

        let err = generator
            .generate(&mut source, &CaptureConfig::default(), None)
            .await
            .unwrap_err();

        match err {
            PromptReelError::AnalysisFailed(msg) => assert_eq!(msg, ANALYSIS_FAILED_MESSAGE),
            other => panic!("expected AnalysisFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unusable_metadata_is_invalid_input() {
        let generator = Generator::new();
        let mut source = FakeSource::new(0.0, [0, 0, 0, 255]);

        let err = generator
            .generate(&mut source, &CaptureConfig::default(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, PromptReelError::InvalidInput(_)));
        assert!(source.seeks.is_empty(), "no sampling after invalid input");
    }

    #[tokio::test]
    async fn test_reset_mid_run_cancels_without_publishing() {
        let generator = Generator::new();
        let mut source = FakeSource::new(120.0, [200, 200, 200, 255]);

        // Reset as soon as the first scene completes
        let observer = |p: GenerationProgress| {
            if p.current == 1 {
                generator.reset();
            }
        };

        let result = generator
            .generate(&mut source, &CaptureConfig::default(), Some(&observer))
            .await;

        assert!(matches!(result, Err(PromptReelError::Cancelled)));
    }

    #[tokio::test]
    async fn test_scene_count_invariant_holds() {
        let generator = Generator::new();
        for (duration, granularity) in [(6.0, 1u8), (25.0, 3), (90.0, 7)] {
            let mut source = FakeSource::new(duration, [90, 60, 30, 255]);
            let config = config_with_granularity(granularity);

            let output = generator.generate(&mut source, &config, None).await.unwrap();
            assert_eq!(
                output.scenes.len(),
                compute_scene_count(duration, granularity)
            );
        }
    }

    #[tokio::test]
    async fn test_repeat_runs_are_identical() {
        let generator = Generator::new();
        let config = config_with_granularity(2);

        let mut first_source = FakeSource::new(30.0, [60, 140, 220, 255]);
        let first = generator.generate(&mut first_source, &config, None).await.unwrap();

        let mut second_source = FakeSource::new(30.0, [60, 140, 220, 255]);
        let second = generator.generate(&mut second_source, &config, None).await.unwrap();

        assert_eq!(first.master_prompt, second.master_prompt);
        assert_eq!(first.scenes, second.scenes);
    }
}
