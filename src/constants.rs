// Prompt Reel Constants
// Breakpoints and caps for the sampling and analysis pipeline.
// These values define the output contract; bump ANALYSIS_VERSION when changing them.

pub const ANALYSIS_VERSION: u32 = 1;

// ----- Frame sampling -----

// Scene count bounds once a duration is known
pub const MIN_SCENE_COUNT: usize = 3;
pub const MAX_SCENE_COUNT: usize = 10;

// Seconds of footage that one granularity step is worth
pub const SECONDS_PER_SCENE_UNIT: f64 = 20.0;

// Granularity slider range
pub const MIN_GRANULARITY: u8 = 1;
pub const MAX_GRANULARITY: u8 = 7;

// Capture-point spacing. The trailing margin is clamped back out by the
// span computation in the sampler and never engages.
pub const CAPTURE_TAIL_MARGIN_SECS: f64 = 0.5;
pub const CAPTURE_POINT_CLAMP_SECS: f64 = 0.1;

// ----- Pixel analysis -----

// Target number of sampled pixels per frame, independent of resolution
pub const TARGET_SAMPLE_PIXELS: u32 = 55_000;

// Minimum pixel stride between samples on small frames
pub const MIN_PIXEL_STRIDE: usize = 4;

// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

// Rec. 601 luma weights
pub const LUMA_R: f64 = 0.299;
pub const LUMA_G: f64 = 0.587;
pub const LUMA_B: f64 = 0.114;

// Lighting breakpoints (average luma, 0-255)
pub const LUMA_HIGH_KEY: f64 = 200.0;
pub const LUMA_WELL_LIT: f64 = 150.0;
pub const LUMA_BALANCED: f64 = 100.0;
pub const LUMA_LOW_KEY: f64 = 60.0;

// Contrast breakpoints (luma range / 255)
pub const CONTRAST_HIGH: f64 = 0.55;
pub const CONTRAST_STRUCTURED: f64 = 0.35;

// Saturation breakpoints (HSL saturation, 0-1)
pub const SATURATION_VIVID: f64 = 0.6;
pub const SATURATION_RICH: f64 = 0.35;
pub const SATURATION_MUTED: f64 = 0.2;

// Mood breakpoints (HSL lightness, 0-1)
pub const LIGHTNESS_UPLIFTING: f64 = 0.65;
pub const LIGHTNESS_BALANCED: f64 = 0.45;
pub const LIGHTNESS_INTROSPECTIVE: f64 = 0.28;

// Achromatic cutoff shared by the palette table
pub const SATURATION_NEUTRAL: f64 = 0.12;

// ----- Stable neutral labels -----
// Returned when a frame yields zero sampled pixels. Not an error.

pub const NEUTRAL_PALETTE: &str = "balanced palette";
pub const NEUTRAL_LIGHTING: &str = "neutral lighting";
pub const NEUTRAL_MOOD: &str = "steady atmosphere";
pub const NEUTRAL_ENERGY: &str = "controlled pacing";

// ----- Prompt text -----

pub const DEFAULT_PROJECT_TITLE: &str = "Untitled video prompt";

// User-facing message for any mid-run failure
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "We couldn't analyse that video. Try a different file.";
