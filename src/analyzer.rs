// Color/brightness analysis: raw RGBA pixels -> qualitative descriptors.
//
// Pixels are sampled at a stride that grows with resolution, keeping the
// sampled count near TARGET_SAMPLE_PIXELS regardless of frame size. Each
// descriptor comes from a fixed threshold table; within the palette table
// rule order determines precedence, so the rules live in an ordered list.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Qualitative descriptors for one sampled frame.
/// Saturation and contrast are absent for degenerate (zero-pixel) input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneAnalysis {
    pub palette: String,
    pub lighting: String,
    pub mood: String,
    pub energy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<String>,
}

impl SceneAnalysis {
    /// Fixed fallback for frames that yield zero sampled pixels.
    pub fn neutral() -> Self {
        Self {
            palette: NEUTRAL_PALETTE.to_string(),
            lighting: NEUTRAL_LIGHTING.to_string(),
            mood: NEUTRAL_MOOD.to_string(),
            energy: NEUTRAL_ENERGY.to_string(),
            saturation: None,
            contrast: None,
        }
    }

    /// Present descriptors in the fixed palette -> lighting -> saturation ->
    /// contrast -> mood -> energy order, skipping absent fields.
    pub fn descriptors(&self) -> Vec<&str> {
        let mut out = vec![self.palette.as_str(), self.lighting.as_str()];
        if let Some(ref s) = self.saturation {
            out.push(s.as_str());
        }
        if let Some(ref c) = self.contrast {
            out.push(c.as_str());
        }
        out.push(self.mood.as_str());
        out.push(self.energy.as_str());
        out.retain(|d| !d.is_empty());
        out
    }
}

struct PaletteRule {
    matches: fn(h: f64, s: f64, l: f64) -> bool,
    label: &'static str,
}

// First match wins. The achromatic rule sits ahead of the rose hue band so
// that grey frames never read as rose; the bands otherwise overlap.
const PALETTE_RULES: &[PaletteRule] = &[
    PaletteRule { matches: |h, s, _| (200.0..240.0).contains(&h) && s > 0.2, label: "crisp Arctic blue" },
    PaletteRule { matches: |h, s, _| (260.0..300.0).contains(&h) && s > 0.35, label: "electric violet" },
    PaletteRule { matches: |h, _, l| (30.0..60.0).contains(&h) && l > 0.55, label: "sunlit amber" },
    PaletteRule { matches: |h, s, _| (130.0..170.0).contains(&h) && s > 0.25, label: "deep emerald" },
    PaletteRule { matches: |h, _, l| (210.0..250.0).contains(&h) && l < 0.45, label: "moody indigo" },
    PaletteRule { matches: |h, s, _| (20.0..50.0).contains(&h) && s < 0.25, label: "faded sepia" },
    PaletteRule { matches: |_, s, _| s < SATURATION_NEUTRAL, label: "graphite neutral" },
    PaletteRule { matches: |h, _, _| h >= 330.0 || h < 15.0, label: "soft rose" },
];

/// Reduce an RGBA frame to qualitative descriptors.
pub fn analyze_frame(pixels: &[u8], width: u32, height: u32) -> SceneAnalysis {
    let pixel_count = width as usize * height as usize;
    let stride_bytes = (pixel_count / TARGET_SAMPLE_PIXELS as usize)
        .max(MIN_PIXEL_STRIDE)
        * BYTES_PER_PIXEL;

    let mut r_sum = 0.0f64;
    let mut g_sum = 0.0f64;
    let mut b_sum = 0.0f64;
    let mut luma_sum = 0.0f64;
    let mut min_luma = f64::MAX;
    let mut max_luma = f64::MIN;
    let mut sampled = 0usize;

    let mut i = 0;
    while i + BYTES_PER_PIXEL <= pixels.len() {
        let r = pixels[i] as f64;
        let g = pixels[i + 1] as f64;
        let b = pixels[i + 2] as f64;

        r_sum += r;
        g_sum += g;
        b_sum += b;

        let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        luma_sum += luma;
        min_luma = min_luma.min(luma);
        max_luma = max_luma.max(luma);

        sampled += 1;
        i += stride_bytes;
    }

    if sampled == 0 {
        return SceneAnalysis::neutral();
    }

    let n = sampled as f64;
    let avg_r = r_sum / n;
    let avg_g = g_sum / n;
    let avg_b = b_sum / n;
    let avg_luma = luma_sum / n;
    let contrast = (max_luma - min_luma) / 255.0;

    let (h, s, l) = rgb_to_hsl(avg_r, avg_g, avg_b);

    SceneAnalysis {
        palette: palette_label(h, s, l).to_string(),
        lighting: lighting_label(avg_luma).to_string(),
        mood: mood_label(l).to_string(),
        energy: energy_label(contrast, s).to_string(),
        saturation: Some(saturation_label(s).to_string()),
        contrast: Some(contrast_label(contrast).to_string()),
    }
}

/// Convert 0-255 RGB to HSL: h in [0, 360), s and l in [0, 1].
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());

    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    (h, s, l)
}

fn palette_label(h: f64, s: f64, l: f64) -> &'static str {
    for rule in PALETTE_RULES {
        if (rule.matches)(h, s, l) {
            return rule.label;
        }
    }
    NEUTRAL_PALETTE
}

fn lighting_label(avg_luma: f64) -> &'static str {
    if avg_luma > LUMA_HIGH_KEY {
        "high-key lighting"
    } else if avg_luma > LUMA_WELL_LIT {
        "well-lit lighting"
    } else if avg_luma > LUMA_BALANCED {
        "balanced lighting"
    } else if avg_luma > LUMA_LOW_KEY {
        "low-key lighting"
    } else {
        "shadow-heavy lighting"
    }
}

fn contrast_label(contrast: f64) -> &'static str {
    if contrast > CONTRAST_HIGH {
        "high contrast"
    } else if contrast > CONTRAST_STRUCTURED {
        "structured contrast"
    } else {
        "soft contrast"
    }
}

fn saturation_label(s: f64) -> &'static str {
    if s > SATURATION_VIVID {
        "vivid look"
    } else if s > SATURATION_RICH {
        "rich look"
    } else if s > SATURATION_MUTED {
        "muted look"
    } else {
        "desaturated look"
    }
}

fn mood_label(l: f64) -> &'static str {
    if l > LIGHTNESS_UPLIFTING {
        "uplifting mood"
    } else if l > LIGHTNESS_BALANCED {
        "balanced mood"
    } else if l > LIGHTNESS_INTROSPECTIVE {
        "introspective mood"
    } else {
        "brooding atmosphere"
    }
}

fn energy_label(contrast: f64, s: f64) -> &'static str {
    if contrast > CONTRAST_HIGH && s > SATURATION_RICH {
        "kinetic pacing"
    } else if contrast > CONTRAST_STRUCTURED {
        "dynamic pacing"
    } else {
        "contemplative pacing"
    }
}
