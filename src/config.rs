// Capture configuration: the caller-owned knobs for a generation run.
//
// Tone, objective and style preset are fixed option sets surfaced as enums;
// free-text fields are passed through verbatim. The focus selection is an
// immutable value whose toggle returns a new set, so a run that is already
// in flight never observes a half-edited selection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_GRANULARITY, MIN_GRANULARITY};

#[derive(Debug, Error)]
#[error("Unknown option: {0}")]
pub struct OptionParseError(String);

/// Overall voice of the generated prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Cinematic,
    Playful,
    Dramatic,
    Documentary,
    Energetic,
    Dreamy,
}

impl Tone {
    pub const ALL: &'static [Tone] = &[
        Tone::Cinematic,
        Tone::Playful,
        Tone::Dramatic,
        Tone::Documentary,
        Tone::Energetic,
        Tone::Dreamy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Cinematic => "cinematic",
            Tone::Playful => "playful",
            Tone::Dramatic => "dramatic",
            Tone::Documentary => "documentary",
            Tone::Energetic => "energetic",
            Tone::Dreamy => "dreamy",
        }
    }

    /// Sentence-leading form ("Cinematic", "Playful", ...).
    pub fn capitalized(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tone {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cinematic" => Ok(Tone::Cinematic),
            "playful" => Ok(Tone::Playful),
            "dramatic" => Ok(Tone::Dramatic),
            "documentary" => Ok(Tone::Documentary),
            "energetic" => Ok(Tone::Energetic),
            "dreamy" => Ok(Tone::Dreamy),
            _ => Err(OptionParseError(s.to_string())),
        }
    }
}

/// What the downstream generation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    SocialTeaser,
    BrandStory,
    MusicVideo,
    ProductShowcase,
    TravelRecap,
    EventHighlight,
}

impl Objective {
    pub const ALL: &'static [Objective] = &[
        Objective::SocialTeaser,
        Objective::BrandStory,
        Objective::MusicVideo,
        Objective::ProductShowcase,
        Objective::TravelRecap,
        Objective::EventHighlight,
    ];

    /// Phrase used verbatim in prompt text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::SocialTeaser => "social media teaser",
            Objective::BrandStory => "brand story",
            Objective::MusicVideo => "music video",
            Objective::ProductShowcase => "product showcase",
            Objective::TravelRecap => "travel recap",
            Objective::EventHighlight => "event highlight",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Objective {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "social media teaser" | "social_teaser" => Ok(Objective::SocialTeaser),
            "brand story" | "brand_story" => Ok(Objective::BrandStory),
            "music video" | "music_video" => Ok(Objective::MusicVideo),
            "product showcase" | "product_showcase" => Ok(Objective::ProductShowcase),
            "travel recap" | "travel_recap" => Ok(Objective::TravelRecap),
            "event highlight" | "event_highlight" => Ok(Objective::EventHighlight),
            _ => Err(OptionParseError(s.to_string())),
        }
    }
}

/// Rendering style named verbatim in prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    Photorealistic,
    Anime,
    Watercolor,
    Cyberpunk,
    RetroFilm,
    Render3d,
}

impl StylePreset {
    pub const ALL: &'static [StylePreset] = &[
        StylePreset::Photorealistic,
        StylePreset::Anime,
        StylePreset::Watercolor,
        StylePreset::Cyberpunk,
        StylePreset::RetroFilm,
        StylePreset::Render3d,
    ];

    /// Phrase used verbatim in prompt text.
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::Photorealistic => "photorealistic",
            StylePreset::Anime => "hand-drawn anime",
            StylePreset::Watercolor => "soft watercolor",
            StylePreset::Cyberpunk => "neon cyberpunk",
            StylePreset::RetroFilm => "retro 16mm film",
            StylePreset::Render3d => "stylised 3D render",
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StylePreset {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photorealistic" => Ok(StylePreset::Photorealistic),
            "hand-drawn anime" | "anime" => Ok(StylePreset::Anime),
            "soft watercolor" | "watercolor" => Ok(StylePreset::Watercolor),
            "neon cyberpunk" | "cyberpunk" => Ok(StylePreset::Cyberpunk),
            "retro 16mm film" | "retro_film" => Ok(StylePreset::RetroFilm),
            "stylised 3d render" | "render3d" => Ok(StylePreset::Render3d),
            _ => Err(OptionParseError(s.to_string())),
        }
    }
}

/// Emphasis category influencing prompt wording.
/// Ord order is the iteration order used for focus clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Visuals,
    Lighting,
    Narrative,
    Motion,
    Mood,
    Audio,
}

impl FocusArea {
    pub const ALL: &'static [FocusArea] = &[
        FocusArea::Visuals,
        FocusArea::Lighting,
        FocusArea::Narrative,
        FocusArea::Motion,
        FocusArea::Mood,
        FocusArea::Audio,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FocusArea::Visuals => "visuals",
            FocusArea::Lighting => "lighting",
            FocusArea::Narrative => "narrative",
            FocusArea::Motion => "motion",
            FocusArea::Mood => "mood",
            FocusArea::Audio => "audio",
        }
    }

    /// Human-readable label used in prompt text.
    pub fn label(&self) -> &'static str {
        match self {
            FocusArea::Visuals => "visual details",
            FocusArea::Lighting => "lighting and shadows",
            FocusArea::Narrative => "narrative beats",
            FocusArea::Motion => "camera and subject motion",
            FocusArea::Mood => "emotional mood",
            FocusArea::Audio => "audio cues",
        }
    }
}

impl FromStr for FocusArea {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visuals" => Ok(FocusArea::Visuals),
            "lighting" => Ok(FocusArea::Lighting),
            "narrative" => Ok(FocusArea::Narrative),
            "motion" => Ok(FocusArea::Motion),
            "mood" => Ok(FocusArea::Mood),
            "audio" => Ok(FocusArea::Audio),
            _ => Err(OptionParseError(s.to_string())),
        }
    }
}

/// Immutable set of selected focus areas.
/// `toggle` returns a new selection; the original is never mutated, so a
/// generation run holding a clone cannot observe later UI edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusSelection(BTreeSet<FocusArea>);

impl FocusSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self, area: FocusArea) -> Self {
        let mut next = self.0.clone();
        if !next.remove(&area) {
            next.insert(area);
        }
        Self(next)
    }

    pub fn contains(&self, area: FocusArea) -> bool {
        self.0.contains(&area)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Selected areas in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = FocusArea> + '_ {
        self.0.iter().copied()
    }

    /// Human-readable labels in declaration order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|a| a.label()).collect()
    }
}

impl FromIterator<FocusArea> for FocusSelection {
    fn from_iter<I: IntoIterator<Item = FocusArea>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Caller-owned configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConfig {
    pub tone: Tone,
    pub objective: Objective,
    pub style_preset: StylePreset,
    pub focus_areas: FocusSelection,
    /// Scene density, 1-7. Values outside the range are clamped.
    pub granularity: u8,
    pub project_title: String,
    pub audience_notes: String,
    pub custom_directives: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            tone: Tone::Cinematic,
            objective: Objective::SocialTeaser,
            style_preset: StylePreset::Photorealistic,
            focus_areas: FocusSelection::new(),
            granularity: 4,
            project_title: String::new(),
            audience_notes: String::new(),
            custom_directives: String::new(),
        }
    }
}

impl CaptureConfig {
    /// Granularity clamped to the supported range.
    pub fn effective_granularity(&self) -> u8 {
        self.granularity.clamp(MIN_GRANULARITY, MAX_GRANULARITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_roundtrip() {
        for tone in Tone::ALL {
            assert_eq!(tone.as_str().parse::<Tone>().unwrap(), *tone);
        }
    }

    #[test]
    fn test_tone_capitalized() {
        assert_eq!(Tone::Cinematic.capitalized(), "Cinematic");
        assert_eq!(Tone::Dreamy.capitalized(), "Dreamy");
    }

    #[test]
    fn test_objective_phrases_verbatim() {
        assert_eq!(Objective::SocialTeaser.as_str(), "social media teaser");
        assert_eq!("event highlight".parse::<Objective>().unwrap(), Objective::EventHighlight);
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!("vaporwave".parse::<StylePreset>().is_err());
        assert!("everything".parse::<FocusArea>().is_err());
    }

    #[test]
    fn test_toggle_returns_new_selection() {
        let empty = FocusSelection::new();
        let with_mood = empty.toggle(FocusArea::Mood);

        assert!(empty.is_empty());
        assert!(with_mood.contains(FocusArea::Mood));

        let back = with_mood.toggle(FocusArea::Mood);
        assert!(back.is_empty());
        assert!(with_mood.contains(FocusArea::Mood));
    }

    #[test]
    fn test_focus_labels_in_declaration_order() {
        let sel: FocusSelection = [FocusArea::Audio, FocusArea::Visuals, FocusArea::Motion]
            .into_iter()
            .collect();
        assert_eq!(
            sel.labels(),
            vec!["visual details", "camera and subject motion", "audio cues"]
        );
    }

    #[test]
    fn test_granularity_clamped() {
        let mut config = CaptureConfig::default();
        config.granularity = 0;
        assert_eq!(config.effective_granularity(), 1);
        config.granularity = 12;
        assert_eq!(config.effective_granularity(), 7);
        config.granularity = 5;
        assert_eq!(config.effective_granularity(), 5);
    }
}
