//! Presentation parameters: canvas, image backend, audio mixing, and voices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::beats::PRESENTER;

/// Version block identifying the script format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatVersion {
    pub version: String,
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self {
            version: "1.1".to_string(),
        }
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1536, 1080)
    }
}

/// Image backend the renderer should use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageParams {
    pub provider: String,
    pub model: String,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            provider: "google".to_string(),
            model: "gemini-2.5-flash-image-preview".to_string(),
        }
    }
}

/// Audio padding (seconds) and mixing levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioParams {
    /// Silence between beats.
    pub padding: f64,
    pub intro_padding: f64,
    pub closing_padding: f64,
    pub outro_padding: f64,
    pub bgm_volume: f64,
    pub audio_volume: f64,
    pub suppress_speech: bool,
}

impl Default for AudioParams {
    fn default() -> Self {
        Self {
            padding: 0.2,
            intro_padding: 0.5,
            closing_padding: 0.5,
            outro_padding: 0.5,
            bgm_volume: 0.1,
            audio_volume: 1.5,
            suppress_speech: false,
        }
    }
}

/// Sound effect settings. Currently always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEffectParams {}

/// Voice bound to a speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerVoice {
    pub voice_id: String,
}

impl SpeakerVoice {
    pub fn new(voice_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
        }
    }
}

/// Speech synthesis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechParams {
    /// Speaker label -> voice.
    pub speakers: BTreeMap<String, SpeakerVoice>,
}

impl SpeechParams {
    /// Look up the voice bound to a speaker.
    pub fn voice_for(&self, speaker: &str) -> Option<&SpeakerVoice> {
        self.speakers.get(speaker)
    }
}

impl Default for SpeechParams {
    fn default() -> Self {
        let mut speakers = BTreeMap::new();
        speakers.insert(PRESENTER.to_string(), SpeakerVoice::new("shimmer"));
        Self { speakers }
    }
}

/// The fixed parameter set stamped onto every script.
///
/// Built once and shared read-only; there is no runtime mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresentationDefaults {
    pub format_version: FormatVersion,
    pub canvas_size: CanvasSize,
    pub image_params: ImageParams,
    pub audio_params: AudioParams,
    pub sound_effect_params: SoundEffectParams,
    pub speech_params: SpeechParams,
}
