//! The presentation script - the structure handed to the video renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::beats::{Beat, BeatId};
use crate::params::{
    AudioParams, CanvasSize, FormatVersion, ImageParams, PresentationDefaults, SoundEffectParams,
    SpeechParams,
};

/// A fully parameterized presentation ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationScript {
    #[serde(rename = "$mulmocast")]
    pub format_version: FormatVersion,
    pub canvas_size: CanvasSize,
    pub image_params: ImageParams,
    pub audio_params: AudioParams,
    pub sound_effect_params: SoundEffectParams,
    pub speech_params: SpeechParams,
    pub title: String,
    pub lang: String,
    /// Beats in narration order.
    pub beats: Vec<Beat>,
}

impl PresentationScript {
    /// Stamp the given defaults onto a title, language, and beat sequence.
    pub fn new(
        defaults: &PresentationDefaults,
        title: impl Into<String>,
        lang: impl Into<String>,
        beats: Vec<Beat>,
    ) -> Self {
        Self {
            format_version: defaults.format_version.clone(),
            canvas_size: defaults.canvas_size,
            image_params: defaults.image_params.clone(),
            audio_params: defaults.audio_params.clone(),
            sound_effect_params: defaults.sound_effect_params.clone(),
            speech_params: defaults.speech_params.clone(),
            title: title.into(),
            lang: lang.into(),
            beats,
        }
    }

    /// Get a beat by ID.
    pub fn get_beat(&self, id: BeatId) -> Option<&Beat> {
        self.beats.iter().find(|b| b.id == id)
    }

    /// Number of beats in the script.
    pub fn beat_count(&self) -> usize {
        self.beats.len()
    }
}

/// Generated image payloads keyed by beat.
///
/// A beat has an entry only if its image was generated successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageMap {
    images: BTreeMap<BeatId, String>,
}

impl ImageMap {
    /// Create an empty image map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the image for a beat, replacing any previous one.
    pub fn insert(&mut self, id: BeatId, image_data: impl Into<String>) {
        self.images.insert(id, image_data.into());
    }

    /// Get the image payload for a beat.
    pub fn get(&self, id: BeatId) -> Option<&str> {
        self.images.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: BeatId) -> bool {
        self.images.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Beat IDs that have an image.
    pub fn beat_ids(&self) -> impl Iterator<Item = BeatId> + '_ {
        self.images.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BeatId, &str)> {
        self.images.iter().map(|(id, data)| (*id, data.as_str()))
    }
}

impl FromIterator<(BeatId, String)> for ImageMap {
    fn from_iter<I: IntoIterator<Item = (BeatId, String)>>(iter: I) -> Self {
        Self {
            images: iter.into_iter().collect(),
        }
    }
}
