//! Beat records, before and after enrichment.

use serde::{Deserialize, Serialize};

use super::{BeatId, PRESENTER};

/// One narration unit as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BeatInput {
    /// Text spoken by the presenter.
    pub text: String,

    /// Optional directive for the beat's image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

impl BeatInput {
    /// Create a beat with narration text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_prompt: None,
        }
    }

    /// Set the image prompt.
    pub fn with_image_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.image_prompt = Some(prompt.into());
        self
    }
}

/// A beat with its identifier and speaker assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beat {
    pub id: BeatId,
    pub speaker: String,
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

impl Beat {
    /// Create a beat spoken by the presenter with a fresh identifier.
    pub fn from_input(input: &BeatInput) -> Self {
        Self {
            id: BeatId::new(),
            speaker: PRESENTER.to_string(),
            text: input.text.clone(),
            image_prompt: input.image_prompt.clone(),
        }
    }

    /// The caller's image prompt, if one was given and is non-empty.
    pub fn explicit_image_prompt(&self) -> Option<&str> {
        self.image_prompt.as_deref().filter(|p| !p.is_empty())
    }
}
