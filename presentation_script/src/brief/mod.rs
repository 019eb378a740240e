//! Presentation briefs - the caller's request - and the bundled samples.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::beats::BeatInput;

/// The caller's request: a title, a language, and the narration beats.
///
/// Shape is validated by the host before it reaches the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentationBrief {
    pub title: String,
    /// Language code, such as `en` or `ja`.
    pub lang: String,
    pub beats: Vec<BeatInput>,
}

impl PresentationBrief {
    /// Create a brief with no beats.
    pub fn new(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            beats: Vec::new(),
        }
    }

    /// Append a beat.
    pub fn with_beat(mut self, beat: BeatInput) -> Self {
        self.beats.push(beat);
        self
    }

    /// Append multiple beats.
    pub fn with_beats(mut self, beats: impl IntoIterator<Item = BeatInput>) -> Self {
        self.beats.extend(beats);
        self
    }
}

/// A named, ready-made brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSample {
    pub name: String,
    pub args: PresentationBrief,
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Malformed sample fixture: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize)]
struct SampleFile {
    samples: Vec<ToolSample>,
}

const SAMPLES_TOML: &str = include_str!("samples.toml");

/// Parse samples from a TOML document with a `[[samples]]` array.
pub fn parse_samples(source: &str) -> Result<Vec<ToolSample>, SampleError> {
    let file: SampleFile = toml::from_str(source)?;
    Ok(file.samples)
}

/// The samples bundled with this crate.
pub fn samples() -> Result<Vec<ToolSample>, SampleError> {
    parse_samples(SAMPLES_TOML)
}
