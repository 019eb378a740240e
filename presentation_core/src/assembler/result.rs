//! The packaged result returned to the host.

use presentation_script::{ImageMap, PresentationScript};
use serde::{Deserialize, Serialize};

/// Fixed instruction telling the caller what to do next.
pub const INSTRUCTIONS: &str =
    "Acknowledge that all the images were successfully generated and that the movie is being generated.";

/// Human-readable status for a processed script.
pub fn status_message(title: &str, beat_count: usize) -> String {
    format!(
        "Mulmocast has processed the MulmoScript for \"{}\" with {} beats. Movie generation will begin automatically.",
        title, beat_count
    )
}

/// Structured payload carried alongside the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultData {
    #[serde(rename = "mulmoScript")]
    pub script: PresentationScript,
    pub images: ImageMap,

    /// Filled in by the renderer once the movie exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_json_path: Option<String>,
}

/// What the core hands back for a brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationResult {
    pub message: String,
    pub title: String,
    pub instructions: String,
    pub data: ResultData,
}

impl PresentationResult {
    pub fn script(&self) -> &PresentationScript {
        &self.data.script
    }

    pub fn images(&self) -> &ImageMap {
        &self.data.images
    }
}
