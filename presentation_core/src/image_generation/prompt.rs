//! Prompt derivation for beat images.

use presentation_script::Beat;

/// Placeholder replaced with the beat's narration text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Template used when a beat carries no explicit image prompt.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "generate image appropriate for the text. <text>{text}</text>. Let the art convey the story and emotions without text. Use the last image for the aspect ratio.";

/// Configuration for the image generation orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Template for synthesized prompts; `{text}` is replaced with the beat text.
    pub prompt_template: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl OrchestratorConfig {
    /// The prompt sent to the backend for a beat.
    ///
    /// An explicit, non-empty image prompt is used verbatim.
    pub fn prompt_for(&self, beat: &Beat) -> String {
        match beat.explicit_image_prompt() {
            Some(prompt) => prompt.to_string(),
            None => self.prompt_template.replace(TEXT_PLACEHOLDER, &beat.text),
        }
    }
}
