//! Script Assembler & Result Packager.
//!
//! Merges the enriched beats with the fixed presentation parameters, then
//! wraps the script and the generated images with a status message and the
//! caller instruction. Both steps are pure and cannot fail.

mod result;

pub use result::*;

use presentation_script::{Beat, ImageMap, PresentationDefaults, PresentationScript};

/// Builds scripts from a fixed parameter set.
pub struct ScriptAssembler {
    defaults: PresentationDefaults,
}

impl ScriptAssembler {
    /// Create an assembler with the given defaults.
    pub fn new(defaults: PresentationDefaults) -> Self {
        Self { defaults }
    }

    /// Create an assembler with the standard presentation parameters.
    pub fn with_defaults() -> Self {
        Self::new(PresentationDefaults::default())
    }

    pub fn defaults(&self) -> &PresentationDefaults {
        &self.defaults
    }

    /// Build the script. Beats keep the order they are given in.
    pub fn assemble(&self, title: &str, lang: &str, beats: Vec<Beat>) -> PresentationScript {
        PresentationScript::new(&self.defaults, title, lang, beats)
    }

    /// Wrap a script and its images into the host-facing result.
    ///
    /// Image payloads stay in the structured data and never reach the message.
    pub fn package(&self, script: PresentationScript, images: ImageMap) -> PresentationResult {
        PresentationResult {
            message: status_message(&script.title, script.beat_count()),
            title: script.title.clone(),
            instructions: INSTRUCTIONS.to_string(),
            data: ResultData {
                script,
                images,
                movie_path: None,
                viewer_json_path: None,
            },
        }
    }
}

impl Default for ScriptAssembler {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presentation_script::{BeatInput, CanvasSize};
    use serde_json::json;

    fn demo_beats() -> Vec<Beat> {
        vec![
            Beat::from_input(&BeatInput::new("A")),
            Beat::from_input(&BeatInput::new("B").with_image_prompt("P")),
        ]
    }

    #[test]
    fn test_assemble_keeps_beat_order() {
        let beats = demo_beats();
        let ids: Vec<_> = beats.iter().map(|b| b.id).collect();

        let script = ScriptAssembler::with_defaults().assemble("Demo", "en", beats);

        assert_eq!(script.beats.iter().map(|b| b.id).collect::<Vec<_>>(), ids);
        assert_eq!(script.title, "Demo");
        assert_eq!(script.lang, "en");
    }

    #[test]
    fn test_custom_defaults_are_stamped() {
        let defaults = PresentationDefaults {
            canvas_size: CanvasSize::new(1024, 1024),
            ..PresentationDefaults::default()
        };
        let script = ScriptAssembler::new(defaults).assemble("Square", "ja", demo_beats());

        assert_eq!(script.canvas_size, CanvasSize::new(1024, 1024));
    }

    #[test]
    fn test_package_message_and_instructions() {
        let assembler = ScriptAssembler::with_defaults();
        let script = assembler.assemble("Demo", "en", demo_beats());
        let result = assembler.package(script, ImageMap::new());

        assert_eq!(
            result.message,
            "Mulmocast has processed the MulmoScript for \"Demo\" with 2 beats. Movie generation will begin automatically."
        );
        assert_eq!(result.title, "Demo");
        assert_eq!(result.instructions, INSTRUCTIONS);
        assert!(result.images().is_empty());
    }

    #[test]
    fn test_message_excludes_image_data() {
        let assembler = ScriptAssembler::with_defaults();
        let beats = demo_beats();
        let mut images = ImageMap::new();
        images.insert(beats[0].id, "SECRET-IMAGE-PAYLOAD");

        let result = assembler.package(assembler.assemble("Demo", "en", beats), images);

        assert!(!result.message.contains("SECRET-IMAGE-PAYLOAD"));
        assert_eq!(result.images().len(), 1);
    }

    #[test]
    fn test_result_wire_shape() {
        let assembler = ScriptAssembler::with_defaults();
        let result = assembler.package(
            assembler.assemble("Demo", "en", demo_beats()),
            ImageMap::new(),
        );
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["title"], "Demo");
        assert_eq!(value["data"]["images"], json!({}));
        assert_eq!(value["data"]["mulmoScript"]["title"], "Demo");
        assert!(value["data"].get("moviePath").is_none());
        assert!(value["data"].get("viewerJsonPath").is_none());
    }
}
