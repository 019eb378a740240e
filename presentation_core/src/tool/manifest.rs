//! Tool manifest - the declarative data a host registers for this tool.

use serde_json::{json, Value};

/// Name under which hosts expose the tool.
pub const TOOL_NAME: &str = "showPresentation";

/// Function definition, including the parameter schema the host validates against.
pub fn tool_definition() -> Value {
    json!({
        "type": "function",
        "name": TOOL_NAME,
        "description": "Let MulmoCast to process a given MulmoScript to generate a presentation of a given topic or story.",
        "parameters": {
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "The title of the presentation"
                },
                "lang": {
                    "type": "string",
                    "description": "The language of the presentation, such as en, ja, etc."
                },
                "beats": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "text": {
                                "type": "string",
                                "description": "The text to be spoken by the presenter, which is also used to generate an image if there is no imagePrompt. Typically 50 to 70 words."
                            },
                            "imagePrompt": {
                                "type": "string",
                                "description": "Optional prompt to be used to generate an image. Typically 50 to 70 words. Do not specify the image style."
                            }
                        },
                        "required": ["text"],
                        "additionalProperties": false
                    },
                    "minItems": 1
                }
            },
            "required": ["title", "lang", "beats"],
            "additionalProperties": false
        }
    })
}

/// Registration data for hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolManifest {
    pub name: &'static str,
    /// Shown while the tool runs.
    pub generating_message: &'static str,
    /// Told to the model while the user waits.
    pub waiting_message: &'static str,
    /// Host backends the tool relies on.
    pub backends: &'static [&'static str],
}

impl Default for ToolManifest {
    fn default() -> Self {
        Self {
            name: TOOL_NAME,
            generating_message: "Processing with Mulmocast...",
            waiting_message: "Tell the user that the script was written and we are generating images and video with Mulmocast.",
            backends: &["imageGen", "mulmocast"],
        }
    }
}

impl ToolManifest {
    pub fn definition(&self) -> Value {
        tool_definition()
    }

    pub fn is_enabled(&self) -> bool {
        true
    }

    /// System prompt nudging the model to use the tool.
    pub fn system_prompt(&self) -> String {
        format!(
            "Call the {} API to display presentations when the user is asking for a presentation.",
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_schema() {
        let definition = tool_definition();

        assert_eq!(definition["name"], TOOL_NAME);
        assert_eq!(definition["parameters"]["required"], json!(["title", "lang", "beats"]));
        assert_eq!(definition["parameters"]["properties"]["beats"]["minItems"], 1);
        assert_eq!(
            definition["parameters"]["properties"]["beats"]["items"]["required"],
            json!(["text"])
        );
    }

    #[test]
    fn test_manifest() {
        let manifest = ToolManifest::default();

        assert!(manifest.is_enabled());
        assert_eq!(manifest.backends, &["imageGen", "mulmocast"]);
        assert!(manifest.system_prompt().contains("showPresentation"));
        assert_eq!(manifest.definition(), tool_definition());
    }
}
