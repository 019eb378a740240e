//! Beat Enricher - turns bare beat inputs into addressable beats.

use presentation_script::{Beat, BeatInput};
use tracing::debug;

/// Assign a fresh identifier and the presenter label to every beat.
///
/// Output has the same length and order as the input.
pub fn enrich_beats(inputs: &[BeatInput]) -> Vec<Beat> {
    let beats: Vec<Beat> = inputs.iter().map(Beat::from_input).collect();
    debug!(count = beats.len(), "Enriched beats");
    beats
}

#[cfg(test)]
mod tests {
    use super::*;
    use presentation_script::PRESENTER;
    use std::collections::HashSet;

    #[test]
    fn test_enrich_preserves_order_and_length() {
        let inputs = vec![
            BeatInput::new("A"),
            BeatInput::new("B").with_image_prompt("P"),
            BeatInput::new("C"),
        ];

        let beats = enrich_beats(&inputs);

        assert_eq!(beats.len(), inputs.len());
        for (beat, input) in beats.iter().zip(&inputs) {
            assert_eq!(beat.text, input.text);
            assert_eq!(beat.image_prompt, input.image_prompt);
            assert_eq!(beat.speaker, PRESENTER);
        }
    }

    #[test]
    fn test_enrich_assigns_distinct_ids() {
        let inputs: Vec<_> = (0..50).map(|i| BeatInput::new(format!("beat {}", i))).collect();
        let beats = enrich_beats(&inputs);

        let ids: HashSet<_> = beats.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), beats.len());
    }

    #[test]
    fn test_enrich_never_reuses_ids_across_runs() {
        let inputs = vec![BeatInput::new("Same")];
        let first = enrich_beats(&inputs);
        let second = enrich_beats(&inputs);

        assert_ne!(first[0].id, second[0].id);
    }
}
