//! Transcript normalization
//!
//! Prepares raw speech-to-text output for classification: trims, collapses
//! whitespace runs, and strips trailing sentence punctuation that STT
//! engines append to finalized utterances. Casing is preserved so created
//! todos keep the speaker's capitalization; case-insensitivity is applied
//! at pattern-match time instead (a no-op for Urdu script, which has no
//! case distinction).

/// Normalize a raw transcript. Never fails; empty input yields the empty
/// string, which the classifier maps to `Unknown`.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(['.', '!', '?', '؟', '۔'])
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize("  add   todo:  Buy milk  "), "add todo: Buy milk");
    }

    #[test]
    fn strips_trailing_sentence_punctuation() {
        assert_eq!(normalize("add todo: Buy milk."), "add todo: Buy milk");
        assert_eq!(normalize("کام دکھائیں۔"), "کام دکھائیں");
    }

    #[test]
    fn preserves_casing() {
        assert_eq!(normalize("Add Todo: Buy Milk"), "Add Todo: Buy Milk");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
