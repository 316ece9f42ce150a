//! Matching logic for the pulse filter.
//!
//! Activating a map region briefly dims content items that do not mention
//! any of the location's keywords. The dimming is a presentation pulse: it
//! always reverts after [`PULSE_RESTORE`], never a persistent filter.

use std::time::Duration;

/// How long non-matching items stay dimmed before being restored.
pub const PULSE_RESTORE: Duration = Duration::from_millis(3000);

/// Returns true if `text` contains any of `keywords`, case-insensitively.
pub fn keyword_match(text: &str, keywords: &[String]) -> bool {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && haystack.contains(&kw.to_lowercase()))
}

/// Computes the visibility mask for a content list: `true` means the item
/// matches and stays at full visibility, `false` means it gets dimmed.
pub fn pulse_mask<'a, I>(keywords: &[String], items: I) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    items
        .into_iter()
        .map(|text| keyword_match(text, keywords))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn match_is_case_insensitive() {
        let keywords = kws(&["lapland", "boreal"]);
        assert!(keyword_match("Field sampling in LAPLAND", &keywords));
        assert!(keyword_match("Boreal forest spectra", &keywords));
        assert!(!keyword_match("Urban green space survey", &keywords));
    }

    #[test]
    fn substring_match_inside_words() {
        // "microb" is deliberately a stem so it hits both forms.
        let keywords = kws(&["microb"]);
        assert!(keyword_match("plant-microbe interactions", &keywords));
        assert!(keyword_match("soil microbiology", &keywords));
    }

    #[test]
    fn empty_keyword_never_matches() {
        assert!(!keyword_match("anything at all", &kws(&[""])));
        assert!(!keyword_match("anything at all", &[]));
    }

    #[test]
    fn mask_dims_exactly_non_matching_items() {
        let keywords = kws(&["water"]);
        let items = [
            "Water quality modelling for urban deltas",
            "Street tree inventory toolkit",
            "Stormwater retention in green roofs",
        ];
        let mask = pulse_mask(&keywords, items.iter().copied());
        assert_eq!(mask, vec![true, false, true]);
    }

    #[test]
    fn mask_length_matches_items() {
        let mask = pulse_mask(&kws(&["x"]), std::iter::empty());
        assert!(mask.is_empty());
    }
}
