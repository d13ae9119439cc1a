//! Text normalization for raw extracted document text

use regex::Regex;

/// Cleans raw text coming out of an external extractor before analysis.
///
/// Keeps word characters, whitespace and `. , - ( )`; everything else is
/// replaced with a space and whitespace runs are collapsed afterwards.
pub struct TextNormalizer {
    page_marker: Regex,
    banner: Regex,
    disallowed: Regex,
    whitespace: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let page_marker = Regex::new(r"(?i)Page \d+ of \d+").expect("Invalid page marker regex");

        let banner =
            Regex::new(r"(?i)\b(?:Confidential|Private|Internal)\b").expect("Invalid banner regex");

        let disallowed = Regex::new(r"[^\w\s.,\-()]").expect("Invalid character filter regex");

        let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            page_marker,
            banner,
            disallowed,
            whitespace,
        }
    }

    /// Normalize raw text. Never fails; empty input yields an empty string.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = self.page_marker.replace_all(raw, " ");
        let cleaned = self.banner.replace_all(&cleaned, " ");
        let cleaned = self.disallowed.replace_all(&cleaned, " ");
        let cleaned = self.whitespace.replace_all(&cleaned, " ");
        cleaned.trim().to_string()
    }
}
