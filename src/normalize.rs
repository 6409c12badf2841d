use regex::Regex;

/// Hard cap on candidates extracted from one text. OCR noise past this point
/// is never a real ingredient list.
pub const MAX_CANDIDATES: usize = 20;

/// Splits raw OCR or user-entered text into normalized ingredient candidates.
///
/// Compiles its patterns once; construct a single instance and reuse it.
pub struct Normalizer {
    leading_label: Regex,
    label: Regex,
    edge_punct: Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Normalizer {
            // "Ingredients" / "Contains" at the start of the text, colon optional
            leading_label: Regex::new(r"^\s*(?i)(?:ingredients?|contains?):?\s*")
                .expect("hardcoded pattern"),
            // Labels elsewhere in the text need the colon to count as labels
            label: Regex::new(r"(?i)(?:ingredients?|contains?)\s*:").expect("hardcoded pattern"),
            edge_punct: Regex::new(r"^\W+|\W+$").expect("hardcoded pattern"),
            whitespace: Regex::new(r"\s+").expect("hardcoded pattern"),
        }
    }

    /// Extract up to [`MAX_CANDIDATES`] lowercased ingredient names from `raw`,
    /// in first-seen order. Total over all inputs: empty or garbage text
    /// yields an empty vector.
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        let text = self.leading_label.replace(raw, " ");
        let text = self.label.replace_all(&text, " ");
        let text = text.to_lowercase();

        let mut candidates = Vec::new();
        for piece in text.split([',', ';', '.']) {
            let piece = self.edge_punct.replace_all(piece.trim(), "");
            let piece = self.whitespace.replace_all(&piece, " ").into_owned();

            if piece.chars().count() <= 2 {
                continue;
            }
            if piece.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if piece == "ingredients" {
                continue;
            }

            candidates.push(piece);
            if candidates.len() == MAX_CANDIDATES {
                break;
            }
        }
        candidates
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
