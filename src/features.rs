//! Context-window feature extraction.
//!
//! For every token in a sentence the extractor derives its own attributes
//! plus a symmetric window over offsets -3..+3 (excluding 0) of neighbor
//! attributes. Offsets falling outside the sentence are genuinely absent,
//! never empty strings, so the serializer can skip them entirely.

use rust_stemmers::{Algorithm, Stemmer};

use crate::corpus::Token;

/// Attributes copied out of one neighboring token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub pos: String,
    pub biotag: String,
    pub word: String,
    pub stem: String,
}

/// Per-token feature record. Owns all of its data; nothing aliases the
/// source sentence after extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub word: String,
    pub stem: String,
    pub pos: String,
    pub biotag: String,
    /// Zero-based token index over sentence length, in [0, 1).
    pub position: f64,
    /// Set iff the token has a previous neighbor (index >= 1).
    pub has_previous: bool,
    /// Neighbors at offsets -1, -2, -3.
    pub previous: [Option<Neighbor>; 3],
    /// Neighbors at offsets +1, +2, +3.
    pub next: [Option<Neighbor>; 3],
    pub capitalized: bool,
    pub label: Option<String>,
}

/// Derives feature records from sentences. Owns the stemmer so no global
/// stemmer instance is needed anywhere.
pub struct FeatureExtractor {
    stemmer: Stemmer,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        FeatureExtractor {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Snowball stem of a surface form. Input is lowercased first; the
    /// algorithm expects lowercase and the stem feature is case-insensitive.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    /// Extracts one record per token, in token order.
    ///
    /// Window sub-features at offset k are present iff `0 <= i+k < len`.
    /// An empty sentence yields an empty result; the corpus reader never
    /// produces one, which keeps the position quotient well-defined.
    pub fn extract(&self, sentence: &[Token]) -> Vec<FeatureRecord> {
        let len = sentence.len();
        // Stemming is pure, so stem each token once and copy the result
        // into every record whose window reaches it.
        let stems: Vec<String> = sentence.iter().map(|t| self.stem(&t.word)).collect();

        let mut records = Vec::with_capacity(len);
        for (i, token) in sentence.iter().enumerate() {
            let neighbor = |offset: isize| -> Option<Neighbor> {
                let j = i as isize + offset;
                if j < 0 || j >= len as isize {
                    return None;
                }
                let j = j as usize;
                let t = &sentence[j];
                Some(Neighbor {
                    pos: t.pos.clone(),
                    biotag: t.biotag.clone(),
                    word: t.word.clone(),
                    stem: stems[j].clone(),
                })
            };

            records.push(FeatureRecord {
                word: token.word.clone(),
                stem: stems[i].clone(),
                pos: token.pos.clone(),
                biotag: token.biotag.clone(),
                position: i as f64 / len as f64,
                has_previous: i >= 1,
                previous: [neighbor(-1), neighbor(-2), neighbor(-3)],
                next: [neighbor(1), neighbor(2), neighbor(3)],
                capitalized: token.capitalized,
                label: token.label.clone(),
            });
        }

        records
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
