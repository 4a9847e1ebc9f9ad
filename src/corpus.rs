//! Tab-delimited corpus parsing.
//!
//! A line with at least [`TOKEN_FIELD_MIN`] tab-separated fields is a token
//! line (surface, POS, BIO tag, two unused fields, optional gold label).
//! Anything shorter marks a sentence boundary.

/// Minimum number of tab fields for a line to count as a token line.
/// Fields 4 and 5 are never read, but their presence is part of the format.
pub const TOKEN_FIELD_MIN: usize = 5;

/// One word occurrence from the corpus. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub pos: String,
    pub biotag: String,
    pub capitalized: bool,
    /// Gold role label from the 6th field; absent at inference time.
    pub label: Option<String>,
}

/// One element of the parsed corpus stream.
///
/// Boundaries are explicit so the writer can reproduce one blank output line
/// per boundary marker, including consecutive ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusItem {
    Sentence(Vec<Token>),
    Boundary,
}

/// Parses a single trimmed line as a token line.
/// Returns `None` for boundary lines (fewer than [`TOKEN_FIELD_MIN`] fields).
pub fn parse_token_line(line: &str) -> Option<Token> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < TOKEN_FIELD_MIN {
        return None;
    }

    let word = fields[0].trim().to_string();
    let capitalized = word.chars().next().map_or(false, char::is_uppercase);

    Some(Token {
        capitalized,
        word,
        pos: fields[1].trim().to_string(),
        biotag: fields[2].trim().to_string(),
        label: fields.get(5).map(|f| f.trim().to_string()),
    })
}

/// Parses raw corpus lines into an ordered sequence of sentences and
/// boundary markers.
///
/// Token lines accumulate into the current sentence. A boundary line flushes
/// the sentence buffer (when non-empty) and then always emits a `Boundary`,
/// so consecutive boundary lines each produce a marker. A final non-empty
/// buffer is flushed at end of input with no trailing marker. Empty
/// sentences are never emitted.
pub fn parse_corpus<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<CorpusItem> {
    let mut items = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for line in lines {
        match parse_token_line(line.trim()) {
            Some(token) => current.push(token),
            None => {
                if !current.is_empty() {
                    items.push(CorpusItem::Sentence(std::mem::take(&mut current)));
                }
                items.push(CorpusItem::Boundary);
            }
        }
    }

    if !current.is_empty() {
        items.push(CorpusItem::Sentence(current));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_len(item: &CorpusItem) -> usize {
        match item {
            CorpusItem::Sentence(tokens) => tokens.len(),
            CorpusItem::Boundary => panic!("expected a sentence"),
        }
    }

    #[test]
    fn token_line_basic() {
        let token = parse_token_line("Run\tVB\tB-V\tX\tX").unwrap();
        assert_eq!(token.word, "Run");
        assert_eq!(token.pos, "VB");
        assert_eq!(token.biotag, "B-V");
        assert!(token.capitalized);
        assert_eq!(token.label, None);
    }

    #[test]
    fn token_line_with_label() {
        let token = parse_token_line("fast\tRB\tO\tX\tX\tARGM-MNR").unwrap();
        assert!(!token.capitalized);
        assert_eq!(token.label, Some("ARGM-MNR".to_string()));
    }

    #[test]
    fn token_line_empty_label_field() {
        let token = parse_token_line("fast\tRB\tO\tX\tX\t").unwrap();
        assert_eq!(token.label, Some(String::new()));
    }

    #[test]
    fn token_fields_are_trimmed() {
        let token = parse_token_line("Run \t VB\t B-V \tX\tX\t A0 ").unwrap();
        assert_eq!(token.word, "Run");
        assert_eq!(token.pos, "VB");
        assert_eq!(token.biotag, "B-V");
        assert_eq!(token.label, Some("A0".to_string()));
    }

    #[test]
    fn short_line_is_boundary() {
        assert_eq!(parse_token_line(""), None);
        assert_eq!(parse_token_line("Run\tVB\tB-V\tX"), None);
    }

    #[test]
    fn empty_surface_form_not_capitalized() {
        let token = parse_token_line("\tVB\tO\tX\tX").unwrap();
        assert_eq!(token.word, "");
        assert!(!token.capitalized);
    }

    #[test]
    fn sentence_then_boundary() {
        let items = parse_corpus(["Run\tVB\tB-V\tX\tX", "fast\tRB\tO\tX\tX", ""]);
        assert_eq!(items.len(), 2);
        assert_eq!(sentence_len(&items[0]), 2);
        assert_eq!(items[1], CorpusItem::Boundary);
    }

    #[test]
    fn consecutive_boundaries_each_emit_marker() {
        let items = parse_corpus(["", ""]);
        assert_eq!(items, vec![CorpusItem::Boundary, CorpusItem::Boundary]);
    }

    #[test]
    fn boundary_run_between_sentences() {
        let items = parse_corpus(["a\tDT\tO\tX\tX", "", "", "b\tNN\tO\tX\tX"]);
        assert_eq!(items.len(), 4);
        assert_eq!(sentence_len(&items[0]), 1);
        assert_eq!(items[1], CorpusItem::Boundary);
        assert_eq!(items[2], CorpusItem::Boundary);
        assert_eq!(sentence_len(&items[3]), 1);
    }

    #[test]
    fn final_sentence_without_trailing_boundary() {
        let items = parse_corpus(["Run\tVB\tB-V\tX\tX"]);
        assert_eq!(items.len(), 1);
        assert_eq!(sentence_len(&items[0]), 1);
    }

    #[test]
    fn line_trim_drops_trailing_tab_field() {
        // Trimming the raw line removes a trailing tab, so a line that looks
        // like five fields with an empty tail parses as a boundary.
        let items = parse_corpus(["a\tb\tc\td\t"]);
        assert_eq!(items, vec![CorpusItem::Boundary]);
    }

    #[test]
    fn empty_input_yields_no_items() {
        assert!(parse_corpus(Vec::<&str>::new()).is_empty());
    }
}
