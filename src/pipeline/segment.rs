//! Sentence segmentation and per-sentence cleanup.

use regex::Regex;

/// Splits concatenated body text into cleaned sentences.
///
/// A sentence boundary exists immediately after a `.`, `?` or `!` that is
/// followed by whitespace whose next non-whitespace character is a lowercase
/// Latin letter. Suppressing boundaries before uppercase letters and digits
/// avoids false splits at acronyms and initials ("Dr. Smith" stays whole);
/// the accepted trade-off is that capitalized sentence starts do not split
/// either.
///
/// Each resulting segment is then cleaned, in order:
/// 1. every literal `"- "` is removed (line-wrap hyphenation repair; this is
///    not general de-hyphenation),
/// 2. citation markers like `[12]` or `[3,4]` are removed.
pub struct SentenceSegmenter {
    citation_regex: Regex,
}

impl SentenceSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Self {
        Self {
            citation_regex: Regex::new(r"\[[0-9]+(,[0-9]+)*\]").unwrap(),
        }
    }

    /// Segment text into cleaned sentences.
    ///
    /// Segments that are empty after cleanup are dropped; an empty input
    /// yields an empty list.
    pub fn segment(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .map(|sentence| self.clean(sentence))
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    fn clean(&self, sentence: &str) -> String {
        let joined = sentence.replace("- ", "");
        self.citation_regex.replace_all(&joined, "").into_owned()
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split at boundaries per the rule above, consuming the inter-sentence
/// whitespace.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let ch = match text[pos..].chars().next() {
            Some(ch) => ch,
            None => break,
        };
        let ch_len = ch.len_utf8();

        if matches!(ch, '.' | '?' | '!') {
            let terminator_end = pos + ch_len;
            let rest = &text[terminator_end..];
            let trimmed = rest.trim_start();
            let whitespace_len = rest.len() - trimmed.len();

            let continues_lowercase = trimmed
                .chars()
                .next()
                .is_some_and(|next| next.is_ascii_lowercase());

            if whitespace_len > 0 && continues_lowercase {
                sentences.push(&text[start..terminator_end]);
                start = terminator_end + whitespace_len;
                pos = start;
                continue;
            }
        }

        pos += ch_len;
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
