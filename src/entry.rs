//! Final entry records and the builder from accumulated parts.

use serde::{Deserialize, Serialize};

use crate::segment::WordParts;

/// One finalized dictionary-style record.
///
/// Sparse representation: the optional fields are serialized only when they
/// carry data. Downstream consumers rely on field *absence* meaning "no
/// data", so an entry without alternate forms has no `wordForms` key at all
/// rather than an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Headword: the first comma-separated token of the accumulated word part
    pub word: String,

    /// Remaining comma-separated tokens, trimmed, in original order
    #[serde(rename = "wordForms", skip_serializing_if = "Option::is_none", default)]
    pub word_forms: Option<Vec<String>>,

    /// Punctuation-delimited example sentences, trimmed, in original order
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub examples: Option<Vec<String>>,

    /// Present (and `true`) only when the headword was found in the
    /// reference entry list
    #[serde(rename = "match", skip_serializing_if = "Option::is_none", default)]
    pub matched: Option<bool>,
}

impl Entry {
    /// Build an entry from a finalized accumulator.
    ///
    /// The word part splits on commas into the headword plus alternate
    /// forms; the example part splits after each terminal punctuation mark
    /// into discrete sentences, terminator attached.
    ///
    /// Returns `None` when the word part yields no tokens at all: such an
    /// accumulator has no headword and is dropped with a warning. This is
    /// the single malformed-entry policy; no empty-`word` records, no
    /// panics.
    pub fn from_parts(parts: &WordParts) -> Option<Self> {
        let mut tokens = parts
            .word_part
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from);

        let word = match tokens.next() {
            Some(word) => word,
            None => {
                log::warn!(
                    "dropping entry with empty word part (example part: {:?})",
                    parts.example_part
                );
                return None;
            },
        };

        let word_forms: Vec<String> = tokens.collect();
        let examples = split_examples(&parts.example_part);

        Some(Self {
            word,
            word_forms: (!word_forms.is_empty()).then_some(word_forms),
            examples: (!examples.is_empty()).then_some(examples),
            matched: None,
        })
    }
}

/// Split example text after each `.`, `!`, or `?`, keeping the terminator
/// attached to its sentence. Unterminated trailing text survives as a final
/// piece.
fn split_examples(example_part: &str) -> Vec<String> {
    example_part
        .split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}
