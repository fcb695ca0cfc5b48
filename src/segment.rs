//! Word/example segmentation and entry continuation.
//!
//! Each reconstructed line splits into a *word part* (headword-ish text,
//! left of the first long whitespace run) and an *example part* (usage
//! text, right of it). Dictionary entries wrap across multiple typeset
//! lines, so a second decision follows: does this line continue the entry
//! being built, or start a new one?

use lazy_static::lazy_static;
use regex::Regex;

use crate::layout::Line;
use crate::utils::join_with_spacing;

lazy_static! {
    // The typesetter separates headword text from example text with a wide
    // gap; anything from 3 whitespace characters up counts.
    static ref FIELD_DELIMITER: Regex = Regex::new(r"\s{3,}").unwrap();
}

/// Accumulator for one in-progress entry.
///
/// Mutated by appends while the continuation heuristics hold, then frozen
/// and handed to the entry builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordParts {
    /// Comma-separated headword tokens accumulated so far
    pub word_part: String,
    /// Example text accumulated so far
    pub example_part: String,
}

/// Split a line into `(word_part, example_part)` on the first run of three
/// or more whitespace characters.
///
/// Either side may be empty: a line starting with the delimiter is
/// example-only, a line without the delimiter is word-only. Both sides come
/// back trimmed.
pub fn split_line(text: &str) -> (String, String) {
    let mut halves = FIELD_DELIMITER.splitn(text, 2);
    let word_part = halves.next().unwrap_or("").trim().to_string();
    let example_part = halves.next().unwrap_or("").trim().to_string();
    (word_part, example_part)
}

/// Continuation heuristics against the previous accumulator, first true
/// rule wins:
///
/// 1. previous word part ends with a comma (headword list still open)
/// 2. previous example part lacks terminal punctuation (sentence unfinished)
/// 3. current word part is empty (the line carries example text only)
///
/// An entry boundary is signaled only once the headword token list looks
/// complete and the example looks grammatically terminated.
fn continues_previous(previous: &WordParts, current_word_part: &str) -> bool {
    previous.word_part.ends_with(',')
        || !is_terminated(&previous.example_part)
        || current_word_part.is_empty()
}

/// True when the example text ends in `.`, `!`, or `?`.
fn is_terminated(example_part: &str) -> bool {
    example_part.ends_with(['.', '!', '?'])
}

struct ActiveEntry {
    parts: WordParts,
    last_y: f32,
}

/// Scans one column's lines top-to-bottom and groups them into entry
/// accumulators.
///
/// Feed lines in reading order via [`push_line`](Self::push_line), then call
/// [`finish`](Self::finish) to collect the finalized accumulators. One
/// segmenter per column; the accumulator never outlives its column's line
/// sequence.
pub struct EntrySegmenter {
    current: Option<ActiveEntry>,
    finished: Vec<WordParts>,
    gap_limit: Option<f32>,
}

impl EntrySegmenter {
    /// Create a segmenter.
    ///
    /// When `gap_limit` is set, a vertical gap between consecutive lines
    /// larger than the limit always starts a new entry, before any of the
    /// continuation heuristics are consulted.
    pub fn new(gap_limit: Option<f32>) -> Self {
        Self {
            current: None,
            finished: Vec::new(),
            gap_limit,
        }
    }

    /// Route one line to the current entry or open a new one.
    pub fn push_line(&mut self, line: &Line) {
        let (word_part, example_part) = split_line(&line.text);

        let continues = match &self.current {
            Some(active) => {
                let gap_exceeded = self
                    .gap_limit
                    .is_some_and(|limit| active.last_y - line.y > limit);
                !gap_exceeded && continues_previous(&active.parts, &word_part)
            },
            None => false,
        };

        if continues {
            if let Some(active) = self.current.as_mut() {
                join_with_spacing(&mut active.parts.word_part, &word_part);
                join_with_spacing(&mut active.parts.example_part, &example_part);
                active.last_y = line.y;
            }
        } else {
            if let Some(active) = self.current.take() {
                self.finished.push(active.parts);
            }
            self.current = Some(ActiveEntry {
                parts: WordParts {
                    word_part,
                    example_part,
                },
                last_y: line.y,
            });
        }
    }

    /// Flush the in-progress accumulator and return all finalized ones, in
    /// reading order.
    pub fn finish(mut self) -> Vec<WordParts> {
        if let Some(active) = self.current.take() {
            self.finished.push(active.parts);
        }
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, y: f32) -> Line {
        Line {
            y,
            text: text.to_string(),
        }
    }

    fn segment(lines: &[Line]) -> Vec<WordParts> {
        let mut segmenter = EntrySegmenter::new(None);
        for l in lines {
            segmenter.push_line(l);
        }
        segmenter.finish()
    }

    // split_line

    #[test]
    fn test_split_on_first_long_run() {
        let (word, example) = split_line("run, ran   to move fast.");
        assert_eq!(word, "run, ran");
        assert_eq!(example, "to move fast.");
    }

    #[test]
    fn test_split_no_delimiter() {
        let (word, example) = split_line("see above");
        assert_eq!(word, "see above");
        assert_eq!(example, "");
    }

    #[test]
    fn test_split_leading_delimiter() {
        let (word, example) = split_line("   he kept running.");
        assert_eq!(word, "");
        assert_eq!(example, "he kept running.");
    }

    #[test]
    fn test_split_trailing_delimiter() {
        let (word, example) = split_line("run,   ");
        assert_eq!(word, "run,");
        assert_eq!(example, "");
    }

    #[test]
    fn test_two_spaces_do_not_split() {
        let (word, example) = split_line("run  ran");
        assert_eq!(word, "run  ran");
        assert_eq!(example, "");
    }

    #[test]
    fn test_only_first_run_splits() {
        let (word, example) = split_line("run   he ran.   she ran.");
        assert_eq!(word, "run");
        assert_eq!(example, "he ran.   she ran.");
    }

    // Continuation rule table, one test per row

    #[test]
    fn test_rule_trailing_comma_continues() {
        let parts = segment(&[
            line("run,   to move fast.", 500.0),
            line("ran   he ran home.", 480.0),
        ]);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].word_part, "run, ran");
        assert_eq!(parts[0].example_part, "to move fast. he ran home.");
    }

    #[test]
    fn test_rule_unterminated_example_continues() {
        let parts = segment(&[
            line("walk   he went out", 500.0),
            line("   for a walk.", 480.0),
        ]);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].word_part, "walk");
        assert_eq!(parts[0].example_part, "he went out for a walk.");
    }

    #[test]
    fn test_rule_empty_word_part_continues() {
        // Previous entry looks closed (no comma, terminated example), but an
        // example-only line can never open an entry.
        let parts = segment(&[
            line("walk   he walked.", 500.0),
            line("   she walks too.", 480.0),
        ]);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].example_part, "he walked. she walks too.");
    }

    #[test]
    fn test_rule_none_starts_new_entry() {
        let parts = segment(&[
            line("run   to move fast.", 500.0),
            line("walk   to go on foot.", 480.0),
        ]);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].word_part, "run");
        assert_eq!(parts[1].word_part, "walk");
    }

    #[test]
    fn test_word_only_line_after_closed_entry_starts_new() {
        // A line with no example part is a fresh headword once the previous
        // entry is closed, not a continuation of it.
        let parts = segment(&[
            line("run, ran   to move fast.", 500.0),
            line("see above", 480.0),
        ]);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].word_part, "see above");
        assert_eq!(parts[1].example_part, "");
    }

    #[test]
    fn test_question_and_exclamation_terminate() {
        let parts = segment(&[
            line("really   is that so?", 500.0),
            line("indeed   it is so!", 480.0),
            line("quite   certainly.", 460.0),
        ]);

        assert_eq!(parts.len(), 3);
    }

    // Gap limit supplement

    #[test]
    fn test_gap_limit_forces_new_entry() {
        let mut segmenter = EntrySegmenter::new(Some(15.0));
        // Trailing comma would normally glue these together
        segmenter.push_line(&line("run,   he ran", 500.0));
        segmenter.push_line(&line("ran   home.", 460.0));
        let parts = segmenter.finish();

        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_gap_within_limit_still_continues() {
        let mut segmenter = EntrySegmenter::new(Some(25.0));
        segmenter.push_line(&line("run,   he ran", 500.0));
        segmenter.push_line(&line("ran   home.", 480.0));
        let parts = segmenter.finish();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].word_part, "run, ran");
    }

    #[test]
    fn test_finish_flushes_open_accumulator() {
        let parts = segment(&[line("run   to move fast.", 500.0)]);
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn test_no_lines_no_parts() {
        assert!(segment(&[]).is_empty());
    }
}
