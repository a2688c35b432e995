use serde::{Deserialize, Serialize};

/// Characters that end a word when completing in
/// [`CompletionAnchor::LastWord`] mode.
pub const WORD_DELIMITERS: &str = " \t!@#$%^&*()-_=+[]{}:;\"'|\\,./<>";

/// Where completion anchors in the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionAnchor {
    /// Candidates are matched against the whole line, for completing
    /// command names at the start of input.
    LineStart,
    /// Candidates are matched against the text after the last delimiter,
    /// so only the final word is completed.
    LastWord,
}

/// Fixed-vocabulary completion filter.
///
/// Produces full replacement strings (everything before the completed word,
/// plus the candidate) so the engine can swap the line in place.
#[derive(Debug, Clone)]
pub struct WordCompleter {
    words: Vec<String>,
    anchor: CompletionAnchor,
}

impl WordCompleter {
    pub fn new(words: Vec<String>, anchor: CompletionAnchor) -> Self {
        Self { words, anchor }
    }

    /// True when the vocabulary has nothing to offer.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn anchor(&self) -> CompletionAnchor {
        self.anchor
    }

    /// Replacement strings for `line`, in vocabulary order.
    ///
    /// Only the fragment is case-folded before comparison; candidates are
    /// compared as stored and are assumed to be lower-case already.
    pub fn completions(&self, line: &str) -> Vec<String> {
        let (prefix, fragment) = match self.anchor {
            CompletionAnchor::LineStart => ("", line),
            CompletionAnchor::LastWord => {
                match line.rfind(|c: char| WORD_DELIMITERS.contains(c)) {
                    // Delimiters are all ASCII, so the split lands on a
                    // char boundary.
                    Some(i) => line.split_at(i + 1),
                    None => ("", line),
                }
            }
        };

        let fragment = fragment.to_lowercase();

        self.words
            .iter()
            .filter(|word| word.starts_with(&fragment))
            .map(|word| format!("{}{}", prefix, word))
            .collect()
    }
}
