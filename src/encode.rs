use log::{debug, trace};

use crate::error::{Error, Result};
use crate::WORD;

/// Returns the number of times `chicken` occurs in `line`, ignoring case.
///
/// Occurrences are counted without overlap, so `ChickenChicken` counts twice
/// and the word need not be delimited by whitespace.
pub fn count_chicken(line: &str) -> u64 {
    count_lowercase(&line.to_lowercase())
}

/// Counts `chicken` in a line that is already lowercase.
fn count_lowercase(line: &str) -> u64 {
    line.matches(WORD).count() as u64
}

/// Encodes Chicken text as MiniChicken.
///
/// This is the lenient encoder: every line is reduced to the number of
/// `chicken`s in it and any other text is discarded. It never fails. Use
/// [`Encoder`] for strict validation.
///
/// Lines are separated by `\n` (optionally preceded by `\r`). A trailing line
/// terminator does not start a new line, so `"chicken\n"` and `"chicken"`
/// both encode to `"1"`, while the empty string has no lines at all and
/// encodes to the empty string.
pub fn encode(text: &str) -> String {
    encode_lenient(text)
}

/// Encoder is a configurable translator from Chicken to MiniChicken.
///
/// The default configuration is the lenient encoder used by [`encode`].
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    strict: bool,
}

impl Encoder {
    /// Return a new encoder with the default (lenient) configuration.
    pub fn new() -> Encoder {
        Encoder::default()
    }

    /// When enabled, every whitespace separated word of the input must be
    /// exactly `chicken` (lowercase) and a line's count is its number of
    /// words. Any other word is reported as [`Error::UnexpectedWord`].
    ///
    /// This is disabled by default.
    pub fn strict(mut self, yes: bool) -> Encoder {
        self.strict = yes;
        self
    }

    /// Encode the given Chicken text as MiniChicken.
    ///
    /// # Errors
    ///
    /// This only returns an error in strict mode, when a word other than
    /// `chicken` is found.
    pub fn encode(&self, text: &str) -> Result<String> {
        if self.strict {
            encode_strict(text)
        } else {
            Ok(encode_lenient(text))
        }
    }
}

fn encode_lenient(text: &str) -> String {
    let counts: Vec<String> = text
        .to_lowercase()
        .lines()
        .map(|line| {
            let n = count_lowercase(line);
            trace!("line {:?} holds {} chicken(s)", line, n);
            n.to_string()
        })
        .collect();
    debug!("encoded {} line(s)", counts.len());
    counts.join(" ")
}

fn encode_strict(text: &str) -> Result<String> {
    let mut counts = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let mut n: u64 = 0;
        for word in line.split_whitespace() {
            if word != WORD {
                return Err(Error::UnexpectedWord {
                    line: i as u64 + 1,
                    word: word.to_string(),
                });
            }
            n += 1;
        }
        counts.push(n.to_string());
    }
    debug!("strictly encoded {} line(s)", counts.len());
    Ok(counts.join(" "))
}
