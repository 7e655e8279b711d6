//! Shell-style word splitting and quoting for compiler command lines
//!
//! Option strings come from config files and the command line, e.g.
//! `--from-imports -x "My Resources"`. They are split with POSIX shell rules
//! (no expansion) and never passed through an actual shell.

use std::fmt;

/// Option string could not be split
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    UnterminatedQuote(char),
    TrailingEscape,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::UnterminatedQuote(q) => write!(f, "missing closing {} quote", q),
            SplitError::TrailingEscape => write!(f, "trailing backslash"),
        }
    }
}

impl std::error::Error for SplitError {}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Between,
    Word,
    Single,
    Double,
}

/// Split `input` into words like a POSIX shell would (quotes and backslashes only).
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut state = State::Between;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        state = match (state, c) {
            (State::Between | State::Word, c) if c.is_whitespace() => {
                if state == State::Word {
                    words.push(std::mem::take(&mut word));
                }
                State::Between
            }
            (State::Between | State::Word, '\'') => State::Single,
            (State::Between | State::Word, '"') => State::Double,
            (State::Between | State::Word, '\\') => {
                word.push(chars.next().ok_or(SplitError::TrailingEscape)?);
                State::Word
            }
            (State::Between | State::Word, c) => {
                word.push(c);
                State::Word
            }
            (State::Single, '\'') => State::Word,
            (State::Single, c) => {
                word.push(c);
                State::Single
            }
            (State::Double, '"') => State::Word,
            (State::Double, '\\') => {
                let next = chars.next().ok_or(SplitError::UnterminatedQuote('"'))?;
                if !matches!(next, '"' | '\\' | '$' | '`') {
                    word.push('\\');
                }
                word.push(next);
                State::Double
            }
            (State::Double, c) => {
                word.push(c);
                State::Double
            }
        };
    }

    match state {
        State::Single => Err(SplitError::UnterminatedQuote('\'')),
        State::Double => Err(SplitError::UnterminatedQuote('"')),
        State::Word => {
            words.push(word);
            Ok(words)
        }
        State::Between => Ok(words),
    }
}

/// Quote `arg` so a POSIX shell reads it back as a single word.
pub fn quote(arg: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c);
    if !arg.is_empty() && arg.chars().all(safe) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r#"'"'"'"#))
}

/// Join words into a copy-pasteable command line.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
