//! Tokenizer
//!
//!     This module turns a line source into a lazy stream of gemtext tokens. The tokenizer is
//!     a pull-based iterator: the AST builder drives consumption one token at a time, so the
//!     tokenizer never holds more than the current line, except inside a verbatim block where
//!     it accumulates the block interior.
//!
//! Classification
//!
//!     In normal mode every line is trimmed and matched against the classification patterns,
//!     first match wins, in this fixed order:
//!
//!         1. header:  one or more `#` then whitespace then free text
//!         2. element: `*` then whitespace then free text
//!         3. link:    `=>` then a whitespace-free target, optionally whitespace and a title
//!         4. fence:   the trimmed line starts with three backticks
//!         5. fallback: a paragraph carrying the trimmed line
//!
//!     A fence does not produce a token. It switches the tokenizer into verbatim mode, where
//!     lines are appended to a buffer untrimmed and with their original terminators, until a
//!     line whose trimmed form starts with three backticks closes the block and yields a
//!     single `Quote` token. This is the only place where line terminators matter, which is
//!     why [read_lines] preserves them.
//!
//!     The patterns are compiled once per process and shared read-only across conversions.
//!
//! Termination
//!
//!     Reaching end of input while still inside a verbatim block is a fatal
//!     [TokenizeError::UnterminatedBlock]: no partial `Quote` token is ever emitted.

use crate::gmi::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::io::{self, BufRead};

static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#+)\s+(.*)$").expect("header pattern is valid"));
static ELEMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\s+(.*)$").expect("element pattern is valid"));
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^=>\s*(\S+)(?:\s+(.+))?$").expect("link pattern is valid"));

const FENCE: &str = "```";

/// Error that can occur while tokenizing a line source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A verbatim fence was opened but never closed before end of input
    UnterminatedBlock,
    /// The line source failed
    Io(String),
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::UnterminatedBlock => {
                write!(f, "found a verbatim fence without a closing fence")
            }
            TokenizeError::Io(msg) => write!(f, "line source error: {}", msg),
        }
    }
}

impl std::error::Error for TokenizeError {}

impl From<io::Error> for TokenizeError {
    fn from(err: io::Error) -> Self {
        TokenizeError::Io(err.to_string())
    }
}

/// Outcome of classifying one normal-mode line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// The line produced a token directly
    Token(Token),
    /// The line is a fence marker: switch to verbatim mode, emit nothing
    Fence,
}

/// Classify one normal-mode line.
///
/// The line is trimmed before matching, which is why every token kind except `Quote` loses
/// leading and trailing whitespace.
pub fn classify_line(line: &str) -> LineClass {
    let line = line.trim();

    if let Some(captures) = HEADER_PATTERN.captures(line) {
        return LineClass::Token(Token::Header {
            level: captures[1].len(),
            title: captures[2].to_string(),
        });
    }

    if let Some(captures) = ELEMENT_PATTERN.captures(line) {
        return LineClass::Token(Token::Element {
            content: captures[1].to_string(),
        });
    }

    if let Some(captures) = LINK_PATTERN.captures(line) {
        return LineClass::Token(Token::Link {
            target: captures[1].to_string(),
            title: captures
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        });
    }

    if line.starts_with(FENCE) {
        return LineClass::Fence;
    }

    LineClass::Token(Token::Paragraph {
        content: line.to_string(),
    })
}

/// Tokenizer mode. At most one verbatim buffer exists per run, and it lives here.
#[derive(Debug)]
enum Mode {
    Normal,
    Verbatim(String),
}

/// A pull-based tokenizer over a line source.
///
/// Yields `Result<Token, TokenizeError>` items; after the first error or the end of input no
/// further items are produced. Each run holds its own mode state, nothing is shared across
/// runs except the compiled classification patterns.
#[derive(Debug)]
pub struct Tokenizer<I> {
    lines: I,
    mode: Mode,
    done: bool,
}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// Create a tokenizer over any line source.
    ///
    /// Lines should carry their original terminators so verbatim content is reproduced
    /// byte-for-byte; outside verbatim blocks terminators are immaterial since every other
    /// line kind is trimmed.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            mode: Mode::Normal,
            done: false,
        }
    }
}

impl<R: BufRead> Tokenizer<Lines<R>> {
    /// Create a tokenizer reading lines from a buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Tokenizer::new(read_lines(reader))
    }
}

impl<I> Iterator for Tokenizer<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
                None => {
                    self.done = true;
                    if matches!(self.mode, Mode::Verbatim(_)) {
                        return Some(Err(TokenizeError::UnterminatedBlock));
                    }
                    return None;
                }
            };

            match &mut self.mode {
                Mode::Normal => match classify_line(&line) {
                    LineClass::Token(token) => return Some(Ok(token)),
                    LineClass::Fence => {
                        self.mode = Mode::Verbatim(String::new());
                    }
                },
                Mode::Verbatim(buffer) => {
                    if line.trim().starts_with(FENCE) {
                        let content = std::mem::take(buffer);
                        self.mode = Mode::Normal;
                        return Some(Ok(Token::Quote { content }));
                    }
                    buffer.push_str(&line);
                }
            }
        }
    }
}

/// Line iterator that preserves line terminators.
///
/// `BufRead::lines` strips terminators, which would corrupt verbatim content, so we read up
/// to and including each `\n` ourselves.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
}

/// Iterate over the lines of a reader, terminators included.
pub fn read_lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines { reader }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8(buf).map_err(|err| {
                io::Error::new(io::ErrorKind::InvalidData, format!("invalid UTF-8: {}", err))
            })),
            Err(err) => Some(Err(err)),
        }
    }
}

/// Iterate over the lines of an in-memory string, terminators included.
pub fn source_lines(source: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
    source.split_inclusive('\n').map(|line| Ok(line.to_string()))
}
