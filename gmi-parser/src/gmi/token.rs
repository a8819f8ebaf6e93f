//! Token types for the gemtext tokenizer
//!
//!     Gemtext is line based, so each token corresponds to exactly one physical line, with one
//!     exception: a verbatim block spans several physical lines (the fence delimiters plus the
//!     interior content) and produces a single `Quote` token carrying the interior verbatim.
//!
//!     Since classification happens line by line, every line must resolve to exactly one
//!     category. The order of classification is fixed and significant: header, then list
//!     element, then link, then fence, and finally the paragraph fallback. See
//!     [classify_line](crate::gmi::lexing) for the classification logic and ordering.
//!
//! Token Kinds
//!
//!         - Header: one or more `#` markers, whitespace, then the title text
//!         - Element: a `*` marker, whitespace, then the list item text
//!         - Link: `=>`, a whitespace-free target, and an optional title
//!         - Quote: the accumulated interior of a fenced verbatim block
//!         - Paragraph: any other line (the fallback category)
//!
//!     Tokens are ephemeral: they are consumed by the AST builder as soon as they are
//!     produced and never outlive one conversion.

use std::fmt;

/// A classified unit of one physical line of gemtext.
///
/// All text fields except `Quote::content` are trimmed of leading and trailing whitespace by
/// the tokenizer. Verbatim content keeps its whitespace and line terminators exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    /// Header line: `level` is the count of leading `#` markers (>= 1)
    Header { level: usize, title: String },

    /// List element line: the item text after the `*` marker
    Element { content: String },

    /// Link line: `target` never contains whitespace; `title` is empty when absent
    Link { target: String, title: String },

    /// Verbatim block interior, whitespace preserved, lines joined with their
    /// original terminators
    Quote { content: String },

    /// Any other line, trimmed
    #[serde(rename = "p")]
    Paragraph { content: String },
}

impl Token {
    /// Short tag name for the token kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Header { .. } => "header",
            Token::Element { .. } => "element",
            Token::Link { .. } => "link",
            Token::Quote { .. } => "quote",
            Token::Paragraph { .. } => "p",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let token = Token::Header {
            level: 2,
            title: "Section".to_string(),
        };
        assert_eq!(token.kind(), "header");
        assert_eq!(token.to_string(), "header");

        let token = Token::Paragraph {
            content: "text".to_string(),
        };
        assert_eq!(token.kind(), "p");
    }
}
