//! AST building
//!
//!     This module folds the token stream into the flat document tree. The builder makes a
//!     single forward pass with no lookahead: runs of consecutive same-kind tokens (links,
//!     list elements, verbatim blocks) are accumulated into one aggregate node each, while
//!     header and paragraph tokens map straight to singleton nodes.
//!
//! The Open Aggregator
//!
//!     At most one aggregate node is under construction at any point. That invariant is held
//!     structurally: the builder state is a single `Option<Aggregator>`, and any token whose
//!     kind does not match the open aggregator closes it (appends it to the document) before
//!     being handled itself. Once closed, an aggregator is closed permanently; a later token
//!     of the same kind starts a new node, it does not reopen the old one.
//!
//!     After the stream is exhausted, a still-open aggregator is closed and appended, so the
//!     document is never truncated by a trailing unflushed block.

use crate::gmi::ast::{Document, LinkEntry, Node};
use crate::gmi::lexing::TokenizeError;
use crate::gmi::token::Token;

/// An aggregate node under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Aggregator {
    Links(Vec<LinkEntry>),
    List(Vec<String>),
    Quote(Vec<String>),
}

impl Aggregator {
    /// True if `token` extends this aggregator rather than closing it.
    fn accepts(&self, token: &Token) -> bool {
        matches!(
            (self, token),
            (Aggregator::Links(_), Token::Link { .. })
                | (Aggregator::List(_), Token::Element { .. })
                | (Aggregator::Quote(_), Token::Quote { .. })
        )
    }

    fn into_node(self) -> Node {
        match self {
            Aggregator::Links(links) => Node::Links { links },
            Aggregator::List(elements) => Node::List { elements },
            Aggregator::Quote(content) => Node::Quote { content },
        }
    }
}

/// Fold a token stream into a document.
///
/// Consumes the stream fully; the first tokenizer error aborts the build and propagates.
/// An empty stream produces an empty (valid) document.
pub fn build_document<I>(tokens: I) -> Result<Document, TokenizeError>
where
    I: IntoIterator<Item = Result<Token, TokenizeError>>,
{
    let mut nodes = Vec::new();
    let mut open: Option<Aggregator> = None;

    for token in tokens {
        let token = token?;

        // A non-matching token closes whichever aggregator is open.
        if let Some(aggregator) = open.take() {
            if aggregator.accepts(&token) {
                open = Some(aggregator);
            } else {
                nodes.push(aggregator.into_node());
            }
        }

        match token {
            Token::Header { level, title } => nodes.push(Node::Header { level, title }),
            Token::Paragraph { content } => nodes.push(Node::Paragraph { content }),
            Token::Link { target, title } => {
                let entry = LinkEntry { target, title };
                match open.get_or_insert_with(|| Aggregator::Links(Vec::new())) {
                    Aggregator::Links(links) => links.push(entry),
                    _ => unreachable!("non-matching aggregator was closed above"),
                }
            }
            Token::Element { content } => {
                match open.get_or_insert_with(|| Aggregator::List(Vec::new())) {
                    Aggregator::List(elements) => elements.push(content),
                    _ => unreachable!("non-matching aggregator was closed above"),
                }
            }
            Token::Quote { content } => {
                match open.get_or_insert_with(|| Aggregator::Quote(Vec::new())) {
                    Aggregator::Quote(blocks) => blocks.push(content),
                    _ => unreachable!("non-matching aggregator was closed above"),
                }
            }
        }
    }

    if let Some(aggregator) = open {
        nodes.push(aggregator.into_node());
    }

    Ok(Document::new(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(token: Token) -> Result<Token, TokenizeError> {
        Ok(token)
    }

    #[test]
    fn test_empty_stream_builds_empty_document() {
        let document = build_document(Vec::new()).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_link_run_folds_into_one_node() {
        let tokens = vec![
            ok(Token::Link {
                target: "/a".to_string(),
                title: "A".to_string(),
            }),
            ok(Token::Link {
                target: "/b".to_string(),
                title: String::new(),
            }),
        ];

        let document = build_document(tokens).unwrap();
        assert_eq!(
            document.nodes,
            vec![Node::Links {
                links: vec![
                    LinkEntry {
                        target: "/a".to_string(),
                        title: "A".to_string(),
                    },
                    LinkEntry {
                        target: "/b".to_string(),
                        title: String::new(),
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_closed_aggregator_does_not_reopen() {
        let link = |target: &str| {
            ok(Token::Link {
                target: target.to_string(),
                title: String::new(),
            })
        };
        let tokens = vec![
            link("/a"),
            ok(Token::Paragraph {
                content: "break".to_string(),
            }),
            link("/b"),
        ];

        let document = build_document(tokens).unwrap();
        assert_eq!(document.len(), 3);
        assert!(matches!(document.nodes[0], Node::Links { .. }));
        assert!(matches!(document.nodes[1], Node::Paragraph { .. }));
        assert!(matches!(document.nodes[2], Node::Links { .. }));
    }

    #[test]
    fn test_trailing_aggregator_is_flushed() {
        let tokens = vec![
            ok(Token::Element {
                content: "one".to_string(),
            }),
            ok(Token::Element {
                content: "two".to_string(),
            }),
        ];

        let document = build_document(tokens).unwrap();
        assert_eq!(
            document.nodes,
            vec![Node::List {
                elements: vec!["one".to_string(), "two".to_string()],
            }]
        );
    }

    #[test]
    fn test_tokenizer_error_aborts_build() {
        let tokens = vec![
            ok(Token::Paragraph {
                content: "before".to_string(),
            }),
            Err(TokenizeError::UnterminatedBlock),
        ];

        assert_eq!(
            build_document(tokens),
            Err(TokenizeError::UnterminatedBlock)
        );
    }
}
