//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading gemtext source from files
//! or strings and running the tokenize + build pipeline on it. This is used by both
//! production code and tests.
//!
//! # Example
//!
//! ```rust
//! use gmi_parser::gmi::loader::DocumentLoader;
//!
//! // From file
//! let document = DocumentLoader::from_path("page.gmi").unwrap().parse().unwrap();
//!
//! // From string
//! let document = DocumentLoader::from_string("# Hello\n").parse().unwrap();
//!
//! // From a reader
//! let document = DocumentLoader::from_reader(&b"# Hello\n"[..]).unwrap().parse().unwrap();
//!
//! // Tokens only
//! let tokens = DocumentLoader::from_string("# Hello\n").tokenize().unwrap();
//! ```

use crate::gmi::ast::Document;
use crate::gmi::building::build_document;
use crate::gmi::lexing::{source_lines, TokenizeError, Tokenizer};
use crate::gmi::token::Token;
use std::fs;
use std::io;
use std::path::Path;

/// Error that can occur when loading documents
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the source
    IoError(String),
    /// Tokenizer error while converting the source
    TokenizeError(TokenizeError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::TokenizeError(err) => write!(f, "Tokenize error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<io::Error> for LoaderError {
    fn from(err: io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<TokenizeError> for LoaderError {
    fn from(err: TokenizeError) -> Self {
        LoaderError::TokenizeError(err)
    }
}

/// Gemtext loader with pipeline shortcuts
///
/// `DocumentLoader` holds the raw source text and runs the conversion pipeline on demand.
/// Each call runs a fresh tokenizer; no state is shared between calls.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load source from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(Self { source })
    }

    /// Load source from a string.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load source from any reader.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self { source })
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run the tokenizer only, collecting the full token stream.
    pub fn tokenize(&self) -> Result<Vec<Token>, LoaderError> {
        let tokens: Result<Vec<Token>, TokenizeError> =
            Tokenizer::new(source_lines(&self.source)).collect();
        Ok(tokens?)
    }

    /// Run the full tokenize + build pipeline.
    pub fn parse(&self) -> Result<Document, LoaderError> {
        let tokens = Tokenizer::new(source_lines(&self.source));
        Ok(build_document(tokens)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gmi::ast::Node;

    #[test]
    fn test_parse_from_string() {
        let document = DocumentLoader::from_string("# Title\n").parse().unwrap();
        assert_eq!(
            document.nodes,
            vec![Node::Header {
                level: 1,
                title: "Title".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_from_reader() {
        let reader = io::Cursor::new(b"* item\n".to_vec());
        let document = DocumentLoader::from_reader(reader)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(
            document.nodes,
            vec![Node::List {
                elements: vec!["item".to_string()],
            }]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DocumentLoader::from_path("/nonexistent/page.gmi");
        assert!(matches!(result, Err(LoaderError::IoError(_))));
    }

    #[test]
    fn test_unterminated_fence_surfaces_as_tokenize_error() {
        let result = DocumentLoader::from_string("```\nopen\n").parse();
        assert!(matches!(
            result,
            Err(LoaderError::TokenizeError(TokenizeError::UnterminatedBlock))
        ));
    }
}
