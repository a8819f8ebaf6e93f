//! Main module for gemtext library functionality

pub mod ast;
pub mod building;
pub mod lexing;
pub mod loader;
pub mod token;

pub use ast::{Document, LinkEntry, Node};
pub use building::build_document;
pub use lexing::{read_lines, source_lines, TokenizeError, Tokenizer};
pub use loader::{DocumentLoader, LoaderError};
pub use token::Token;
