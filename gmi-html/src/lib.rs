//! HTML export for gemtext documents
//!
//!     This crate serializes the flat document tree produced by gmi-parser into one
//!     self-contained HTML5 document: fixed doctype and head, an embedded stylesheet, and a
//!     body with one templated fragment per node kind.
//!
//!     This is a pure lib: it powers gmi-cli but is shell agnostic, no code here should
//!     suppose a shell environment, be it std print, env vars etc.
//!
//! Escaping
//!
//!     Content is inserted into text and attribute positions verbatim, without HTML
//!     escaping. This is a documented non-goal, not an oversight: escaping would change the
//!     output for every document containing markup-significant characters, so the input is
//!     trusted to be authored, not hostile.

pub mod serializer;

pub use serializer::{resolve_title, serialize_to_html, FALLBACK_TITLE};
