//! # gmi-parser
//!
//! A parser for the gemtext format.
//!
//! Pipeline Layout
//!
//!     Gemtext is strictly line oriented, so the whole pipeline is line driven and runs in a
//!     single forward pass:
//!
//!     src/gmi
//!       ├── token       Token types (one classified unit per physical line)
//!       ├── lexing      The tokenizer: line classification + verbatim block state
//!       ├── ast         Node and Document types (the flat document tree)
//!       ├── building    Token stream → Document (same-kind run aggregation)
//!       └── loader      Convenience loading from paths, strings and readers
//!
//!     Each stage consumes the previous stage's output lazily; the tokenizer is a pull-based
//!     iterator, so memory use is bounded by the largest single block, not by document size.
//!     The builder does materialize the complete node sequence, since rendering needs a full
//!     pass over the nodes to resolve the document title before emitting anything.

pub mod gmi;
