//! Regulation HWPML - Generate HWPML documents that open in Hangul (한/글).
//!
//! Documents are assembled as a list of blocks (styled paragraphs, blank
//! paragraphs, tables) over a fixed style table and serialized to a byte buffer.
//! Three templates cover amendment proposals with a comparison table (신구대조문),
//! analysis reports, and Q&A records. [`pairs`] recovers comparison rows from
//! generated draft text.
//!
//! # Example
//!
//! ```
//! use regulation_hwpml::{pairs_or_placeholder, AmendmentMetadata, Synthesizer};
//!
//! let draft = "| 현행 | 개정안 |\n|---|---|\n| 제5조 2년 | 제5조 3년 |";
//! let rows = pairs_or_placeholder(draft);
//!
//! let doc = Synthesizer::new()
//!     .amendment_document("학칙 개정안", &rows, &AmendmentMetadata::default())
//!     .unwrap();
//! let xml = String::from_utf8(doc.to_xml_bytes().unwrap()).unwrap();
//! assert!(xml.contains("RowCount=\"2\""));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Fixed strings, widths and format constants
//! - [`error`]: Error types and Result alias
//! - [`element`]: Element tree
//! - [`writer`]: Indented UTF-8 serialization
//! - [`style`]: Font, character and paragraph style table
//! - [`document`]: Blocks, tables and documents
//! - [`markdown`]: Line classifier for generated text
//! - [`payload`]: Template inputs
//! - [`templates`]: Amendment, analysis and Q&A documents
//! - [`pairs`]: Comparison-row reverse parser

pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod markdown;
pub mod pairs;
pub mod payload;
pub mod style;
pub mod templates;
pub mod writer;

pub use document::{Block, Document, Table};
pub use error::{HwpmlError, Result};
pub use pairs::{pairs_or_placeholder, parse_pairs};
pub use payload::{AmendmentMetadata, QaPair, RelatedRegulation, RevisionPair};
pub use templates::Synthesizer;
