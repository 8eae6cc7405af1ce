//! Regulation Harvester - Parse institutional regulations from HWPML exports.
//!
//! This crate turns a directory of HWPML regulation documents into a searchable
//! corpus: each file is flattened into paragraphs, split into numbered clauses
//! (`제N조`), given a display name and an id, and indexed for keyword search.
//!
//! # Example
//!
//! ```
//! use regulation_harvester::harvester::parse_regulation_xml;
//! use regulation_harvester::store::Corpus;
//!
//! let xml = r#"<HWPML><BODY><SECTION>
//!   <P><TEXT><CHAR>장학금 지급 규정</CHAR></TEXT></P>
//!   <P><TEXT><CHAR>제1조(목적) 이 규정은 장학금 지급에 관하여 정한다.</CHAR></TEXT></P>
//! </SECTION></BODY></HWPML>"#;
//!
//! let regulation = parse_regulation_xml(xml, "REG-001", "4-2_장학금.xml").unwrap();
//! assert_eq!(regulation.display_name, "장학금 지급 규정");
//! assert_eq!(regulation.clauses[0].number, "제1조");
//!
//! let corpus = Corpus::new(vec![regulation]);
//! assert_eq!(corpus.search("장학금", 10)[0].score, 12);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Regulation, Clause, IngestReport)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: HWPML parsing and paragraph flattening
//! - [`splitting`]: Clause splitting logic
//! - [`title`]: Display-name derivation
//! - [`harvester`]: Per-file parsing and batch ingestion
//! - [`snapshot`]: JSON corpus snapshot
//! - [`search`]: Corpus index and relevance ranking
//! - [`store`]: Loaded corpus and process-wide state
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod harvester;
pub mod search;
pub mod snapshot;
pub mod splitting;
pub mod store;
pub mod title;
pub mod types;
pub mod xml;

// Re-export main functions
pub use harvester::{harvest_directory, parse_regulation_file, parse_regulation_xml};

// Re-export commonly used items
pub use error::{HarvesterError, Result};
pub use search::{find_relevant_clauses, search, ClauseMatch, SearchResult};
pub use store::Corpus;
pub use types::{Clause, CorpusStats, IngestFailure, IngestReport, Regulation};
