//! Clause splitting for regulation documents.
//!
//! Turns a flat paragraph stream into numbered clauses (`제N조`, `제N조의M`)
//! using a single boundary test and a two-state accumulator.

mod boundary;
mod engine;

pub use boundary::{match_clause_heading, ClauseHeading};
pub use engine::{split_clauses, ClauseSplitter, SplitState};
