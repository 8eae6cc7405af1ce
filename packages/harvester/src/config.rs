//! Configuration constants and validation functions for the harvester.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvesterError, Result};

/// Default location of the corpus snapshot written by `ingest`.
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/regulations.json";

/// Prefix of corpus identifiers (`REG-001`, `REG-002`, ...).
pub const REGULATION_ID_PREFIX: &str = "REG";

/// Number of leading paragraphs inspected when deriving a display name.
pub const TITLE_SCAN_PARAGRAPHS: usize = 10;

/// A paragraph must be shorter than this (in characters) to be used as a display name.
pub const TITLE_MAX_CHARS: usize = 50;

/// Words that mark a paragraph as a regulation title.
pub const TITLE_KEYWORDS: &[&str] = &["규정", "학칙", "내규", "지침", "요강", "세칙"];

/// Default number of documents returned by a corpus search.
pub const DEFAULT_TOP_K: usize = 10;

/// Maximum number of clauses returned for a single document.
pub const MAX_RELEVANT_CLAUSES: usize = 10;

/// Bonus added per query word found in a document's display name.
pub const NAME_MATCH_BONUS: u64 = 10;

/// Maximum characters of clause content shown in search listings.
pub const CLAUSE_EXCERPT_CHARS: usize = 300;

/// Text wrap width for terminal output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Regulation id pattern: `REG-` followed by at least three digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static REGULATION_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^REG-\d{3,}$").expect("valid regex"));

/// Build the corpus identifier for the file at 1-based ingestion position `position`.
///
/// # Examples
/// ```
/// use regulation_harvester::config::regulation_id;
///
/// assert_eq!(regulation_id(1), "REG-001");
/// assert_eq!(regulation_id(136), "REG-136");
/// assert_eq!(regulation_id(1234), "REG-1234");
/// ```
pub fn regulation_id(position: usize) -> String {
    format!("{REGULATION_ID_PREFIX}-{position:03}")
}

/// Validate a regulation identifier.
///
/// # Examples
/// ```
/// use regulation_harvester::config::validate_regulation_id;
///
/// assert!(validate_regulation_id("REG-007").is_ok());
/// assert!(validate_regulation_id("7").is_err());
/// ```
pub fn validate_regulation_id(id: &str) -> Result<()> {
    if REGULATION_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidRegulationId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulation_id_padding() {
        assert_eq!(regulation_id(1), "REG-001");
        assert_eq!(regulation_id(42), "REG-042");
        assert_eq!(regulation_id(999), "REG-999");
    }

    #[test]
    fn test_validate_regulation_id_valid() {
        assert!(validate_regulation_id("REG-001").is_ok());
        assert!(validate_regulation_id("REG-1000").is_ok());
    }

    #[test]
    fn test_validate_regulation_id_invalid() {
        assert!(validate_regulation_id("").is_err());
        assert!(validate_regulation_id("REG-01").is_err());
        assert!(validate_regulation_id("reg-001").is_err());
        assert!(validate_regulation_id("REG001").is_err());
    }
}
