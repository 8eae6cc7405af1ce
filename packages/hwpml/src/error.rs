//! Error types for HWPML synthesis.

use thiserror::Error;

/// Main error type for the HWPML library.
#[derive(Debug, Error)]
pub enum HwpmlError {
    /// Column widths do not match the header count.
    #[error("Table has {columns} columns but {widths} widths were given")]
    TableShape { columns: usize, widths: usize },

    /// Writing the element tree failed.
    #[error("XML serialization failed: {0}")]
    Serialize(String),
}

/// Result type alias for HWPML operations.
pub type Result<T> = std::result::Result<T, HwpmlError>;
