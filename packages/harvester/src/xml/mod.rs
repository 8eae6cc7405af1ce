//! XML utilities for HWPML source documents.

mod utils;

pub use utils::{
    char_runs, flatten_paragraphs, get_tag_name, has_tag, nearest_paragraph, parse_document,
    run_text, CHAR_TAG, PARAGRAPH_TAG,
};
