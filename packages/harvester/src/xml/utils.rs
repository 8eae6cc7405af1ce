//! XML utility functions for navigating HWPML trees and flattening them into paragraphs.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Result;

/// Paragraph element of the HWPML body.
pub const PARAGRAPH_TAG: &str = "P";

/// Leaf text run inside a paragraph.
pub const CHAR_TAG: &str = "CHAR";

/// Parse HWPML text into a DOM tree.
///
/// A DOCTYPE declaration is tolerated; exported files sometimes carry one.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regulation_harvester::xml::get_tag_name;
///
/// let xml = r#"<HWPML><BODY/></HWPML>"#;
/// let doc = Document::parse(xml).unwrap();
/// let body = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(body), "BODY");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the closest enclosing `P` element of a node (excluding the node itself).
pub fn nearest_paragraph<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.ancestors()
        .skip(1)
        .find(|ancestor| has_tag(*ancestor, PARAGRAPH_TAG))
}

/// Concatenated text of all text nodes below `node`, untrimmed.
pub fn run_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// All `CHAR` runs of the document, in document order.
pub fn char_runs<'a, 'input>(
    doc: &'a Document<'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    doc.descendants().filter(|n| has_tag(*n, CHAR_TAG))
}

/// Flatten a HWPML document into paragraph strings.
///
/// Every `P` element becomes one paragraph: the trimmed, non-empty text of the
/// `CHAR` runs whose nearest enclosing paragraph is that `P`, joined with a single
/// space. Paragraphs nested in table cells therefore come out as their own entries.
/// Paragraphs without text are dropped.
///
/// If no paragraph yields text, every non-blank `CHAR` run is treated as a
/// paragraph of its own.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regulation_harvester::xml::flatten_paragraphs;
///
/// let xml = r#"<BODY><P><TEXT><CHAR>제1조(목적)</CHAR><CHAR> 이 규정은</CHAR></TEXT></P></BODY>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(flatten_paragraphs(&doc), vec!["제1조(목적) 이 규정은".to_string()]);
/// ```
pub fn flatten_paragraphs(doc: &Document<'_>) -> Vec<String> {
    let mut paragraphs = Vec::new();

    for paragraph in doc.descendants().filter(|n| has_tag(*n, PARAGRAPH_TAG)) {
        let runs: Vec<String> = paragraph
            .descendants()
            .filter(|n| has_tag(*n, CHAR_TAG) && nearest_paragraph(*n) == Some(paragraph))
            .map(|run| run_text(run).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if !runs.is_empty() {
            paragraphs.push(runs.join(" "));
        }
    }

    if paragraphs.is_empty() {
        paragraphs = char_runs(doc)
            .map(|run| run_text(run).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
    }

    paragraphs
}
