//! Serialization of element trees to indented UTF-8 markup.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::element::Element;
use crate::error::{HwpmlError, Result};

const INDENT_SIZE: usize = 2;

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn emit(writer: &mut XmlWriter, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| HwpmlError::Serialize(e.to_string()))
}

fn write_element(writer: &mut XmlWriter, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((*key, value.as_str()));
    }

    if element.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if let Some(text) = element.text().filter(|t| !t.is_empty()) {
        emit(writer, Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.name())))
}

/// Render a document root with a UTF-8 declaration and two-space indentation.
///
/// Text content is escaped; text-only elements stay on one line.
pub fn to_xml_bytes(root: &Element) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_element(&mut writer, root)?;

    let mut bytes = writer.into_inner().into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}
