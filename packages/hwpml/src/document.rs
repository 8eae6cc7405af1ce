//! Document model: head metadata plus an ordered list of body blocks.

use chrono::NaiveDate;

use crate::config::{
    HWPML_STYLE, HWPML_SUB_VERSION, HWPML_VERSION, SUMMARY_DATE_FORMAT, TABLE_TOTAL_WIDTH,
};
use crate::element::Element;
use crate::error::{HwpmlError, Result};
use crate::style::{style_table, CharStyle, ParaStyle};
use crate::writer::to_xml_bytes;

/// A table with one header row and any number of data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<u32>,
}

impl Table {
    /// Create a table with equal column widths.
    ///
    /// Every row is fitted to the header count: missing cells are empty,
    /// surplus cells are dropped.
    #[must_use]
    pub fn new<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = Vec<String>>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let columns = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(columns, String::new());
                row
            })
            .collect();
        let width = u32::try_from(columns)
            .ok()
            .and_then(|n| TABLE_TOTAL_WIDTH.checked_div(n))
            .unwrap_or(0);

        Self {
            headers,
            rows,
            widths: vec![width; columns],
        }
    }

    /// Replace the column widths; one width per header is required.
    pub fn with_widths(mut self, widths: &[u32]) -> Result<Self> {
        if widths.len() != self.headers.len() {
            return Err(HwpmlError::TableShape {
                columns: self.headers.len(),
                widths: widths.len(),
            });
        }
        self.widths = widths.to_vec();
        Ok(self)
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Declared row count: data rows plus the header row.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.headers.len()
    }

    fn cell(&self, col: usize, row: usize, lines: &[&str], header: bool) -> Element {
        let mut cell = Element::new("CELL")
            .with_attr("ColAddr", col)
            .with_attr("RowAddr", row)
            .with_attr("ColSpan", 1)
            .with_attr("RowSpan", 1)
            .with_attr("Width", self.widths.get(col).copied().unwrap_or(0));
        if header {
            cell = cell.with_attr("Header", "true");
        }
        let style = if header {
            CharStyle::TableHeader
        } else {
            CharStyle::Body
        };
        cell.with_child(
            Element::new("PARALIST")
                .with_children(lines.iter().map(|line| paragraph(line, style, ParaStyle::Body))),
        )
    }

    fn to_element(&self) -> Element {
        let header_row = Element::new("ROW").with_children(
            self.headers
                .iter()
                .enumerate()
                .map(|(col, header)| self.cell(col, 0, &[header.as_str()], true)),
        );

        let data_rows = self.rows.iter().enumerate().map(|(index, row)| {
            Element::new("ROW").with_children(row.iter().enumerate().map(|(col, text)| {
                let lines: Vec<&str> = if text.is_empty() {
                    vec![""]
                } else {
                    text.split('\n').collect()
                };
                self.cell(col, index + 1, &lines, false)
            }))
        });

        let table = Element::new("TABLE")
            .with_attr("RowCount", self.row_count())
            .with_attr("ColCount", self.col_count())
            .with_attr("CellSpacing", 0)
            .with_attr("BorderFill", 1)
            .with_child(header_row)
            .with_children(data_rows);

        paragraph_shell(ParaStyle::Body).with_child(
            Element::new("TEXT")
                .with_attr("CharShape", CharStyle::Body.id())
                .with_child(table),
        )
    }
}

/// One body-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A single-run styled paragraph.
    Paragraph {
        text: String,
        char_style: CharStyle,
        para_style: ParaStyle,
    },
    /// An empty paragraph.
    Blank,
    /// A table wrapped in its own paragraph.
    Table(Table),
}

impl Block {
    /// Body-styled paragraph.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::styled(text, CharStyle::Body, ParaStyle::Body)
    }

    /// Section heading paragraph.
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self::styled(text, CharStyle::Heading, ParaStyle::Heading)
    }

    /// Small-print body paragraph (dates, notices).
    #[must_use]
    pub fn small(text: impl Into<String>) -> Self {
        Self::styled(text, CharStyle::Small, ParaStyle::Body)
    }

    #[must_use]
    pub fn styled(text: impl Into<String>, char_style: CharStyle, para_style: ParaStyle) -> Self {
        Self::Paragraph {
            text: text.into(),
            char_style,
            para_style,
        }
    }

    fn to_element(&self) -> Element {
        match self {
            Block::Paragraph {
                text,
                char_style,
                para_style,
            } => paragraph(text, *char_style, *para_style),
            Block::Blank => paragraph_shell(ParaStyle::Body).with_child(
                Element::new("TEXT").with_attr("CharShape", CharStyle::Body.id()),
            ),
            Block::Table(table) => table.to_element(),
        }
    }
}

fn paragraph_shell(para_style: ParaStyle) -> Element {
    Element::new("P")
        .with_attr("ParaShape", para_style.id())
        .with_attr("Style", 0)
}

fn paragraph(text: &str, char_style: CharStyle, para_style: ParaStyle) -> Element {
    paragraph_shell(para_style).with_child(
        Element::new("TEXT")
            .with_attr("CharShape", char_style.id())
            .with_child(Element::new("CHAR").with_text(text)),
    )
}

/// A complete generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    author: String,
    date: NaiveDate,
    blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Tables of the body, in order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Build the full `HWPML` element tree.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let head = Element::new("HEAD")
            .with_attr("SecCnt", 1)
            .with_child(
                Element::new("DOCSUMMARY")
                    .with_child(Element::new("TITLE").with_text(self.title.as_str()))
                    .with_child(Element::new("AUTHOR").with_text(self.author.as_str()))
                    .with_child(
                        Element::new("DATE")
                            .with_text(self.date.format(SUMMARY_DATE_FORMAT).to_string()),
                    ),
            )
            .with_child(style_table());

        let section = Element::new("SECTION")
            .with_attr("Id", 0)
            .with_children(self.blocks.iter().map(Block::to_element));

        Element::new("HWPML")
            .with_attr("Version", HWPML_VERSION)
            .with_attr("SubVersion", HWPML_SUB_VERSION)
            .with_attr("Style", HWPML_STYLE)
            .with_child(head)
            .with_child(Element::new("BODY").with_child(section))
    }

    /// Serialize to an UTF-8 byte buffer.
    pub fn to_xml_bytes(&self) -> Result<Vec<u8>> {
        let bytes = to_xml_bytes(&self.to_element())?;
        tracing::debug!(
            title = %self.title,
            blocks = self.blocks.len(),
            bytes = bytes.len(),
            "Serialized HWPML document"
        );
        Ok(bytes)
    }
}
