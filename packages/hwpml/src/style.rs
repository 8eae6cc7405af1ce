//! Fixed style table shared by every generated document.
//!
//! Paragraphs refer to character and paragraph styles by numeric id; the ids
//! and their definitions below are emitted once in the document head.

use crate::config::{FONTS_PER_LANG, FONT_LANGS, FONT_NAME};
use crate::element::Element;

/// Character styles (`CHARSHAPE`) in id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharStyle {
    /// 10pt body text.
    Body,
    /// 16pt bold, title font slot.
    Title,
    /// 13pt bold.
    Heading,
    /// 10pt bold, used in table header cells.
    TableHeader,
    /// 9pt, for dates and notices.
    Small,
}

impl CharStyle {
    pub const ALL: [CharStyle; 5] = [
        CharStyle::Body,
        CharStyle::Title,
        CharStyle::Heading,
        CharStyle::TableHeader,
        CharStyle::Small,
    ];

    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            CharStyle::Body => 0,
            CharStyle::Title => 1,
            CharStyle::Heading => 2,
            CharStyle::TableHeader => 3,
            CharStyle::Small => 4,
        }
    }

    /// Font size in 1/100 pt.
    #[must_use]
    pub fn size(self) -> u32 {
        match self {
            CharStyle::Body | CharStyle::TableHeader => 1000,
            CharStyle::Title => 1600,
            CharStyle::Heading => 1300,
            CharStyle::Small => 900,
        }
    }

    #[must_use]
    pub fn bold(self) -> bool {
        matches!(
            self,
            CharStyle::Title | CharStyle::Heading | CharStyle::TableHeader
        )
    }

    /// Index into each font face list.
    #[must_use]
    pub fn font_id(self) -> u8 {
        match self {
            CharStyle::Title => 1,
            _ => 0,
        }
    }

    fn to_element(self) -> Element {
        let per_script = |name: &'static str, value: u32| {
            Element::new(name)
                .with_attr("Hangul", value)
                .with_attr("Latin", value)
                .with_attr("Hanja", value)
        };

        let mut shape = Element::new("CHARSHAPE").with_attr("Id", self.id());
        if self.bold() {
            shape = shape.with_attr("Bold", "true");
        }
        shape
            .with_child(per_script("FONTID", u32::from(self.font_id())))
            .with_child(per_script("RATIO", 100))
            .with_child(per_script("SIZE", self.size()))
    }
}

/// Paragraph styles (`PARASHAPE`) in id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParaStyle {
    /// 160% line spacing.
    Body,
    /// Centered, 130% line spacing, bottom margin.
    Title,
    /// 150% line spacing, top and bottom margins.
    Heading,
}

impl ParaStyle {
    pub const ALL: [ParaStyle; 3] = [ParaStyle::Body, ParaStyle::Title, ParaStyle::Heading];

    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            ParaStyle::Body => 0,
            ParaStyle::Title => 1,
            ParaStyle::Heading => 2,
        }
    }

    /// Line spacing in percent.
    #[must_use]
    pub fn line_spacing(self) -> u32 {
        match self {
            ParaStyle::Body => 160,
            ParaStyle::Title => 130,
            ParaStyle::Heading => 150,
        }
    }

    fn to_element(self) -> Element {
        let mut shape = Element::new("PARASHAPE").with_attr("Id", self.id());
        if self == ParaStyle::Title {
            shape = shape.with_attr("Align", "Center");
        }
        shape = shape.with_child(
            Element::new("LINESPACING")
                .with_attr("Type", "Percent")
                .with_attr("Value", self.line_spacing()),
        );
        match self {
            ParaStyle::Body => shape,
            ParaStyle::Title => shape.with_child(Element::new("MARGIN").with_attr("Bottom", 400)),
            ParaStyle::Heading => shape.with_child(
                Element::new("MARGIN")
                    .with_attr("Top", 300)
                    .with_attr("Bottom", 100),
            ),
        }
    }
}

/// The `MAPPINGTABLE` element: font faces, character styles, paragraph styles.
#[must_use]
pub fn style_table() -> Element {
    let face_names = Element::new("FACENAMELIST").with_children(FONT_LANGS.iter().map(|lang| {
        Element::new("FONTFACE")
            .with_attr("Lang", lang)
            .with_attr("Count", FONTS_PER_LANG)
            .with_children((0..FONTS_PER_LANG).map(|id| {
                Element::new("FONT")
                    .with_attr("Id", id)
                    .with_attr("Name", FONT_NAME)
                    .with_attr("Type", "ttf")
            }))
    }));

    Element::new("MAPPINGTABLE")
        .with_child(face_names)
        .with_child(
            Element::new("CHARSHAPELIST")
                .with_children(CharStyle::ALL.iter().map(|s| s.to_element())),
        )
        .with_child(
            Element::new("PARASHAPELIST")
                .with_children(ParaStyle::ALL.iter().map(|s| s.to_element())),
        )
}
