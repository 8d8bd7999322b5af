use crate::backend::{FontWeight, RenderBackend};
use crate::error::LayoutError;
use crate::geometry::PageGeometry;
use crate::info::Info;
use crate::metrics;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Content, Name, Pdf, Rect, Str};

/// One recorded draw call: the WinAnsi-encoded bytes plus the font state
/// that was current when it was issued.
struct TextRun {
    bytes: Vec<u8>,
    size: Pt,
    weight: FontWeight,
    x: Pt,
    y: Pt,
}

/// A [`RenderBackend`] that produces real PDF bytes using the
/// standard-14 Helvetica faces, the fonts every conforming reader ships.
///
/// Nothing is embedded: text is measured against the published AFM
/// width tables (see [`metrics`]) and drawn with non-embedded Type1
/// font objects, which is also how the output stays small. Placement
/// coordinates arrive top-down (y measured from the top of the page);
/// they are flipped into PDF's bottom-up space when the document is
/// serialized.
pub struct PdfBackend {
    geometry: PageGeometry,
    info: Option<Info>,
    weight: FontWeight,
    size: Pt,
    pages: Vec<Vec<TextRun>>,
}

impl PdfBackend {
    /// Create a backend with one open page of the given geometry.
    pub fn new(geometry: PageGeometry) -> PdfBackend {
        PdfBackend {
            geometry,
            info: None,
            weight: FontWeight::Normal,
            size: Pt(10.0),
            pages: vec![Vec::new()],
        }
    }

    /// Attach document metadata, written into the info dictionary on save.
    pub fn with_info(mut self, info: Info) -> PdfBackend {
        self.info = Some(info);
        self
    }

    fn font_resource(weight: FontWeight) -> Name<'static> {
        match weight {
            FontWeight::Normal => Name(b"F0"),
            FontWeight::Bold => Name(b"F1"),
        }
    }

    fn base_font(weight: FontWeight) -> Name<'static> {
        match weight {
            FontWeight::Normal => Name(b"Helvetica"),
            FontWeight::Bold => Name(b"Helvetica-Bold"),
        }
    }
}

/// The WinAnsi (CP1252) byte for a character, if it has one. WinAnsi is
/// Latin-1 except for the 0x80..0x9F block, which carries typographic
/// punctuation instead of control codes.
fn winansi_byte(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(ch as u32 as u8),
        '\u{20AC}' => Some(0x80), // €
        '\u{201A}' => Some(0x82), // ‚
        '\u{0192}' => Some(0x83), // ƒ
        '\u{201E}' => Some(0x84), // „
        '\u{2026}' => Some(0x85), // …
        '\u{2020}' => Some(0x86), // †
        '\u{2021}' => Some(0x87), // ‡
        '\u{02C6}' => Some(0x88), // ˆ
        '\u{2030}' => Some(0x89), // ‰
        '\u{0160}' => Some(0x8A), // Š
        '\u{2039}' => Some(0x8B), // ‹
        '\u{0152}' => Some(0x8C), // Œ
        '\u{017D}' => Some(0x8E), // Ž
        '\u{2018}' => Some(0x91), // ‘
        '\u{2019}' => Some(0x92), // ’
        '\u{201C}' => Some(0x93), // “
        '\u{201D}' => Some(0x94), // ”
        '\u{2022}' => Some(0x95), // •
        '\u{2013}' => Some(0x96), // –
        '\u{2014}' => Some(0x97), // —
        '\u{02DC}' => Some(0x98), // ˜
        '\u{2122}' => Some(0x99), // ™
        '\u{0161}' => Some(0x9A), // š
        '\u{203A}' => Some(0x9B), // ›
        '\u{0153}' => Some(0x9C), // œ
        '\u{017E}' => Some(0x9E), // ž
        '\u{0178}' => Some(0x9F), // Ÿ
        _ => None,
    }
}

/// Encode a string for a WinAnsi-encoded font, one byte per character.
/// Characters outside the encodable range are a render error rather than
/// being silently replaced.
fn encode_winansi(text: &str) -> Result<Vec<u8>, LayoutError> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match winansi_byte(ch) {
            Some(byte) => bytes.push(byte),
            None => {
                return Err(LayoutError::Render(format!(
                    "character {ch:?} cannot be encoded in WinAnsi"
                )))
            }
        }
    }
    Ok(bytes)
}

impl RenderBackend for PdfBackend {
    fn measure_width(&self, text: &str, size: Pt, weight: FontWeight) -> Result<Pt, LayoutError> {
        Ok(metrics::width_of_text(text, size, weight))
    }

    fn new_page(&mut self) -> Result<(), LayoutError> {
        self.pages.push(Vec::new());
        Ok(())
    }

    fn set_font(&mut self, weight: FontWeight) -> Result<(), LayoutError> {
        self.weight = weight;
        Ok(())
    }

    fn set_font_size(&mut self, size: Pt) -> Result<(), LayoutError> {
        self.size = size;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: Pt, y: Pt) -> Result<(), LayoutError> {
        let bytes = encode_winansi(text)?;
        let run = TextRun {
            bytes,
            size: self.size,
            weight: self.weight,
            x,
            y,
        };
        self.pages
            .last_mut()
            .expect("backend always has an open page")
            .push(run);
        Ok(())
    }

    fn save(self) -> Result<Vec<u8>, LayoutError> {
        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();

        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        // two non-embedded Type1 fonts, WinAnsi encoded
        for (index, weight) in [FontWeight::Normal, FontWeight::Bold].into_iter().enumerate() {
            let font_id = refs.gen(RefType::Font(index));
            let mut font = writer.type1_font(font_id);
            font.base_font(Self::base_font(weight));
            font.encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let page_refs: Vec<_> = (0..self.pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        let media_box = Rect::new(0.0, 0.0, self.geometry.width.0, self.geometry.height.0);
        for (index, runs) in self.pages.iter().enumerate() {
            let content_id = refs.gen(RefType::ContentForPage(index));

            let mut content = Content::new();
            for run in runs {
                // flip the top-down placement into PDF's bottom-up space
                let pdf_y = self.geometry.height - run.y;
                content.begin_text();
                content.set_font(Self::font_resource(run.weight), run.size.0);
                content.next_line(run.x.0, pdf_y.0);
                content.show(Str(&run.bytes));
                content.end_text();
            }
            writer.stream(content_id, &content.finish());

            let page_id = refs
                .get(RefType::Page(index))
                .expect("page refs were pre-generated");
            let mut page = writer.page(page_id);
            page.media_box(media_box);
            page.parent(page_tree_id);
            page.contents(content_id);

            let mut resources = page.resources();
            let mut resource_fonts = resources.fonts();
            for (font_index, weight) in [FontWeight::Normal, FontWeight::Bold].into_iter().enumerate()
            {
                resource_fonts.pair(
                    Self::font_resource(weight),
                    refs.get(RefType::Font(font_index))
                        .expect("font refs were pre-generated"),
                );
            }
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        Ok(writer.finish())
    }
}
