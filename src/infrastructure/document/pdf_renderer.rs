//! One-page PDF rendering with `lopdf`.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use thiserror::Error;

use crate::domain::entities::ListingDocument;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to encode page content: {0}")]
    Encode(String),

    #[error("Failed to write PDF: {0}")]
    Write(String),
}

/// A4 media box in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;

const HEADING_SIZE: i64 = 20;
const BODY_SIZE: i64 = 12;

/// Left margin and heading baseline, in millimetres from the top-left corner.
const MARGIN_MM: i64 = 20;
const FIRST_LINE_MM: i64 = 40;
const LINE_STEP_MM: i64 = 10;

fn mm(value: i64) -> i64 {
    value * 7200 / 2540
}

/// Baseline for a position measured in millimetres from the top edge.
fn from_top(value_mm: i64) -> i64 {
    PAGE_HEIGHT - mm(value_mm)
}

/// Renders [`ListingDocument`]s as single-page PDFs using the built-in
/// Helvetica font.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Produces the PDF bytes for `document`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if the content stream cannot be encoded or
    /// the document cannot be serialized.
    pub fn render(&self, document: &ListingDocument) -> Result<Vec<u8>, DocumentError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let content = Content {
            operations: page_operations(document),
        };
        let encoded = content
            .encode()
            .map_err(|e| DocumentError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(document.heading.as_str()),
            "Producer" => Object::string_literal("homefinder"),
        });
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| DocumentError::Write(e.to_string()))?;

        Ok(buffer)
    }
}

fn page_operations(document: &ListingDocument) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(4 + document.lines.len() * 4);

    ops.extend(text_at(
        &document.heading,
        HEADING_SIZE,
        mm(MARGIN_MM),
        from_top(MARGIN_MM),
    ));

    for (i, line) in (0_i64..).zip(&document.lines) {
        let y = from_top(FIRST_LINE_MM + i * LINE_STEP_MM);
        ops.extend(text_at(line, BODY_SIZE, mm(MARGIN_MM), y));
    }

    ops
}

fn text_at(text: &str, size: i64, x: i64, y: i64) -> [Operation; 5] {
    [
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), size.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new(
            "Tj",
            vec![Object::String(win_ansi(text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// Encodes `text` for the `WinAnsiEncoding` font.
///
/// Latin-1 characters map to their own code, the typographic characters of
/// the 0x80..=0x9F block to their WinAnsi slots, and `₹` to `Rs.`. Anything
/// else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());

    for c in text.chars() {
        match c {
            ' '..='~' | '\u{A0}'..='\u{FF}' => out.push(c as u8),
            '₹' => out.extend_from_slice(b"Rs."),
            _ => out.push(win_ansi_extra(c).unwrap_or(b'?')),
        }
    }

    out
}

fn win_ansi_extra(c: char) -> Option<u8> {
    let code = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(code)
}
