//! PDF encoding of the composed quotation page
//!
//! Builds a one-page document with the two standard Helvetica fonts and,
//! when available, the letterhead logo embedded top right. Branding is best
//! effort: an unreadable image logs a warning and the page renders without it.

use std::path::Path;

use log::warn;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, xobject, Document, Object, Stream};

use super::layout::{Element, Font, Rgb, LOGO_HEIGHT, LOGO_WIDTH, LOGO_X, LOGO_Y, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::QuoteError;

fn font_name(font: Font) -> &'static str {
    match font {
        Font::Helvetica => "F1",
        Font::HelveticaBold => "F2",
    }
}

fn push_text(operations: &mut Vec<Operation>, x: f32, y: f32, font: Font, size: f32, color: Rgb, text: &str) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![font_name(font).into(), size.into()],
    ));
    operations.push(Operation::new(
        "rg",
        vec![color.r.into(), color.g.into(), color.b.into()],
    ));
    operations.push(Operation::new("Td", vec![x.into(), y.into()]));
    operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    operations.push(Operation::new("ET", vec![]));
}

fn push_rule(operations: &mut Vec<Operation>, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Rgb) {
    operations.push(Operation::new(
        "RG",
        vec![color.r.into(), color.g.into(), color.b.into()],
    ));
    operations.push(Operation::new("w", vec![width.into()]));
    operations.push(Operation::new("m", vec![x1.into(), y1.into()]));
    operations.push(Operation::new("l", vec![x2.into(), y2.into()]));
    operations.push(Operation::new("S", vec![]));
}

/// Encode composed elements into a single-page A4 document
pub fn encode(elements: &[Element], branding: Option<&Path>) -> Result<Vec<u8>, QuoteError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });

    let mut operations = Vec::new();
    for element in elements {
        match element {
            Element::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => push_text(&mut operations, *x, *y, *font, *size, *color, text),
            Element::Rule {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => push_rule(&mut operations, *x1, *y1, *x2, *y2, *width, *color),
        }
    }

    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| QuoteError::render(format!("encoding page content: {}", e)))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    // Resources live on the page itself so that the logo XObject added by
    // insert_image lands alongside the fonts rather than shadowing them.
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! {
                "F1" => font_regular,
                "F2" => font_bold,
            },
        },
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(path) = branding {
        let embedded = xobject::image(path).and_then(|image| {
            doc.insert_image(
                page_id,
                image,
                (LOGO_X, LOGO_Y),
                (LOGO_WIDTH, LOGO_HEIGHT),
            )
            .map(|_| ())
        });
        if let Err(e) = embedded {
            warn!(
                "branding image {} skipped, rendering without letterhead: {}",
                path.display(),
                e
            );
        }
    }

    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| QuoteError::render(format!("writing document: {}", e)))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout;

    #[test]
    fn test_encode_produces_pdf_bytes() {
        let elements = vec![layout::Element::Text {
            x: 50.0,
            y: 700.0,
            font: Font::HelveticaBold,
            size: 18.0,
            color: Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.6,
            },
            text: "PLATINUM LIFE QUOTATION".to_string(),
        }];

        let bytes = encode(&elements, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn test_encode_survives_unreadable_branding() {
        let elements = vec![layout::Element::Rule {
            x1: 50.0,
            y1: 700.0,
            x2: 500.0,
            y2: 700.0,
            width: 1.0,
            color: Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.6,
            },
        }];

        let bytes = encode(&elements, Some(Path::new("data/not_an_image.bin"))).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_text_with_parentheses_is_escaped() {
        let elements = vec![layout::Element::Text {
            x: 50.0,
            y: 700.0,
            font: Font::Helvetica,
            size: 12.0,
            color: Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.0,
            },
            text: "Client Name: Jane (Mwangi)".to_string(),
        }];

        // Literal parentheses in the client name must not break the document
        let bytes = encode(&elements, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
