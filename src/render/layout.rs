//! Fixed-coordinate composition of the quotation page
//!
//! The page is a flat list of drawing elements in PDF user space (origin at
//! the bottom left), so the layout can be inspected and tested without
//! touching the PDF encoder. One A4 portrait page holds the whole quotation.

use rust_decimal::Decimal;

use super::format::kshs;
use crate::quote::Quotation;

/// A4 portrait in PDF points
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Letterhead logo box, top right
pub const LOGO_WIDTH: f32 = 100.0;
pub const LOGO_HEIGHT: f32 = 60.0;
pub const LOGO_X: f32 = PAGE_WIDTH - LOGO_WIDTH - 50.0;
pub const LOGO_Y: f32 = PAGE_HEIGHT - LOGO_HEIGHT - 40.0;

/// Placeholder for presenter fields left blank on the form
pub const BLANK_FIELD: &str = "__________________";

/// Fixed notice shown under the premium figures
pub const TAX_RELIEF_NOTICE: &str = "Enjoy up to Kshs 60,000 per year in tax relief.";

/// Fixed legal paragraph closing the document
pub const DISCLAIMER: &str = "Liberty Life has taken all reasonable steps towards ensuring that \
the information represented herein is true, current and accurate. The illustrative values \
represented here are based on stated assumptions and are indicative rates only. The figures may \
vary dependent on factors such as the age and gender of client. Accordingly, Liberty Life cannot \
be held liable for any damages arising from any transactions or omissions and the resultant \
actions arising from the information contained in the illustrative values.";

const MARGIN_X: f32 = 50.0;
const INDENT_X: f32 = 70.0;
const LINE_STEP: f32 = 15.0;
const DISCLAIMER_LEADING: f32 = 12.0;
const DISCLAIMER_WRAP_CHARS: usize = 90;

const DARK_BLUE: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.6,
};
const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

/// Fill or stroke color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Fonts used on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

/// One drawing element of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: String,
    },
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
    },
}

fn heading(y: f32, size: f32, text: &str) -> Element {
    Element::Text {
        x: MARGIN_X,
        y,
        font: Font::HelveticaBold,
        size,
        color: DARK_BLUE,
        text: text.to_string(),
    }
}

fn detail(y: f32, text: String) -> Element {
    Element::Text {
        x: INDENT_X,
        y,
        font: Font::Helvetica,
        size: 12.0,
        color: BLACK,
        text,
    }
}

/// Lay out the full quotation page
pub fn compose(quotation: &Quotation) -> Vec<Element> {
    let input = &quotation.input;
    let breakdown = &quotation.breakdown;
    let presenter = &quotation.presenter;

    let mut elements = vec![
        Element::Text {
            x: MARGIN_X,
            y: PAGE_HEIGHT - 80.0,
            font: Font::HelveticaBold,
            size: 18.0,
            color: DARK_BLUE,
            text: "PLATINUM LIFE QUOTATION".to_string(),
        },
        Element::Rule {
            x1: MARGIN_X,
            y1: PAGE_HEIGHT - 90.0,
            x2: PAGE_WIDTH - MARGIN_X,
            y2: PAGE_HEIGHT - 90.0,
            width: 1.0,
            color: DARK_BLUE,
        },
    ];

    let mut y = PAGE_HEIGHT - 140.0;
    elements.push(heading(y, 14.0, "Client Details:"));
    y -= 20.0;
    elements.push(detail(y, format!("Client Name: {}", input.client_name)));
    y -= LINE_STEP;
    elements.push(detail(y, format!("Age: {}", input.age)));
    y -= LINE_STEP;
    elements.push(detail(y, format!("Gender: {}", input.gender)));
    y -= LINE_STEP;
    elements.push(detail(y, format!("Smoker: {}", input.smoker_status)));
    y -= LINE_STEP;
    elements.push(detail(y, format!("Education Level: {}", input.education)));
    y -= LINE_STEP;
    elements.push(detail(
        y,
        format!("Sum Assured: {}", kshs(Decimal::from(input.sum_assured))),
    ));

    y -= 40.0;
    elements.push(heading(y, 14.0, "Premium Breakdown:"));
    y -= 20.0;
    elements.push(detail(y, format!("Base Premium: {}", kshs(breakdown.base))));
    y -= LINE_STEP;
    elements.push(detail(y, format!("PHCF Levy: {}", kshs(breakdown.phcf))));
    y -= LINE_STEP;
    elements.push(detail(y, format!("Stamp Duty: {}", kshs(breakdown.stamp_duty))));

    y -= 30.0;
    elements.push(heading(y, 14.0, "Total Monthly Premium:"));
    y -= 20.0;
    elements.push(Element::Text {
        x: INDENT_X,
        y,
        font: Font::HelveticaBold,
        size: 13.0,
        color: BLACK,
        text: kshs(breakdown.total),
    });

    y -= 50.0;
    elements.push(heading(y, 14.0, "Presenter Details:"));
    y -= 20.0;
    elements.push(detail(
        y,
        format!(
            "Presenter Name: {}",
            presenter.presenter_name.as_deref().unwrap_or(BLANK_FIELD)
        ),
    ));
    y -= LINE_STEP;
    elements.push(detail(
        y,
        format!(
            "Distribution Channel: {}",
            presenter
                .distribution_channel
                .as_deref()
                .unwrap_or(BLANK_FIELD)
        ),
    ));
    y -= LINE_STEP;
    elements.push(detail(
        y,
        format!(
            "Presenter Code: {}",
            presenter.presenter_code.as_deref().unwrap_or(BLANK_FIELD)
        ),
    ));

    y -= 40.0;
    elements.push(heading(y, 14.0, "Tax Relief:"));
    y -= 20.0;
    elements.push(detail(y, TAX_RELIEF_NOTICE.to_string()));

    y -= 60.0;
    elements.push(heading(y, 12.0, "Disclaimer:"));
    y -= 20.0;
    let mut line_y = y - 15.0;
    for line in wrap_words(DISCLAIMER, DISCLAIMER_WRAP_CHARS) {
        elements.push(Element::Text {
            x: INDENT_X,
            y: line_y,
            font: Font::Helvetica,
            size: 10.0,
            color: BLACK,
            text: line,
        });
        line_y -= DISCLAIMER_LEADING;
    }

    elements
}

/// Greedy word wrap at a character limit
pub(crate) fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{
        EducationLevel, Gender, PremiumBreakdown, PresenterInfo, QuotationInput, SmokerStatus,
    };
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn fixture(presenter: PresenterInfo) -> Quotation {
        Quotation {
            input: QuotationInput {
                client_name: "Jane Mwangi".to_string(),
                age: 30,
                gender: Gender::Female,
                smoker_status: SmokerStatus::NonSmoker,
                education: EducationLevel::Tertiary,
                sum_assured: 1_000_000,
            },
            presenter,
            breakdown: PremiumBreakdown {
                base: dec!(3800),
                phcf: dec!(9.5),
                stamp_duty: dec!(40),
                total: dec!(3849.5),
            },
            quoted_at: Utc::now(),
        }
    }

    fn texts(elements: &[Element]) -> Vec<&str> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Text { text, .. } => Some(text.as_str()),
                Element::Rule { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_compose_opens_with_title_and_rule() {
        let elements = compose(&fixture(PresenterInfo::default()));

        match &elements[0] {
            Element::Text { text, size, .. } => {
                assert_eq!(text, "PLATINUM LIFE QUOTATION");
                assert_eq!(*size, 18.0);
            }
            other => panic!("expected title text, got {:?}", other),
        }
        assert!(matches!(elements[1], Element::Rule { .. }));
    }

    #[test]
    fn test_compose_shows_every_money_line_via_kshs() {
        let quotation = fixture(PresenterInfo::default());
        let elements = compose(&quotation);
        let texts = texts(&elements);

        assert!(texts.contains(&"Sum Assured: KShs 1,000,000.00"));
        assert!(texts.contains(&"Base Premium: KShs 3,800.00"));
        assert!(texts.contains(&"PHCF Levy: KShs 9.50"));
        assert!(texts.contains(&"Stamp Duty: KShs 40.00"));
        // The emphasized total is exactly what kshs() produces
        assert!(texts.contains(&kshs(quotation.breakdown.total).as_str()));
    }

    #[test]
    fn test_total_line_is_emphasized() {
        let quotation = fixture(PresenterInfo::default());
        let total_text = kshs(quotation.breakdown.total);
        let elements = compose(&quotation);

        let total = elements
            .iter()
            .find_map(|e| match e {
                Element::Text {
                    font, size, text, ..
                } if text == &total_text => Some((*font, *size)),
                _ => None,
            })
            .expect("total line missing");
        assert_eq!(total, (Font::HelveticaBold, 13.0));
    }

    #[test]
    fn test_blank_presenter_fields_render_placeholders() {
        let elements = compose(&fixture(PresenterInfo::default()));
        let texts = texts(&elements);

        assert!(texts.contains(&format!("Presenter Name: {}", BLANK_FIELD).as_str()));
        assert!(texts.contains(&format!("Distribution Channel: {}", BLANK_FIELD).as_str()));
        assert!(texts.contains(&format!("Presenter Code: {}", BLANK_FIELD).as_str()));
    }

    #[test]
    fn test_filled_presenter_fields_render_values() {
        let presenter = PresenterInfo {
            presenter_name: Some("A. Otieno".to_string()),
            distribution_channel: Some("Agency".to_string()),
            presenter_code: Some("AG-114".to_string()),
        };
        let elements = compose(&fixture(presenter));
        let texts = texts(&elements);

        assert!(texts.contains(&"Presenter Name: A. Otieno"));
        assert!(texts.contains(&"Distribution Channel: Agency"));
        assert!(texts.contains(&"Presenter Code: AG-114"));
    }

    #[test]
    fn test_all_elements_inside_the_page() {
        for element in compose(&fixture(PresenterInfo::default())) {
            match element {
                Element::Text { x, y, .. } => {
                    assert!(x >= 0.0 && x <= PAGE_WIDTH);
                    assert!(y >= 0.0 && y <= PAGE_HEIGHT);
                }
                Element::Rule { x1, y1, x2, y2, .. } => {
                    assert!(x1 >= 0.0 && x2 <= PAGE_WIDTH);
                    assert!(y1 >= 0.0 && y2 <= PAGE_HEIGHT);
                }
            }
        }
    }

    #[test]
    fn test_wrap_words_respects_limit_and_keeps_text() {
        let lines = wrap_words(DISCLAIMER, DISCLAIMER_WRAP_CHARS);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= DISCLAIMER_WRAP_CHARS, "too long: {}", line);
        }
        assert_eq!(lines.join(" "), DISCLAIMER);
    }
}
