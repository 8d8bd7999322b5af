//! End-to-end tests: plain text through the full pipeline to PDF bytes.

use pageflow::pagesize::LETTER;
use pageflow::{
    flow_text, layout, FontWeight, Info, LayoutError, PageGeometry, PdfBackend, Pt, RenderBackend,
    Spacing,
};

fn letter() -> PageGeometry {
    PageGeometry::new(LETTER, Pt(40.0))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Number of page objects in the document (excluding the page tree node).
fn page_count(bytes: &[u8]) -> usize {
    let all = bytes.windows(b"/Type /Page".len()).filter(|w| *w == b"/Type /Page").count();
    let trees = bytes.windows(b"/Type /Pages".len()).filter(|w| *w == b"/Type /Pages").count();
    all - trees
}

const RESUME: &str = "\
JANE DOE
jane@example.com

SUMMARY
Backend engineer with eight years of experience building data-heavy
services and the occasional compiler. Comfortable owning systems from
prototype to production.

SKILLS
Python, Go, Rust, PostgreSQL, Kafka, Kubernetes

WORK EXPERIENCE
Initech, Senior Engineer (2019-2024)
Led the migration of the reporting pipeline to a streaming
architecture, cutting end-of-day latency from hours to minutes.";

#[test]
fn resume_renders_to_a_single_page_pdf() {
    let backend = PdfBackend::new(letter());
    let bytes = layout(RESUME, letter(), backend).unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
    // headers present -> the bold face must be referenced
    assert!(contains(&bytes, b"Helvetica-Bold"));
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn pdf_output_is_deterministic_modulo_metadata() {
    // no Info attached: no creation-date timestamp in the output
    let a = layout(RESUME, letter(), PdfBackend::new(letter())).unwrap();
    let b = layout(RESUME, letter(), PdfBackend::new(letter())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn long_input_spills_onto_further_pages() {
    let mut text = String::from("EXPERIENCE\n");
    for i in 0..120 {
        text.push_str(&format!("Did impactful thing number {i} at work.\n"));
    }
    let backend = PdfBackend::new(letter());
    let bytes = layout(&text, letter(), backend).unwrap();
    assert!(page_count(&bytes) >= 2);
}

#[test]
fn placements_match_the_pdf_page_structure() {
    let mut text = String::new();
    for i in 0..200 {
        text.push_str(&format!("line {i}\n"));
    }
    let measure = PdfBackend::new(letter());
    let pages = flow_text(&text, letter(), Spacing::default(), &measure).unwrap();

    let bytes = layout(&text, letter(), PdfBackend::new(letter())).unwrap();
    assert_eq!(page_count(&bytes), pages.len());
}

#[test]
fn empty_input_still_produces_a_valid_single_page_document() {
    let bytes = layout("", letter(), PdfBackend::new(letter())).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn metadata_round_trips_into_the_document() {
    let info = Info::new()
        .title("tailored-resume.pdf")
        .author("Jane Doe")
        .keywords("resume, tailored");
    let backend = PdfBackend::new(letter()).with_info(info);
    let bytes = layout(RESUME, letter(), backend).unwrap();
    assert!(contains(&bytes, b"tailored-resume.pdf"));
    assert!(contains(&bytes, b"Jane Doe"));
}

#[test]
fn invalid_geometry_fails_before_any_rendering() {
    let geometry = PageGeometry::new(LETTER, Pt(-1.0));
    let err = layout(RESUME, geometry, PdfBackend::new(geometry)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidGeometry { .. }));
}

#[test]
fn typographic_punctuation_renders_fine() {
    // word processors paste curly apostrophes and en dashes into resumes
    let text = "Led the team\u{2019}s migration \u{2013} 2019";
    let bytes = layout(text, letter(), PdfBackend::new(letter())).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn unencodable_input_surfaces_a_render_error() {
    let err = layout("snowman \u{2603}", letter(), PdfBackend::new(letter())).unwrap_err();
    assert!(matches!(err, LayoutError::Render(_)));
}

#[test]
fn wrapped_lines_respect_the_content_width() {
    let backend = PdfBackend::new(letter());
    let long_line = "a line that keeps going and going, repeating itself over and over, \
                     until it cannot possibly fit the printable width of a letter page";
    let pages = flow_text(long_line, letter(), Spacing::default(), &backend).unwrap();

    let placements = &pages[0].placements;
    assert!(placements.len() > 1, "expected the line to wrap");
    for p in placements {
        let width = backend
            .measure_width(&p.text, p.style.size, FontWeight::Normal)
            .unwrap();
        assert!(width <= letter().content_width());
    }
}
