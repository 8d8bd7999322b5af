use crate::backend::FontWeight;
use crate::units::Pt;

/// Font size used for lines recognised as section headers.
pub const HEADER_SIZE: Pt = Pt(12.0);
/// Font size used for ordinary body lines.
pub const BODY_SIZE: Pt = Pt(10.0);

/// The style a classified line renders in: a font size and weight pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStyle {
    pub size: Pt,
    pub weight: FontWeight,
}

impl LineStyle {
    pub const HEADER: LineStyle = LineStyle {
        size: HEADER_SIZE,
        weight: FontWeight::Bold,
    };

    pub const BODY: LineStyle = LineStyle {
        size: BODY_SIZE,
        weight: FontWeight::Normal,
    };
}

/// Decide whether a line renders as a header (12pt bold) or body text
/// (10pt normal).
///
/// A line is a header when it is entirely uppercase letters and
/// whitespace (at least two characters, starting with a letter), or when
/// it opens with a Title Case word pair ("Work Experience"). The second
/// pattern knowingly also catches body lines that begin with a personal
/// name ("John Smith worked at..."); callers relying on the established
/// output depend on that behaviour, so don't tighten it here.
///
/// Whitespace-only lines are handled upstream as blank and never reach
/// the classifier.
pub fn classify(line: &str) -> LineStyle {
    if is_all_caps_heading(line) || is_title_case_heading(line) {
        LineStyle::HEADER
    } else {
        LineStyle::BODY
    }
}

/// Full match of `^[A-Z][A-Z\s]+$`: an uppercase letter followed by one
/// or more uppercase letters or whitespace characters.
fn is_all_caps_heading(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    let mut rest = 0usize;
    for ch in chars {
        if !(ch.is_ascii_uppercase() || ch.is_whitespace()) {
            return false;
        }
        rest += 1;
    }
    rest > 0
}

/// Prefix match of `^[A-Z][a-z]+ [A-Z]`: a capitalized word, a single
/// space, and another capital.
fn is_title_case_heading(line: &str) -> bool {
    let mut chars = line.chars().peekable();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    let mut lower = 0usize;
    while let Some(&ch) = chars.peek() {
        if ch.is_ascii_lowercase() {
            lower += 1;
            chars.next();
        } else {
            break;
        }
    }
    if lower == 0 {
        return false;
    }
    if chars.next() != Some(' ') {
        return false;
    }
    matches!(chars.next(), Some(ch) if ch.is_ascii_uppercase())
}
