//! Character-width metrics for the built-in standard fonts.
//!
//! The PDF backend renders with the standard-14 Helvetica faces, which
//! a conforming reader supplies without embedding. Widths come from the
//! published AFM tables, expressed in 1/1000 of an em; a character's
//! rendered width is `units / 1000 * font_size`.

use crate::backend::FontWeight;
use crate::units::Pt;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Width table for one face: per-character advance widths with a
/// fallback for characters the table does not cover.
pub struct FontMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl FontMetrics {
    fn new(default_width: u16, widths: &[(char, u16)]) -> FontMetrics {
        FontMetrics {
            widths: widths.iter().copied().collect(),
            default_width,
        }
    }

    /// Advance width of one character, in 1/1000 em.
    pub fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

// Helvetica AFM advance widths for the printable ASCII range.
const HELVETICA: &[(char, u16)] = &[
    (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
    ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
    (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
    ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
    ('8', 556), ('9', 556), (':', 278), (';', 278), ('<', 584), ('=', 584),
    ('>', 584), ('?', 556), ('@', 1015), ('A', 667), ('B', 667), ('C', 722),
    ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
    ('J', 500), ('K', 667), ('L', 556), ('M', 833), ('N', 722), ('O', 778),
    ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
    ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 278),
    ('\\', 278), (']', 278), ('^', 469), ('_', 556), ('`', 333), ('a', 556),
    ('b', 556), ('c', 500), ('d', 556), ('e', 556), ('f', 278), ('g', 556),
    ('h', 556), ('i', 222), ('j', 222), ('k', 500), ('l', 222), ('m', 833),
    ('n', 556), ('o', 556), ('p', 556), ('q', 556), ('r', 333), ('s', 500),
    ('t', 278), ('u', 556), ('v', 500), ('w', 722), ('x', 500), ('y', 500),
    ('z', 500), ('{', 334), ('|', 260), ('}', 334), ('~', 584),
];

// Helvetica-Bold AFM advance widths for the printable ASCII range.
const HELVETICA_BOLD: &[(char, u16)] = &[
    (' ', 278), ('!', 333), ('"', 474), ('#', 556), ('$', 556), ('%', 889),
    ('&', 722), ('\'', 238), ('(', 333), (')', 333), ('*', 389), ('+', 584),
    (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
    ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
    ('8', 556), ('9', 556), (':', 333), (';', 333), ('<', 584), ('=', 584),
    ('>', 584), ('?', 611), ('@', 975), ('A', 722), ('B', 722), ('C', 722),
    ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
    ('J', 556), ('K', 722), ('L', 611), ('M', 833), ('N', 722), ('O', 778),
    ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
    ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 333),
    ('\\', 278), (']', 333), ('^', 584), ('_', 556), ('`', 333), ('a', 556),
    ('b', 611), ('c', 556), ('d', 611), ('e', 556), ('f', 333), ('g', 611),
    ('h', 611), ('i', 278), ('j', 278), ('k', 556), ('l', 278), ('m', 889),
    ('n', 611), ('o', 611), ('p', 611), ('q', 611), ('r', 389), ('s', 556),
    ('t', 333), ('u', 611), ('v', 556), ('w', 778), ('x', 556), ('y', 556),
    ('z', 500), ('{', 389), ('|', 280), ('}', 389), ('~', 584),
];

lazy_static! {
    static ref FONT_METRICS: HashMap<FontWeight, FontMetrics> = {
        let mut metrics = HashMap::new();
        metrics.insert(FontWeight::Normal, FontMetrics::new(556, HELVETICA));
        metrics.insert(FontWeight::Bold, FontMetrics::new(611, HELVETICA_BOLD));
        metrics
    };
}

/// Width table for the given face.
pub fn metrics_for(weight: FontWeight) -> &'static FontMetrics {
    &FONT_METRICS[&weight]
}

/// Calculate the rendered width of a string at the given size and weight.
pub fn width_of_text(text: &str, size: Pt, weight: FontWeight) -> Pt {
    let metrics = metrics_for(weight);
    let units: u32 = text.chars().map(|ch| metrics.char_width(ch) as u32).sum();
    size * (units as f32 / 1000.0)
}
