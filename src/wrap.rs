use crate::backend::RenderBackend;
use crate::classify::LineStyle;
use crate::error::LayoutError;
use crate::units::Pt;

/// Split a single input line into fragments that each fit `max_width`.
///
/// Greedy word wrap: words are accumulated onto the current fragment
/// until appending the next one would make the measured width exceed
/// `max_width`, at which point the fragment is emitted and the word
/// starts the next one. A single word wider than `max_width` is emitted
/// on its own fragment, unsplit; overflow is preferred over hyphenation
/// or truncation.
///
/// Interior runs of whitespace collapse to single spaces. A line with at
/// least one non-whitespace character always yields at least one
/// fragment; a whitespace-only line yields none (the flow treats those
/// as blank before wrapping is ever invoked).
pub fn wrap<B: RenderBackend>(
    backend: &B,
    line: &str,
    max_width: Pt,
    style: LineStyle,
) -> Result<Vec<String>, LayoutError> {
    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let mut candidate = String::with_capacity(current.len() + 1 + word.len());
        candidate.push_str(&current);
        candidate.push(' ');
        candidate.push_str(word);

        if backend.measure_width(&candidate, style.size, style.weight)? > max_width {
            fragments.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        fragments.push(current);
    }

    Ok(fragments)
}
