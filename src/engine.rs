use crate::backend::RenderBackend;
use crate::classify::classify;
use crate::emit::emit;
use crate::error::LayoutError;
use crate::flow::{Page, PageFlow, Spacing};
use crate::geometry::PageGeometry;
use crate::wrap::wrap;
use tracing::debug;

/// Run the full pipeline: classify and wrap every input line, flow the
/// fragments across pages, and return the placements without touching
/// the backend's drawing side.
///
/// Input lines are split on `'\n'`; lines that are empty or whitespace
/// only are treated as blank and advance the cursor without placing
/// anything. The backend is used for measurement only.
pub fn flow_text<B: RenderBackend>(
    text: &str,
    geometry: PageGeometry,
    spacing: Spacing,
    backend: &B,
) -> Result<Vec<Page>, LayoutError> {
    geometry.validate()?;

    let mut flow = PageFlow::new(geometry, spacing);
    for line in text.split('\n') {
        if line.trim().is_empty() {
            flow.blank_line();
            continue;
        }
        let style = classify(line);
        for fragment in wrap(backend, line, geometry.content_width(), style)? {
            flow.place(fragment, style);
        }
    }

    let pages = flow.into_pages();
    debug!(
        pages = pages.len(),
        placements = pages.iter().map(|p| p.placements.len()).sum::<usize>(),
        "text flowed"
    );
    Ok(pages)
}

/// Lay `text` out against `geometry` and render it through `backend`,
/// returning the serialized document bytes.
///
/// This is the one-call entry point: validation, classification,
/// wrapping, pagination, emission, and `save` in a single pass. Each
/// invocation is independent; calls may run concurrently as long as
/// every call owns its backend.
pub fn layout<B: RenderBackend>(
    text: &str,
    geometry: PageGeometry,
    mut backend: B,
) -> Result<Vec<u8>, LayoutError> {
    let pages = flow_text(text, geometry, Spacing::default(), &backend)?;
    emit(&pages, &mut backend)?;
    let bytes = backend.save()?;
    debug!(bytes = bytes.len(), "document serialized");
    Ok(bytes)
}
