use crate::backend::{FontWeight, RenderBackend};
use crate::error::LayoutError;
use crate::flow::Page;
use crate::units::Pt;

/// Replay accumulated pages against a rendering backend.
///
/// The backend starts with page 0 open, so a new page is requested only
/// when the page index advances. Font weight and size are set lazily:
/// consecutive placements sharing a style produce a single pair of
/// `set_font`/`set_font_size` calls. A failed draw aborts immediately
/// and leaves the backend in whatever partial state it defines.
pub fn emit<B: RenderBackend>(pages: &[Page], backend: &mut B) -> Result<(), LayoutError> {
    let mut current_weight: Option<FontWeight> = None;
    let mut current_size: Option<Pt> = None;

    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            backend.new_page()?;
        }

        for placement in &page.placements {
            if current_weight != Some(placement.style.weight) {
                backend.set_font(placement.style.weight)?;
                current_weight = Some(placement.style.weight);
            }
            if current_size != Some(placement.style.size) {
                backend.set_font_size(placement.style.size)?;
                current_size = Some(placement.style.size);
            }
            backend.draw_text(&placement.text, placement.x, placement.y)?;
        }
    }

    Ok(())
}
