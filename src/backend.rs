use crate::error::LayoutError;
use crate::units::Pt;

/// The two font styles a line of input may be rendered in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// The rendering capability the layout engine is driven against.
///
/// The engine itself performs no I/O: text measurement and all drawing
/// go through an implementation of this trait supplied by the caller.
/// A backend starts with a single open page; [`RenderBackend::new_page`]
/// appends and switches to the next one. Backends must not be shared
/// between concurrent layout calls.
pub trait RenderBackend {
    /// Measure the rendered width of `text` at the given size and weight.
    fn measure_width(&self, text: &str, size: Pt, weight: FontWeight) -> Result<Pt, LayoutError>;

    /// Open a fresh page and make it current.
    fn new_page(&mut self) -> Result<(), LayoutError>;

    /// Select the font weight used by subsequent draw calls.
    fn set_font(&mut self, weight: FontWeight) -> Result<(), LayoutError>;

    /// Select the font size used by subsequent draw calls.
    fn set_font_size(&mut self, size: Pt) -> Result<(), LayoutError>;

    /// Draw a text fragment on the current page. `y` is measured from
    /// the top of the page downwards and names the text baseline.
    fn draw_text(&mut self, text: &str, x: Pt, y: Pt) -> Result<(), LayoutError>;

    /// Finalize the document and serialize it.
    fn save(self) -> Result<Vec<u8>, LayoutError>
    where
        Self: Sized;
}
