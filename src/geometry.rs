use crate::error::LayoutError;
use crate::pagesize::PageSize;
use crate::units::Pt;

/// The fixed page geometry a document is laid out against: page width,
/// page height, and a uniform margin on all four sides.
///
/// The vertical coordinate system is top-down: `y = margin` is the first
/// usable line position and `y = height - margin` the last. Backends that
/// draw in a bottom-up space (PDF does) convert when drawing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
    pub margin: Pt,
}

impl PageGeometry {
    /// Create a geometry from a named page size and a uniform margin.
    pub fn new(size: PageSize, margin: Pt) -> PageGeometry {
        PageGeometry {
            width: size.0,
            height: size.1,
            margin,
        }
    }

    /// Check that the geometry leaves a usable content area. All three
    /// lengths must be positive and the margins may not meet or cross in
    /// either direction.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let reason = if self.width <= Pt(0.0) || self.height <= Pt(0.0) {
            Some("page dimensions must be positive")
        } else if self.margin <= Pt(0.0) {
            Some("margin must be positive")
        } else if self.margin * 2.0 >= self.width || self.margin * 2.0 >= self.height {
            Some("margins leave no room for content")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(LayoutError::InvalidGeometry {
                width: self.width,
                height: self.height,
                margin: self.margin,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// The horizontal space available to a line of text.
    pub fn content_width(&self) -> Pt {
        self.width - self.margin * 2.0
    }

    /// The largest `y` at which a line may still be placed. Past this the
    /// flow opens a new page.
    pub fn max_y(&self) -> Pt {
        self.height - self.margin
    }
}
