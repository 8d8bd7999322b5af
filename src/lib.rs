//! pageflow flows plain text into paginated, fixed-page-size documents.
//!
//! The pipeline classifies each input line as a header or body line,
//! wraps it to the page's content width, paginates the wrapped
//! fragments with a top-down cursor, and replays the resulting
//! placements against a rendering backend. A built-in [`PdfBackend`]
//! produces letter-style PDFs with the standard Helvetica faces; any
//! other target can be driven by implementing [`RenderBackend`].
//!
//! # Example
//!
//! ```
//! use pageflow::{layout, Info, PageGeometry, PdfBackend, Pt};
//! use pageflow::pagesize::LETTER;
//!
//! let geometry = PageGeometry::new(LETTER, Pt(40.0));
//! let backend = PdfBackend::new(geometry).with_info(Info::new().title("Tailored Resume"));
//!
//! let text = "SKILLS\nPython, Go, Rust";
//! let bytes = layout(text, geometry, backend).expect("layout succeeds");
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

mod backend;
pub use backend::*;

mod classify;
pub use classify::*;

mod emit;
pub use emit::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod flow;
pub use flow::*;

mod geometry;
pub use geometry::*;

mod info;
pub use info::*;

/// Character-width tables for the built-in standard fonts
pub mod metrics;

/// Pre-defined page sizes for common paper formats
pub mod pagesize;

mod pdf;
pub use pdf::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;
