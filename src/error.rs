use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The requested page geometry cannot hold any content. Rejected
    /// before any line is processed.
    #[error("invalid page geometry {width} x {height} with margin {margin}: {reason}")]
    InvalidGeometry {
        width: Pt,
        height: Pt,
        margin: Pt,
        reason: &'static str,
    },

    /// The backend could not measure a piece of text. Layout aborts;
    /// measuring is deterministic so there is nothing to retry.
    #[error("could not measure text: {0}")]
    Measurement(String),

    /// The backend rejected a draw call. Layout aborts; the partially
    /// built document is backend-defined.
    #[error("could not render text: {0}")]
    Render(String),

    /// An I/O error occurred while writing the finished document. The
    /// built-in [`PdfBackend`](crate::PdfBackend) renders to memory and
    /// never raises this; backends that stream to disk or a socket can
    /// propagate their errors through it with `?`.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
