use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GsrError {
    /// The named input does not exist or cannot be opened.
    #[error("cannot open '{}': {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structural violation of the binary snapshot format: framing
    /// mismatch, truncated stream, or a block whose length does not match
    /// what the header implies.
    #[error("format error: {0}")]
    Format(String),

    /// Propagated I/O error while reading a stream mid-decode.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Total mass of the selected species is zero, so the center of mass
    /// is undefined.
    #[error("total mass of selected species is zero")]
    ZeroTotalMass,
}
