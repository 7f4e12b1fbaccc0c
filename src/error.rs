use std::path::PathBuf;

use enough::StopReason;

/// Errors from ENVI encoding, header handling and output writing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EnviError {
    #[error("invalid dimensions: lines, samples and bands must all be at least 1")]
    InvalidDimensions,

    #[error("unsupported data type code: {0}")]
    UnsupportedDataType(u8),

    #[error("unknown interleave: {0:?} (expected bsq, bil or bip)")]
    UnknownInterleave(String),

    #[error("unknown byte order code: {0} (expected 0 or 1)")]
    UnknownByteOrder(u8),

    #[error("dimensions too large: {lines}x{samples}x{bands}")]
    DimensionsTooLarge {
        lines: usize,
        samples: usize,
        bands: usize,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("failed to allocate {bytes} bytes for output buffer")]
    Allocation { bytes: usize },

    #[error("record count mismatch: expected {expected}, got {actual}")]
    RecordCount { expected: usize, actual: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for EnviError {
    fn from(r: StopReason) -> Self {
        EnviError::Cancelled(r)
    }
}

impl EnviError {
    /// Attach `path` to a bare I/O error.
    pub(crate) fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            EnviError::Io(source) => EnviError::File {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
