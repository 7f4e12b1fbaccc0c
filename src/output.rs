use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::EnviError;
use crate::layout::Interleave;

/// Header sidecar extension.
pub const HEADER_EXTENSION: &str = "hdr";

/// Output file pair derived from a base path.
///
/// The base's file extension (text after the last `.` of the file name) is
/// replaced: `out/scene.csv` with `bil` gives `out/scene.bil` and
/// `out/scene.hdr`. Dots in directory names are left alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub binary: PathBuf,
    pub header: PathBuf,
}

impl OutputPaths {
    pub fn new(base: impl AsRef<Path>, interleave: Interleave) -> Self {
        let base = base.as_ref();
        Self {
            binary: base.with_extension(interleave.as_str()),
            header: base.with_extension(HEADER_EXTENSION),
        }
    }
}

/// Write `bytes` to `path` through a temp file in the same directory, then
/// rename it into place. Readers never observe a partially written file.
///
/// Failures are reported as [`EnviError::File`] naming `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), EnviError> {
    persist(path, bytes).map_err(|e| EnviError::File {
        path: path.to_path_buf(),
        source: e,
    })
}

fn persist(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
