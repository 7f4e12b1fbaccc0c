//! File-to-file conversion: text records in, ENVI raw file and header out.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use enough::Stop;
use tracing::info;

use crate::encode::{EncodeRequest, RecordStats};
use crate::error::EnviError;
use crate::output::{OutputPaths, write_atomic};

/// Summary of a completed conversion.
#[derive(Clone, Debug)]
pub struct ConversionReport {
    pub paths: OutputPaths,
    pub bytes_written: usize,
    pub records: RecordStats,
}

/// One input file converted into a `.bsq`/`.bil`/`.bip` file plus `.hdr`.
#[derive(Clone, Debug)]
pub struct Conversion<'a> {
    input: PathBuf,
    paths: OutputPaths,
    request: EncodeRequest<'a>,
}

impl<'a> Conversion<'a> {
    /// `output_base` has its extension replaced for both outputs.
    pub fn new(
        input: impl Into<PathBuf>,
        output_base: impl AsRef<Path>,
        request: EncodeRequest<'a>,
    ) -> Self {
        let paths = OutputPaths::new(output_base, request.header().interleave);
        Self {
            input: input.into(),
            paths,
            request,
        }
    }

    /// Read and encode the whole input, then write the binary file and the
    /// header. Nothing is written if reading or encoding fails.
    pub fn run(&self, stop: impl Stop) -> Result<ConversionReport, EnviError> {
        let file = File::open(&self.input).map_err(|e| EnviError::from(e).at(&self.input))?;
        let image = self
            .request
            .encode_records(BufReader::new(file), stop)
            .map_err(|e| e.at(&self.input))?;

        write_atomic(&self.paths.binary, &image.data)?;
        info!(path = %self.paths.binary.display(), bytes = image.data.len(), "wrote raster");

        let header = image.header.to_string();
        write_atomic(&self.paths.header, header.as_bytes())?;
        info!(path = %self.paths.header.display(), "wrote header");

        Ok(ConversionReport {
            paths: self.paths.clone(),
            bytes_written: image.data.len(),
            records: image.records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;
    use crate::info::Dimensions;
    use crate::layout::Interleave;
    use enough::Unstoppable;

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let req = EncodeRequest::new(Dimensions::new(1, 1, 1).unwrap(), DataType::U8, Interleave::Bsq);
        let conv = Conversion::new(dir.path().join("absent.csv"), dir.path().join("out.csv"), req);
        match conv.run(Unstoppable) {
            Err(EnviError::File { path, .. }) => assert!(path.ends_with("absent.csv")),
            other => panic!("expected File error, got {other:?}"),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "band\n1\n2\n").unwrap();
        let req = EncodeRequest::new(Dimensions::new(1, 2, 1).unwrap(), DataType::U8, Interleave::Bil);
        let report = Conversion::new(&input, dir.path().join("out.csv"), req)
            .run(Unstoppable)
            .unwrap();
        assert_eq!(report.bytes_written, 2);
        assert_eq!(std::fs::read(&report.paths.binary).unwrap(), [1, 2]);
        assert!(report.paths.binary.ends_with("out.bil"));
        let hdr = std::fs::read_to_string(&report.paths.header).unwrap();
        assert!(hdr.starts_with("ENVI\nlines = 1\n"));
    }
}
