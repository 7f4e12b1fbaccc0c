//! ENVI header sidecar (`.hdr`).
//!
//! Only the six fields describing the raw layout are written or read:
//!
//! ```text
//! ENVI
//! lines = 10
//! samples = 20
//! bands = 3
//! data type = 4
//! interleave = bsq
//! byte order = 0
//! ```

use core::fmt;
use core::str::FromStr;

use crate::data_type::DataType;
use crate::error::EnviError;
use crate::info::Dimensions;
use crate::layout::{ByteOrder, Interleave};

/// Header magic, always the first line.
pub const MAGIC: &str = "ENVI";

/// Layout description of one ENVI raw file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnviHeader {
    pub dims: Dimensions,
    pub data_type: DataType,
    pub interleave: Interleave,
    pub byte_order: ByteOrder,
}

impl fmt::Display for EnviHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{MAGIC}")?;
        writeln!(f, "lines = {}", self.dims.lines)?;
        writeln!(f, "samples = {}", self.dims.samples)?;
        writeln!(f, "bands = {}", self.dims.bands)?;
        writeln!(f, "data type = {}", self.data_type)?;
        writeln!(f, "interleave = {}", self.interleave)?;
        writeln!(f, "byte order = {}", self.byte_order)
    }
}

impl FromStr for EnviHeader {
    type Err = EnviError;

    /// Parse a header. Keys other than the six layout fields are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        if lines.next().map(str::trim) != Some(MAGIC) {
            return Err(EnviError::InvalidHeader("missing ENVI magic".into()));
        }

        let mut fields: [Option<&str>; 6] = [None; 6];
        for line in lines {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "lines" => 0,
                "samples" => 1,
                "bands" => 2,
                "data type" => 3,
                "interleave" => 4,
                "byte order" => 5,
                _ => continue,
            };
            fields[slot] = Some(value.trim());
        }

        let [lines, samples, bands, data_type, interleave, byte_order] = fields;
        let dims = Dimensions::new(
            number("lines", lines)?,
            number("samples", samples)?,
            number("bands", bands)?,
        )?;
        Ok(EnviHeader {
            dims,
            data_type: DataType::from_code(number("data type", data_type)?)?,
            interleave: required("interleave", interleave)?
                .to_ascii_lowercase()
                .parse()?,
            byte_order: ByteOrder::from_code(number("byte order", byte_order)?)?,
        })
    }
}

fn required<'a>(key: &str, value: Option<&'a str>) -> Result<&'a str, EnviError> {
    value.ok_or_else(|| EnviError::InvalidHeader(format!("missing field `{key}`")))
}

fn number<T: FromStr>(key: &str, value: Option<&str>) -> Result<T, EnviError> {
    let value = required(key, value)?;
    value
        .parse()
        .map_err(|_| EnviError::InvalidHeader(format!("bad value for `{key}`: {value:?}")))
}
