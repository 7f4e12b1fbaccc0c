//! # zenenvi
//!
//! Encoder for ENVI raw rasters: a column of numeric text records becomes a
//! flat binary cube (`lines x samples x bands`) plus a `.hdr` sidecar.
//!
//! ## Layout
//!
//! Records are always consumed in line, sample, band order (band fastest).
//! The output interleave decides where each element is placed:
//!
//! - **bsq** (band sequential): `line * samples + sample + band * lines * samples`
//! - **bil** (band interleaved by line): `line * samples * bands + sample + band * samples`
//! - **bip** (band interleaved by pixel): `line * samples * bands + sample * bands + band`
//!
//! ## Supported data types
//!
//! ENVI codes 1 (u8), 2 (i16), 3 (i32), 4 (f32), 5 (f64) and 12 (u16), in
//! either byte order. Integer records are read like C `atoi` and narrowed
//! with wrapping; float records like `atof`. Text with no number encodes as 0.
//!
//! ## Non-Goals
//!
//! - The full ENVI header keyword set (only the six layout fields)
//! - Decoding ENVI rasters back to text
//! - Streaming output; the whole cube is built in memory
//!
//! ## Usage
//!
//! ```no_run
//! use zenenvi::{ByteOrder, Conversion, DataType, Dimensions, EncodeRequest, Interleave};
//! use enough::Unstoppable;
//!
//! let dims = Dimensions::new(100, 200, 3)?;
//! let request = EncodeRequest::new(dims, DataType::F32, Interleave::Bip)
//!     .with_byte_order(ByteOrder::Big);
//!
//! // Writes scene.bip and scene.hdr next to each other.
//! let report = Conversion::new("values.csv", "scene.csv", request).run(Unstoppable)?;
//! println!("{} bytes -> {}", report.bytes_written, report.paths.binary.display());
//! # Ok::<(), zenenvi::EnviError>(())
//! ```

#![forbid(unsafe_code)]

mod convert;
mod data_type;
mod encode;
mod error;
pub mod header;
mod info;
mod layout;
mod limits;
pub mod output;
mod scalar;

// Re-exports
pub use convert::{Conversion, ConversionReport};
pub use data_type::{DataType, ElementEncoder};
pub use encode::{EncodeRequest, EncodedImage, RecordPolicy, RecordStats};
pub use enough::{Stop, Unstoppable};
pub use error::EnviError;
pub use header::EnviHeader;
pub use info::Dimensions;
pub use layout::{ByteOrder, Interleave};
pub use limits::Limits;
pub use output::OutputPaths;

/// Encode in-memory records into the layout `header` describes.
///
/// The first line of `text` is a column label and is skipped.
pub fn encode_str(
    text: &str,
    header: &EnviHeader,
    stop: impl Stop,
) -> Result<EncodedImage, EnviError> {
    EncodeRequest::from_header(header).encode_str(text, stop)
}
