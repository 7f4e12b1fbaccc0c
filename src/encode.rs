use std::borrow::Cow;
use std::io::BufRead;

use enough::Stop;
use tracing::{debug, warn};

use crate::data_type::DataType;
use crate::error::EnviError;
use crate::header::EnviHeader;
use crate::info::Dimensions;
use crate::layout::{ByteOrder, Interleave};
use crate::limits::Limits;

/// How to treat input whose record count differs from the cube size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordPolicy {
    /// Missing records encode as zero, surplus records are ignored.
    /// Both cases are logged.
    #[default]
    Lenient,
    /// Any mismatch fails with [`EnviError::RecordCount`].
    Strict,
}

/// Record accounting for one encode run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordStats {
    /// Records placed into the cube.
    pub consumed: usize,
    /// Cube elements with no input record (left as zero).
    pub missing: usize,
    /// Records after the cube was full.
    pub extra: usize,
    /// Placed records with no numeric prefix (encoded as zero).
    pub malformed: usize,
}

/// Encoded raster plus its header description.
#[derive(Clone, Debug)]
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub header: EnviHeader,
    pub records: RecordStats,
}

/// Builder for encoding text records into an ENVI raw buffer.
///
/// Records are consumed in line, sample, band order (band varies fastest)
/// whatever the output interleave; the interleave only decides where each
/// element lands.
///
/// ```
/// use zenenvi::{DataType, Dimensions, EncodeRequest, Interleave, Unstoppable};
///
/// let dims = Dimensions::new(1, 1, 3)?;
/// let image = EncodeRequest::new(dims, DataType::U8, Interleave::Bsq)
///     .encode_str("value\n10\n20\n30\n", Unstoppable)?;
/// assert_eq!(image.data, [10, 20, 30]);
/// # Ok::<(), zenenvi::EnviError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    dims: Dimensions,
    data_type: DataType,
    interleave: Interleave,
    byte_order: ByteOrder,
    limits: Option<&'a Limits>,
    policy: RecordPolicy,
}

impl<'a> EncodeRequest<'a> {
    /// Little-endian, lenient record policy, no limits.
    pub fn new(dims: Dimensions, data_type: DataType, interleave: Interleave) -> Self {
        Self {
            dims,
            data_type,
            interleave,
            byte_order: ByteOrder::Little,
            limits: None,
            policy: RecordPolicy::Lenient,
        }
    }

    /// Build a request matching an existing header.
    pub fn from_header(header: &EnviHeader) -> Self {
        Self::new(header.dims, header.data_type, header.interleave)
            .with_byte_order(header.byte_order)
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_record_policy(mut self, policy: RecordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The header describing this request's output.
    pub fn header(&self) -> EnviHeader {
        EnviHeader {
            dims: self.dims,
            data_type: self.data_type,
            interleave: self.interleave,
            byte_order: self.byte_order,
        }
    }

    /// Encode records held in memory. The first line is a column label.
    pub fn encode_str(&self, text: &str, stop: impl Stop) -> Result<EncodedImage, EnviError> {
        self.encode_records(text.as_bytes(), stop)
    }

    /// Encode records from a line reader. The first line is a column label.
    pub fn encode_records<R: BufRead>(
        &self,
        reader: R,
        stop: impl Stop,
    ) -> Result<EncodedImage, EnviError> {
        encode_records(self, reader, &stop)
    }
}

fn encode_records<R: BufRead>(
    req: &EncodeRequest<'_>,
    reader: R,
    stop: &dyn Stop,
) -> Result<EncodedImage, EnviError> {
    let dims = req.dims;
    if let Some(limits) = req.limits {
        limits.check(&dims)?;
    }
    let expected = dims.element_count()?;
    let len = dims.buffer_len(req.data_type)?;
    if let Some(limits) = req.limits {
        limits.check_memory(len)?;
    }

    debug!(
        lines = dims.lines,
        samples = dims.samples,
        bands = dims.bands,
        data_type = req.data_type.code(),
        interleave = %req.interleave,
        byte_order = req.byte_order.code(),
        bytes = len,
        "encoding raster"
    );

    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| EnviError::Allocation { bytes: len })?;
    data.resize(len, 0);

    let mut records = Records::new(reader);
    // Column label, never decoded.
    records.skip_record()?;

    let encode = req.data_type.element_encoder();
    let width = req.data_type.bytes_per_element();
    let mut stats = RecordStats::default();

    for i in 0..dims.lines {
        stop.check()?;
        for j in 0..dims.samples {
            for k in 0..dims.bands {
                let Some(text) = records.next_record()? else {
                    if req.policy == RecordPolicy::Strict {
                        return Err(EnviError::RecordCount {
                            expected,
                            actual: stats.consumed,
                        });
                    }
                    stats.missing += 1;
                    continue;
                };
                let p = req.interleave.element_index(&dims, i, j, k);
                let offset = p * width;
                let slot = data
                    .get_mut(offset..offset + width)
                    .ok_or(EnviError::DimensionsTooLarge {
                        lines: dims.lines,
                        samples: dims.samples,
                        bands: dims.bands,
                    })?;
                if !encode(&text, req.byte_order, slot) {
                    stats.malformed += 1;
                }
                stats.consumed += 1;
            }
        }
    }

    while records.skip_record()? {
        stats.extra += 1;
    }

    if stats.extra > 0 {
        if req.policy == RecordPolicy::Strict {
            return Err(EnviError::RecordCount {
                expected,
                actual: stats.consumed + stats.extra,
            });
        }
        warn!(
            expected,
            extra = stats.extra,
            "input has more records than the cube holds; surplus ignored"
        );
    }
    if stats.missing > 0 {
        warn!(
            expected,
            missing = stats.missing,
            "input ran out of records; remaining elements left as zero"
        );
    }
    if stats.malformed > 0 {
        warn!(
            malformed = stats.malformed,
            "records without a numeric value were encoded as zero"
        );
    }

    Ok(EncodedImage {
        data,
        header: req.header(),
        records: stats,
    })
}

/// Line-delimited record reader with a reusable, unbounded line buffer.
///
/// Lines are read as raw bytes; bytes that are not UTF-8 only affect the
/// record they appear in.
struct Records<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Read the next line without decoding it. Returns `false` at end of input.
    fn skip_record(&mut self) -> Result<bool, EnviError> {
        self.line.clear();
        Ok(self.reader.read_until(b'\n', &mut self.line)? != 0)
    }

    fn next_record(&mut self) -> Result<Option<Cow<'_, str>>, EnviError> {
        if !self.skip_record()? {
            return Ok(None);
        }
        let mut end = self.line.len();
        while end > 0 && matches!(self.line[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        Ok(Some(String::from_utf8_lossy(&self.line[..end])))
    }
}
