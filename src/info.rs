use crate::data_type::DataType;
use crate::error::EnviError;

/// Logical extent of the raster cube.
///
/// Every axis is at least 1; construct through [`Dimensions::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub lines: usize,
    pub samples: usize,
    pub bands: usize,
}

impl Dimensions {
    pub fn new(lines: usize, samples: usize, bands: usize) -> Result<Self, EnviError> {
        if lines == 0 || samples == 0 || bands == 0 {
            return Err(EnviError::InvalidDimensions);
        }
        Ok(Self {
            lines,
            samples,
            bands,
        })
    }

    /// Total element count (lines * samples * bands).
    pub fn element_count(&self) -> Result<usize, EnviError> {
        self.lines
            .checked_mul(self.samples)
            .and_then(|ls| ls.checked_mul(self.bands))
            .ok_or(self.too_large())
    }

    /// Output buffer size in bytes for the given data type.
    pub fn buffer_len(&self, data_type: DataType) -> Result<usize, EnviError> {
        self.element_count()?
            .checked_mul(data_type.bytes_per_element())
            .ok_or(self.too_large())
    }

    fn too_large(&self) -> EnviError {
        EnviError::DimensionsTooLarge {
            lines: self.lines,
            samples: self.samples,
            bands: self.bands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_axis_rejected() {
        assert!(matches!(
            Dimensions::new(0, 1, 1),
            Err(EnviError::InvalidDimensions)
        ));
        assert!(Dimensions::new(1, 0, 1).is_err());
        assert!(Dimensions::new(1, 1, 0).is_err());
    }

    #[test]
    fn buffer_len_scales_with_width() {
        let dims = Dimensions::new(10, 20, 3).unwrap();
        assert_eq!(dims.element_count().unwrap(), 600);
        assert_eq!(dims.buffer_len(DataType::U8).unwrap(), 600);
        assert_eq!(dims.buffer_len(DataType::F64).unwrap(), 4800);
    }

    #[test]
    fn overflow_reported() {
        let dims = Dimensions::new(usize::MAX, 2, 1).unwrap();
        assert!(matches!(
            dims.element_count(),
            Err(EnviError::DimensionsTooLarge { .. })
        ));
    }
}
