use crate::error::EnviError;
use crate::info::Dimensions;

/// Resource limits for encode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_lines: Option<u64>,
    pub max_samples: Option<u64>,
    pub max_bands: Option<u64>,
    /// Maximum element count (lines * samples * bands).
    pub max_elements: Option<u64>,
    /// Maximum memory bytes for output buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, dims: &Dimensions) -> Result<(), EnviError> {
        check_axis("lines", dims.lines, self.max_lines)?;
        check_axis("samples", dims.samples, self.max_samples)?;
        check_axis("bands", dims.bands, self.max_bands)?;
        if let Some(max_el) = self.max_elements {
            let elements = (dims.lines as u64)
                .saturating_mul(dims.samples as u64)
                .saturating_mul(dims.bands as u64);
            if elements > max_el {
                return Err(EnviError::LimitExceeded(format!(
                    "element count {elements} exceeds limit {max_el}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), EnviError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(EnviError::LimitExceeded(format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

fn check_axis(name: &str, value: usize, limit: Option<u64>) -> Result<(), EnviError> {
    if let Some(max) = limit {
        if value as u64 > max {
            return Err(EnviError::LimitExceeded(format!(
                "{name} {value} exceeds limit {max}"
            )));
        }
    }
    Ok(())
}
