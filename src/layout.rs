//! Element placement: interleave order and byte order.
//!
//! Both are pure index arithmetic. [`Interleave::element_index`] maps a
//! logical `(line, sample, band)` coordinate to a linear element index in the
//! output buffer; [`ByteOrder::bit_shift`] maps a byte slot inside one element
//! to the bit chunk of the value stored there.

use core::fmt;
use core::str::FromStr;

use crate::error::EnviError;
use crate::info::Dimensions;

/// Band ordering of the output buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interleave {
    /// Band sequential: one full line x sample plane per band.
    Bsq,
    /// Band interleaved by line: each line holds all bands, one after another.
    Bil,
    /// Band interleaved by pixel: all bands of a pixel are adjacent.
    Bip,
}

impl Interleave {
    pub const ALL: [Interleave; 3] = [Interleave::Bsq, Interleave::Bil, Interleave::Bip];

    /// Linear element index of `(line, sample, band)` in this layout.
    ///
    /// Coordinates must lie inside `dims`. Over the full cube the mapping is
    /// a bijection onto `0..lines * samples * bands`.
    #[inline]
    pub fn element_index(self, dims: &Dimensions, line: usize, sample: usize, band: usize) -> usize {
        let Dimensions {
            lines,
            samples,
            bands,
        } = *dims;
        match self {
            Interleave::Bsq => line * samples + sample + band * lines * samples,
            Interleave::Bil => line * samples * bands + sample + band * samples,
            Interleave::Bip => line * samples * bands + sample * bands + band,
        }
    }

    /// Lowercase name, also used as the binary file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            Interleave::Bsq => "bsq",
            Interleave::Bil => "bil",
            Interleave::Bip => "bip",
        }
    }
}

impl fmt::Display for Interleave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interleave {
    type Err = EnviError;

    /// Accepts exactly `bsq`, `bil` or `bip`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bsq" => Ok(Interleave::Bsq),
            "bil" => Ok(Interleave::Bil),
            "bip" => Ok(Interleave::Bip),
            other => Err(EnviError::UnknownInterleave(other.to_string())),
        }
    }
}

/// Byte order of multi-byte elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// ENVI code 0: least significant byte first.
    #[default]
    Little,
    /// ENVI code 1: most significant byte first.
    Big,
}

impl ByteOrder {
    pub fn from_code(code: u8) -> Result<Self, EnviError> {
        match code {
            0 => Ok(ByteOrder::Little),
            1 => Ok(ByteOrder::Big),
            other => Err(EnviError::UnknownByteOrder(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ByteOrder::Little => 0,
            ByteOrder::Big => 1,
        }
    }

    /// Bit offset of the value chunk stored at byte `byte` of a `width`-byte element.
    #[inline]
    pub fn bit_shift(self, width: usize, byte: usize) -> u32 {
        debug_assert!(byte < width);
        let chunk = match self {
            ByteOrder::Little => byte,
            ByteOrder::Big => width - 1 - byte,
        };
        (8 * chunk) as u32
    }

    /// Store the low `out.len()` bytes of `bits` into `out` in this order.
    #[inline]
    pub(crate) fn put_bits(self, bits: u64, out: &mut [u8]) {
        let width = out.len();
        for (l, slot) in out.iter_mut().enumerate() {
            *slot = (bits >> self.bit_shift(width, l)) as u8;
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bsq_is_identity_for_single_pixel() {
        let dims = Dimensions::new(1, 1, 3).unwrap();
        for band in 0..3 {
            assert_eq!(Interleave::Bsq.element_index(&dims, 0, 0, band), band);
        }
    }

    #[test]
    fn bijection_small_cube() {
        let dims = Dimensions::new(2, 3, 2).unwrap();
        let n = dims.element_count().unwrap();
        for il in Interleave::ALL {
            let mut seen = vec![false; n];
            for i in 0..dims.lines {
                for j in 0..dims.samples {
                    for k in 0..dims.bands {
                        let p = il.element_index(&dims, i, j, k);
                        assert!(p < n, "{il}: {p} out of range");
                        assert!(!seen[p], "{il}: collision at {p}");
                        seen[p] = true;
                    }
                }
            }
            assert!(seen.iter().all(|&s| s), "{il}: not every slot covered");
        }
    }

    #[test]
    fn bit_shifts() {
        assert_eq!(ByteOrder::Little.bit_shift(2, 0), 0);
        assert_eq!(ByteOrder::Little.bit_shift(2, 1), 8);
        assert_eq!(ByteOrder::Big.bit_shift(2, 0), 8);
        assert_eq!(ByteOrder::Big.bit_shift(2, 1), 0);
        assert_eq!(ByteOrder::Big.bit_shift(8, 0), 56);
    }

    #[test]
    fn put_bits_matches_std_endianness() {
        let v: u32 = 0x0102_0304;
        let mut le = [0u8; 4];
        let mut be = [0u8; 4];
        ByteOrder::Little.put_bits(u64::from(v), &mut le);
        ByteOrder::Big.put_bits(u64::from(v), &mut be);
        assert_eq!(le, v.to_le_bytes());
        assert_eq!(be, v.to_be_bytes());
    }

    #[test]
    fn parse_interleave() {
        assert_eq!("bil".parse::<Interleave>().unwrap(), Interleave::Bil);
        assert!("BSQ".parse::<Interleave>().is_err());
        assert!(ByteOrder::from_code(2).is_err());
    }
}
