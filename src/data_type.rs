use core::fmt;

use crate::error::EnviError;
use crate::layout::ByteOrder;
use crate::scalar::{parse_float, parse_int};

/// Encodes one text record into an element slot.
///
/// The slot is exactly [`DataType::bytes_per_element`] bytes long. Returns
/// `false` when the text held no number and zero was written instead.
pub type ElementEncoder = fn(text: &str, order: ByteOrder, slot: &mut [u8]) -> bool;

/// ENVI element representation (the header's `data type` field).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Code 1: unsigned 8-bit integer.
    U8,
    /// Code 2: signed 16-bit integer.
    I16,
    /// Code 3: signed 32-bit integer.
    I32,
    /// Code 4: 32-bit IEEE float.
    F32,
    /// Code 5: 64-bit IEEE float.
    F64,
    /// Code 12: unsigned 16-bit integer.
    U16,
}

impl DataType {
    pub fn from_code(code: u8) -> Result<Self, EnviError> {
        match code {
            1 => Ok(Self::U8),
            2 => Ok(Self::I16),
            3 => Ok(Self::I32),
            4 => Ok(Self::F32),
            5 => Ok(Self::F64),
            12 => Ok(Self::U16),
            other => Err(EnviError::UnsupportedDataType(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::U8 => 1,
            Self::I16 => 2,
            Self::I32 => 3,
            Self::F32 => 4,
            Self::F64 => 5,
            Self::U16 => 12,
        }
    }

    /// Bytes per encoded element.
    pub fn bytes_per_element(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Encoding strategy for this representation, selected once per run.
    pub fn element_encoder(self) -> ElementEncoder {
        match self {
            Self::U8 => encode_u8,
            Self::I16 => encode_i16,
            Self::I32 => encode_i32,
            Self::F32 => encode_f32,
            Self::F64 => encode_f64,
            Self::U16 => encode_u16,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn encode_u8(text: &str, _order: ByteOrder, slot: &mut [u8]) -> bool {
    let v = parse_int(text);
    slot[0] = v.unwrap_or(0) as u8;
    v.is_some()
}

fn encode_i16(text: &str, order: ByteOrder, slot: &mut [u8]) -> bool {
    let v = parse_int(text);
    order.put_bits(u64::from(v.unwrap_or(0) as i16 as u16), slot);
    v.is_some()
}

fn encode_u16(text: &str, order: ByteOrder, slot: &mut [u8]) -> bool {
    let v = parse_int(text);
    order.put_bits(u64::from(v.unwrap_or(0) as u16), slot);
    v.is_some()
}

fn encode_i32(text: &str, order: ByteOrder, slot: &mut [u8]) -> bool {
    let v = parse_int(text);
    order.put_bits(u64::from(v.unwrap_or(0) as i32 as u32), slot);
    v.is_some()
}

fn encode_f32(text: &str, order: ByteOrder, slot: &mut [u8]) -> bool {
    let v = parse_float(text);
    order.put_bits(u64::from((v.unwrap_or(0.0) as f32).to_bits()), slot);
    v.is_some()
}

// All eight bytes are written.
fn encode_f64(text: &str, order: ByteOrder, slot: &mut [u8]) -> bool {
    let v = parse_float(text);
    order.put_bits(v.unwrap_or(0.0).to_bits(), slot);
    v.is_some()
}
