//! Conversion of raw reply bytes into typed readings.

use crate::commands::{
    MASS_CONCENTRATIONS_REPLY_LEN, PARTICLE_COUNTS_REPLY_LEN, REFERENCE_VOLTAGE_REPLY_LEN,
    STATUS_REPLY_LEN,
};
use crate::types::BIN_COUNT;

/// Byte order of a multi-byte field inside a reply.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Byte order of the particle count fields.
pub const PARTICLE_COUNT_ORDER: ByteOrder = ByteOrder::Big;

/// Byte order of the mass concentration fields. The sensor sends IEEE-754
/// floats least significant byte first.
pub const MASS_CONCENTRATION_ORDER: ByteOrder = ByteOrder::Little;

pub fn decode_u16(bytes: [u8; 2], order: ByteOrder) -> u16 {
    match order {
        ByteOrder::Big => u16::from_be_bytes(bytes),
        ByteOrder::Little => u16::from_le_bytes(bytes),
    }
}

pub fn decode_u32(bytes: [u8; 4], order: ByteOrder) -> u32 {
    match order {
        ByteOrder::Big => u32::from_be_bytes(bytes),
        ByteOrder::Little => u32::from_le_bytes(bytes),
    }
}

pub fn decode_f32(bytes: [u8; 4], order: ByteOrder) -> f32 {
    match order {
        ByteOrder::Big => f32::from_be_bytes(bytes),
        ByteOrder::Little => f32::from_le_bytes(bytes),
    }
}

// Callers pass full replies, which always hold BIN_COUNT words.
fn word(reply: &[u8], index: usize) -> [u8; 4] {
    let start = index * 4;
    [
        reply[start],
        reply[start + 1],
        reply[start + 2],
        reply[start + 3],
    ]
}

/// Decodes the seven particle counts from a counts reply.
///
/// Only the first 28 bytes are read; the trailer is ignored.
pub fn particle_counts(reply: &[u8; PARTICLE_COUNTS_REPLY_LEN]) -> [u32; BIN_COUNT] {
    core::array::from_fn(|i| decode_u32(word(reply, i), PARTICLE_COUNT_ORDER))
}

/// Decodes the seven mass concentrations from a concentrations reply.
pub fn mass_concentrations(reply: &[u8; MASS_CONCENTRATIONS_REPLY_LEN]) -> [f32; BIN_COUNT] {
    core::array::from_fn(|i| decode_f32(word(reply, i), MASS_CONCENTRATION_ORDER))
}

/// Reference voltage is the first two bytes, big-endian.
pub fn reference_voltage(reply: &[u8; REFERENCE_VOLTAGE_REPLY_LEN]) -> u16 {
    decode_u16([reply[0], reply[1]], ByteOrder::Big)
}

/// Status is the first byte.
pub fn status(reply: &[u8; STATUS_REPLY_LEN]) -> u8 {
    reply[0]
}
