//! Raw bus transactions with the sensor. Nothing here interprets or validates replies.

use embedded_hal::i2c::I2c;

use crate::commands::COMMAND_FRAME_LEN;

/// Errors raised by a single bus transaction.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    I2cWrite(E),
    I2cRead(E),
}

/// Sends `opcode` as a zero-padded 8-byte command frame.
pub fn write_command<I: I2c>(i2c: &mut I, address: u8, opcode: u8) -> Result<(), Error<I::Error>> {
    let mut frame = [0u8; COMMAND_FRAME_LEN];
    frame[0] = opcode;
    i2c.write(address, &frame).map_err(Error::I2cWrite)
}

/// Sends `opcode` followed by a single parameter byte.
pub fn write_command_with_param<I: I2c>(
    i2c: &mut I,
    address: u8,
    opcode: u8,
    param: u8,
) -> Result<(), Error<I::Error>> {
    i2c.write(address, &[opcode, param]).map_err(Error::I2cWrite)
}

/// Fills `buf` with exactly `buf.len()` bytes from the sensor, in arrival order.
pub fn read_reply<I: I2c>(i2c: &mut I, address: u8, buf: &mut [u8]) -> Result<(), Error<I::Error>> {
    i2c.read(address, buf).map_err(Error::I2cRead)
}
