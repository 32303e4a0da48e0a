use crate::i2c;

/// IPS-7100 errors
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum Error<E> {
    /// I²C bus error
    #[cfg_attr(feature = "thiserror", error("I2C bus error: {0:?}"))]
    I2c(E),
    /// CRC checksum validation kept failing under [`RetryPolicy::Limited`](crate::RetryPolicy::Limited)
    #[cfg_attr(feature = "thiserror", error("checksum still invalid after {attempts} attempts"))]
    ChecksumExhausted { attempts: u32 },
    /// The command has no reply to read
    #[cfg_attr(feature = "thiserror", error("command has no reply"))]
    NoReply,
    /// The caller's buffer cannot hold the reply
    #[cfg_attr(feature = "thiserror", error("buffer too small, reply needs {needed} bytes"))]
    BufferTooSmall { needed: usize },
}

impl<E> From<i2c::Error<E>> for Error<E> {
    fn from(err: i2c::Error<E>) -> Self {
        match err {
            i2c::Error::I2cWrite(e) => Error::I2c(e),
            i2c::Error::I2cRead(e) => Error::I2c(e),
        }
    }
}
