//! Platform agnostic Rust driver for the Piera Systems IPS-7100 intelligent particle sensor,
//! based on the [`embedded-hal`](https://github.com/rust-embedded/embedded-hal) traits.
//!
//! The sensor reports seven size bins, PC0.1 to PC10 particle counts and PM0.1 to PM10 mass
//! concentrations. Every read reply carries a CRC-16 trailer; replies that fail it are
//! re-requested according to the configured [`RetryPolicy`].
//!
//! ## Usage
//!
//! ```ignore
//! use ips7100::Ips7100;
//!
//! let mut sensor = Ips7100::new(i2c, delay);
//! sensor.begin().unwrap();
//! loop {
//!     sensor.update().unwrap();
//!     let data = sensor.data();
//!     log::info!("PC2.5: {} PM2.5: {}", data.pc2_5(), data.pm2_5());
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod commands;
mod crc;
pub mod decode;
mod error;
pub mod i2c;
mod ips7100;
mod types;

pub use commands::{
    Command, DEFAULT_BACKOFF_MS, IPS7100_I2C_ADDRESS, MASS_CONCENTRATIONS_REPLY_LEN,
    PARTICLE_COUNTS_REPLY_LEN, REFERENCE_VOLTAGE_REPLY_LEN, STATUS_REPLY_LEN,
};
pub use error::Error;
pub use ips7100::Ips7100;
pub use types::{Config, Ips7100Data, RetryPolicy, SizeBin, BIN_COUNT};
