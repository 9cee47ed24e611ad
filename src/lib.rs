//! Platform agnostic Rust driver for the Sensirion SGP30 indoor air quality
//! sensor, based on the [`embedded-hal`](https://github.com/rust-embedded/embedded-hal)
//! traits.
//!
//! The driver talks to the sensor with fixed 16-bit command words and
//! reads 6-byte response frames. Timing between a command and its
//! response is enforced through the [`DelayNs`](embedded_hal::delay::DelayNs)
//! the driver owns.
//!
//! ```
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
//! use sgp30_rs::{Config, Sgp30};
//!
//! # let expectations = [
//! #     Transaction::write(0x58, vec![0x20, 0x03]),
//! #     Transaction::write(0x58, vec![0x20, 0x08]),
//! #     Transaction::read(0x58, vec![0x01, 0x94, 0x00, 0x00, 0x64, 0x00]),
//! # ];
//! # let i2c = I2cMock::new(&expectations);
//! # let delay = NoopDelay::new();
//! let mut sensor = Sgp30::new(i2c, delay, Config::default()).unwrap();
//! sensor.initialize().unwrap();
//! let data = sensor.read_measurement().unwrap();
//! assert_eq!(data.co2, 404);
//! assert_eq!(data.tvoc, 100);
//! # let (mut i2c, _) = sensor.release();
//! # i2c.done();
//! ```
#![cfg_attr(not(test), no_std)]

mod commands;
mod crc;
mod error;
mod sgp30;
mod types;

pub use crate::commands::Command;
pub use crate::error::{Error, ErrorKind};
pub use crate::sgp30::{Sgp30, TRANSACTION_TIMEOUT_MS};
pub use crate::types::{AirQuality, Config, ResponseFrame, SerialId, State, DEFAULT_ADDRESS};
