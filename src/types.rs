/// Default I2C address of the SGP30.
pub const DEFAULT_ADDRESS: u8 = 0x58;

/// Length of every SGP30 response frame: three words, each followed by a CRC byte.
pub const FRAME_LEN: usize = 6;

/// Raw 6-byte response frame as clocked out of the sensor.
pub type ResponseFrame = [u8; FRAME_LEN];

/// 48-bit factory serial identifier, as returned by the sensor.
pub type SerialId = [u8; FRAME_LEN];

/// SGP30 driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit I2C address of the sensor.
    pub address: u8,
    /// Check the CRC byte of every word in a measurement frame.
    pub verify_checksums: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            verify_checksums: false,
        }
    }
}

impl Config {
    pub fn with_address(address: u8) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.address <= 0x7F
    }
}

/// SGP30 air quality measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AirQuality {
    /// CO2 equivalent [ppm]
    pub co2: u16,
    /// Total volatile organic compounds [ppb]
    pub tvoc: u16,
}

impl AirQuality {
    /// Words sit at offsets 0-1 and 3-4; offsets 2 and 5 carry their CRC.
    pub(crate) fn from_frame(frame: &ResponseFrame) -> Self {
        Self {
            co2: u16::from_be_bytes([frame[0], frame[1]]),
            tvoc: u16::from_be_bytes([frame[3], frame[4]]),
        }
    }
}

/// Lifecycle of a driver handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Uninitialized,
    Initialized,
}
