/// SGP30 I2C commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Start the on-chip baseline algorithm. The sensor needs 15 s before
    /// its readings are meaningful.
    InitAirQuality,
    /// Measure CO2 equivalent and TVOC.
    MeasureAirQuality,
    /// Read the 48-bit serial identifier.
    GetSerialId,
}

impl Command {
    /// Command code, delay after the command in milliseconds, and whether
    /// the sensor answers with a response frame.
    pub fn as_tuple(self) -> (u16, u32, bool) {
        match self {
            Self::InitAirQuality => (0x2003, 15_000, false),
            Self::MeasureAirQuality => (0x2008, 12, true),
            Self::GetSerialId => (0x3682, 0, true),
        }
    }

    pub fn code(self) -> u16 {
        self.as_tuple().0
    }

    pub fn delay_ms(self) -> u32 {
        self.as_tuple().1
    }

    pub fn has_response(self) -> bool {
        self.as_tuple().2
    }

    /// Command word as sent on the wire, high byte first.
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.code().to_be_bytes()
    }
}
