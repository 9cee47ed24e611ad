use crate::commands::Command;
use crate::crc;
use crate::error::Error;
use crate::types::{AirQuality, Config, ResponseFrame, SerialId, State, FRAME_LEN};

use embedded_hal::{delay::DelayNs, i2c::I2c};
use sensirion_i2c::i2c;

/// Upper bound for a single bus transaction, for I2C implementations that
/// take a timeout.
pub const TRANSACTION_TIMEOUT_MS: u32 = 100;

/// SGP30 sensor instance. Use related methods to take measurements.
#[derive(Debug)]
pub struct Sgp30<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
    state: State,
}

impl<I2C, D, E> Sgp30<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Creates a driver handle. No bus traffic happens until
    /// [`initialize`](Self::initialize) or one of the read methods is called.
    pub fn new(i2c: I2C, delay: D, config: Config) -> Result<Self, Error<E>> {
        if !config.is_valid() {
            return Err(Error::InvalidArgument);
        }
        Ok(Sgp30 {
            i2c,
            delay,
            config,
            state: State::Uninitialized,
        })
    }

    /// Starts the air quality algorithm and blocks for the 15 s warmup.
    ///
    /// If the command cannot be sent the bus error is returned right away
    /// and no warmup delay is taken.
    pub fn initialize(&mut self) -> Result<(), Error<E>> {
        let command = Command::InitAirQuality;
        if let Err(e) = self.write_command(command) {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to initialize SGP30");
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Waiting for SGP30 warmup ({} seconds)...",
            command.delay_ms() / 1000
        );
        self.delay.delay_ms(command.delay_ms());

        self.state = State::Initialized;
        Ok(())
    }

    /// Reads CO2 equivalent [ppm] and TVOC [ppb].
    pub fn read_measurement(&mut self) -> Result<AirQuality, Error<E>> {
        let frame = self.command_with_response(Command::MeasureAirQuality)?;
        if self.config.verify_checksums && !crc::frame_is_valid(&frame) {
            return Err(Error::Crc);
        }
        Ok(AirQuality::from_frame(&frame))
    }

    /// Reads the 48-bit serial identifier. The bytes are returned as
    /// received, checksum bytes included.
    pub fn read_serial_id(&mut self) -> Result<SerialId, Error<E>> {
        self.command_with_response(Command::GetSerialId)
    }

    pub fn is_initialized(&self) -> bool {
        self.state == State::Initialized
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the bus and the delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Sends a command, waits its execution time, then clocks out one frame.
    /// Nothing is read if the write fails.
    fn command_with_response(&mut self, command: Command) -> Result<ResponseFrame, Error<E>> {
        debug_assert!(command.has_response());
        self.write_command(command)?;
        let delay = command.delay_ms();
        if delay > 0 {
            self.delay.delay_ms(delay);
        }
        self.read_frame()
    }

    fn write_command(&mut self, command: Command) -> Result<(), Error<E>> {
        i2c::write_command_u16(&mut self.i2c, self.config.address, command.code())
            .map_err(Error::I2c)
    }

    fn read_frame(&mut self) -> Result<ResponseFrame, Error<E>> {
        let mut buf = [0u8; FRAME_LEN];
        self.i2c
            .read(self.config.address, &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf)
    }
}
