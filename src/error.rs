use embedded_hal::i2c::{self, NoAcknowledgeSource};

/// SGP30 errors
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    #[cfg_attr(feature = "thiserror", error("I2C: {0:?}"))]
    /// I2C bus error
    I2c(E),
    #[cfg_attr(feature = "thiserror", error("Invalid argument"))]
    /// Configuration rejected before any bus traffic
    InvalidArgument,
    #[cfg_attr(feature = "thiserror", error("CRC"))]
    /// CRC checksum validation failed
    Crc,
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    InvalidArgument,
    /// The sensor did not answer its address.
    Timeout,
    Failure,
}

impl<E: i2c::Error> Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument => ErrorKind::InvalidArgument,
            Error::I2c(e) => match e.kind() {
                i2c::ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => ErrorKind::Timeout,
                _ => ErrorKind::Failure,
            },
            Error::Crc => ErrorKind::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind as BusErrorKind;

    #[test]
    fn classification() {
        let e: Error<BusErrorKind> =
            Error::I2c(BusErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        assert_eq!(e.kind(), ErrorKind::Timeout);

        let e: Error<BusErrorKind> =
            Error::I2c(BusErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
        assert_eq!(e.kind(), ErrorKind::Failure);

        let e: Error<BusErrorKind> = Error::I2c(BusErrorKind::Bus);
        assert_eq!(e.kind(), ErrorKind::Failure);

        assert_eq!(Error::<BusErrorKind>::Crc.kind(), ErrorKind::Failure);
        assert_eq!(
            Error::<BusErrorKind>::InvalidArgument.kind(),
            ErrorKind::InvalidArgument
        );
    }
}
