use thiserror::Error;

/// Errors that can occur when driving an AW9523.
///
/// Generic over `E`, the error type of the underlying I2C bus
/// implementation. Bus-level failures are wrapped rather than retried;
/// retry policy belongs to the bus implementation.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// An I2C transaction did not complete (NACK, bus fault, timeout).
    #[error("I2C bus error: {0:?}")]
    Bus(E),
    /// The chip ID register did not read back the AW9523 signature.
    /// Either no device or the wrong device is at the configured address.
    #[error("unexpected chip ID 0x{found:02X} (expected 0x{expected:02X})")]
    UnknownChipId {
        /// Value actually read from the chip ID register.
        found: u8,
        /// The AW9523 signature value.
        expected: u8,
    },
    /// A pin number outside the valid range 0-15 was passed in.
    #[error("GPIO pin {pin} out of range (0-15)")]
    PinOutOfRange {
        /// The invalid pin number.
        pin: u8,
    },
    /// The device address is outside the range the AW9523 can occupy.
    #[error("I2C address 0x{address:02X} outside the AW9523 range (0x58-0x5B)")]
    AddressOutOfRange {
        /// The invalid address.
        address: u8,
    },
}

/// Result type alias for AW9523 operations.
///
/// `E` is the underlying bus error type, typically `I2C::Error`.
pub type Result<T, E> = std::result::Result<T, Error<E>>;
