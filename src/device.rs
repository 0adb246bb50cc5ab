//! The AW9523 device handle and its operations.

use embedded_hal::i2c::I2c;
use log::{debug, trace};

use crate::consts;
use crate::error::{Error, Result};
use crate::gpio::{PinLevel, PinMode};
use crate::register::{BitField, ByteOrder, RegisterView};

/// A handle to an AW9523 expander on an I2C bus.
///
/// Owns the bus handle and the fixed device address for its lifetime.
/// Register descriptors are rebuilt on every call; nothing is cached, so
/// each operation reflects and affects actual hardware state at the cost
/// of the extra transaction. `&mut self` on every operation means a handle
/// cannot be shared across threads without external serialization.
#[derive(Debug)]
pub struct Aw9523<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Aw9523<I2C> {
    /// Creates a handle for the device at `address` (0x58-0x5B).
    ///
    /// No bus traffic happens here; call [`init`](Self::init) to reset and
    /// verify the chip before using it.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, I2C::Error> {
        if !(consts::ADDRESS_MIN..=consts::ADDRESS_MAX).contains(&address) {
            return Err(Error::AddressOutOfRange { address });
        }
        Ok(Self { i2c, address })
    }

    /// Consumes the handle and returns the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Resets the chip and brings it to a known idle state.
    ///
    /// Sequence: soft reset, chip ID verification, all pins input,
    /// port 0 push-pull, all interrupts disabled. The first failing step
    /// aborts the whole sequence; no partial success is reported.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        debug!("Initializing AW9523 at 0x{:02X}", self.address);
        self.reset()?;
        let id = self.chip_id()?;
        if id != consts::CHIP_ID {
            return Err(Error::UnknownChipId {
                found: id,
                expected: consts::CHIP_ID,
            });
        }
        self.configure_direction(0)?;
        self.open_drain_port0(false)?;
        self.interrupt_enable_gpio(0)?;
        Ok(())
    }

    /// Performs a soft reset. All registers return to their power-on
    /// defaults; re-run [`init`](Self::init) or reconfigure afterwards.
    pub fn reset(&mut self) -> Result<(), I2C::Error> {
        debug!("Soft reset");
        RegisterView::byte(consts::REG_SOFTRESET).write(&mut self.i2c, self.address, 0)
    }

    /// Reads the chip ID register (0x23 on a functioning AW9523).
    pub fn chip_id(&mut self) -> Result<u8, I2C::Error> {
        let id = RegisterView::byte(consts::REG_CHIPID).read(&mut self.i2c, self.address)?;
        Ok(id as u8)
    }

    /// Sets the direction of all 16 pins at once; bit = 1 means output.
    ///
    /// The config registers store the inverse sense (0 = output), handled
    /// here.
    pub fn configure_direction(&mut self, pins: u16) -> Result<(), I2C::Error> {
        debug!("Configure direction: outputs = 0x{:04X}", pins);
        Self::port_pair(consts::REG_CONFIG0).write(&mut self.i2c, self.address, !pins)
    }

    /// Sets the output level of all 16 pins at once; bit = 1 means high.
    pub fn output_gpio(&mut self, pins: u16) -> Result<(), I2C::Error> {
        trace!("Output GPIO = 0x{:04X}", pins);
        Self::port_pair(consts::REG_OUTPUT0).write(&mut self.i2c, self.address, pins)
    }

    /// Reads the input level of all 16 pins at once; bit = 1 means high.
    pub fn input_gpio(&mut self) -> Result<u16, I2C::Error> {
        let pins = Self::port_pair(consts::REG_INPUT0).read(&mut self.i2c, self.address)?;
        trace!("Input GPIO = 0x{:04X}", pins);
        Ok(pins)
    }

    /// Enables interrupt detection for all 16 pins at once; bit = 1 means
    /// enabled. The enable registers store the inverse sense (0 = enabled).
    pub fn interrupt_enable_gpio(&mut self, pins: u16) -> Result<(), I2C::Error> {
        debug!("Interrupt enable: 0x{:04X}", pins);
        Self::port_pair(consts::REG_INTENABLE0).write(&mut self.i2c, self.address, !pins)
    }

    /// Selects constant-current LED mode for all 16 pins at once; bit = 1
    /// means LED mode. The mode registers store the inverse sense
    /// (0 = LED mode).
    pub fn configure_led_mode(&mut self, pins: u16) -> Result<(), I2C::Error> {
        debug!("LED mode: 0x{:04X}", pins);
        Self::port_pair(consts::REG_LEDMODE0).write(&mut self.i2c, self.address, !pins)
    }

    /// Sets the constant-current level for one pin: 0 = off, 255 = maximum.
    ///
    /// The pin must be in [`PinMode::LedMode`]. Dimming registers are
    /// write-only on this chip, so there is no read-back.
    pub fn analog_write(&mut self, pin: u8, value: u8) -> Result<(), I2C::Error> {
        Self::check_pin(pin)?;
        trace!("Analog write pin {} = {}", pin, value);
        RegisterView::byte(consts::dim_register(pin)).write(
            &mut self.i2c,
            self.address,
            u16::from(value),
        )
    }

    /// Sets the output level of one pin without touching its siblings.
    pub fn digital_write(&mut self, pin: u8, level: PinLevel) -> Result<(), I2C::Error> {
        Self::check_pin(pin)?;
        trace!("Digital write pin {} = {:?}", pin, level);
        let field = Self::pin_field(pin, consts::REG_OUTPUT0, consts::REG_OUTPUT1);
        field.write(&mut self.i2c, self.address, u16::from(level.is_high()))
    }

    /// Reads the input level of one pin.
    pub fn digital_read(&mut self, pin: u8) -> Result<PinLevel, I2C::Error> {
        Self::check_pin(pin)?;
        let field = Self::pin_field(pin, consts::REG_INPUT0, consts::REG_INPUT1);
        let raw = field.read(&mut self.i2c, self.address)?;
        Ok(PinLevel::from(raw != 0))
    }

    /// Enables or disables interrupt detection for one pin.
    /// The stored bit is the inverse of `enable`.
    pub fn enable_interrupt(&mut self, pin: u8, enable: bool) -> Result<(), I2C::Error> {
        Self::check_pin(pin)?;
        debug!("Interrupt pin {}: {}", pin, enable);
        let field = Self::pin_field(pin, consts::REG_INTENABLE0, consts::REG_INTENABLE1);
        field.write(&mut self.i2c, self.address, u16::from(!enable))
    }

    /// Configures one pin as digital input, digital output, or
    /// constant-current LED drive.
    pub fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), I2C::Error> {
        Self::check_pin(pin)?;
        debug!("Pin {} mode: {:?}", pin, mode);
        let direction = Self::pin_field(pin, consts::REG_CONFIG0, consts::REG_CONFIG1);
        let led_mode = Self::pin_field(pin, consts::REG_LEDMODE0, consts::REG_LEDMODE1);
        // Raw stored bits; both registers hold the inverse of the logical
        // sense (config: 0 = output, led mode: 0 = constant-current).
        let (direction_bit, led_mode_bit) = match mode {
            PinMode::Output => (0, 1),
            PinMode::Input => (1, 1),
            PinMode::LedMode => (0, 0),
        };
        direction.write(&mut self.i2c, self.address, direction_bit)?;
        led_mode.write(&mut self.i2c, self.address, led_mode_bit)
    }

    /// Selects open-drain (`true`) or push-pull (`false`) output for all
    /// port 0 pins (0-7). Port 1 is always push-pull on this chip.
    /// The stored bit is the inverse of `od`.
    pub fn open_drain_port0(&mut self, od: bool) -> Result<(), I2C::Error> {
        debug!("Port 0 open-drain: {}", od);
        let field = BitField::bit(
            RegisterView::byte(consts::REG_GCR),
            consts::GCR_PORT0_PUSH_PULL_BIT,
        );
        field.write(&mut self.i2c, self.address, u16::from(!od))
    }

    // A function's port registers sit at adjacent addresses, so the full
    // 16-bit quantity goes through one LSB-first two-byte view.
    #[inline]
    fn port_pair(reg0: u8) -> RegisterView {
        RegisterView::word(reg0, ByteOrder::LsbFirst)
    }

    // Range dispatch for single-pin operations: port 0 or port 1 register
    // plus the bit position within it.
    #[inline]
    fn pin_field(pin: u8, reg0: u8, reg1: u8) -> BitField {
        let (reg, bit) = if pin < 8 { (reg0, pin) } else { (reg1, pin - 8) };
        BitField::bit(RegisterView::byte(reg), bit)
    }

    #[inline]
    fn check_pin(pin: u8) -> Result<(), I2C::Error> {
        if pin > 15 {
            Err(Error::PinOutOfRange { pin })
        } else {
            Ok(())
        }
    }
}
