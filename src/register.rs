//! Register-level access layer.
//!
//! [`RegisterView`] binds one logical register (address, byte width, byte
//! order) to a bus transaction; [`BitField`] exposes a bit range within a
//! view through read-modify-write so sibling bits are never disturbed.
//! Both are plain `Copy` values built on the stack for a single operation
//! and discarded afterwards; no register state is cached between calls.

use embedded_hal::i2c::I2c;
use log::trace;

use crate::error::{Error, Result};

/// Byte order of a two-byte register view on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ByteOrder {
    LsbFirst,
    MsbFirst,
}

/// A typed window onto one device register, one or two bytes wide.
///
/// Two-byte views rely on the chip auto-incrementing the register address
/// within a transaction, reaching the adjacent register of the pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegisterView {
    addr: u8,
    width: u8,
    order: ByteOrder,
}

impl RegisterView {
    /// Single-byte view.
    pub(crate) fn byte(addr: u8) -> Self {
        Self {
            addr,
            width: 1,
            order: ByteOrder::LsbFirst,
        }
    }

    /// Two-byte view spanning `addr` and `addr + 1`.
    pub(crate) fn word(addr: u8, order: ByteOrder) -> Self {
        Self {
            addr,
            width: 2,
            order,
        }
    }

    /// Number of bits the view covers.
    pub(crate) fn bits(self) -> u8 {
        self.width * 8
    }

    /// Reads the full register value in one bus transaction.
    pub(crate) fn read<I2C: I2c>(self, bus: &mut I2C, device: u8) -> Result<u16, I2C::Error> {
        let mut buf = [0u8; 2];
        let buf = &mut buf[..usize::from(self.width)];
        bus.write_read(device, &[self.addr], buf).map_err(Error::Bus)?;
        let value = if self.width == 1 {
            u16::from(buf[0])
        } else {
            match self.order {
                ByteOrder::LsbFirst => u16::from_le_bytes([buf[0], buf[1]]),
                ByteOrder::MsbFirst => u16::from_be_bytes([buf[0], buf[1]]),
            }
        };
        trace!(
            "Read reg 0x{:02X} ({} byte) = 0x{:04X}",
            self.addr,
            self.width,
            value
        );
        Ok(value)
    }

    /// Writes the full register value in one bus transaction.
    pub(crate) fn write<I2C: I2c>(
        self,
        bus: &mut I2C,
        device: u8,
        value: u16,
    ) -> Result<(), I2C::Error> {
        let mut frame = [0u8; 3];
        frame[0] = self.addr;
        if self.width == 1 {
            frame[1] = value as u8;
        } else {
            let bytes = match self.order {
                ByteOrder::LsbFirst => value.to_le_bytes(),
                ByteOrder::MsbFirst => value.to_be_bytes(),
            };
            frame[1] = bytes[0];
            frame[2] = bytes[1];
        }
        trace!(
            "Write reg 0x{:02X} ({} byte) = 0x{:04X}",
            self.addr,
            self.width,
            value
        );
        bus.write(device, &frame[..1 + usize::from(self.width)])
            .map_err(Error::Bus)
    }
}

/// A bit range of `width` bits starting at `shift` within a [`RegisterView`].
///
/// Writes go through a full-width read-modify-write: the bus has no
/// bit-level primitive, so even a 1-bit field transfers the whole register.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BitField {
    view: RegisterView,
    width: u8,
    shift: u8,
}

impl BitField {
    pub(crate) fn new(view: RegisterView, width: u8, shift: u8) -> Self {
        debug_assert!(width >= 1 && width + shift <= view.bits());
        Self { view, width, shift }
    }

    /// Convenience constructor for a single-bit field.
    pub(crate) fn bit(view: RegisterView, shift: u8) -> Self {
        Self::new(view, 1, shift)
    }

    fn mask(self) -> u16 {
        (((1u32 << self.width) - 1) as u16) << self.shift
    }

    /// Reads the field value, right-aligned.
    pub(crate) fn read<I2C: I2c>(self, bus: &mut I2C, device: u8) -> Result<u16, I2C::Error> {
        let raw = self.view.read(bus, device)?;
        Ok((raw & self.mask()) >> self.shift)
    }

    /// Writes the field, leaving the remaining bits of the register intact.
    pub(crate) fn write<I2C: I2c>(
        self,
        bus: &mut I2C,
        device: u8,
        value: u16,
    ) -> Result<(), I2C::Error> {
        let raw = self.view.read(bus, device)?;
        let updated = (raw & !self.mask()) | ((value << self.shift) & self.mask());
        self.view.write(bus, device, updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const DEV: u8 = 0x58;

    #[test]
    fn byte_view_reads_single_register() {
        let mut bus = I2cMock::new(&[I2cTransaction::write_read(
            DEV,
            vec![0x11],
            vec![0x10],
        )]);
        let value = RegisterView::byte(0x11).read(&mut bus, DEV).unwrap();
        assert_eq!(value, 0x0010);
        bus.done();
    }

    #[test]
    fn byte_view_write_frames_address_then_value() {
        let mut bus = I2cMock::new(&[I2cTransaction::write(DEV, vec![0x7F, 0x00])]);
        RegisterView::byte(0x7F).write(&mut bus, DEV, 0).unwrap();
        bus.done();
    }

    #[test]
    fn word_view_assembles_lsb_first() {
        let mut bus = I2cMock::new(&[I2cTransaction::write_read(
            DEV,
            vec![0x00],
            vec![0x34, 0x12],
        )]);
        let value = RegisterView::word(0x00, ByteOrder::LsbFirst)
            .read(&mut bus, DEV)
            .unwrap();
        assert_eq!(value, 0x1234);
        bus.done();
    }

    #[test]
    fn word_view_assembles_msb_first() {
        let mut bus = I2cMock::new(&[I2cTransaction::write_read(
            DEV,
            vec![0x00],
            vec![0x12, 0x34],
        )]);
        let value = RegisterView::word(0x00, ByteOrder::MsbFirst)
            .read(&mut bus, DEV)
            .unwrap();
        assert_eq!(value, 0x1234);
        bus.done();
    }

    #[test]
    fn word_view_disassembles_on_write() {
        let mut bus = I2cMock::new(&[
            I2cTransaction::write(DEV, vec![0x04, 0xCD, 0xAB]),
            I2cTransaction::write(DEV, vec![0x04, 0xAB, 0xCD]),
        ]);
        RegisterView::word(0x04, ByteOrder::LsbFirst)
            .write(&mut bus, DEV, 0xABCD)
            .unwrap();
        RegisterView::word(0x04, ByteOrder::MsbFirst)
            .write(&mut bus, DEV, 0xABCD)
            .unwrap();
        bus.done();
    }

    #[test]
    fn single_bit_field_still_does_full_read_modify_write() {
        // Setting bit 3 in a register holding 0b0100_0001 must rewrite the
        // whole byte with the other bits preserved.
        let mut bus = I2cMock::new(&[
            I2cTransaction::write_read(DEV, vec![0x02], vec![0b0100_0001]),
            I2cTransaction::write(DEV, vec![0x02, 0b0100_1001]),
        ]);
        BitField::bit(RegisterView::byte(0x02), 3)
            .write(&mut bus, DEV, 1)
            .unwrap();
        bus.done();
    }

    #[test]
    fn clearing_a_bit_preserves_siblings() {
        let mut bus = I2cMock::new(&[
            I2cTransaction::write_read(DEV, vec![0x03], vec![0b1111_1111]),
            I2cTransaction::write(DEV, vec![0x03, 0b1110_1111]),
        ]);
        BitField::bit(RegisterView::byte(0x03), 4)
            .write(&mut bus, DEV, 0)
            .unwrap();
        bus.done();
    }

    #[test]
    fn multi_bit_field_masks_and_shifts() {
        // Field of width 3 at shift 5: read extracts, write clears the old
        // range before inserting the new value.
        let mut bus = I2cMock::new(&[
            I2cTransaction::write_read(DEV, vec![0x11], vec![0b1011_0110]),
            I2cTransaction::write_read(DEV, vec![0x11], vec![0b1011_0110]),
            I2cTransaction::write(DEV, vec![0x11, 0b0101_0110]),
        ]);
        let field = BitField::new(RegisterView::byte(0x11), 3, 5);
        assert_eq!(field.read(&mut bus, DEV).unwrap(), 0b101);
        field.write(&mut bus, DEV, 0b010).unwrap();
        bus.done();
    }

    #[test]
    fn field_write_truncates_oversized_values() {
        // Values wider than the field must not leak into sibling bits.
        let mut bus = I2cMock::new(&[
            I2cTransaction::write_read(DEV, vec![0x12], vec![0b0000_0000]),
            I2cTransaction::write(DEV, vec![0x12, 0b0000_0100]),
        ]);
        BitField::bit(RegisterView::byte(0x12), 2)
            .write(&mut bus, DEV, 0b11)
            .unwrap();
        bus.done();
    }

    #[test]
    fn bus_failure_surfaces_as_bus_error() {
        use embedded_hal::i2c::ErrorKind;
        let mut bus = I2cMock::new(&[
            I2cTransaction::write_read(DEV, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
        ]);
        let err = RegisterView::byte(0x00).read(&mut bus, DEV).unwrap_err();
        assert!(matches!(err, Error::Bus(_)));
        bus.done();
    }
}
