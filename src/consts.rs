//! Internal constants, register addresses, and bit definitions.

// I2C Addressing
// The two address pins (AD0/AD1) select one of four consecutive addresses.
/// Default I2C address with AD0 and AD1 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x58;
pub(crate) const ADDRESS_MIN: u8 = 0x58;
pub(crate) const ADDRESS_MAX: u8 = 0x5B;

/// Value the CHIPID register reads back on a functioning AW9523.
pub(crate) const CHIP_ID: u8 = 0x23;

// --- Register Addresses ---
// Port 0 covers pins 0-7, port 1 covers pins 8-15. Each function owns an
// adjacent register pair, so a 2-byte access at the port-0 address reaches
// both via the chip's address auto-increment.
pub(crate) const REG_INPUT0: u8 = 0x00;
pub(crate) const REG_INPUT1: u8 = 0x01;
pub(crate) const REG_OUTPUT0: u8 = 0x02;
pub(crate) const REG_OUTPUT1: u8 = 0x03;
pub(crate) const REG_CONFIG0: u8 = 0x04;
pub(crate) const REG_CONFIG1: u8 = 0x05;
pub(crate) const REG_INTENABLE0: u8 = 0x06;
pub(crate) const REG_INTENABLE1: u8 = 0x07;
pub(crate) const REG_CHIPID: u8 = 0x10;
pub(crate) const REG_GCR: u8 = 0x11;
pub(crate) const REG_LEDMODE0: u8 = 0x12;
pub(crate) const REG_LEDMODE1: u8 = 0x13;
pub(crate) const REG_SOFTRESET: u8 = 0x7F;

// GCR bit 4 selects the port-0 output stage: 0 = open-drain, 1 = push-pull.
// Port 1 is always push-pull and has no equivalent bit.
pub(crate) const GCR_PORT0_PUSH_PULL_BIT: u8 = 4;

// 256-step dimming control registers (datasheet Table 13). The table is not
// contiguous in pin order: pins 8-11 sit below pins 0-7, pins 12-15 above.
pub(crate) const REG_DIM_PINS_0_7: u8 = 0x24;
pub(crate) const REG_DIM_PINS_8_11: u8 = 0x20;
pub(crate) const REG_DIM_PINS_12_15: u8 = 0x2C;

/// Maps a pin number to its dimming control register.
/// Callers must have validated `pin <= 15`.
pub(crate) fn dim_register(pin: u8) -> u8 {
    match pin {
        0..=7 => REG_DIM_PINS_0_7 + pin,
        8..=11 => REG_DIM_PINS_8_11 + (pin - 8),
        _ => REG_DIM_PINS_12_15 + (pin - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_register_covers_all_three_ranges() {
        assert_eq!(dim_register(0), 0x24);
        assert_eq!(dim_register(7), 0x2B);
        assert_eq!(dim_register(8), 0x20);
        assert_eq!(dim_register(9), 0x21);
        assert_eq!(dim_register(11), 0x23);
        assert_eq!(dim_register(12), 0x2C);
        assert_eq!(dim_register(13), 0x2D);
        assert_eq!(dim_register(15), 0x2F);
    }
}
