//! Pin-level vocabulary types shared by the device operations.

/// Logic level of a GPIO pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    /// Returns `true` for [`PinLevel::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == PinLevel::High
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

/// Operating mode of a single pin.
///
/// The AW9523 drives each pin either as plain digital I/O or as a
/// constant-current LED sink with 256-step dimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Digital input.
    Input,
    /// Digital output (push-pull, or open-drain on port 0 if configured).
    Output,
    /// Constant-current LED drive, dimmed via `analog_write`.
    LedMode,
}
