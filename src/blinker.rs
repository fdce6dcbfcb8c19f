//! Hardware capability
//!
//! Pattern execution never talks to the device directly. It goes through
//! [`Blinker`], which has a real implementation over HID reports
//! ([`crate::hid::HidBlinker`]) and a do-nothing one ([`NopBlinker`]).

use alloc::string::String;
use core::fmt;

use crate::led_set::{ChannelCount, LedSet};

/// Class of a hardware failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareErrorKind {
    /// No matching device is connected
    DeviceNotFound,
    /// Device is held by another process
    DeviceBusy,
    /// Report exchange with the device failed
    Transport,
    /// Device answered with a malformed report
    InvalidResponse,
}

impl HardwareErrorKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::DeviceNotFound => "bl1nky device not found",
            Self::DeviceBusy => "bl1nky device busy",
            Self::Transport => "transport failure",
            Self::InvalidResponse => "invalid response",
        }
    }
}

/// Failure reported by a [`Blinker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareError {
    kind: HardwareErrorKind,
    detail: Option<String>,
}

impl HardwareError {
    pub const fn new(kind: HardwareErrorKind) -> Self {
        Self { kind, detail: None }
    }

    /// Attach a human readable detail to the error
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub const fn kind(&self) -> HardwareErrorKind {
        self.kind
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Advisory flag for callers deciding whether to retry a run
    ///
    /// A missing device stays missing; a busy one may free up.
    pub const fn is_permanent(&self) -> bool {
        matches!(self.kind, HardwareErrorKind::DeviceNotFound)
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "HwError: {}: {detail}", self.kind.as_str()),
            None => write!(f, "HwError: {}", self.kind.as_str()),
        }
    }
}

impl core::error::Error for HardwareError {}

/// Abstract LED peripheral
///
/// Implement this trait to support different transports.
/// The executor only calls [`Blinker::set_leds`]; opening and closing the
/// device is up to whoever owns it.
pub trait Blinker {
    /// Acquire the device
    fn open(&mut self) -> Result<(), HardwareError>;

    /// Release the device
    fn close(&mut self) -> Result<(), HardwareError>;

    /// Switch every LED to the given state
    fn set_leds(&mut self, state: LedSet) -> Result<(), HardwareError>;

    /// Read back the current LED state
    fn get_leds(&mut self) -> Result<LedSet, HardwareError>;
}

impl<B: Blinker + ?Sized> Blinker for &mut B {
    fn open(&mut self) -> Result<(), HardwareError> {
        (**self).open()
    }

    fn close(&mut self) -> Result<(), HardwareError> {
        (**self).close()
    }

    fn set_leds(&mut self, state: LedSet) -> Result<(), HardwareError> {
        (**self).set_leds(state)
    }

    fn get_leds(&mut self) -> Result<LedSet, HardwareError> {
        (**self).get_leds()
    }
}

/// Blinker that accepts everything and lights nothing
///
/// Useful for dry runs of a pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopBlinker {
    channels: ChannelCount,
}

impl NopBlinker {
    pub const fn new(channels: ChannelCount) -> Self {
        Self { channels }
    }
}

impl Blinker for NopBlinker {
    fn open(&mut self) -> Result<(), HardwareError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), HardwareError> {
        Ok(())
    }

    fn set_leds(&mut self, _state: LedSet) -> Result<(), HardwareError> {
        Ok(())
    }

    fn get_leds(&mut self) -> Result<LedSet, HardwareError> {
        Ok(LedSet::off(self.channels))
    }
}
