//! Per-channel LED state
//!
//! The badge exposes a handful of single-color LEDs. Their state is a
//! small bitset written in left-to-right order: the most significant bit
//! is the first LED, so `0b100` lights LED 1 on a three-channel device.

use core::fmt;

/// Number of LED channels of the device profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ChannelCount {
    /// Current badge firmware (three LEDs)
    #[default]
    Three = 3,
    /// Earlier four-LED hardware revision
    Four = 4,
}

impl ChannelCount {
    /// Number of channels as a plain integer
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Bit mask covering every channel
    pub const fn mask(self) -> u8 {
        (1 << self.get()) - 1
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }
}

/// Fixed-width on/off state of every LED channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LedSet {
    bits: u8,
    channels: ChannelCount,
}

impl LedSet {
    /// Create a state from raw bits
    ///
    /// Returns `None` if `bits` addresses a channel the device does not have.
    pub const fn new(bits: u8, channels: ChannelCount) -> Option<Self> {
        if bits & !channels.mask() != 0 {
            return None;
        }
        Some(Self { bits, channels })
    }

    /// Create a state from a device report byte, dropping unused bits
    pub const fn from_raw(raw: u8, channels: ChannelCount) -> Self {
        Self {
            bits: raw & channels.mask(),
            channels,
        }
    }

    /// All LEDs off
    pub const fn off(channels: ChannelCount) -> Self {
        Self { bits: 0, channels }
    }

    /// All LEDs on
    pub const fn all_on(channels: ChannelCount) -> Self {
        Self {
            bits: channels.mask(),
            channels,
        }
    }

    pub const fn bits(self) -> u8 {
        self.bits
    }

    pub const fn channels(self) -> ChannelCount {
        self.channels
    }

    /// Check if the LED at `index` is on
    ///
    /// Index 0 is the first (leftmost) LED. Out of range indices read as off.
    pub const fn channel(self, index: u8) -> bool {
        match self.bit_of(index) {
            Some(bit) => self.bits & bit != 0,
            None => false,
        }
    }

    /// Return a copy with the LED at `index` switched on or off
    ///
    /// Out of range indices leave the state unchanged.
    #[must_use]
    pub const fn with_channel(self, index: u8, on: bool) -> Self {
        let Some(bit) = self.bit_of(index) else {
            return self;
        };
        let bits = if on { self.bits | bit } else { self.bits & !bit };
        Self {
            bits,
            channels: self.channels,
        }
    }

    /// Iterate over channel states, first LED first
    pub fn describe(self) -> impl Iterator<Item = bool> {
        (0..self.channels.get()).map(move |index| self.channel(index))
    }

    const fn bit_of(self, index: u8) -> Option<u8> {
        let width = self.channels.get();
        if index >= width {
            return None;
        }
        Some(1 << (width - 1 - index))
    }
}

impl fmt::Display for LedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.channels.get());
        write!(f, "0b{:0width$b}", self.bits, width = width)
    }
}
