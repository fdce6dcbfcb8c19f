//! Test doubles shared by the integration tests

#![allow(dead_code, unreachable_pub)]

use bl1nky_pattern::{
    Blinker, ChannelCount, Duration, HardwareError, HardwareErrorKind, LedSet,
};
use embedded_hal::delay::DelayNs;

// ============================================================================
// Recording Blinker
// ============================================================================

/// Blinker that records every state it is asked to show
#[derive(Default)]
pub struct RecordingBlinker {
    pub sets: Vec<LedSet>,
    pub opened: bool,
    /// Fail the set call with this index (0-based) instead of recording it
    pub fail_on_set: Option<(usize, HardwareErrorKind)>,
    set_calls: usize,
}

impl RecordingBlinker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_set(index: usize, kind: HardwareErrorKind) -> Self {
        Self {
            fail_on_set: Some((index, kind)),
            ..Self::default()
        }
    }

    /// Recorded states as raw bits
    pub fn bits(&self) -> Vec<u8> {
        self.sets.iter().map(|state| state.bits()).collect()
    }
}

impl Blinker for RecordingBlinker {
    fn open(&mut self) -> Result<(), HardwareError> {
        self.opened = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), HardwareError> {
        self.opened = false;
        Ok(())
    }

    fn set_leds(&mut self, state: LedSet) -> Result<(), HardwareError> {
        let call = self.set_calls;
        self.set_calls += 1;
        if let Some((index, kind)) = self.fail_on_set {
            if index == call {
                return Err(HardwareError::new(kind));
            }
        }
        self.sets.push(state);
        Ok(())
    }

    fn get_leds(&mut self) -> Result<LedSet, HardwareError> {
        Ok(self
            .sets
            .last()
            .copied()
            .unwrap_or(LedSet::off(ChannelCount::Three)))
    }
}

// ============================================================================
// Recording Delay
// ============================================================================

/// Delay that records requested waits instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub calls_us: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        let micros: u64 = self.calls_us.iter().map(|&us| u64::from(us)).sum();
        Duration::from_micros(micros)
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls_us.push(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.calls_us.push(us);
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn led3(bits: u8) -> LedSet {
    LedSet::new(bits, ChannelCount::Three).unwrap()
}

pub fn led4(bits: u8) -> LedSet {
    LedSet::new(bits, ChannelCount::Four).unwrap()
}

/// Join script lines with newlines
pub fn script(lines: &[&str]) -> String {
    lines.join("\n")
}
