//! Blocking waits
//!
//! The executor does not sleep by itself. `wait` commands are handed to an
//! [`embedded_hal::delay::DelayNs`] implementation, which on the host is
//! [`StdDelay`] and in tests is anything that records the requested time.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// Block on `delay` for the full `duration`
///
/// `DelayNs` takes 32-bit microsecond counts, so longer waits are split
/// into consecutive chunks. A zero duration returns without calling the
/// delay at all.
pub(crate) fn block_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut remaining = duration.as_micros();
    while remaining > 0 {
        let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
        delay.delay_us(chunk);
        remaining -= u64::from(chunk);
    }
}

/// Delay that suspends the current thread
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(core::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(core::time::Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(core::time::Duration::from_millis(u64::from(ms)));
    }
}
