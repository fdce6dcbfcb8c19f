//! HID report framing
//!
//! The badge speaks a two-byte request/response protocol over vendor HID
//! reports:
//!
//! - set: output report `[CMD_SET_LED_STATE, bits]`
//! - get: output report `[CMD_GET_LED_STATE, 0]`, then a feature report
//!   `[report id 0, CMD_GET_LED_STATE, bits, ..]`
//!
//! Device enumeration and the OS HID binding live behind
//! [`ReportTransport`]; this module only frames and validates reports.

use alloc::format;
use alloc::string::String;

use crate::blinker::{Blinker, HardwareError, HardwareErrorKind};
use crate::led_set::{ChannelCount, LedSet};

/// USB vendor id of the badge
pub const VID: u16 = 0x1209;
/// USB product id of the badge
pub const PID: u16 = 0xF600;
/// Vendor HID usage page of the LED interface
pub const USAGE_PAGE: u16 = 0xFF;
/// HID usage of the LED interface
pub const USAGE: u16 = 0xCF;

pub const CMD_SET_LED_STATE: u8 = 0x01;
pub const CMD_GET_LED_STATE: u8 = 0x02;

/// Report id used for every exchange
const REPORT_ID: u8 = 0x00;

/// Maximum full-speed HID report length
pub const MAX_REPORT_LEN: usize = 64;

/// Raw feature report as returned by the transport, report id first
pub type FeatureReport = heapless::Vec<u8, MAX_REPORT_LEN>;

/// Raw HID report channel to one device
pub trait ReportTransport {
    fn open(&mut self) -> Result<(), HardwareError>;

    fn close(&mut self) -> Result<(), HardwareError>;

    /// Send an output report on report id 0
    fn set_output_report(&mut self, report: &[u8]) -> Result<(), HardwareError>;

    /// Fetch a feature report, including the leading report id
    fn get_feature_report(&mut self) -> Result<FeatureReport, HardwareError>;
}

/// Build the output report switching the LEDs to `state`
pub const fn encode_set(state: LedSet) -> [u8; 2] {
    [CMD_SET_LED_STATE, state.bits()]
}

/// Build the output report requesting the current LED state
pub const fn encode_get() -> [u8; 2] {
    [CMD_GET_LED_STATE, 0x00]
}

/// Validate a feature report answering [`encode_get`]
pub fn decode_get_response(report: &[u8], channels: ChannelCount) -> Result<LedSet, HardwareError> {
    let invalid = |detail: String| {
        HardwareError::new(HardwareErrorKind::InvalidResponse).with_detail(detail)
    };

    let Some((&report_id, payload)) = report.split_first() else {
        return Err(invalid(String::from("invalid feature report: no report id")));
    };
    if report_id != REPORT_ID {
        return Err(invalid(format!(
            "unexpected report id: {report_id} (expected {REPORT_ID})"
        )));
    }

    match payload {
        [command, bits, ..] if *command == CMD_GET_LED_STATE => {
            Ok(LedSet::from_raw(*bits, channels))
        }
        [command, _, ..] => Err(invalid(format!(
            "unexpected command in response: 0x{command:02X} (expected 0x{CMD_GET_LED_STATE:02X})"
        ))),
        _ => Err(invalid(format!(
            "invalid response length: {} (expected at least 2)",
            payload.len()
        ))),
    }
}

/// Blinker talking to the badge through HID reports
#[derive(Debug)]
pub struct HidBlinker<T: ReportTransport> {
    transport: T,
    channels: ChannelCount,
}

impl<T: ReportTransport> HidBlinker<T> {
    pub const fn new(transport: T, channels: ChannelCount) -> Self {
        Self {
            transport,
            channels,
        }
    }

    pub const fn channels(&self) -> ChannelCount {
        self.channels
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl<T: ReportTransport> Blinker for HidBlinker<T> {
    fn open(&mut self) -> Result<(), HardwareError> {
        self.transport.open()
    }

    fn close(&mut self) -> Result<(), HardwareError> {
        self.transport.close()
    }

    fn set_leds(&mut self, state: LedSet) -> Result<(), HardwareError> {
        #[cfg(feature = "log")]
        log::trace!("hid: set LEDs {state}");
        self.transport.set_output_report(&encode_set(state))
    }

    fn get_leds(&mut self) -> Result<LedSet, HardwareError> {
        self.transport
            .set_output_report(&encode_get())
            .map_err(|err| with_context(err, "send get command"))?;
        let report = self
            .transport
            .get_feature_report()
            .map_err(|err| with_context(err, "get report"))?;
        let state = decode_get_response(&report, self.channels)?;

        #[cfg(feature = "log")]
        log::trace!("hid: got LEDs {state}");
        Ok(state)
    }
}

/// Prefix the transport's detail with the step that failed
fn with_context(err: HardwareError, step: &str) -> HardwareError {
    let detail = match err.detail() {
        Some(detail) => format!("{step}: {detail}"),
        None => String::from(step),
    };
    HardwareError::new(err.kind()).with_detail(detail)
}
