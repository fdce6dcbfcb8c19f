mod common;

mod tests {
    use bl1nky_pattern::hid::{
        CMD_GET_LED_STATE, CMD_SET_LED_STATE, FeatureReport, decode_get_response,
    };
    use bl1nky_pattern::{
        Blinker, ChannelCount, ErrorKind, HardwareError, HardwareErrorKind, HidBlinker,
        ReportTransport, run_source,
    };

    use super::common::{RecordingDelay, led3, led4};

    // ========================================================================
    // Mock Transport
    // ========================================================================

    #[derive(Default)]
    struct MockTransport {
        output_reports: Vec<Vec<u8>>,
        feature_report: Vec<u8>,
        open: bool,
        fail_with: Option<HardwareErrorKind>,
    }

    impl MockTransport {
        fn answering(feature_report: &[u8]) -> Self {
            Self {
                feature_report: feature_report.to_vec(),
                ..Self::default()
            }
        }
    }

    impl ReportTransport for MockTransport {
        fn open(&mut self) -> Result<(), HardwareError> {
            if let Some(kind) = self.fail_with {
                return Err(HardwareError::new(kind).with_detail("open failed"));
            }
            self.open = true;
            Ok(())
        }

        fn close(&mut self) -> Result<(), HardwareError> {
            self.open = false;
            Ok(())
        }

        fn set_output_report(&mut self, report: &[u8]) -> Result<(), HardwareError> {
            if let Some(kind) = self.fail_with {
                return Err(HardwareError::new(kind));
            }
            self.output_reports.push(report.to_vec());
            Ok(())
        }

        fn get_feature_report(&mut self) -> Result<FeatureReport, HardwareError> {
            Ok(FeatureReport::from_slice(&self.feature_report).unwrap())
        }
    }

    // ========================================================================
    // Tests: framing
    // ========================================================================

    #[test]
    fn test_set_leds_sends_set_report() {
        let mut blinker = HidBlinker::new(MockTransport::default(), ChannelCount::Three);
        blinker.set_leds(led3(0b101)).unwrap();
        assert_eq!(
            blinker.transport().output_reports,
            [vec![CMD_SET_LED_STATE, 0b101]]
        );
    }

    #[test]
    fn test_get_leds_round_trip() {
        let transport = MockTransport::answering(&[0x00, CMD_GET_LED_STATE, 0b1010, 0, 0]);
        let mut blinker = HidBlinker::new(transport, ChannelCount::Four);
        assert_eq!(blinker.get_leds().unwrap(), led4(0b1010));
        assert_eq!(
            blinker.transport().output_reports,
            [vec![CMD_GET_LED_STATE, 0x00]]
        );
    }

    #[test]
    fn test_get_leds_masks_unused_bits() {
        let transport = MockTransport::answering(&[0x00, CMD_GET_LED_STATE, 0xFF]);
        let mut blinker = HidBlinker::new(transport, ChannelCount::Three);
        assert_eq!(blinker.get_leds().unwrap(), led3(0b111));
    }

    #[test]
    fn test_decode_rejects_bad_reports() {
        let three = ChannelCount::Three;
        for report in [
            &[][..],
            &[0x01, CMD_GET_LED_STATE, 0b1][..],
            &[0x00, CMD_GET_LED_STATE][..],
            &[0x00, CMD_SET_LED_STATE, 0b1][..],
        ] {
            let err = decode_get_response(report, three).unwrap_err();
            assert_eq!(err.kind(), HardwareErrorKind::InvalidResponse, "{report:?}");
        }
    }

    #[test]
    fn test_decode_error_detail() {
        let err = decode_get_response(&[0x00, 0x07, 0x01], ChannelCount::Three).unwrap_err();
        assert_eq!(
            err.detail(),
            Some("unexpected command in response: 0x07 (expected 0x02)")
        );
    }

    #[test]
    fn test_transport_errors_keep_kind() {
        let transport = MockTransport {
            fail_with: Some(HardwareErrorKind::DeviceBusy),
            ..MockTransport::default()
        };
        let mut blinker = HidBlinker::new(transport, ChannelCount::Three);

        let err = blinker.get_leds().unwrap_err();
        assert_eq!(err.kind(), HardwareErrorKind::DeviceBusy);
        assert_eq!(err.detail(), Some("send get command"));
        assert!(!err.is_permanent());

        let err = blinker.open().unwrap_err();
        assert_eq!(
            err.to_string(),
            "HwError: bl1nky device busy: open failed"
        );
    }

    #[test]
    fn test_pattern_over_hid() {
        let mut blinker = HidBlinker::new(MockTransport::default(), ChannelCount::Three);
        blinker.open().unwrap();
        run_source(
            "set 0b100\nrepeat 2\nset 0b001\nend",
            ChannelCount::Three,
            &mut blinker,
            RecordingDelay::new(),
        )
        .unwrap();
        blinker.close().unwrap();

        let transport = blinker.into_inner();
        assert!(!transport.open);
        assert_eq!(
            transport.output_reports,
            [
                vec![CMD_SET_LED_STATE, 0b100],
                vec![CMD_SET_LED_STATE, 0b001],
                vec![CMD_SET_LED_STATE, 0b001],
            ]
        );
    }

    #[test]
    fn test_missing_device_is_permanent() {
        let transport = MockTransport {
            fail_with: Some(HardwareErrorKind::DeviceNotFound),
            ..MockTransport::default()
        };
        let mut blinker = HidBlinker::new(transport, ChannelCount::Three);
        let err = run_source("set 0b1", ChannelCount::Three, &mut blinker, RecordingDelay::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Hardware);
        assert!(err.is_permanent());
        assert_eq!(
            err.to_string(),
            "line 1: set LEDs: HwError: bl1nky device not found"
        );
    }
}
