mod common;

mod tests {
    use bl1nky_pattern::{BuiltinPattern, ChannelCount, Executor, NopBlinker};

    use super::common::{RecordingBlinker, RecordingDelay};

    #[test]
    fn test_builtin_names_round_trip() {
        for pattern in BuiltinPattern::ALL {
            assert_eq!(BuiltinPattern::parse_from_str(pattern.as_str()), Some(pattern));
        }
        assert_eq!(BuiltinPattern::parse_from_str("strobe"), None);
    }

    #[test]
    fn test_builtin_patterns_run_on_both_profiles() {
        for channels in [ChannelCount::Three, ChannelCount::Four] {
            for pattern in BuiltinPattern::ALL {
                let program = pattern.program(channels).unwrap();
                let mut blinker = NopBlinker::new(channels);
                let stats = Executor::new(&mut blinker, RecordingDelay::new())
                    .run(&program)
                    .unwrap();
                assert!(stats.sets > 0, "{}", pattern.as_str());
            }
        }
    }

    #[test]
    fn test_blink_pattern() {
        let program = BuiltinPattern::Blink
            .program(ChannelCount::Three)
            .unwrap();
        let mut blinker = RecordingBlinker::new();
        let mut delay = RecordingDelay::new();
        Executor::new(&mut blinker, &mut delay).run(&program).unwrap();

        assert_eq!(blinker.bits(), [0b111, 0b000].repeat(5));
        assert_eq!(delay.total(), bl1nky_pattern::Duration::from_millis(3000));
    }
}
