#[path = "../common/mod.rs"]
mod common;

use libpn532::config::ChannelConfig;
use libpn532::device::ChannelState;
use libpn532::error::ProtocolError;
use libpn532::protocol::commands;
use libpn532::utils::ms;
use proptest::prelude::*;

#[test]
fn poll_ready_never_ready_times_out() {
    common::init_logger();
    let common::Harness {
        bus,
        pin,
        delay,
        mut channel,
    } = common::harness();
    bus.push_bytes(&[0x00; 500]);

    let err = channel.poll_ready().unwrap_err();
    match err {
        ProtocolError::Timeout(t) => assert_eq!(t.waited, ms(1000)),
        other => panic!("expected timeout, got {:?}", other),
    }
    assert_eq!(bus.reads().len(), 101);
    assert_eq!(delay.count_of(ms(10)), 100);
    assert!(!pin.is_asserted());
}

#[test]
fn custom_timeout_bounds_attempts() {
    let config = ChannelConfig::default()
        .with_ready_timeout(ms(50))
        .with_poll_interval(ms(20));
    let common::Harness { bus, mut channel, .. } = common::harness_with(config);
    bus.push_bytes(&[0x00; 10]);
    assert!(matches!(channel.poll_ready(), Err(ProtocolError::Timeout(_))));
    assert_eq!(bus.reads().len() as u32, config.max_ready_attempts());
}

#[test]
fn issue_then_stream_response_by_hand() {
    let common::Harness { bus, pin, mut channel, .. } = common::harness();
    common::push_ack(&bus);
    common::push_ready(&bus);
    let response = common::fixtures::firmware_response_frame();
    bus.push_bytes(&response);

    channel.issue(&commands::get_firmware_version()).unwrap();
    assert_eq!(channel.state(), ChannelState::Acked);
    channel.poll_ready().unwrap();

    let mut buf = [0u8; 13];
    channel.read_response(&mut buf, 7, true, false).unwrap();
    assert!(pin.is_asserted());
    channel.read_response(&mut buf[7..], 6, false, false).unwrap();
    channel.read_response(&mut buf[13..], 0, false, true).unwrap();
    assert!(!pin.is_asserted());
    assert_eq!(buf.to_vec(), response);
}

#[test]
fn transaction_after_failure_starts_clean() {
    let common::Harness { bus, pin, mut channel, .. } = common::harness();
    common::push_ready(&bus);
    bus.push_bytes(&common::fixtures::nack_frame());
    assert!(channel.issue(&commands::get_firmware_version()).is_err());
    assert_eq!(channel.state(), ChannelState::Failed);

    common::push_exchange(&bus, &[0x03, 0x32, 0x01, 0x06, 0x07]);
    let body = channel.transact(&commands::get_firmware_version()).unwrap();
    assert_eq!(body, vec![0x32, 0x01, 0x06, 0x07]);
    assert!(!pin.is_asserted());
}

proptest! {
    #[test]
    fn any_differing_ack_byte_is_rejected(idx in 0usize..6, flip in 1u8..=255) {
        let common::Harness { bus, pin, mut channel, .. } = common::harness();
        let mut ack = common::fixtures::ack_frame();
        ack[idx] ^= flip;
        common::push_ready(&bus);
        bus.push_bytes(&ack);

        let err = channel.issue(&commands::get_firmware_version()).unwrap_err();
        let mut expected = [0u8; 6];
        expected.copy_from_slice(&ack);
        prop_assert_eq!(err, ProtocolError::AckMismatch { received: expected });
        prop_assert!(!pin.is_asserted());
    }

    #[test]
    fn ready_after_n_probes(n in 0usize..100) {
        let common::Harness { bus, delay, mut channel, .. } = common::harness();
        bus.push_bytes(&vec![0x00; n]);
        common::push_ready(&bus);
        channel.poll_ready().unwrap();
        prop_assert_eq!(bus.reads().len(), n + 1);
        prop_assert_eq!(delay.total(), ms(10 * n as u64));
    }
}
