#[path = "../common/mod.rs"]
mod common;

use libpn532::config::ChannelConfig;
use libpn532::error::TransportError;
use libpn532::transport::{MockBus, MockDelay, MockPin, SessionState, TransportSession};
use libpn532::utils::ms;

fn session() -> (MockBus, MockPin, MockDelay, TransportSession) {
    common::init_logger();
    let pin = MockPin::new();
    let bus = MockBus::wired_to(&pin);
    let delay = MockDelay::new();
    let session = TransportSession::new(
        Box::new(bus.clone()),
        Box::new(pin.clone()),
        Box::new(delay.clone()),
        &ChannelConfig::default(),
    );
    (bus, pin, delay, session)
}

#[test]
fn frame_write_then_streamed_response() {
    let (bus, pin, delay, mut s) = session();
    s.write_frame(&common::fixtures::get_firmware_version_frame())
        .unwrap();

    let response = common::fixtures::firmware_response_frame();
    bus.push_bytes(&response);
    let mut buf = vec![0u8; response.len()];
    s.begin_read(&mut buf, 5).unwrap();
    s.continue_read(&mut buf[5..], response.len() - 5).unwrap();
    assert_eq!(s.state(), SessionState::Streaming);
    s.end_read();

    assert_eq!(buf, response);
    assert_eq!(s.state(), SessionState::Done);
    assert!(!pin.is_asserted());
    assert_eq!(pin.assert_count(), 2);
    assert_eq!(delay.count_of(ms(5)), 2);
    assert_eq!(bus.unselected_transfers(), 0);
}

#[test]
fn end_read_twice_keeps_state_sane() {
    let (bus, pin, _delay, mut s) = session();
    bus.push_bytes(&[0xAA, 0xBB]);
    let mut buf = [0u8; 1];
    s.begin_read(&mut buf, 1).unwrap();
    s.end_read();
    s.end_read();
    assert!(!pin.is_asserted());
    assert_eq!(pin.deassert_count(), 1);

    s.read_all(&mut buf, 1).unwrap();
    assert_eq!(buf, [0xBB]);
}

#[test]
fn short_bus_read_is_reported() {
    // A bus implementation that hands back fewer bytes than requested
    struct Stingy;
    impl libpn532::transport::SerialBus for Stingy {
        fn write(&mut self, _bytes: &[u8]) -> Result<(), TransportError> {
            Ok(())
        }
        fn read(&mut self, len: usize) -> Result<Vec<u8>, TransportError> {
            Ok(vec![0; len.saturating_sub(1)])
        }
    }

    let pin = MockPin::new();
    let mut s = TransportSession::new(
        Box::new(Stingy),
        Box::new(pin.clone()),
        Box::new(MockDelay::new()),
        &ChannelConfig::default(),
    );
    let mut buf = [0u8; 4];
    assert_eq!(
        s.begin_read(&mut buf, 4),
        Err(TransportError::ShortRead {
            expected: 4,
            actual: 3
        })
    );
    assert!(!pin.is_asserted());
}

#[test]
fn zero_settle_skips_delay() {
    let pin = MockPin::new();
    let delay = MockDelay::new();
    let mut s = TransportSession::new(
        Box::new(MockBus::new()),
        Box::new(pin),
        Box::new(delay.clone()),
        &ChannelConfig::default().with_select_settle(ms(0)),
    );
    s.write_frame(&[0x00]).unwrap();
    assert_eq!(delay.total(), ms(0));
}
