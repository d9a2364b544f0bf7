#[path = "../common/mod.rs"]
mod common;

use libpn532::config::{BitOrder, ChannelConfig};
use libpn532::transport::{MockBus, MockDelay, MockPin, TransportSession};

fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| b.reverse_bits()).collect()
}

#[test]
fn msb_first_bus_sees_mirrored_frame() {
    let bus = MockBus::new();
    let mut s = TransportSession::new(
        Box::new(bus.clone()),
        Box::new(MockPin::new()),
        Box::new(MockDelay::new()),
        &ChannelConfig::default().with_bit_order(BitOrder::MsbFirst),
    );

    let frame = common::fixtures::get_firmware_version_frame();
    s.write_frame(&frame).unwrap();
    assert_eq!(bus.sent(), vec![vec![0x80], reversed(&frame)]);

    let ack = common::fixtures::ack_frame();
    bus.push_bytes(&reversed(&ack));
    let mut buf = [0u8; 6];
    s.read_all(&mut buf, 6).unwrap();
    assert_eq!(buf.to_vec(), ack);
}

#[test]
fn lsb_first_is_passthrough() {
    assert_eq!(BitOrder::LsbFirst.translate(0x01), 0x01);
    assert_eq!(BitOrder::MsbFirst.translate(0x01), 0x80);
    assert_eq!(BitOrder::default(), BitOrder::LsbFirst);
}
