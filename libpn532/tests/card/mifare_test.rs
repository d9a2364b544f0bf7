#[path = "../common/mod.rs"]
mod common;

use libpn532::card::{CardDetector, MifareClassicSession};
use libpn532::constants::MIFARE_DEFAULT_KEY;
use libpn532::error::CardError;
use libpn532::types::{KeyType, ValueBlock};

/// Detect the fixture tag and bind a session to it.
fn bound(h: &mut common::Harness) -> MifareClassicSession {
    common::push_ack(&h.bus);
    common::push_response(&h.bus, &common::fixtures::mifare_classic_payload());
    let tag = CardDetector::new(&mut h.channel).detect().unwrap();
    MifareClassicSession::bind(&tag)
}

#[test]
fn authenticate_then_read_block() {
    common::init_logger();
    let mut h = common::harness();
    let mut session = bound(&mut h);

    common::push_exchange(&h.bus, &[0x41, 0x00]);
    session
        .authenticate(&mut h.channel, KeyType::A, 2, &MIFARE_DEFAULT_KEY)
        .unwrap();

    let mut body = vec![0x41, 0x00];
    body.extend_from_slice(&common::fixtures::sample_block());
    common::push_exchange(&h.bus, &body);
    let block = session.read_block(&mut h.channel, 2).unwrap();
    assert_eq!(block, common::fixtures::sample_block());
    assert_eq!(h.bus.remaining(), 0);
    assert!(!h.pin.is_asserted());
}

#[test]
fn rejected_key_reports_status() {
    let mut h = common::harness();
    let mut session = bound(&mut h);
    common::push_exchange(&h.bus, &[0x41, 0x14]);
    assert_eq!(
        session.authenticate(&mut h.channel, KeyType::A, 2, &MIFARE_DEFAULT_KEY),
        Err(CardError::BadStatus(0x14))
    );
    assert_eq!(session.authenticated(), None);
}

#[test]
fn write_without_authentication() {
    let mut h = common::harness();
    let mut session = bound(&mut h);
    let writes = h.bus.sent().len();
    assert_eq!(
        session.write_block(&mut h.channel, 8, &[0u8; 16]),
        Err(CardError::NotAuthenticated { block: 8 })
    );
    assert_eq!(h.bus.sent().len(), writes);
}

#[test]
fn value_block_workflow() {
    let mut h = common::harness();
    let mut session = bound(&mut h);

    common::push_exchange(&h.bus, &[0x41, 0x00]);
    session
        .authenticate(&mut h.channel, KeyType::B, 4, &MIFARE_DEFAULT_KEY)
        .unwrap();

    // write 100, decrement by 10, commit, read back 90
    for _ in 0..3 {
        common::push_exchange(&h.bus, &[0x41, 0x00]);
    }
    session.write_value(&mut h.channel, 5, 100).unwrap();
    session.decrement(&mut h.channel, 5, 10).unwrap();
    session.transfer(&mut h.channel, 5).unwrap();

    let mut body = vec![0x41, 0x00];
    body.extend_from_slice(&ValueBlock::new(90, 5).encode());
    common::push_exchange(&h.bus, &body);
    assert_eq!(session.read_value(&mut h.channel, 5).unwrap().value, 90);
}
