#[path = "../common/mod.rs"]
mod common;

use libpn532::card::CardDetector;
use libpn532::error::DetectError;

fn script_detect(bus: &libpn532::transport::MockBus, payload: &[u8]) {
    common::push_ack(bus);
    common::push_response(bus, payload);
}

#[test]
fn detect_mifare_classic_through_device() {
    common::init_logger();
    let (bus, pin, _delay, mut dev) = common::initialized_mock_device(vec![]).unwrap();
    script_detect(&bus, &common::fixtures::mifare_classic_payload());

    let tag = dev.detect().unwrap();
    assert_eq!(tag.target, 1);
    assert_eq!(tag.uid.as_bytes(), &common::fixtures::sample_uid());
    assert_eq!(tag.atqa.as_bytes(), &[0x00, 0x04]);
    assert!(!tag.is_iso14443_4());
    assert_eq!(tag.ats, None);

    assert!(bus
        .sent()
        .contains(&common::fixtures::in_list_passive_target_frame()));
    assert!(!pin.is_asserted());
    assert_eq!(bus.remaining(), 0);
}

#[test]
fn detect_iso14443_4_reads_ats() {
    let common::Harness { bus, mut channel, .. } = common::harness();
    script_detect(&bus, &common::fixtures::iso14443_4_payload());
    let tag = CardDetector::new(&mut channel).detect().unwrap();
    assert_eq!(tag.ats.as_deref(), Some(&[0x75, 0x77][..]));
    assert_eq!(tag.sak.as_u8(), 0x20);
}

#[test]
fn repeated_detection_over_one_channel() {
    let common::Harness { bus, pin, mut channel, .. } = common::harness();
    script_detect(&bus, &common::fixtures::no_target_payload());
    script_detect(&bus, &common::fixtures::mifare_classic_payload());

    assert_eq!(
        CardDetector::new(&mut channel).detect(),
        Err(DetectError::NoTag)
    );
    let tag = CardDetector::new(&mut channel).detect().unwrap();
    assert_eq!(tag.uid.to_hex(), "DEADBEEF");
    assert!(!pin.is_asserted());
    assert_eq!(bus.unselected_transfers(), 0);
}

#[test]
fn every_uid_length_outside_the_standard_is_rejected() {
    for len in [0u8, 1, 3, 5, 6, 8, 9, 11, 255] {
        let common::Harness { bus, pin, mut channel, .. } = common::harness();
        let mut payload = vec![0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, len];
        payload.extend(std::iter::repeat(0xAB).take(len.min(16) as usize));
        script_detect(&bus, &payload);
        assert_eq!(
            CardDetector::new(&mut channel).detect(),
            Err(DetectError::MalformedUid(len))
        );
        assert!(!pin.is_asserted());
    }
}

#[test]
fn poll_loop_shape() {
    let (bus, _pin, _delay, mut dev) = common::initialized_mock_device(vec![]).unwrap();
    script_detect(&bus, &common::fixtures::no_target_payload());
    script_detect(&bus, &common::fixtures::mifare_classic_payload());

    let seen: Vec<_> = (0..2).filter_map(|_| dev.poll()).collect();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].to_string(), "Tg 1 UID DE AD BE EF ATQA 0004 SAK 08");
}
