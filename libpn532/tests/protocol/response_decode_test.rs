#[path = "../common/mod.rs"]
mod common;

use libpn532::error::{FrameError, ProtocolError};
use libpn532::protocol::codec::decode_response_frame;
use libpn532::protocol::commands;
use libpn532::protocol::responses::{decode_firmware_version, split_status};

#[test]
fn firmware_version_from_fixture() {
    let body = decode_response_frame(
        &commands::get_firmware_version(),
        &common::fixtures::firmware_response_frame(),
    )
    .unwrap();
    let fw = decode_firmware_version(&body).unwrap();
    assert_eq!((fw.ic, fw.version, fw.revision, fw.support), (0x32, 1, 6, 7));
}

#[test]
fn firmware_version_short_body() {
    assert!(matches!(
        decode_firmware_version(&[0x32, 0x01]),
        Err(ProtocolError::UnexpectedLength { .. })
    ));
}

#[test]
fn sam_response_has_empty_body() {
    let body = decode_response_frame(
        &commands::sam_configuration(),
        &common::fixtures::sam_response_frame(),
    )
    .unwrap();
    assert!(body.is_empty());
}

#[test]
fn corrupted_response_is_rejected() {
    let mut frame = common::fixtures::firmware_response_frame();
    frame[8] ^= 0x40;
    assert!(matches!(
        decode_response_frame(&commands::get_firmware_version(), &frame),
        Err(ProtocolError::Frame(FrameError::DataChecksum { .. }))
    ));
}

#[test]
fn data_exchange_status_split() {
    let (status, data) = split_status(&[0x00, 0x01, 0x02]).unwrap();
    assert_eq!(status, 0);
    assert_eq!(data, &[0x01, 0x02]);
    assert_eq!(split_status(&[0x14]).unwrap().0, 0x14);
}
