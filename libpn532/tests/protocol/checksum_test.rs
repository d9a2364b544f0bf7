#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(3), 0xfd);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(0xD4, &[0x02]), 0x2A);
    assert_eq!(dcs(0xD5, &[0x15]), 0x16);
    assert_eq!(dcs(0x00, &[]), 0x00);
}

#[test]
fn fixture_frames_satisfy_both_checksums() {
    use common::fixtures::*;
    for frame in [
        get_firmware_version_frame(),
        sam_configuration_frame(),
        in_list_passive_target_frame(),
        firmware_response_frame(),
        sam_response_frame(),
    ] {
        let len = frame[3];
        assert_eq!(len.wrapping_add(frame[4]), 0);
        let body = &frame[5..5 + len as usize];
        let sum = body
            .iter()
            .chain(std::iter::once(&frame[5 + len as usize]))
            .fold(0u8, |acc, b| acc.wrapping_add(*b));
        assert_eq!(sum, 0, "bad DCS in {}", hex::encode(&frame));
    }
}
