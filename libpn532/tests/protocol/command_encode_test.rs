#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::commands::{self, mifare};
use libpn532::protocol::Command;
use libpn532::types::KeyType;

#[test]
fn system_commands_encode() {
    assert_eq!(
        commands::get_firmware_version().to_frame().unwrap(),
        common::fixtures::get_firmware_version_frame()
    );
    assert_eq!(
        commands::sam_configuration().to_frame().unwrap(),
        common::fixtures::sam_configuration_frame()
    );
    assert_eq!(
        commands::in_list_passive_target(1, 0x00).to_frame().unwrap(),
        common::fixtures::in_list_passive_target_frame()
    );
}

#[test]
fn authenticate_carries_key_and_uid() {
    let uid = common::fixtures::sample_uid();
    let cmd = mifare::authenticate(1, KeyType::B, 7, &[0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5], &uid);
    assert_eq!(cmd.opcode, 0x40);
    assert_eq!(cmd.response_code(), 0x41);
    assert_eq!(
        hex::encode_upper(cmd.encode()),
        "400161".to_string() + "07" + "A0A1A2A3A4A5" + "DEADBEEF"
    );
}

#[test]
fn write_block_carries_sixteen_bytes() {
    let cmd = mifare::write_block(1, 8, &common::fixtures::sample_block());
    assert_eq!(cmd.params.len(), 1 + 2 + 16);
    assert_eq!(&cmd.params[..3], &[0x01, 0xA0, 0x08]);
}

#[test]
fn command_response_code_wraps() {
    assert_eq!(Command::new(0xFF, vec![]).response_code(), 0x00);
}
