// libpn532-rs/libpn532/src/protocol/commands/initiator.rs

use super::Command;
use crate::constants::{PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_INLIST_PASSIVE_TARGET};

/// InListPassiveTarget (0x4A). `brty` selects baud rate / modulation
/// (0x00 = 106 kbps type A). The chip runs anticollision itself.
pub fn in_list_passive_target(max_targets: u8, brty: u8) -> Command {
    Command::new(PN532_CMD_INLIST_PASSIVE_TARGET, vec![max_targets, brty])
}

/// InDataExchange (0x40): relay `data` to logical target `target`.
pub fn in_data_exchange(target: u8, data: &[u8]) -> Command {
    let mut params = Vec::with_capacity(1 + data.len());
    params.push(target);
    params.extend_from_slice(data);
    Command::new(PN532_CMD_IN_DATA_EXCHANGE, params)
}
