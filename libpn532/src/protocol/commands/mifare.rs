// libpn532-rs/libpn532/src/protocol/commands/mifare.rs

//! MIFARE Classic card commands, relayed through InDataExchange.

use super::{Command, in_data_exchange};
use crate::constants::{
    MIFARE_CMD_DECREMENT, MIFARE_CMD_INCREMENT, MIFARE_CMD_READ, MIFARE_CMD_RESTORE,
    MIFARE_CMD_TRANSFER, MIFARE_CMD_WRITE,
};
use crate::types::KeyType;

/// Authenticate: key type, block, 6-byte key, first 4 UID bytes
pub fn authenticate(target: u8, key_type: KeyType, block: u8, key: &[u8; 6], uid: &[u8; 4]) -> Command {
    let mut data = Vec::with_capacity(12);
    data.push(key_type.auth_command());
    data.push(block);
    data.extend_from_slice(key);
    data.extend_from_slice(uid);
    in_data_exchange(target, &data)
}

pub fn read_block(target: u8, block: u8) -> Command {
    in_data_exchange(target, &[MIFARE_CMD_READ, block])
}

pub fn write_block(target: u8, block: u8, data: &[u8; 16]) -> Command {
    let mut payload = Vec::with_capacity(18);
    payload.push(MIFARE_CMD_WRITE);
    payload.push(block);
    payload.extend_from_slice(data);
    in_data_exchange(target, &payload)
}

/// Increment/decrement take a 4-byte little-endian operand.
pub fn increment(target: u8, block: u8, delta: u32) -> Command {
    value_op(target, MIFARE_CMD_INCREMENT, block, delta)
}

pub fn decrement(target: u8, block: u8, delta: u32) -> Command {
    value_op(target, MIFARE_CMD_DECREMENT, block, delta)
}

/// Restore carries a dummy 4-byte operand on the air interface.
pub fn restore(target: u8, block: u8) -> Command {
    value_op(target, MIFARE_CMD_RESTORE, block, 0)
}

pub fn transfer(target: u8, block: u8) -> Command {
    in_data_exchange(target, &[MIFARE_CMD_TRANSFER, block])
}

fn value_op(target: u8, op: u8, block: u8, operand: u32) -> Command {
    let mut payload = Vec::with_capacity(6);
    payload.push(op);
    payload.push(block);
    payload.extend_from_slice(&operand.to_le_bytes());
    in_data_exchange(target, &payload)
}
