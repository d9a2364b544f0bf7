// libpn532-rs/libpn532/src/card/mifare.rs

//! MIFARE Classic block access through InDataExchange.
//!
//! Every card command is relayed by the chip and answered with
//! `0x41 status data...`. A nonzero status means the card refused or did
//! not answer; the card then drops its crypto state, so the session forgets
//! the authenticated sector too.

use log::{debug, warn};

use crate::card::info::TagRecord;
use crate::constants::MIFARE_BLOCK_LEN;
use crate::device::CommandChannel;
use crate::error::{CardError, ProtocolError};
use crate::protocol::commands::{self, Command};
use crate::protocol::responses::split_status;
use crate::types::{sector_of, KeyType, ValueBlock};

/// Authenticated access to one bound MIFARE Classic tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MifareClassicSession {
    target: u8,
    uid: [u8; 4],
    auth: Option<(u8, KeyType)>,
}

impl MifareClassicSession {
    /// Bind to a detected tag: keeps its logical number and the first four
    /// UID bytes.
    pub fn bind(tag: &TagRecord) -> Self {
        Self {
            target: tag.target,
            uid: tag.uid.auth_bytes(),
            auth: None,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn uid(&self) -> &[u8; 4] {
        &self.uid
    }

    /// Sector and key of the last successful authentication, if still valid
    pub fn authenticated(&self) -> Option<(u8, KeyType)> {
        self.auth
    }

    pub fn authenticate(
        &mut self,
        channel: &mut CommandChannel,
        key_type: KeyType,
        block: u8,
        key: &[u8; 6],
    ) -> Result<(), CardError> {
        self.auth = None;
        let cmd = commands::mifare::authenticate(self.target, key_type, block, key, &self.uid);
        self.exchange(channel, &cmd)?;
        let sector = sector_of(block);
        debug!("mifare: sector {} authenticated with key {}", sector, key_type);
        self.auth = Some((sector, key_type));
        Ok(())
    }

    pub fn read_block(
        &mut self,
        channel: &mut CommandChannel,
        block: u8,
    ) -> Result<[u8; MIFARE_BLOCK_LEN], CardError> {
        self.require_auth(block)?;
        let data = self.exchange(channel, &commands::mifare::read_block(self.target, block))?;
        if data.len() != MIFARE_BLOCK_LEN {
            return Err(ProtocolError::UnexpectedLength {
                expected: MIFARE_BLOCK_LEN,
                actual: data.len(),
            }
            .into());
        }
        let mut out = [0u8; MIFARE_BLOCK_LEN];
        out.copy_from_slice(&data);
        debug!("mifare: read block {}", block);
        Ok(out)
    }

    pub fn write_block(
        &mut self,
        channel: &mut CommandChannel,
        block: u8,
        data: &[u8; MIFARE_BLOCK_LEN],
    ) -> Result<(), CardError> {
        self.require_auth(block)?;
        self.exchange(channel, &commands::mifare::write_block(self.target, block, data))?;
        debug!("mifare: wrote block {}", block);
        Ok(())
    }

    /// Load `block` into the card's transfer buffer, adding `delta`.
    pub fn increment(
        &mut self,
        channel: &mut CommandChannel,
        block: u8,
        delta: u32,
    ) -> Result<(), CardError> {
        self.require_auth(block)?;
        self.exchange(channel, &commands::mifare::increment(self.target, block, delta))?;
        Ok(())
    }

    /// Load `block` into the card's transfer buffer, subtracting `delta`.
    pub fn decrement(
        &mut self,
        channel: &mut CommandChannel,
        block: u8,
        delta: u32,
    ) -> Result<(), CardError> {
        self.require_auth(block)?;
        self.exchange(channel, &commands::mifare::decrement(self.target, block, delta))?;
        Ok(())
    }

    /// Load `block` into the transfer buffer unchanged.
    pub fn restore(&mut self, channel: &mut CommandChannel, block: u8) -> Result<(), CardError> {
        self.require_auth(block)?;
        self.exchange(channel, &commands::mifare::restore(self.target, block))?;
        Ok(())
    }

    /// Commit the transfer buffer to `block`.
    pub fn transfer(&mut self, channel: &mut CommandChannel, block: u8) -> Result<(), CardError> {
        self.require_auth(block)?;
        self.exchange(channel, &commands::mifare::transfer(self.target, block))?;
        debug!("mifare: transferred to block {}", block);
        Ok(())
    }

    pub fn read_value(
        &mut self,
        channel: &mut CommandChannel,
        block: u8,
    ) -> Result<ValueBlock, CardError> {
        let raw = self.read_block(channel, block)?;
        ValueBlock::decode(&raw).ok_or(CardError::NotValueBlock { block })
    }

    /// Format `block` as a value block holding `value`, with the block's
    /// own number as the address byte.
    pub fn write_value(
        &mut self,
        channel: &mut CommandChannel,
        block: u8,
        value: i32,
    ) -> Result<(), CardError> {
        self.write_block(channel, block, &ValueBlock::new(value, block).encode())
    }

    fn require_auth(&self, block: u8) -> Result<(), CardError> {
        match self.auth {
            Some((sector, _)) if sector == sector_of(block) => Ok(()),
            _ => Err(CardError::NotAuthenticated { block }),
        }
    }

    /// Run one InDataExchange and return the card data after a zero status.
    fn exchange(
        &mut self,
        channel: &mut CommandChannel,
        cmd: &Command,
    ) -> Result<Vec<u8>, CardError> {
        let body = channel.transact(cmd)?;
        let (status, data) = split_status(&body)?;
        if status != 0 {
            warn!(
                "mifare: card status {:#04x} for {:02X?}",
                status,
                &cmd.params[1..cmd.params.len().min(3)]
            );
            self.auth = None;
            return Err(CardError::BadStatus(status));
        }
        Ok(data.to_vec())
    }
}
