// libpn532-rs/libpn532/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::{Display, From};

use crate::constants::{MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B, SAK_ISO14443_4};
use crate::error::DetectError;

/// ISO14443-A UID - Newtype Pattern (4, 7 または 10 バイト)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Lengths the protocol allows: single, double and triple size
    pub const VALID_LENGTHS: [usize; 3] = [4, 7, 10];

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uppercase hex, the format the access log reports UIDs in
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }

    /// First four bytes, the part the MIFARE Classic authenticate command carries
    pub fn auth_bytes(&self) -> [u8; 4] {
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.0[..4]);
        out
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = DetectError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !Self::VALID_LENGTHS.contains(&bytes.len()) {
            return Err(DetectError::MalformedUid(bytes.len() as u8));
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::utils::HexDump(&self.0))
    }
}

/// ATQA (SENS_RES), 2 バイト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

/// SAK (SEL_RES)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct Sak(u8);

impl Sak {
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Bit 6 set: the target supports ISO14443-4 and returns an ATS
    pub fn is_iso14443_4(&self) -> bool {
        self.0 & SAK_ISO14443_4 != 0
    }
}

/// MIFARE Classic key slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum KeyType {
    A,
    B,
}

impl KeyType {
    /// Card-level authenticate command byte
    pub fn auth_command(self) -> u8 {
        match self {
            KeyType::A => MIFARE_CMD_AUTH_A,
            KeyType::B => MIFARE_CMD_AUTH_B,
        }
    }
}

/// GetFirmwareVersion reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PN5{:02X} v{}.{} (support {:#04x})",
            self.ic, self.version, self.revision, self.support
        )
    }
}

/// MIFARE Classic value block.
///
/// Layout: value (LE i32), !value, value, then addr, !addr, addr, !addr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBlock {
    pub value: i32,
    pub address: u8,
}

impl ValueBlock {
    pub fn new(value: i32, address: u8) -> Self {
        Self { value, address }
    }

    pub fn encode(&self) -> [u8; 16] {
        let v = self.value.to_le_bytes();
        let inv = (!self.value).to_le_bytes();
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&v);
        out[4..8].copy_from_slice(&inv);
        out[8..12].copy_from_slice(&v);
        out[12] = self.address;
        out[13] = !self.address;
        out[14] = self.address;
        out[15] = !self.address;
        out
    }

    /// Returns None when the redundant copies disagree.
    pub fn decode(block: &[u8; 16]) -> Option<Self> {
        let word = |i: usize| i32::from_le_bytes([block[i], block[i + 1], block[i + 2], block[i + 3]]);
        let value = word(0);
        if word(4) != !value || word(8) != value {
            return None;
        }
        let address = block[12];
        if block[13] != !address || block[14] != address || block[15] != !address {
            return None;
        }
        Some(Self { value, address })
    }
}

/// Sector holding `block`: 4-block sectors up to block 127, 16-block
/// sectors above (MIFARE Classic 4K).
pub fn sector_of(block: u8) -> u8 {
    if block < 128 {
        block / 4
    } else {
        32 + (block - 128) / 16
    }
}
