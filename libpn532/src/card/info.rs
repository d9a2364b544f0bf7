// libpn532-rs/libpn532/src/card/info.rs

use std::fmt;

use crate::types::{Atqa, Sak, Uid};

/// One ISO14443-A target as reported by InListPassiveTarget. Built fresh
/// by every successful detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Logical target number assigned by the chip (1-based)
    pub target: u8,
    pub atqa: Atqa,
    pub sak: Sak,
    pub uid: Uid,
    /// Answer To Select, only for ISO14443-4 targets
    pub ats: Option<Vec<u8>>,
}

impl TagRecord {
    pub fn is_iso14443_4(&self) -> bool {
        self.sak.is_iso14443_4()
    }
}

impl fmt::Display for TagRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tg {} UID {} ATQA {:02X}{:02X} SAK {:02X}",
            self.target,
            self.uid,
            self.atqa.as_bytes()[0],
            self.atqa.as_bytes()[1],
            self.sak.as_u8()
        )?;
        if let Some(ats) = &self.ats {
            write!(f, " ATS {}", crate::utils::HexDump(ats))?;
        }
        Ok(())
    }
}
