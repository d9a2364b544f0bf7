// libpn532-rs/libpn532/src/prelude.rs

pub use crate::card::{CardDetector, MifareClassicSession, TagRecord};
pub use crate::config::{BitOrder, ChannelConfig};
pub use crate::device::{CommandChannel, Initialized, Pn532, Pn532Builder, Uninitialized};
pub use crate::protocol::{Command, Frame, Tfi};
pub use crate::transport::{ChipSelect, Delay, SerialBus, StdDelay};
pub use crate::{
    Atqa, CardError, DetectError, Error, FirmwareVersion, KeyType, ProtocolError, Result, Sak,
    Uid, ValueBlock,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
