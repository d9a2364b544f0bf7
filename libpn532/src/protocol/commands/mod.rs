// libpn532-rs/libpn532/src/protocol/commands/mod.rs

pub mod initiator;
pub mod mifare;
pub mod system;

pub use initiator::{in_data_exchange, in_list_passive_target};
pub use system::{get_firmware_version, sam_configuration};

use crate::error::FrameError;
use crate::protocol::frame::{self, Tfi};

/// Host->chip command: an opcode followed by its parameters. New commands
/// get a constructor function in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub opcode: u8,
    pub params: Vec<u8>,
}

impl Command {
    pub fn new(opcode: u8, params: Vec<u8>) -> Self {
        Self { opcode, params }
    }

    /// The chip answers every command with opcode + 1.
    pub fn response_code(&self) -> u8 {
        self.opcode.wrapping_add(1)
    }

    /// Raw frame payload (opcode + params), without the TFI.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.params.len());
        out.push(self.opcode);
        out.extend_from_slice(&self.params);
        out
    }

    /// Full host->chip wire frame.
    pub fn to_frame(&self) -> Result<Vec<u8>, FrameError> {
        frame::encode(Tfi::HostToChip, &self.encode())
    }
}
