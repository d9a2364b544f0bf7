// libpn532-rs/libpn532/src/protocol/commands/system.rs

use super::Command;
use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_SAM_CONFIGURATION, PN532_SAM_MODE_NORMAL,
    PN532_SAM_TIMEOUT, PN532_SAM_USE_IRQ,
};

/// GetFirmwareVersion (0x02), no parameters
pub fn get_firmware_version() -> Command {
    Command::new(PN532_CMD_GET_FIRMWARE_VERSION, Vec::new())
}

/// SAMConfiguration (0x14) in normal mode. The chip powers up in a low-power
/// state and only accepts RF commands once this has been sent.
pub fn sam_configuration() -> Command {
    Command::new(
        PN532_CMD_SAM_CONFIGURATION,
        vec![PN532_SAM_MODE_NORMAL, PN532_SAM_TIMEOUT, PN532_SAM_USE_IRQ],
    )
}
