// libpn532-rs/libpn532/src/protocol/responses/system.rs

use crate::error::ProtocolError;
use crate::protocol::parser::slice_at;
use crate::types::FirmwareVersion;

/// GetFirmwareVersion body: IC, Ver, Rev, Support
pub fn decode_firmware_version(body: &[u8]) -> Result<FirmwareVersion, ProtocolError> {
    let b = slice_at(body, 0, 4)?;
    Ok(FirmwareVersion {
        ic: b[0],
        version: b[1],
        revision: b[2],
        support: b[3],
    })
}
