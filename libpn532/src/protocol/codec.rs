// libpn532-rs/libpn532/src/protocol/codec.rs

use crate::error::{FrameError, ProtocolError};

use super::commands::Command;
use super::frame::{Frame, Tfi};
use super::parser::expect_response_code;

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>, FrameError> {
    cmd.to_frame()
}

/// Decode a full wire frame and require the chip->host direction.
pub fn decode_chip_frame(frame: &[u8]) -> Result<Frame, ProtocolError> {
    let frame = Frame::decode(frame)?;
    if frame.tfi != Tfi::ChipToHost {
        return Err(FrameError::UnknownTfi(frame.tfi.as_u8()).into());
    }
    Ok(frame)
}

/// Check that `frame` answers `cmd` and return the body that follows the
/// response code.
pub fn response_body(cmd: &Command, frame: &Frame) -> Result<Vec<u8>, ProtocolError> {
    expect_response_code(&frame.payload, cmd.response_code())?;
    Ok(frame.payload[1..].to_vec())
}

/// Decode a full chip->host wire frame, check it answers `cmd` and return
/// the body that follows the response code.
pub fn decode_response_frame(cmd: &Command, frame: &[u8]) -> Result<Vec<u8>, ProtocolError> {
    let frame = decode_chip_frame(frame)?;
    response_body(cmd, &frame)
}
