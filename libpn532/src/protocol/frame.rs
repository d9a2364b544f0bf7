// libpn532-rs/libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_HEADER_LEN, PN532_MAX_PAYLOAD_LEN, PN532_MIN_FRAME_LEN, PN532_POSTAMBLE,
    PN532_PREAMBLE, PN532_TFI_CHIP, PN532_TFI_ERROR, PN532_TFI_HOST,
};
use crate::error::FrameError;
use crate::protocol::checksum::{dcs, lcs};

/// Frame direction marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tfi {
    HostToChip,
    ChipToHost,
}

impl Tfi {
    pub fn as_u8(self) -> u8 {
        match self {
            Tfi::HostToChip => PN532_TFI_HOST,
            Tfi::ChipToHost => PN532_TFI_CHIP,
        }
    }
}

impl TryFrom<u8> for Tfi {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            PN532_TFI_HOST => Ok(Tfi::HostToChip),
            PN532_TFI_CHIP => Ok(Tfi::ChipToHost),
            PN532_TFI_ERROR => Err(FrameError::ApplicationError),
            other => Err(FrameError::UnknownTfi(other)),
        }
    }
}

/// PN532 normal information frame.
///
/// Wire format:
/// `[Preamble 00] [Start 00 FF] [LEN] [LCS] [TFI] [PD0..PDn] [DCS] [Postamble 00]`
/// where `LEN = n + 1` (the TFI counts), `LEN + LCS == 0` and
/// `TFI + sum(PD) + DCS == 0` (mod 256).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tfi: Tfi,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(tfi: Tfi, payload: Vec<u8>) -> Self {
        Self { tfi, payload }
    }

    /// Encode into the full wire frame
    pub fn encode(&self) -> Result<Vec<u8>, FrameError> {
        encode(self.tfi, &self.payload)
    }

    /// Decode a full wire frame. Malformed frames are rejected, never
    /// repaired.
    pub fn decode(frame: &[u8]) -> Result<Self, FrameError> {
        let header = check(frame)?;
        let body = &frame[PN532_HEADER_LEN..PN532_HEADER_LEN + header.len as usize];
        let tfi = Tfi::try_from(body[0])?;
        Ok(Self {
            tfi,
            payload: body[1..].to_vec(),
        })
    }
}

/// Encode `payload` behind `tfi` into a full wire frame. Payloads larger
/// than a normal frame can carry are rejected rather than truncated.
pub fn encode(tfi: Tfi, payload: &[u8]) -> Result<Vec<u8>, FrameError> {
    if payload.len() > PN532_MAX_PAYLOAD_LEN {
        return Err(FrameError::PayloadTooLarge {
            max: PN532_MAX_PAYLOAD_LEN,
            actual: payload.len(),
        });
    }

    let len = (payload.len() + 1) as u8;
    let tfi = tfi.as_u8();
    let mut out = Vec::with_capacity(PN532_MIN_FRAME_LEN + payload.len());
    out.extend_from_slice(&PN532_PREAMBLE);
    out.push(len);
    out.push(lcs(len));
    out.push(tfi);
    out.extend_from_slice(payload);
    out.push(dcs(tfi, payload));
    out.push(PN532_POSTAMBLE);
    Ok(out)
}

/// Structural + checksum validation of a full wire frame. The TFI value
/// itself is not interpreted.
pub fn validate(frame: &[u8]) -> bool {
    check(frame).is_ok()
}

/// Leading five bytes of a response: preamble, start codes, LEN and LCS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub len: u8,
}

impl FrameHeader {
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < PN532_HEADER_LEN {
            return Err(FrameError::InvalidLength {
                expected: PN532_HEADER_LEN,
                actual: bytes.len(),
            });
        }
        if bytes[..3] != PN532_PREAMBLE {
            return Err(FrameError::InvalidPreamble);
        }

        let len = bytes[3];
        let expected = lcs(len);
        if bytes[4] != expected {
            return Err(FrameError::LengthChecksum {
                expected,
                actual: bytes[4],
            });
        }
        if len == 0 {
            // LEN covers at least the TFI
            return Err(FrameError::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self { len })
    }

    /// Bytes left after the header: TFI + payload + DCS + postamble
    pub fn remaining(&self) -> usize {
        self.len as usize + 2
    }

    /// Total wire length of the frame this header introduces
    pub fn frame_len(&self) -> usize {
        PN532_HEADER_LEN + self.remaining()
    }
}

fn check(frame: &[u8]) -> Result<FrameHeader, FrameError> {
    if frame.len() < PN532_MIN_FRAME_LEN {
        return Err(FrameError::InvalidLength {
            expected: PN532_MIN_FRAME_LEN,
            actual: frame.len(),
        });
    }

    let header = FrameHeader::parse(frame)?;
    if frame.len() != header.frame_len() {
        return Err(FrameError::InvalidLength {
            expected: header.frame_len(),
            actual: frame.len(),
        });
    }

    let body_end = PN532_HEADER_LEN + header.len as usize;
    let body = &frame[PN532_HEADER_LEN..body_end];
    let expected = dcs(body[0], &body[1..]);
    let actual = frame[body_end];
    if actual != expected {
        return Err(FrameError::DataChecksum { expected, actual });
    }

    let postamble = frame[body_end + 1];
    if postamble != PN532_POSTAMBLE {
        return Err(FrameError::InvalidPostamble(postamble));
    }

    Ok(header)
}
