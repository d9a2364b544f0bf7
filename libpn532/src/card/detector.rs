// libpn532-rs/libpn532/src/card/detector.rs

use std::convert::TryFrom;

use log::{debug, warn};

use crate::card::info::TagRecord;
use crate::constants::{PN532_BRTY_ISO14443A, PN532_HEADER_LEN, PN532_TFI_CHIP, PN532_TFI_ERROR};
use crate::device::CommandChannel;
use crate::error::{DetectError, FrameError, ProtocolError, TransportError};
use crate::protocol::{codec, commands, FrameHeader};
use crate::types::{Atqa, Sak, Uid};

/// Header (5) + TFI + response code + NbTg
const HEAD_LEN: usize = PN532_HEADER_LEN + 3;
/// Tg, ATQA (2), SAK, UID length
const TARGET_LEN: usize = 5;
/// DCS + postamble
const TRAILER_LEN: usize = 2;

/// Single-target ISO14443-A detection through InListPassiveTarget.
///
/// The response is consumed as a stream of small chunks so its
/// variable-length parts (UID, ATS) are read exactly as announced.
pub struct CardDetector<'a> {
    channel: &'a mut CommandChannel,
}

impl<'a> CardDetector<'a> {
    pub fn new(channel: &'a mut CommandChannel) -> Self {
        Self { channel }
    }

    pub fn detect(&mut self) -> Result<TagRecord, DetectError> {
        let cmd = commands::in_list_passive_target(1, PN532_BRTY_ISO14443A);
        self.channel.issue(&cmd)?;
        self.channel.poll_ready()?;

        let mut stream = ResponseStream::new(self.channel);
        let result = read_record(&mut stream, cmd.response_code());
        stream.close();

        match &result {
            Ok(tag) => debug!("pn532: detected {}", tag),
            Err(DetectError::NoTag) => debug!("pn532: no tag in field"),
            Err(DetectError::MalformedUid(len)) => warn!("pn532: malformed uid length {}", len),
            Err(e) => debug!("pn532: detect failed: {}", e),
        }
        result
    }
}

fn read_record(stream: &mut ResponseStream<'_>, code: u8) -> Result<TagRecord, DetectError> {
    let head = stream.next(HEAD_LEN)?;
    FrameHeader::parse(&head[..PN532_HEADER_LEN]).map_err(ProtocolError::from)?;
    let (tfi, actual, nb_tg) = (head[5], head[6], head[7]);
    if tfi == PN532_TFI_ERROR {
        return Err(ProtocolError::from(FrameError::ApplicationError).into());
    }
    if tfi != PN532_TFI_CHIP {
        return Err(ProtocolError::UnexpectedResponse {
            expected: PN532_TFI_CHIP,
            actual: tfi,
        }
        .into());
    }
    if actual != code {
        return Err(ProtocolError::UnexpectedResponse {
            expected: code,
            actual,
        }
        .into());
    }
    if nb_tg == 0 {
        stream.finish()?;
        return Err(DetectError::NoTag);
    }

    let target = stream.next(TARGET_LEN)?;
    let (tg, atqa, sak, uid_len) = (
        target[0],
        Atqa::from_bytes([target[1], target[2]]),
        Sak::from(target[3]),
        target[4],
    );
    if !Uid::VALID_LENGTHS.contains(&(uid_len as usize)) {
        return Err(DetectError::MalformedUid(uid_len));
    }
    let uid = Uid::try_from(stream.next(uid_len as usize)?)?;

    let ats = if sak.is_iso14443_4() {
        let ats_len = stream.next(1)?[0];
        Some(stream.next(ats_len as usize)?.to_vec())
    } else {
        None
    };

    stream.finish()?;
    Ok(TagRecord {
        target: tg,
        atqa,
        sak,
        uid,
        ats,
    })
}

/// Streamed read of one response frame. Keeps every byte so the frame can
/// be checked as a whole once its trailer arrives.
struct ResponseStream<'c> {
    channel: &'c mut CommandChannel,
    raw: Vec<u8>,
}

impl<'c> ResponseStream<'c> {
    fn new(channel: &'c mut CommandChannel) -> Self {
        Self {
            channel,
            raw: Vec::with_capacity(32),
        }
    }

    /// Read the next `len` bytes, opening the stream on the first call.
    fn next(&mut self, len: usize) -> Result<&[u8], TransportError> {
        let start = self.raw.is_empty();
        let at = self.raw.len();
        self.raw.resize(at + len, 0);
        self.channel
            .read_response(&mut self.raw[at..], len, start, false)?;
        Ok(&self.raw[at..])
    }

    /// Read the trailer, close the stream and check LEN, DCS and postamble
    /// over everything read.
    fn finish(&mut self) -> Result<(), ProtocolError> {
        let at = self.raw.len();
        self.raw.resize(at + TRAILER_LEN, 0);
        self.channel
            .read_response(&mut self.raw[at..], TRAILER_LEN, false, true)?;
        codec::decode_chip_frame(&self.raw).map(|_| ())
    }

    /// Release chip-select; a no-op when already concluded.
    fn close(&mut self) {
        self.channel.session_mut().end_read();
    }
}
