// libpn532-rs/libpn532/src/error.rs

use std::time::Duration;

use thiserror::Error;

/// Frame construction / validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("payload too large: max {max}, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid preamble")]
    InvalidPreamble,

    #[error("invalid postamble: {0:#04x}")]
    InvalidPostamble(u8),

    #[error("length checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    LengthChecksum { expected: u8, actual: u8 },

    #[error("data checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    DataChecksum { expected: u8, actual: u8 },

    #[error("unknown frame identifier: {0:#04x}")]
    UnknownTfi(u8),

    #[error("chip reported an application error frame")]
    ApplicationError,
}

/// Byte-level I/O failures and chip-select discipline violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("bus error: {0}")]
    Bus(String),

    #[error("no open read stream")]
    NotSelected,

    #[error("a read stream is still open")]
    SessionOpen,

    #[error("buffer too small: need {needed}, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("short read: expected {expected}, got {actual}")]
    ShortRead { expected: usize, actual: usize },
}

/// The chip did not signal ready within the configured bound
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("chip not ready after {waited:?}")]
pub struct TimeoutError {
    pub waited: Duration,
}

/// Command-level failures raised by the command channel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("ack mismatch: got {received:02x?}")]
    AckMismatch { received: [u8; 6] },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("unexpected response length: expected {expected}, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

/// Card detection failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("no tag in field")]
    NoTag,

    #[error("malformed uid length: {0}")]
    MalformedUid(u8),

    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    #[error(transparent)]
    Timeout(TimeoutError),
}

impl From<ProtocolError> for DetectError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::Timeout(t) => DetectError::Timeout(t),
            other => DetectError::Protocol(other),
        }
    }
}

impl From<TransportError> for DetectError {
    fn from(err: TransportError) -> Self {
        DetectError::Protocol(err.into())
    }
}

/// MIFARE Classic operation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("chip did not acknowledge the command")]
    NotAcked,

    #[error("card status error: {0:#04x}")]
    BadStatus(u8),

    #[error("block {block} is not in an authenticated sector")]
    NotAuthenticated { block: u8 },

    #[error("block {block} is not a value block")]
    NotValueBlock { block: u8 },

    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    #[error(transparent)]
    Timeout(TimeoutError),
}

impl From<ProtocolError> for CardError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::AckMismatch { .. } => CardError::NotAcked,
            ProtocolError::Timeout(t) => CardError::Timeout(t),
            other => CardError::Protocol(other),
        }
    }
}

/// Crate-level error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Card(#[from] CardError),
}

pub type Result<T> = std::result::Result<T, Error>;
