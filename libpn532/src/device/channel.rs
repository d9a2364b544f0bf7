// libpn532-rs/libpn532/src/device/channel.rs

use log::{debug, trace, warn};

use crate::config::ChannelConfig;
use crate::constants::{PN532_ACK_FRAME, PN532_HEADER_LEN, SPI_STATUS_READY};
use crate::error::{ProtocolError, TimeoutError, TransportError};
use crate::protocol::codec;
use crate::protocol::{Command, Frame, FrameHeader};
use crate::transport::TransportSession;
use crate::utils::{ms, Deadline, HexDump};

/// Per-command handshake state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Idle,
    Issuing,
    AwaitingReady,
    AwaitingAck,
    Acked,
    Failed,
}

/// Command issuance with the ready/ACK handshake.
///
/// After `issue` succeeds the channel tracks nothing further: the caller
/// owns the ordering of `read_response` calls for the reply.
pub struct CommandChannel {
    session: TransportSession,
    config: ChannelConfig,
    state: ChannelState,
}

impl CommandChannel {
    pub fn new(session: TransportSession, config: ChannelConfig) -> Self {
        Self {
            session,
            config,
            state: ChannelState::Idle,
        }
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    pub fn session(&self) -> &TransportSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TransportSession {
        &mut self.session
    }

    pub fn into_session(self) -> TransportSession {
        self.session
    }

    /// Send `cmd` and wait for the chip to acknowledge it.
    pub fn issue(&mut self, cmd: &Command) -> Result<(), ProtocolError> {
        self.state = ChannelState::Issuing;
        let result = self.handshake(cmd);
        self.state = match result {
            Ok(()) => ChannelState::Acked,
            Err(_) => ChannelState::Failed,
        };
        result
    }

    fn handshake(&mut self, cmd: &Command) -> Result<(), ProtocolError> {
        let frame = codec::encode_command_frame(cmd)?;
        debug!("pn532: issue command {:#04x}", cmd.opcode);
        self.session.write_frame(&frame)?;

        self.state = ChannelState::AwaitingReady;
        self.poll_ready()?;

        self.state = ChannelState::AwaitingAck;
        let mut ack = [0u8; PN532_ACK_FRAME.len()];
        self.session.read_all(&mut ack, PN532_ACK_FRAME.len())?;
        if ack != PN532_ACK_FRAME {
            warn!("pn532: ack mismatch for {:#04x}: [{}]", cmd.opcode, HexDump(&ack));
            return Err(ProtocolError::AckMismatch { received: ack });
        }
        trace!("pn532: ack for {:#04x}", cmd.opcode);
        Ok(())
    }

    /// Probe the status byte until bit 0 is set. Sleeps `poll_interval`
    /// between probes and gives up once `ready_timeout` of sleeping has
    /// accumulated, or after `max_ready_attempts` probes. Chip-select is
    /// released after every probe.
    pub fn poll_ready(&mut self) -> Result<(), ProtocolError> {
        // a zero interval set directly on the config must still advance time
        let interval = self.config.poll_interval.max(ms(1));
        let max_attempts = self.config.max_ready_attempts();
        let mut deadline = Deadline::new(self.config.ready_timeout);
        let mut attempts = 0u32;
        loop {
            let status = self.session.probe_status()?;
            attempts += 1;
            if status & SPI_STATUS_READY != 0 {
                trace!("pn532: ready after {:?}", deadline.elapsed());
                return Ok(());
            }
            if deadline.expired() || attempts >= max_attempts {
                warn!("pn532: not ready after {:?}", deadline.elapsed());
                return Err(TimeoutError {
                    waited: deadline.elapsed(),
                }
                .into());
            }
            self.session.sleep(interval);
            deadline.advance(interval);
        }
    }

    /// Read response bytes. `(start, conclude)` selects the transaction
    /// shape: `(true, true)` one fixed read, `(true, false)` open a stream,
    /// `(false, false)` continue it, `(false, true)` continue and close.
    /// A zero-length closing call only releases chip-select.
    pub fn read_response(
        &mut self,
        buffer: &mut [u8],
        len: usize,
        start: bool,
        conclude: bool,
    ) -> Result<(), TransportError> {
        match (start, conclude) {
            (true, true) => self.session.read_all(buffer, len),
            (true, false) => self.session.begin_read(buffer, len),
            (false, false) => self.session.continue_read(buffer, len),
            (false, true) => {
                if len > 0 {
                    self.session.continue_read(buffer, len)?;
                }
                self.session.end_read();
                Ok(())
            }
        }
    }

    /// Read one complete response frame of unknown length: the header
    /// first, then as many bytes as its LEN announces. The frame must be a
    /// well-formed chip->host frame.
    pub fn read_frame(&mut self) -> Result<Frame, ProtocolError> {
        let mut header = [0u8; PN532_HEADER_LEN];
        self.read_response(&mut header, PN532_HEADER_LEN, true, false)?;
        let parsed = match FrameHeader::parse(&header) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.session.end_read();
                return Err(e.into());
            }
        };

        let mut frame = vec![0u8; parsed.frame_len()];
        frame[..PN532_HEADER_LEN].copy_from_slice(&header);
        self.read_response(&mut frame[PN532_HEADER_LEN..], parsed.remaining(), false, true)?;
        codec::decode_chip_frame(&frame)
    }

    /// Full round trip: issue, wait for the response, read and decode it.
    /// Returns the response body after the response code.
    pub fn transact(&mut self, cmd: &Command) -> Result<Vec<u8>, ProtocolError> {
        self.issue(cmd)?;
        self.poll_ready()?;
        let frame = self.read_frame()?;
        let body = codec::response_body(cmd, &frame)?;
        debug!("pn532: response {:#04x}, {} byte(s)", cmd.response_code(), body.len());
        Ok(body)
    }
}
