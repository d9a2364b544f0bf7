// libpn532-rs/libpn532/src/transport/session.rs

use std::time::Duration;

use log::trace;

use crate::config::{BitOrder, ChannelConfig};
use crate::constants::{SPI_DATA_READ, SPI_DATA_WRITE, SPI_STATUS_READ};
use crate::error::TransportError;
use crate::transport::traits::{ChipSelect, Delay, SerialBus};
use crate::utils::HexDump;

/// Chip-select transaction state.
///
/// `Idle -> Selected -> Streaming* -> Done`; a new transaction may start
/// from `Idle` or `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Selected,
    Streaming,
    Done,
}

impl SessionState {
    pub fn is_selected(self) -> bool {
        matches!(self, SessionState::Selected | SessionState::Streaming)
    }
}

/// Owns the chip-select boundary around every byte exchange with the chip.
///
/// Reads can be streamed: `begin_read` leaves the device selected so a
/// variable-length response can be consumed in pieces with
/// `continue_read`, and `end_read` releases it. Any bus failure releases
/// chip-select before the error is returned.
pub struct TransportSession {
    bus: Box<dyn SerialBus>,
    cs: Box<dyn ChipSelect>,
    delay: Box<dyn Delay>,
    state: SessionState,
    settle: Duration,
    bit_order: BitOrder,
}

impl TransportSession {
    pub fn new(
        bus: Box<dyn SerialBus>,
        cs: Box<dyn ChipSelect>,
        delay: Box<dyn Delay>,
        config: &ChannelConfig,
    ) -> Self {
        Self {
            bus,
            cs,
            delay,
            state: SessionState::Idle,
            settle: config.select_settle,
            bit_order: config.bit_order,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_selected(&self) -> bool {
        self.state.is_selected()
    }

    /// Block on the delay collaborator
    pub fn sleep(&mut self, duration: Duration) {
        self.delay.sleep(duration);
    }

    /// Send a command frame: select, DATA_WRITE, frame bytes, release.
    pub fn write_frame(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.open(true)?;
        trace!("pn532 tx [{}]", HexDump(bytes));
        let result = self
            .send(&[SPI_DATA_WRITE])
            .and_then(|_| self.send(bytes));
        self.release();
        result
    }

    /// Select, send DATA_READ and read `len` bytes into `buffer`. The device
    /// stays selected for `continue_read`.
    pub fn begin_read(&mut self, buffer: &mut [u8], len: usize) -> Result<(), TransportError> {
        check_buffer(buffer, len)?;
        self.open(true)?;
        self.guard(|s| {
            s.send(&[SPI_DATA_READ])?;
            s.state = SessionState::Streaming;
            s.fill(&mut buffer[..len])
        })
    }

    /// Read `len` more bytes of the response currently streaming.
    pub fn continue_read(&mut self, buffer: &mut [u8], len: usize) -> Result<(), TransportError> {
        check_buffer(buffer, len)?;
        if self.state != SessionState::Streaming {
            self.release();
            return Err(TransportError::NotSelected);
        }
        self.guard(|s| s.fill(&mut buffer[..len]))
    }

    /// Release chip-select. Calling it again without a new `begin_read` is
    /// a no-op.
    pub fn end_read(&mut self) {
        self.release();
    }

    /// Fixed-size read in one transaction
    pub fn read_all(&mut self, buffer: &mut [u8], len: usize) -> Result<(), TransportError> {
        self.begin_read(buffer, len)?;
        self.end_read();
        Ok(())
    }

    /// One status probe: select, STATUS_READ, read one byte, release.
    pub fn probe_status(&mut self) -> Result<u8, TransportError> {
        self.open(false)?;
        let mut status = [0u8; 1];
        let result = self
            .send(&[SPI_STATUS_READ])
            .and_then(|_| self.fill(&mut status));
        self.release();
        result.map(|_| status[0])
    }

    /// Wake the chip from power-down: a select pulse held for the settle time.
    pub fn wake(&mut self) -> Result<(), TransportError> {
        self.open(true)?;
        self.release();
        Ok(())
    }

    fn open(&mut self, settle: bool) -> Result<(), TransportError> {
        if self.state.is_selected() {
            self.release();
            return Err(TransportError::SessionOpen);
        }
        self.cs.assert();
        self.state = SessionState::Selected;
        if settle && !self.settle.is_zero() {
            self.delay.sleep(self.settle);
        }
        Ok(())
    }

    fn release(&mut self) {
        if self.state.is_selected() {
            self.cs.deassert();
            self.state = SessionState::Done;
        }
    }

    /// Run `f`, releasing chip-select if it fails
    fn guard<F>(&mut self, f: F) -> Result<(), TransportError>
    where
        F: FnOnce(&mut Self) -> Result<(), TransportError>,
    {
        let result = f(self);
        if result.is_err() {
            self.release();
        }
        result
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        match self.bit_order {
            BitOrder::LsbFirst => self.bus.write(bytes),
            order => {
                let wire: Vec<u8> = bytes.iter().map(|&b| order.translate(b)).collect();
                self.bus.write(&wire)
            }
        }
    }

    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), TransportError> {
        if buffer.is_empty() {
            return Ok(());
        }
        let bytes = self.bus.read(buffer.len())?;
        if bytes.len() != buffer.len() {
            return Err(TransportError::ShortRead {
                expected: buffer.len(),
                actual: bytes.len(),
            });
        }
        for (dst, src) in buffer.iter_mut().zip(bytes) {
            *dst = self.bit_order.translate(src);
        }
        trace!("pn532 rx [{}]", HexDump(buffer));
        Ok(())
    }
}

fn check_buffer(buffer: &[u8], len: usize) -> Result<(), TransportError> {
    if buffer.len() < len {
        return Err(TransportError::BufferTooSmall {
            needed: len,
            available: buffer.len(),
        });
    }
    Ok(())
}
