// libpn532-rs/libpn532/src/device/builder.rs

use crate::config::ChannelConfig;
use crate::device::channel::CommandChannel;
use crate::device::handle::{Pn532, Uninitialized};
use crate::transport::{ChipSelect, Delay, SerialBus, TransportSession};
use crate::{Error, Result};

/// Helper to construct a Pn532 from its collaborators.
#[derive(Default)]
pub struct Pn532Builder {
    bus: Option<Box<dyn SerialBus>>,
    cs: Option<Box<dyn ChipSelect>>,
    delay: Option<Box<dyn Delay>>,
    config: ChannelConfig,
}

impl Pn532Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bus(mut self, bus: Box<dyn SerialBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn with_chip_select(mut self, cs: Box<dyn ChipSelect>) -> Self {
        self.cs = Some(cs);
        self
    }

    pub fn with_delay(mut self, delay: Box<dyn Delay>) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_config(mut self, config: ChannelConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized device.
    /// All three collaborators are required.
    pub fn build(self) -> Result<Pn532<Uninitialized>> {
        let bus = self.bus.ok_or(Error::MissingCollaborator("bus"))?;
        let cs = self.cs.ok_or(Error::MissingCollaborator("chip select"))?;
        let delay = self.delay.ok_or(Error::MissingCollaborator("delay"))?;
        let session = TransportSession::new(bus, cs, delay, &self.config);
        Ok(Pn532::new(CommandChannel::new(session, self.config)))
    }
}
