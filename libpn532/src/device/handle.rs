// libpn532-rs/libpn532/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::card::{CardDetector, TagRecord};
use crate::device::channel::CommandChannel;
use crate::error::DetectError;
use crate::protocol::commands;
use crate::protocol::responses::decode_firmware_version;
use crate::types::FirmwareVersion;
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
pub struct Pn532<State = Uninitialized> {
    channel: CommandChannel,
    _state: PhantomData<State>,
}

impl<State> Pn532<State> {
    fn transition<Next>(self) -> Pn532<Next> {
        Pn532 {
            channel: self.channel,
            _state: PhantomData,
        }
    }
}

impl Pn532<Uninitialized> {
    pub fn new(channel: CommandChannel) -> Self {
        Self {
            channel,
            _state: PhantomData,
        }
    }

    /// Wake the chip and put its SAM into normal mode. Returns an
    /// initialized device on success.
    pub fn initialize(mut self) -> Result<Pn532<Initialized>> {
        self.channel.session_mut().wake()?;
        // SAMConfiguration answers with 0x15 and an empty body
        self.channel.transact(&commands::sam_configuration())?;
        info!("pn532: SAM configured, normal mode");
        Ok(self.transition())
    }
}

impl Pn532<Initialized> {
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let body = self.channel.transact(&commands::get_firmware_version())?;
        let fw = decode_firmware_version(&body)?;
        debug!("pn532: firmware {}", fw);
        Ok(fw)
    }

    /// Look for one ISO14443-A tag in the field.
    pub fn detect(&mut self) -> std::result::Result<TagRecord, DetectError> {
        CardDetector::new(&mut self.channel).detect()
    }

    /// Single detection attempt for a main loop: an absent tag and any
    /// failure both yield `None`, failures are logged.
    pub fn poll(&mut self) -> Option<TagRecord> {
        match self.detect() {
            Ok(tag) => Some(tag),
            Err(DetectError::NoTag) => None,
            Err(e) => {
                warn!("pn532: detect failed: {}", e);
                None
            }
        }
    }

    /// Channel for card sessions
    pub fn channel(&mut self) -> &mut CommandChannel {
        &mut self.channel
    }

    pub fn into_channel(self) -> CommandChannel {
        self.channel
    }
}
