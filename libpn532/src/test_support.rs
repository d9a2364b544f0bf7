// libpn532-rs/libpn532/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the mock collaborator wiring and the byte
//! scripts a PN532 would shift out, so tests across the crate and the
//! tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::config::ChannelConfig;
use crate::constants::PN532_ACK_FRAME;
use crate::device::{CommandChannel, Initialized, Pn532, Uninitialized};
use crate::protocol::frame::{self, Tfi};
use crate::transport::{MockBus, MockDelay, MockPin, TransportSession};
use crate::Result;

/// Mock collaborators plus a channel driving them. The mocks are shared
/// handles, so assertions can be made after the channel has used them.
#[doc(hidden)]
pub struct Harness {
    pub bus: MockBus,
    pub pin: MockPin,
    pub delay: MockDelay,
    pub channel: CommandChannel,
}

/// Harness with the default channel configuration.
#[doc(hidden)]
pub fn harness() -> Harness {
    harness_with(ChannelConfig::default())
}

#[doc(hidden)]
pub fn harness_with(config: ChannelConfig) -> Harness {
    let pin = MockPin::new();
    let bus = MockBus::wired_to(&pin);
    let delay = MockDelay::new();
    let session = TransportSession::new(
        Box::new(bus.clone()),
        Box::new(pin.clone()),
        Box::new(delay.clone()),
        &config,
    );
    Harness {
        bus,
        pin,
        delay,
        channel: CommandChannel::new(session, config),
    }
}

/// Status byte with the ready bit set.
#[doc(hidden)]
pub fn push_ready(bus: &MockBus) {
    bus.push_bytes(&[0x01]);
}

/// Ready status followed by the ACK frame: what `issue` consumes.
#[doc(hidden)]
pub fn push_ack(bus: &MockBus) {
    push_ready(bus);
    bus.push_bytes(&PN532_ACK_FRAME);
}

/// Ready status followed by a chip->host frame carrying `payload`.
#[doc(hidden)]
pub fn push_response(bus: &MockBus, payload: &[u8]) {
    push_ready(bus);
    bus.push_bytes(&chip_frame(payload));
}

/// A full command round trip: ACK handshake, then the response frame.
#[doc(hidden)]
pub fn push_exchange(bus: &MockBus, payload: &[u8]) {
    push_ack(bus);
    push_response(bus, payload);
}

/// Encode a chip->host frame. Panics on oversized payloads, which only a
/// broken test would build.
#[doc(hidden)]
pub fn chip_frame(payload: &[u8]) -> Vec<u8> {
    frame::encode(Tfi::ChipToHost, payload).expect("test payload fits in a normal frame")
}

/// Uninitialized device over a fresh harness.
#[doc(hidden)]
pub fn mock_device() -> (MockBus, MockPin, MockDelay, Pn532<Uninitialized>) {
    let Harness {
        bus,
        pin,
        delay,
        channel,
    } = harness();
    (bus, pin, delay, Pn532::new(channel))
}

/// Convenience: create and initialize a device backed by mocks. The SAM
/// configuration exchange is scripted first; `frames` are queued after it
/// as raw bytes.
#[doc(hidden)]
pub fn initialized_mock_device(
    frames: Vec<Vec<u8>>,
) -> Result<(MockBus, MockPin, MockDelay, Pn532<Initialized>)> {
    let (bus, pin, delay, device) = mock_device();
    seed_init_and_frames(&bus, frames);
    let device = device.initialize()?;
    Ok((bus, pin, delay, device))
}

/// Push the SAM configuration exchange then additional raw byte runs.
#[doc(hidden)]
pub fn seed_init_and_frames(bus: &MockBus, frames: Vec<Vec<u8>>) {
    push_exchange(bus, &[0x15]);
    for f in frames {
        bus.push_bytes(&f);
    }
}

/// Install `env_logger` once for the test binary.
#[cfg(test)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
