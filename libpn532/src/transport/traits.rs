// libpn532-rs/libpn532/src/transport/traits.rs

//! Collaborator traits. Everything that touches hardware sits behind
//! these; the protocol engine never addresses registers itself.

use std::time::Duration;

use crate::error::TransportError;

/// Full-duplex serial shift register (SPI-like). Implementations clock out
/// a dummy byte for every byte they receive; bit order is fixed when the
/// bus is set up.
pub trait SerialBus {
    /// Shift all of `bytes` out
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Shift `len` bytes in
    fn read(&mut self, len: usize) -> Result<Vec<u8>, TransportError>;
}

/// Chip-select line. A plain level change with no acknowledgment.
pub trait ChipSelect {
    /// Select the device (drive NSS low)
    fn assert(&mut self);

    /// Release the device (drive NSS high)
    fn deassert(&mut self);
}

/// Blocking delay service
pub trait Delay {
    fn sleep(&mut self, duration: Duration);
}

/// Delay backed by `std::thread::sleep`, for hosts with an OS underneath.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
