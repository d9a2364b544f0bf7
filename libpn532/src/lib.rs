// libpn532-rs/libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller over an SPI-like
//! serial link: frame codec, ready/ACK command handshake, ISO14443-A
//! detection and MIFARE Classic block access.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
