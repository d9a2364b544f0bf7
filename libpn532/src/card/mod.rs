// libpn532-rs/libpn532/src/card/mod.rs

//! Card-level protocols layered on the command channel: ISO14443-A
//! detection and MIFARE Classic block access.

pub mod detector;
mod info;
pub mod mifare;

pub use detector::CardDetector;
pub use info::TagRecord;
pub use mifare::MifareClassicSession;
