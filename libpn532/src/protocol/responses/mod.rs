// libpn532-rs/libpn532/src/protocol/responses/mod.rs

//! Decoders for response bodies. Each takes the bytes that follow the
//! response code, as returned by `codec::decode_response_frame`.

pub mod data_exchange;
pub mod system;

pub use data_exchange::split_status;
pub use system::decode_firmware_version;
