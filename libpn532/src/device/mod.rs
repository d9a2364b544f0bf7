// libpn532-rs/libpn532/src/device/mod.rs

pub mod builder;
pub mod channel;
pub mod handle;

pub use builder::Pn532Builder;
pub use channel::{ChannelState, CommandChannel};
pub use handle::{Initialized, Pn532, Uninitialized};
