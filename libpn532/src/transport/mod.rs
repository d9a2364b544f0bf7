// libpn532-rs/libpn532/src/transport/mod.rs

pub mod mock;
pub mod session;
pub mod traits;

pub use mock::{MockBus, MockDelay, MockPin};
pub use session::{SessionState, TransportSession};
pub use traits::{ChipSelect, Delay, SerialBus, StdDelay};
