// libpn532-rs/libpn532/src/config.rs

//! Command channel configuration

use std::time::Duration;

use crate::utils::ms;

/// Upper bound on readiness polling (ms)
pub const DEFAULT_READY_TIMEOUT_MS: u64 = 1000;

/// Sleep between readiness probes (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

/// Settle time after asserting chip-select (ms)
pub const DEFAULT_SELECT_SETTLE_MS: u64 = 5;

/// Native bit order of the serial bus. The PN532 SPI link is LSB-first; a
/// bus that can only shift MSB-first gets every byte reversed in software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    #[default]
    LsbFirst,
    MsbFirst,
}

impl BitOrder {
    /// Translate a byte between wire order and host order. The mapping is
    /// its own inverse so the same call serves both directions.
    pub fn translate(self, byte: u8) -> u8 {
        match self {
            BitOrder::LsbFirst => byte,
            BitOrder::MsbFirst => byte.reverse_bits(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelConfig {
    pub ready_timeout: Duration,
    pub poll_interval: Duration,
    pub select_settle: Duration,
    pub bit_order: BitOrder,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            ready_timeout: ms(DEFAULT_READY_TIMEOUT_MS),
            poll_interval: ms(DEFAULT_POLL_INTERVAL_MS),
            select_settle: ms(DEFAULT_SELECT_SETTLE_MS),
            bit_order: BitOrder::default(),
        }
    }
}

impl ChannelConfig {
    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    /// A zero interval would never advance simulated time; it is clamped to 1 ms.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(ms(1));
        self
    }

    pub fn with_select_settle(mut self, settle: Duration) -> Self {
        self.select_settle = settle;
        self
    }

    pub fn with_bit_order(mut self, order: BitOrder) -> Self {
        self.bit_order = order;
        self
    }

    /// Maximum number of status probes `poll_ready` performs: one up
    /// front, then one after every sleep until the timeout is reached.
    pub fn max_ready_attempts(&self) -> u32 {
        let interval = self.poll_interval.as_millis().max(1);
        self.ready_timeout.as_millis().div_ceil(interval) as u32 + 1
    }
}
