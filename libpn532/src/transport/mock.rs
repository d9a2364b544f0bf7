// libpn532-rs/libpn532/src/transport/mock.rs

//! Mock collaborators for unit and integration tests.
//!
//! Each mock is a cheap clonable handle over shared state, so a test can
//! keep one clone for assertions after handing another to the driver.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::error::TransportError;
use crate::transport::traits::{ChipSelect, Delay, SerialBus};

#[derive(Debug, Default)]
struct BusState {
    rx: VecDeque<u8>,
    sent: Vec<Vec<u8>>,
    reads: Vec<usize>,
    write_failures: usize,
    read_failures: usize,
    unselected_transfers: usize,
}

/// Mock serial bus. Records every write and serves reads from a scripted
/// byte queue; the PN532 side of a conversation is just the bytes it would
/// shift out, in order.
#[derive(Debug, Default, Clone)]
pub struct MockBus {
    state: Rc<RefCell<BusState>>,
    pin: Option<MockPin>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus that counts transfers happening while `pin` is released.
    pub fn wired_to(pin: &MockPin) -> Self {
        Self {
            state: Rc::default(),
            pin: Some(pin.clone()),
        }
    }

    /// Queue bytes the chip will shift out
    pub fn push_bytes(&self, bytes: &[u8]) {
        self.state.borrow_mut().rx.extend(bytes.iter().copied());
    }

    /// Every write, in order
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Length of every read request, in order
    pub fn reads(&self) -> Vec<usize> {
        self.state.borrow().reads.clone()
    }

    /// Bytes still queued
    pub fn remaining(&self) -> usize {
        self.state.borrow().rx.len()
    }

    /// Make the next `n` writes fail
    pub fn fail_writes(&self, n: usize) {
        self.state.borrow_mut().write_failures = n;
    }

    /// Make the next `n` reads fail
    pub fn fail_reads(&self, n: usize) {
        self.state.borrow_mut().read_failures = n;
    }

    /// Transfers issued while chip-select was released
    pub fn unselected_transfers(&self) -> usize {
        self.state.borrow().unselected_transfers
    }

    fn check_selected(&self, state: &mut BusState) {
        if let Some(pin) = &self.pin {
            if !pin.is_asserted() {
                state.unselected_transfers += 1;
            }
        }
    }
}

impl SerialBus for MockBus {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let mut state = self.state.borrow_mut();
        self.check_selected(&mut state);
        if state.write_failures > 0 {
            state.write_failures -= 1;
            return Err(TransportError::Bus("simulated write failure".into()));
        }
        state.sent.push(bytes.to_vec());
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>, TransportError> {
        let mut state = self.state.borrow_mut();
        self.check_selected(&mut state);
        state.reads.push(len);
        if state.read_failures > 0 {
            state.read_failures -= 1;
            return Err(TransportError::Bus("simulated read failure".into()));
        }
        if state.rx.len() < len {
            return Err(TransportError::Bus("receive queue exhausted".into()));
        }
        Ok(state.rx.drain(..len).collect())
    }
}

#[derive(Debug, Default)]
struct PinState {
    asserted: bool,
    asserts: usize,
    deasserts: usize,
}

/// Mock chip-select line. Starts released.
#[derive(Debug, Default, Clone)]
pub struct MockPin {
    state: Rc<RefCell<PinState>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_asserted(&self) -> bool {
        self.state.borrow().asserted
    }

    pub fn assert_count(&self) -> usize {
        self.state.borrow().asserts
    }

    pub fn deassert_count(&self) -> usize {
        self.state.borrow().deasserts
    }
}

impl ChipSelect for MockPin {
    fn assert(&mut self) {
        let mut state = self.state.borrow_mut();
        state.asserted = true;
        state.asserts += 1;
    }

    fn deassert(&mut self) {
        let mut state = self.state.borrow_mut();
        state.asserted = false;
        state.deasserts += 1;
    }
}

/// Mock delay: records requested sleeps instead of sleeping, giving tests
/// a simulated clock.
#[derive(Debug, Default, Clone)]
pub struct MockDelay {
    sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time spent sleeping
    pub fn total(&self) -> Duration {
        self.sleeps.borrow().iter().sum()
    }

    /// Number of sleeps of exactly `duration`
    pub fn count_of(&self, duration: Duration) -> usize {
        self.sleeps.borrow().iter().filter(|&&d| d == duration).count()
    }
}

impl Delay for MockDelay {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}
