//! Access-tracking loop against a scripted PN532.
//!
//! There is no SPI peripheral on a development host, so the chip side is
//! played by `MockBus`: the first poll sees an empty field, the second a
//! MIFARE Classic card whose block 4 holds a member record.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libpn532 --example access_log

use anyhow::{Context, Result};
use libpn532::constants::MIFARE_DEFAULT_KEY;
use libpn532::prelude::*;
use libpn532::test_support::{push_ack, push_exchange, push_response};
use libpn532::transport::{MockBus, MockDelay, MockPin};

fn script_chip(bus: &MockBus) {
    // SAMConfiguration
    push_exchange(bus, &[0x15]);
    // empty field
    push_ack(bus);
    push_response(bus, &[0x4B, 0x00]);
    // one MIFARE Classic 1K
    push_ack(bus);
    push_response(
        bus,
        &[0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0xDE, 0xAD, 0xBE, 0xEF],
    );
    // authenticate, then read block 4
    push_exchange(bus, &[0x41, 0x00]);
    let mut read = vec![0x41, 0x00];
    read.extend_from_slice(b"MEMBER-000042\0\0\0");
    push_exchange(bus, &read);
}

fn main() -> Result<()> {
    env_logger::init();

    let pin = MockPin::new();
    let bus = MockBus::wired_to(&pin);
    script_chip(&bus);

    let device = Pn532Builder::new()
        .with_bus(Box::new(bus.clone()))
        .with_chip_select(Box::new(pin))
        .with_delay(Box::new(MockDelay::new()))
        .build()?;
    let mut device = device.initialize().context("PN532 did not initialize")?;

    for round in 0..2 {
        let Some(tag) = device.poll() else {
            println!("[{}] no card", round);
            continue;
        };
        println!("[{}] card {}", round, tag);

        let mut session = MifareClassicSession::bind(&tag);
        let channel = device.channel();
        session.authenticate(channel, KeyType::A, 4, &MIFARE_DEFAULT_KEY)?;
        let block = session.read_block(channel, 4)?;
        let member = String::from_utf8_lossy(&block);
        println!(
            "[{}] uid {} -> {}",
            round,
            tag.uid.to_hex(),
            member.trim_end_matches('\0')
        );
    }

    Ok(())
}
