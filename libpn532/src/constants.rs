// libpn532-rs/libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Normal information frame preamble + start codes: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Normal information frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Header length: preamble(3) + LEN + LCS
pub const PN532_HEADER_LEN: usize = 5;

/// Minimal frame length: header(5) + TFI + DCS + postamble
pub const PN532_MIN_FRAME_LEN: usize = 8;

/// Maximum payload carried by a normal information frame. LEN counts the
/// TFI too, so 255 - 1.
pub const PN532_MAX_PAYLOAD_LEN: usize = 254;

/// Target frame identifiers: host->chip (D4) and chip->host (D5)
pub const PN532_TFI_HOST: u8 = 0xD4;
pub const PN532_TFI_CHIP: u8 = 0xD5;

/// TFI used by the chip's application-level error frame
pub const PN532_TFI_ERROR: u8 = 0x7F;

/// ACK frame sent by the chip after every well-formed command frame
pub const PN532_ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame; defined for completeness, the driver never sends it
pub const PN532_NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// SPI operation bytes sent right after asserting chip-select
pub const SPI_DATA_WRITE: u8 = 0x01;
pub const SPI_STATUS_READ: u8 = 0x02;
pub const SPI_DATA_READ: u8 = 0x03;

/// Bit 0 of the status byte signals a response is ready
pub const SPI_STATUS_READY: u8 = 0x01;

/// PN532 command codes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;

/// InListPassiveTarget baud rate / modulation: 106 kbps type A
pub const PN532_BRTY_ISO14443A: u8 = 0x00;

/// SAMConfiguration parameters: normal mode, 1 s virtual card timeout, use IRQ
pub const PN532_SAM_MODE_NORMAL: u8 = 0x01;
pub const PN532_SAM_TIMEOUT: u8 = 0x14;
pub const PN532_SAM_USE_IRQ: u8 = 0x01;

/// SAK bit signalling ISO14443-4 compliance
pub const SAK_ISO14443_4: u8 = 0x20;

/// MIFARE Classic card commands
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;
pub const MIFARE_CMD_DECREMENT: u8 = 0xC0;
pub const MIFARE_CMD_INCREMENT: u8 = 0xC1;
pub const MIFARE_CMD_RESTORE: u8 = 0xC2;
pub const MIFARE_CMD_TRANSFER: u8 = 0xB0;

/// MIFARE Classic block size in bytes
pub const MIFARE_BLOCK_LEN: usize = 16;

/// Transport-configuration key shipped on blank MIFARE Classic cards
pub const MIFARE_DEFAULT_KEY: [u8; 6] = [0xFF; 6];
// libpn532-rs/libpn532/src/constants.rs
