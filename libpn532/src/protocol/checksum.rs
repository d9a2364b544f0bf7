// libpn532-rs/libpn532/src/protocol/checksum.rs

/// Compute Length Checksum (LCS): LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS): TFI + sum(PD) + DCS == 0 (mod 256)
pub fn dcs(tfi: u8, payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
