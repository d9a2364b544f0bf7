//! Hexadecimal helpers used for log output and UID reporting.

use std::fmt;

/// Convert a byte slice to an uppercase hex string without separators, the
/// form UIDs are reported in.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    HexDump::compact(bytes).to_string()
}

/// Convert a byte slice to an uppercase hex string with a single space
/// between each byte.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexDump(bytes).to_string()
}

/// Lazily formatted hex view of a byte slice. Meant for `log::trace!`
/// arguments so nothing is rendered when the level is disabled.
#[derive(Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl<'a> HexDump<'a> {
    pub fn compact(bytes: &'a [u8]) -> Compact<'a> {
        Compact(bytes)
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Separator-free variant of [`HexDump`].
#[derive(Clone, Copy)]
pub struct Compact<'a>(&'a [u8]);

impl fmt::Display for Compact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02X}", b))
    }
}
