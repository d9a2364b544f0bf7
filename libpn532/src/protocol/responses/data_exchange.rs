// libpn532-rs/libpn532/src/protocol/responses/data_exchange.rs

use crate::error::ProtocolError;
use crate::protocol::parser::byte_at;

/// Split an InDataExchange body into its status byte and the card data
/// that follows. A nonzero status is returned as-is for the caller to
/// interpret.
pub fn split_status(body: &[u8]) -> Result<(u8, &[u8]), ProtocolError> {
    let status = byte_at(body, 0)?;
    Ok((status, &body[1..]))
}
