//! Thin boundary mapping the TCP port TLS runs on to the record decoder.
//! This module owns no capture-framework integration, only the hand-off
//! contract: give it a payload, get back a record or an error.

use crate::error::TlsError;
use crate::record_layer::Record;

/// The TCP port this crate's decoder is scoped to.
pub const TLS_PORT: u16 = 443;

/// Decodes a single TLS record from a reassembled TCP payload seen on
/// `TLS_PORT`. Callers own the capture-framework plumbing (pcap, eBPF, raw
/// sockets, a test harness); this function is the entire hand-off: give it
/// the payload bytes, get back a record or the error that rejected them.
pub fn decode_payload(payload: &[u8]) -> Result<Record, TlsError> {
    Record::decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_well_formed_record() {
        let data = [0x14, 0x03, 0x03, 0x00, 0x01, 0x01];
        assert!(decode_payload(&data).is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_payload(&[0, 1, 2]).is_err());
    }
}
