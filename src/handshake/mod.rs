//! The handshake parser: reads one or more handshake headers from a record
//! payload, rejects fragmentation, and dispatches to a per-type body
//! decoder. Only client_hello, server_hello, and certificate carry a typed
//! body; every other recognized handshake type decodes successfully with
//! no body.

pub mod certificate;
pub mod client_hello;
pub mod extensions;
pub mod server_hello;

pub use certificate::CertificateData;
pub use client_hello::ClientHelloData;
pub use extensions::{Extension, ExtensionsInfo, KeyShareEntry};
pub use server_hello::ServerHelloData;

use crate::constants::HandshakeType;
use crate::error::TlsError;
use crate::options::DecodeOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandshakeBody {
    ClientHello(ClientHelloData),
    ServerHello(ServerHelloData),
    Certificate(CertificateData),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    pub handshake_type: HandshakeType,
    pub length: u32,
    pub body: HandshakeBody,
}

fn decode_body(
    handshake_type: HandshakeType,
    body: &[u8],
    opts: DecodeOptions,
) -> Result<HandshakeBody, TlsError> {
    match handshake_type {
        HandshakeType::CLIENT_HELLO => {
            ClientHelloData::decode(body, opts).map(HandshakeBody::ClientHello)
        }
        HandshakeType::SERVER_HELLO => {
            ServerHelloData::decode(body, opts).map(HandshakeBody::ServerHello)
        }
        HandshakeType::CERTIFICATE => CertificateData::decode(body).map(HandshakeBody::Certificate),
        _ => Ok(HandshakeBody::None),
    }
}

/// Reads every handshake message out of a record payload, which may
/// coalesce several back to back. Each message's declared length must fit
/// within what remains of the payload, or the whole record is rejected as
/// fragmented.
pub fn parse_handshakes(data: &[u8], opts: DecodeOptions) -> Result<Vec<Handshake>, TlsError> {
    let mut handshakes = Vec::new();
    let mut remainder = data;
    while !remainder.is_empty() {
        if remainder.len() < 4 {
            return Err(TlsError::HandshakeWrongSize);
        }
        let handshake_type = HandshakeType(remainder[0]);
        if !handshake_type.is_valid() {
            return Err(TlsError::HandshakeWrongType);
        }
        let hlen = u32::from_be_bytes([0, remainder[1], remainder[2], remainder[3]]) as usize;
        let available = remainder.len() - 4;
        if hlen > available {
            return Err(TlsError::HandshakeFragmented);
        }
        let body_bytes = &remainder[4..4 + hlen];
        let body = decode_body(handshake_type, body_bytes, opts)?;
        handshakes.push(Handshake {
            handshake_type,
            length: hlen as u32,
            body,
        });
        remainder = &remainder[4 + hlen..];
    }
    Ok(handshakes)
}

/// Parses a single handshake directly from a byte slice, requiring the
/// input to be exactly `hlen + 4` bytes (no trailing or missing bytes).
pub fn parse_handshake_exact(data: &[u8], opts: DecodeOptions) -> Result<Handshake, TlsError> {
    if data.len() < 4 {
        return Err(TlsError::HandshakeWrongSize);
    }
    let handshake_type = HandshakeType(data[0]);
    if !handshake_type.is_valid() {
        return Err(TlsError::HandshakeWrongType);
    }
    let hlen = u32::from_be_bytes([0, data[1], data[2], data[3]]) as usize;
    if data.len() != hlen + 4 {
        return Err(TlsError::HandshakePayloadMissmatch);
    }
    let body = decode_body(handshake_type, &data[4..], opts)?;
    Ok(Handshake {
        handshake_type,
        length: hlen as u32,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handshake_header(handshake_type: u8, len: usize) -> Vec<u8> {
        let len = len as u32;
        let len_bytes = len.to_be_bytes();
        vec![handshake_type, len_bytes[1], len_bytes[2], len_bytes[3]]
    }

    #[test]
    fn parses_server_hello_done_with_no_body() {
        let data = handshake_header(HandshakeType::SERVER_HELLO_DONE.0, 0);
        let handshakes = parse_handshakes(&data, DecodeOptions::default()).unwrap();
        assert_eq!(handshakes.len(), 1);
        assert_eq!(handshakes[0].body, HandshakeBody::None);
    }

    #[test]
    fn rejects_fragmented_handshake() {
        let mut data = handshake_header(HandshakeType::SERVER_HELLO_DONE.0, 10);
        data.extend_from_slice(&[0u8; 3]); // fewer than the declared 10 bytes
        assert_eq!(
            parse_handshakes(&data, DecodeOptions::default()),
            Err(TlsError::HandshakeFragmented)
        );
    }

    #[test]
    fn rejects_unknown_handshake_type() {
        let data = handshake_header(0xfe, 0);
        assert_eq!(
            parse_handshakes(&data, DecodeOptions::default()),
            Err(TlsError::HandshakeWrongType)
        );
    }

    #[test]
    fn multiple_handshakes_in_one_payload() {
        let mut data = handshake_header(HandshakeType::SERVER_HELLO_DONE.0, 0);
        data.extend(handshake_header(HandshakeType::FINISHED.0, 2));
        data.extend_from_slice(&[0xAA, 0xBB]);

        let handshakes = parse_handshakes(&data, DecodeOptions::default()).unwrap();
        assert_eq!(handshakes.len(), 2);
        assert_eq!(handshakes[0].handshake_type, HandshakeType::SERVER_HELLO_DONE);
        assert_eq!(handshakes[1].handshake_type, HandshakeType::FINISHED);
        assert_eq!(handshakes[1].length, 2);
    }

    #[test]
    fn parse_exact_rejects_trailing_bytes() {
        let mut data = handshake_header(HandshakeType::SERVER_HELLO_DONE.0, 0);
        data.push(0xFF);
        assert_eq!(
            parse_handshake_exact(&data, DecodeOptions::default()),
            Err(TlsError::HandshakePayloadMissmatch)
        );
    }
}
