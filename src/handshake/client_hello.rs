//! ClientHello body decoding: version, random, session ID, cipher suites,
//! compression methods, and an optional extensions vector.

use crate::constants::{CipherSuite, CompressionMethod, HandshakeType, ProtocolVersion};
use crate::error::TlsError;
use crate::options::DecodeOptions;

use super::extensions::{decode_extensions_info, split_extensions, Extension, ExtensionsInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHelloData {
    pub client_version: ProtocolVersion,
    pub random: [u8; 32],
    pub session_id: Vec<u8>,
    pub cipher_suites: Vec<CipherSuite>,
    pub compression_methods: Vec<CompressionMethod>,
    pub extensions_length: u16,
    pub extensions: Vec<Extension>,
    pub extensions_info: Option<ExtensionsInfo>,
}

impl ClientHelloData {
    pub fn decode(data: &[u8], opts: DecodeOptions) -> Result<Self, TlsError> {
        let mut pos = 0usize;

        let client_version = ProtocolVersion(read_u16(data, &mut pos)?);
        let random = read_array::<32>(data, &mut pos)?;
        let session_id = read_vec(data, &mut pos, read_u8(data, &mut pos)? as usize)?;

        let cs_len = read_u16(data, &mut pos)? as usize;
        if cs_len % 2 != 0 {
            return Err(TlsError::HandshakeBadLength);
        }
        let cs_bytes = read_vec(data, &mut pos, cs_len)?;
        let cipher_suites = cs_bytes
            .chunks_exact(2)
            .map(|c| CipherSuite(u16::from_be_bytes([c[0], c[1]])))
            .collect();

        let cm_len = read_u8(data, &mut pos)? as usize;
        let cm_bytes = read_vec(data, &mut pos, cm_len)?;
        let compression_methods = cm_bytes.into_iter().map(CompressionMethod).collect();

        let remaining = data.len() - pos;
        if remaining == 0 {
            return Ok(Self {
                client_version,
                random,
                session_id,
                cipher_suites,
                compression_methods,
                extensions_length: 0,
                extensions: vec![],
                extensions_info: None,
            });
        }

        let extensions_length = read_u16(data, &mut pos)?;
        if extensions_length as usize != data.len() - pos {
            return Err(TlsError::HandshakeExtBadLength);
        }
        let extensions = split_extensions(&data[pos..])?;
        let extensions_info = if opts.decode_extensions {
            Some(decode_extensions_info(&extensions, HandshakeType::CLIENT_HELLO)?)
        } else {
            None
        };

        Ok(Self {
            client_version,
            random,
            session_id,
            cipher_suites,
            compression_methods,
            extensions_length,
            extensions,
            extensions_info,
        })
    }
}

fn read_u8(data: &[u8], pos: &mut usize) -> Result<u8, TlsError> {
    let byte = *data.get(*pos).ok_or(TlsError::HandshakeBadLength)?;
    *pos += 1;
    Ok(byte)
}

fn read_u16(data: &[u8], pos: &mut usize) -> Result<u16, TlsError> {
    let slice = data
        .get(*pos..*pos + 2)
        .ok_or(TlsError::HandshakeBadLength)?;
    *pos += 2;
    Ok(u16::from_be_bytes([slice[0], slice[1]]))
}

fn read_array<const N: usize>(data: &[u8], pos: &mut usize) -> Result<[u8; N], TlsError> {
    let slice = data
        .get(*pos..*pos + N)
        .ok_or(TlsError::HandshakeBadLength)?;
    *pos += N;
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    Ok(out)
}

fn read_vec(data: &[u8], pos: &mut usize, len: usize) -> Result<Vec<u8>, TlsError> {
    let slice = data
        .get(*pos..*pos + len)
        .ok_or(TlsError::HandshakeBadLength)?
        .to_vec();
    *pos += len;
    Ok(slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_hello(extra: &[u8]) -> Vec<u8> {
        let mut data = vec![0x03, 0x03]; // client_version TLS 1.2
        data.extend_from_slice(&[0u8; 32]); // random
        data.push(0); // session_id_len = 0
        data.extend_from_slice(&[0x00, 0x02]); // cipher suites length = 2
        data.extend_from_slice(&[0x00, 0x2f]); // one cipher suite
        data.push(1); // compression methods length
        data.push(0); // null
        data.extend_from_slice(extra);
        data
    }

    #[test]
    fn decodes_with_no_extensions() {
        let data = minimal_hello(&[]);
        let hello = ClientHelloData::decode(&data, DecodeOptions::default()).unwrap();
        assert_eq!(hello.client_version, ProtocolVersion::TLS_1_2);
        assert_eq!(hello.cipher_suites, vec![CipherSuite(0x002f)]);
        assert_eq!(hello.compression_methods, vec![CompressionMethod::NULL]);
        assert!(hello.extensions.is_empty());
        assert!(hello.extensions_info.is_none());
    }

    #[test]
    fn rejects_extensions_length_mismatch() {
        let mut extra = vec![0x00, 0x05]; // claims 5 bytes of extensions
        extra.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // only 4 actually present
        let data = minimal_hello(&extra);
        assert_eq!(
            ClientHelloData::decode(&data, DecodeOptions::default()),
            Err(TlsError::HandshakeExtBadLength)
        );
    }

    #[test]
    fn decode_extensions_flag_skips_typed_info() {
        let extra = vec![0x00, 0x00]; // zero-length extensions vector
        let data = minimal_hello(&extra);
        let opts = DecodeOptions {
            decode_extensions: false,
        };
        let hello = ClientHelloData::decode(&data, opts).unwrap();
        assert!(hello.extensions_info.is_none());
        assert!(hello.extensions.is_empty());
    }
}
