//! ServerHello body decoding: identical shape to ClientHello except a
//! single selected cipher suite and compression method.

use crate::constants::{CipherSuite, CompressionMethod, HandshakeType, ProtocolVersion};
use crate::error::TlsError;
use crate::options::DecodeOptions;

use super::extensions::{decode_extensions_info, split_extensions, Extension, ExtensionsInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHelloData {
    pub server_version: ProtocolVersion,
    pub random: [u8; 32],
    pub session_id: Vec<u8>,
    pub cipher_suite: CipherSuite,
    pub compression_method: CompressionMethod,
    pub extensions_length: u16,
    pub extensions: Vec<Extension>,
    pub extensions_info: Option<ExtensionsInfo>,
}

impl ServerHelloData {
    pub fn decode(data: &[u8], opts: DecodeOptions) -> Result<Self, TlsError> {
        let mut pos = 0usize;

        let server_version = ProtocolVersion(read_u16(data, &mut pos)?);
        let random = read_array::<32>(data, &mut pos)?;
        let session_id = read_vec(data, &mut pos, read_u8(data, &mut pos)? as usize)?;

        let cipher_suite = CipherSuite(read_u16(data, &mut pos)?);
        let compression_method = CompressionMethod(read_u8(data, &mut pos)?);

        let remaining = data.len() - pos;
        if remaining == 0 {
            return Ok(Self {
                server_version,
                random,
                session_id,
                cipher_suite,
                compression_method,
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
            Some(decode_extensions_info(&extensions, HandshakeType::SERVER_HELLO)?)
        } else {
            None
        };

        Ok(Self {
            server_version,
            random,
            session_id,
            cipher_suite,
            compression_method,
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
        let mut data = vec![0x03, 0x03];
        data.extend_from_slice(&[0u8; 32]);
        data.push(0);
        data.extend_from_slice(&[0xc0, 0x2f]); // selected cipher suite
        data.push(0); // null compression
        data.extend_from_slice(extra);
        data
    }

    #[test]
    fn decodes_selected_cipher_and_compression() {
        let data = minimal_hello(&[]);
        let hello = ServerHelloData::decode(&data, DecodeOptions::default()).unwrap();
        assert_eq!(hello.cipher_suite, CipherSuite(0xc02f));
        assert_eq!(hello.compression_method, CompressionMethod::NULL);
        assert!(hello.extensions.is_empty());
    }

    #[test]
    fn supported_versions_extension_is_single_entry() {
        let mut ext_body = vec![];
        ext_body.extend_from_slice(&[0x00, 0x2b]); // supported_versions type
        ext_body.extend_from_slice(&[0x00, 0x02]); // extension length
        ext_body.extend_from_slice(&[0x03, 0x04]); // TLS 1.3

        let mut extra = vec![];
        extra.extend_from_slice(&(ext_body.len() as u16).to_be_bytes());
        extra.extend_from_slice(&ext_body);

        let data = minimal_hello(&extra);
        let hello = ServerHelloData::decode(&data, DecodeOptions::default()).unwrap();
        let info = hello.extensions_info.unwrap();
        assert_eq!(
            info.supported_versions,
            vec![crate::constants::SupportedVersion(0x0304)]
        );
    }
}
