//! The extensions vector carried by ClientHello/ServerHello: a
//! concatenation of `type:u16 length:u16 body[length]` entries, plus the
//! per-extension decoders that populate a shared `ExtensionsInfo`
//! accumulator.

use crate::constants::{
    ECPointFormat, ExtensionType, HandshakeType, SignatureScheme, SupportedGroup,
    SupportedVersion, PSKKeyExchangeMode,
};
use crate::error::TlsError;

/// One raw, still-typed extension entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub ext_type: ExtensionType,
    pub length: u16,
    pub body: Vec<u8>,
}

/// A decoded key_share entry: the group the client/server is offering or
/// selecting, plus the opaque key bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyShareEntry {
    pub group: SupportedGroup,
    pub key: Vec<u8>,
}

/// Fields accumulated by the per-extension decoders. Every field is
/// written by at most one decoder; decoders never read each other's
/// output, so there is no ordering contract among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionsInfo {
    pub sni: Option<String>,
    pub signature_schemes: Vec<SignatureScheme>,
    pub supported_versions: Vec<SupportedVersion>,
    pub supported_groups: Vec<SupportedGroup>,
    pub ec_point_formats: Vec<ECPointFormat>,
    pub ocsp: bool,
    pub alpns: Vec<String>,
    pub key_shares: Vec<KeyShareEntry>,
    pub psk_key_exchange_modes: Vec<PSKKeyExchangeMode>,
}

/// Splits the extensions vector into typed raw entries. Any header or body
/// shortfall is `HandshakeExtBadLength`.
pub fn split_extensions(data: &[u8]) -> Result<Vec<Extension>, TlsError> {
    let mut extensions = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let header = data
            .get(offset..offset + 4)
            .ok_or(TlsError::HandshakeExtBadLength)?;
        let ext_type = ExtensionType(u16::from_be_bytes([header[0], header[1]]));
        let length = u16::from_be_bytes([header[2], header[3]]);
        offset += 4;
        let body = data
            .get(offset..offset + length as usize)
            .ok_or(TlsError::HandshakeExtBadLength)?
            .to_vec();
        offset += length as usize;
        extensions.push(Extension {
            ext_type,
            length,
            body,
        });
    }
    Ok(extensions)
}

/// Runs every extension through its decoder in declaration order. A
/// decoder error aborts the whole hello; partial info accumulated so far
/// is discarded.
pub fn decode_extensions_info(
    extensions: &[Extension],
    handshake_type: HandshakeType,
) -> Result<ExtensionsInfo, TlsError> {
    let mut info = ExtensionsInfo::default();
    for extension in extensions {
        match extension.ext_type {
            ExtensionType::SERVER_NAME => decode_server_name(&mut info, &extension.body)?,
            ExtensionType::STATUS_REQUEST => decode_status_request(&mut info, &extension.body),
            ExtensionType::SUPPORTED_GROUPS => {
                decode_supported_groups(&mut info, &extension.body)?
            }
            ExtensionType::EC_POINT_FORMATS => {
                decode_ec_point_formats(&mut info, &extension.body)?
            }
            ExtensionType::SIGNATURE_ALGORITHMS => {
                decode_signature_algorithms(&mut info, &extension.body)?
            }
            ExtensionType::ALPN => decode_alpn(&mut info, &extension.body)?,
            ExtensionType::SUPPORTED_VERSIONS => {
                decode_supported_versions(&mut info, handshake_type, &extension.body)?
            }
            ExtensionType::PSK_KEY_EXCHANGE_MODES => {
                decode_psk_key_exchange_modes(&mut info, &extension.body)?
            }
            ExtensionType::KEY_SHARE => {
                decode_key_share(&mut info, handshake_type, &extension.body)?
            }
            _ => {}
        }
    }
    Ok(info)
}

/// Reads the 16-bit list length and slices each `ServerName` entry by its
/// declared length; only DNS (type 0) names set SNI.
fn decode_server_name(info: &mut ExtensionsInfo, body: &[u8]) -> Result<(), TlsError> {
    if body.is_empty() {
        return Ok(());
    }
    if body.len() < 2 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = u16::from_be_bytes([body[0], body[1]]) as usize;
    let list = body
        .get(2..2 + list_len)
        .ok_or(TlsError::HandshakeExtBadLength)?;

    let mut offset = 0;
    while offset < list.len() {
        let header = list
            .get(offset..offset + 3)
            .ok_or(TlsError::HandshakeExtBadLength)?;
        let name_type = header[0];
        let name_len = u16::from_be_bytes([header[1], header[2]]) as usize;
        offset += 3;
        let name = list
            .get(offset..offset + name_len)
            .ok_or(TlsError::HandshakeExtBadLength)?;
        if name_type == 0 {
            info.sni = Some(String::from_utf8_lossy(name).into_owned());
        }
        offset += name_len;
    }
    Ok(())
}

fn decode_status_request(info: &mut ExtensionsInfo, body: &[u8]) {
    if body.len() > 1 && body[0] == 1 {
        info.ocsp = true;
    }
}

fn decode_supported_groups(info: &mut ExtensionsInfo, body: &[u8]) -> Result<(), TlsError> {
    if body.len() < 2 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = u16::from_be_bytes([body[0], body[1]]) as usize;
    let list = body
        .get(2..2 + list_len)
        .ok_or(TlsError::HandshakeExtBadLength)?;
    if list_len % 2 != 0 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    info.supported_groups.extend(
        list.chunks_exact(2)
            .map(|c| SupportedGroup(u16::from_be_bytes([c[0], c[1]]))),
    );
    Ok(())
}

fn decode_ec_point_formats(info: &mut ExtensionsInfo, body: &[u8]) -> Result<(), TlsError> {
    if body.is_empty() {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = body[0] as usize;
    let list = body
        .get(1..1 + list_len)
        .ok_or(TlsError::HandshakeExtBadLength)?;
    info.ec_point_formats
        .extend(list.iter().map(|&b| ECPointFormat(b)));
    Ok(())
}

fn decode_signature_algorithms(info: &mut ExtensionsInfo, body: &[u8]) -> Result<(), TlsError> {
    if body.len() < 2 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = u16::from_be_bytes([body[0], body[1]]) as usize;
    let list = body
        .get(2..2 + list_len)
        .ok_or(TlsError::HandshakeExtBadLength)?;
    if list_len % 2 != 0 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    info.signature_schemes.extend(
        list.chunks_exact(2)
            .map(|c| SignatureScheme(u16::from_be_bytes([c[0], c[1]]))),
    );
    Ok(())
}

fn decode_alpn(info: &mut ExtensionsInfo, body: &[u8]) -> Result<(), TlsError> {
    if body.len() < 2 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = u16::from_be_bytes([body[0], body[1]]) as usize;
    if list_len != body.len() - 2 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let mut offset = 2;
    while offset < body.len() {
        let proto_len = *body.get(offset).ok_or(TlsError::HandshakeExtBadLength)? as usize;
        offset += 1;
        let proto = body
            .get(offset..offset + proto_len)
            .ok_or(TlsError::HandshakeExtBadLength)?;
        info.alpns.push(String::from_utf8_lossy(proto).into_owned());
        offset += proto_len;
    }
    Ok(())
}

fn decode_supported_versions(
    info: &mut ExtensionsInfo,
    handshake_type: HandshakeType,
    body: &[u8],
) -> Result<(), TlsError> {
    if handshake_type == HandshakeType::SERVER_HELLO {
        if body.len() != 2 {
            return Err(TlsError::HandshakeExtBadLength);
        }
        info.supported_versions
            .push(SupportedVersion(u16::from_be_bytes([body[0], body[1]])));
        return Ok(());
    }

    if body.is_empty() {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = body[0] as usize;
    let list = body
        .get(1..1 + list_len)
        .ok_or(TlsError::HandshakeExtBadLength)?;
    if list_len % 2 != 0 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    info.supported_versions.extend(
        list.chunks_exact(2)
            .map(|c| SupportedVersion(u16::from_be_bytes([c[0], c[1]]))),
    );
    Ok(())
}

fn decode_psk_key_exchange_modes(info: &mut ExtensionsInfo, body: &[u8]) -> Result<(), TlsError> {
    if body.is_empty() {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = body[0] as usize;
    if list_len != body.len() - 1 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    info.psk_key_exchange_modes
        .extend(body[1..].iter().map(|&b| PSKKeyExchangeMode(b)));
    Ok(())
}

fn decode_key_share(
    info: &mut ExtensionsInfo,
    handshake_type: HandshakeType,
    body: &[u8],
) -> Result<(), TlsError> {
    if handshake_type == HandshakeType::SERVER_HELLO {
        return decode_key_share_entry(body).map(|entry| info.key_shares.push(entry));
    }

    if body.len() < 2 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let list_len = u16::from_be_bytes([body[0], body[1]]) as usize;
    if list_len != body.len() - 2 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let mut offset = 2;
    while offset < body.len() {
        let header = body
            .get(offset..offset + 4)
            .ok_or(TlsError::HandshakeExtBadLength)?;
        let group = SupportedGroup(u16::from_be_bytes([header[0], header[1]]));
        let key_len = u16::from_be_bytes([header[2], header[3]]) as usize;
        offset += 4;
        let key = body
            .get(offset..offset + key_len)
            .ok_or(TlsError::HandshakeExtBadLength)?
            .to_vec();
        offset += key_len;
        info.key_shares.push(KeyShareEntry { group, key });
    }
    Ok(())
}

fn decode_key_share_entry(body: &[u8]) -> Result<KeyShareEntry, TlsError> {
    if body.len() < 4 {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let group = SupportedGroup(u16::from_be_bytes([body[0], body[1]]));
    let key_len = u16::from_be_bytes([body[2], body[3]]) as usize;
    if body.len() != 4 + key_len {
        return Err(TlsError::HandshakeExtBadLength);
    }
    let key = body[4..4 + key_len].to_vec();
    Ok(KeyShareEntry { group, key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_empty_vector() {
        assert_eq!(split_extensions(&[]).unwrap(), vec![]);
    }

    #[test]
    fn splits_single_extension() {
        let data = [0x00, 0x00, 0x00, 0x02, 0xAA, 0xBB];
        let extensions = split_extensions(&data).unwrap();
        assert_eq!(extensions.len(), 1);
        assert_eq!(extensions[0].ext_type, ExtensionType::SERVER_NAME);
        assert_eq!(extensions[0].body, vec![0xAA, 0xBB]);
    }

    #[test]
    fn sni_reads_correct_length_and_slices_per_entry() {
        let mut body = vec![];
        let list: Vec<u8> = {
            let mut v = vec![0u8, 0, 11];
            v.extend_from_slice(b"example.com");
            v
        };
        body.extend_from_slice(&(list.len() as u16).to_be_bytes());
        body.extend_from_slice(&list);

        let mut info = ExtensionsInfo::default();
        decode_server_name(&mut info, &body).unwrap();
        assert_eq!(info.sni.as_deref(), Some("example.com"));
    }

    #[test]
    fn alpn_requires_matching_list_length() {
        let body = [0x00, 0x02, 0x02, b'h', b'2'];
        assert_eq!(
            decode_alpn(&mut ExtensionsInfo::default(), &body),
            Err(TlsError::HandshakeExtBadLength)
        );
    }

    #[test]
    fn psk_modes_requires_exact_length() {
        let body = [0x01, 0x00, 0x01];
        assert_eq!(
            decode_psk_key_exchange_modes(&mut ExtensionsInfo::default(), &body),
            Err(TlsError::HandshakeExtBadLength)
        );
    }

    #[test]
    fn server_hello_supported_versions_is_single_entry() {
        let mut info = ExtensionsInfo::default();
        decode_supported_versions(&mut info, HandshakeType::SERVER_HELLO, &[0x03, 0x04]).unwrap();
        assert_eq!(info.supported_versions, vec![SupportedVersion(0x0304)]);
    }
}
