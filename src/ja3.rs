//! JA3 client fingerprinting: serializes selected ClientHello fields into
//! the canonical JA3 string and its MD5 digest.

use crate::handshake::ClientHelloData;

/// Builds the canonical JA3 string: five dash-joined fields, comma
/// separated, even when a field is empty.
pub fn ja3_string(hello: &ClientHelloData) -> String {
    let ciphers = hello
        .cipher_suites
        .iter()
        .filter(|c| !c.is_grease())
        .map(|c| c.0.to_string())
        .collect::<Vec<_>>()
        .join("-");

    let extensions = hello
        .extensions
        .iter()
        .filter(|e| !e.ext_type.is_grease())
        .map(|e| e.ext_type.0.to_string())
        .collect::<Vec<_>>()
        .join("-");

    let groups = hello
        .extensions_info
        .as_ref()
        .map(|info| {
            info.supported_groups
                .iter()
                .filter(|g| !g.is_grease())
                .map(|g| g.0.to_string())
                .collect::<Vec<_>>()
                .join("-")
        })
        .unwrap_or_default();

    let ec_point_formats = hello
        .extensions_info
        .as_ref()
        .map(|info| {
            info.ec_point_formats
                .iter()
                .map(|f| f.0.to_string())
                .collect::<Vec<_>>()
                .join("-")
        })
        .unwrap_or_default();

    format!(
        "{},{},{},{},{}",
        hello.client_version.0, ciphers, extensions, groups, ec_point_formats,
    )
}

/// Lowercase-hex MD5 digest of the JA3 string's UTF-8 bytes.
pub fn ja3_digest(ja3: &str) -> String {
    format!("{:x}", md5::compute(ja3.as_bytes()))
}

/// Convenience: the JA3 string and its digest together.
pub fn ja3(hello: &ClientHelloData) -> (String, String) {
    let s = ja3_string(hello);
    let digest = ja3_digest(&s);
    (s, digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        CipherSuite, CompressionMethod, ECPointFormat, ExtensionType, ProtocolVersion,
        SupportedGroup,
    };
    use crate::handshake::extensions::{Extension, ExtensionsInfo};

    fn extension(ext_type: u16) -> Extension {
        Extension {
            ext_type: ExtensionType(ext_type),
            length: 0,
            body: vec![],
        }
    }

    fn hello_from_spec_fixture() -> ClientHelloData {
        let cipher_suites = [
            4865, 4867, 4866, 49195, 49199, 52393, 52392, 49196, 49200, 49171, 49172, 47, 53, 10,
        ]
        .into_iter()
        .map(|c| CipherSuite(c as u16))
        .collect();

        let extensions = [0, 23, 65281, 10, 11, 35, 16, 5, 51, 43, 13, 45, 21]
            .into_iter()
            .map(extension)
            .collect();

        let mut info = ExtensionsInfo::default();
        info.supported_groups = [29, 23, 24, 25, 256, 257]
            .into_iter()
            .map(SupportedGroup)
            .collect();
        info.ec_point_formats = vec![ECPointFormat(0)];

        ClientHelloData {
            client_version: ProtocolVersion(771),
            random: [0u8; 32],
            session_id: vec![],
            cipher_suites,
            compression_methods: vec![CompressionMethod::NULL],
            extensions_length: 0,
            extensions,
            extensions_info: Some(info),
        }
    }

    #[test]
    fn matches_known_ja3_fixture() {
        let hello = hello_from_spec_fixture();
        let (string, digest) = ja3(&hello);
        assert_eq!(
            string,
            "771,4865-4867-4866-49195-49199-52393-52392-49196-49200-49171-49172-47-53-10,\
0-23-65281-10-11-35-16-5-51-43-13-45-21,29-23-24-25-256-257,0"
        );
        assert_eq!(digest, "7375c86ede5d928ba34a0622e4ac0dcd");
    }

    #[test]
    fn grease_fixture_is_filtered_from_ciphers_extensions_and_groups() {
        let cipher_suites = [
            0x0a0a, 52393, 52392, 49195, 49199, 49196, 49200, 49171, 49172, 156, 157, 47, 53, 10,
        ]
        .into_iter()
        .map(|c| CipherSuite(c as u16))
        .collect();

        let extensions = [
            0x6a6a, 65281, 0, 23, 35, 13, 5, 18, 16, 30032, 11, 10, 21,
        ]
        .into_iter()
        .map(extension)
        .collect();

        let mut info = ExtensionsInfo::default();
        info.supported_groups = [0xfafa, 29, 23, 24].into_iter().map(SupportedGroup).collect();
        info.ec_point_formats = vec![ECPointFormat(0)];

        let hello = ClientHelloData {
            client_version: ProtocolVersion(771),
            random: [0u8; 32],
            session_id: vec![],
            cipher_suites,
            compression_methods: vec![CompressionMethod::NULL],
            extensions_length: 0,
            extensions,
            extensions_info: Some(info),
        };

        let (string, digest) = ja3(&hello);
        assert_eq!(
            string,
            "771,52393-52392-49195-49199-49196-49200-49171-49172-156-157-47-53-10,\
65281-0-23-35-13-5-18-16-30032-11-10-21,29-23-24,0"
        );
        assert_eq!(digest, "46efd49abcca8ea9baa932da68fdb529");
    }

    #[test]
    fn missing_extensions_info_yields_empty_group_and_format_fields() {
        let hello = ClientHelloData {
            client_version: ProtocolVersion(771),
            random: [0u8; 32],
            session_id: vec![],
            cipher_suites: vec![CipherSuite(47)],
            compression_methods: vec![CompressionMethod::NULL],
            extensions_length: 0,
            extensions: vec![],
            extensions_info: None,
        };
        assert_eq!(ja3_string(&hello), "771,47,,,");
    }
}
