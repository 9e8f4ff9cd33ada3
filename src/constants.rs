//! Primitives & enums: every closed-set wire value the decoder recognizes.
//!
//! Each type carries a validity predicate and a `Display` impl producing
//! `"name(code)"`, matching the observable output shape the calling tests
//! depend on.

use std::fmt;

/// 16-bit GREASE codes, one per high nibble with the low byte fixed to 0xA.
pub const GREASE16: [u16; 16] = [
    0x0A0A, 0x1A1A, 0x2A2A, 0x3A3A, 0x4A4A, 0x5A5A, 0x6A6A, 0x7A7A, 0x8A8A, 0x9A9A, 0xAAAA,
    0xBABA, 0xCACA, 0xDADA, 0xEAEA, 0xFAFA,
];

/// 8-bit GREASE codes used by PSK key exchange modes.
pub const GREASE8: [u8; 8] = [0x0B, 0x2A, 0x49, 0x68, 0x87, 0xA6, 0xC5, 0xE4];

pub fn is_grease16(code: u16) -> bool {
    GREASE16.contains(&code)
}

pub fn is_grease8(code: u8) -> bool {
    GREASE8.contains(&code)
}

/// Record-level content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentType(pub u8);

impl ContentType {
    pub const CHANGE_CIPHER_SPEC: ContentType = ContentType(20);
    pub const ALERT: ContentType = ContentType(21);
    pub const HANDSHAKE: ContentType = ContentType(22);
    pub const APPLICATION_DATA: ContentType = ContentType(23);

    pub fn is_valid(self) -> bool {
        (20..=23).contains(&self.0)
    }

    fn desc(self) -> &'static str {
        match self.0 {
            20 => "change_cipher_spec",
            21 => "alert",
            22 => "handshake",
            23 => "application_data",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// Record/handshake protocol version, a 16-bit big-endian value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolVersion(pub u16);

impl ProtocolVersion {
    pub const SSL_3_0: ProtocolVersion = ProtocolVersion(0x0300);
    pub const TLS_1_0: ProtocolVersion = ProtocolVersion(0x0301);
    pub const TLS_1_1: ProtocolVersion = ProtocolVersion(0x0302);
    pub const TLS_1_2: ProtocolVersion = ProtocolVersion(0x0303);
    pub const TLS_1_3: ProtocolVersion = ProtocolVersion(0x0304);

    pub fn is_valid(self) -> bool {
        (0x0300..=0x0304).contains(&self.0)
    }

    fn desc(self) -> &'static str {
        match self.0 {
            0x0300 => "SSL_3.0",
            0x0301 => "TLS_1.0",
            0x0302 => "TLS_1.1",
            0x0303 => "TLS_1.2",
            0x0304 => "TLS_1.3",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// Alert level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertLevel(pub u8);

impl AlertLevel {
    pub const WARNING: AlertLevel = AlertLevel(1);
    pub const FATAL: AlertLevel = AlertLevel(2);

    pub fn is_valid(self) -> bool {
        self.0 == 1 || self.0 == 2
    }

    fn desc(self) -> &'static str {
        match self.0 {
            1 => "warning",
            2 => "fatal",
            _ => "unknown",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// Alert description, the RFC-assigned closed set of alert codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertDescription(pub u8);

impl AlertDescription {
    fn desc(self) -> &'static str {
        match self.0 {
            0 => "close_notify",
            10 => "unexpected_message",
            20 => "bad_record_mac",
            21 => "decryption_failed_RESERVED",
            22 => "record_overflow",
            30 => "decompression_failure",
            40 => "handshake_failure",
            41 => "no_certificate_RESERVED",
            42 => "bad_certificate",
            43 => "unsupported_certificate",
            44 => "certificate_revoked",
            45 => "certificate_expired",
            46 => "certificate_unknown",
            47 => "illegal_parameter",
            48 => "unknown_ca",
            49 => "access_denied",
            50 => "decode_error",
            51 => "decrypt_error",
            60 => "export_restriction_RESERVED",
            70 => "protocol_version",
            71 => "insufficient_security",
            80 => "internal_error",
            90 => "user_canceled",
            100 => "no_renegotiation",
            110 => "unsupported_extension",
            _ => "unknown",
        }
    }

    pub fn is_valid(self) -> bool {
        self.desc() != "unknown"
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// Compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressionMethod(pub u8);

impl CompressionMethod {
    pub const NULL: CompressionMethod = CompressionMethod(0);
    pub const DEFLATE: CompressionMethod = CompressionMethod(1);

    pub fn is_valid(self) -> bool {
        self.0 == 0 || self.0 == 1
    }

    fn desc(self) -> &'static str {
        match self.0 {
            0 => "null",
            1 => "DEFLATE",
            _ => "unknown",
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// Handshake message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandshakeType(pub u8);

impl HandshakeType {
    pub const HELLO_REQUEST: HandshakeType = HandshakeType(0);
    pub const CLIENT_HELLO: HandshakeType = HandshakeType(1);
    pub const SERVER_HELLO: HandshakeType = HandshakeType(2);
    pub const NEW_SESSION_TICKET: HandshakeType = HandshakeType(4);
    pub const END_OF_EARLY_DATA: HandshakeType = HandshakeType(5);
    pub const CERTIFICATE: HandshakeType = HandshakeType(11);
    pub const SERVER_KEY_EXCHANGE: HandshakeType = HandshakeType(12);
    pub const CERTIFICATE_REQUEST: HandshakeType = HandshakeType(13);
    pub const SERVER_HELLO_DONE: HandshakeType = HandshakeType(14);
    pub const CERTIFICATE_VERIFY: HandshakeType = HandshakeType(15);
    pub const CLIENT_KEY_EXCHANGE: HandshakeType = HandshakeType(16);
    pub const FINISHED: HandshakeType = HandshakeType(20);
    pub const CERTIFICATE_URL: HandshakeType = HandshakeType(21);
    pub const CERTIFICATE_STATUS: HandshakeType = HandshakeType(22);
    pub const KEY_UPDATE: HandshakeType = HandshakeType(24);

    fn desc(self) -> &'static str {
        match self.0 {
            0 => "hello_request",
            1 => "client_hello",
            2 => "server_hello",
            4 => "new_session_ticket",
            5 => "end_of_early_data",
            11 => "certificate",
            12 => "server_key_exchange",
            13 => "certificate_request",
            14 => "server_hello_done",
            15 => "certificate_verify",
            16 => "client_key_exchange",
            20 => "finished",
            21 => "certificate_url",
            22 => "certificate_status",
            24 => "key_update",
            _ => "unknown",
        }
    }

    pub fn is_valid(self) -> bool {
        self.desc() != "unknown"
    }
}

impl fmt::Display for HandshakeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// A negotiated/offered TLS cipher suite, 16 bits wide.
///
/// Names the suites exercised by the JA3 fixtures and otherwise reports
/// `"unknown(code)"` rather than fabricating a full IANA registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSuite(pub u16);

impl CipherSuite {
    pub fn is_grease(self) -> bool {
        is_grease16(self.0)
    }

    fn desc(self) -> &'static str {
        match self.0 {
            0x1301 => "TLS_AES_128_GCM_SHA256",
            0x1302 => "TLS_AES_256_GCM_SHA384",
            0x1303 => "TLS_CHACHA20_POLY1305_SHA256",
            0x000A => "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
            0x002F => "TLS_RSA_WITH_AES_128_CBC_SHA",
            0x0035 => "TLS_RSA_WITH_AES_256_CBC_SHA",
            0x009C => "TLS_RSA_WITH_AES_128_GCM_SHA256",
            0x009D => "TLS_RSA_WITH_AES_256_GCM_SHA384",
            0xC009 => "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
            0xC00A => "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
            0xC013 => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
            0xC014 => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
            0xC02B => "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
            0xC02C => "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
            0xC02F => "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
            0xC030 => "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
            0xCCA8 => "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
            0xCCA9 => "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
            _ if is_grease16(self.0) => "GREASE",
            _ => "unknown",
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// TLS extension type, including the IANA catalog plus NPN,
/// renegotiation_info and the GREASE placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtensionType(pub u16);

impl ExtensionType {
    pub const SERVER_NAME: ExtensionType = ExtensionType(0);
    pub const MAX_FRAGMENT_LENGTH: ExtensionType = ExtensionType(1);
    pub const CLIENT_CERTIFICATE_URL: ExtensionType = ExtensionType(2);
    pub const TRUSTED_CA_KEYS: ExtensionType = ExtensionType(3);
    pub const TRUNCATED_HMAC: ExtensionType = ExtensionType(4);
    pub const STATUS_REQUEST: ExtensionType = ExtensionType(5);
    pub const USER_MAPPING: ExtensionType = ExtensionType(6);
    pub const CLIENT_AUTHZ: ExtensionType = ExtensionType(7);
    pub const SERVER_AUTHZ: ExtensionType = ExtensionType(8);
    pub const CERT_TYPE: ExtensionType = ExtensionType(9);
    pub const SUPPORTED_GROUPS: ExtensionType = ExtensionType(10);
    pub const EC_POINT_FORMATS: ExtensionType = ExtensionType(11);
    pub const SRP: ExtensionType = ExtensionType(12);
    pub const SIGNATURE_ALGORITHMS: ExtensionType = ExtensionType(13);
    pub const USE_SRTP: ExtensionType = ExtensionType(14);
    pub const HEARTBEAT: ExtensionType = ExtensionType(15);
    pub const ALPN: ExtensionType = ExtensionType(16);
    pub const STATUS_REQUEST_V2: ExtensionType = ExtensionType(17);
    pub const SIGNED_CERT_TIMESTAMP: ExtensionType = ExtensionType(18);
    pub const CLIENT_CERTIFICATE_TYPE: ExtensionType = ExtensionType(19);
    pub const SERVER_CERTIFICATE_TYPE: ExtensionType = ExtensionType(20);
    pub const PADDING: ExtensionType = ExtensionType(21);
    pub const ENCRYPT_THEN_MAC: ExtensionType = ExtensionType(22);
    pub const EXTENDED_MASTER_SECRET: ExtensionType = ExtensionType(23);
    pub const TOKEN_BINDING: ExtensionType = ExtensionType(24);
    pub const CACHED_INFO: ExtensionType = ExtensionType(25);
    pub const COMPRESS_CERTIFICATE: ExtensionType = ExtensionType(27);
    pub const RECORD_SIZE_LIMIT: ExtensionType = ExtensionType(28);
    pub const PWD_PROTECT: ExtensionType = ExtensionType(29);
    pub const PWD_CLEAR: ExtensionType = ExtensionType(30);
    pub const PASSWORD_SALT: ExtensionType = ExtensionType(31);
    pub const SESSION_TICKET: ExtensionType = ExtensionType(35);
    pub const PRE_SHARED_KEY: ExtensionType = ExtensionType(41);
    pub const EARLY_DATA: ExtensionType = ExtensionType(42);
    pub const SUPPORTED_VERSIONS: ExtensionType = ExtensionType(43);
    pub const COOKIE: ExtensionType = ExtensionType(44);
    pub const PSK_KEY_EXCHANGE_MODES: ExtensionType = ExtensionType(45);
    pub const CERTIFICATE_AUTHORITIES: ExtensionType = ExtensionType(47);
    pub const OID_FILTERS: ExtensionType = ExtensionType(48);
    pub const POST_HANDSHAKE_AUTH: ExtensionType = ExtensionType(49);
    pub const SIGNATURE_ALGORITHMS_CERT: ExtensionType = ExtensionType(50);
    pub const KEY_SHARE: ExtensionType = ExtensionType(51);
    pub const NPN: ExtensionType = ExtensionType(13172);
    pub const RENEGOTIATION_INFO: ExtensionType = ExtensionType(65281);

    pub fn is_grease(self) -> bool {
        is_grease16(self.0)
    }

    fn desc(self) -> &'static str {
        match self.0 {
            0 => "server_name",
            1 => "max_fragment_length",
            2 => "client_certificate_url",
            3 => "trusted_ca_keys",
            4 => "truncated_hmac",
            5 => "status_request",
            6 => "user_mapping",
            7 => "client_authz",
            8 => "server_authz",
            9 => "cert_type",
            10 => "supported_groups",
            11 => "ec_point_formats",
            12 => "srp",
            13 => "signature_algorithms",
            14 => "use_srtp",
            15 => "heartbeat",
            16 => "application_layer_protocol_negotiation",
            17 => "status_request_v2",
            18 => "signed_certificate_timestamp",
            19 => "client_certificate_type",
            20 => "server_certificate_type",
            21 => "padding",
            22 => "encrypt_then_mac",
            23 => "extended_master_secret",
            24 => "token_binding",
            25 => "cached_info",
            27 => "compress_certificate",
            28 => "record_size_limit",
            29 => "pwd_protect",
            30 => "pwd_clear",
            31 => "password_salt",
            35 => "session_ticket",
            41 => "pre_shared_key",
            42 => "early_data",
            43 => "supported_versions",
            44 => "cookie",
            45 => "psk_key_exchange_modes",
            47 => "certificate_authorities",
            48 => "oid_filters",
            49 => "post_handshake_auth",
            50 => "signature_algorithms_cert",
            51 => "key_share",
            13172 => "next_protocol_negotiation",
            65281 => "renegotiation_info",
            _ if is_grease16(self.0) => "GREASE",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// Supported (EC/FFDHE) group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportedGroup(pub u16);

impl SupportedGroup {
    pub fn is_grease(self) -> bool {
        is_grease16(self.0)
    }

    fn desc(self) -> &'static str {
        match self.0 {
            0 => "reserved",
            1 => "sect163k1",
            2 => "sect163r1",
            3 => "sect163r2",
            4 => "sect193r1",
            5 => "sect193r2",
            6 => "sect233k1",
            7 => "sect233r1",
            8 => "sect239k1",
            9 => "sect283k1",
            10 => "sect283r1",
            11 => "sect409k1",
            12 => "sect409r1",
            13 => "sect571k1",
            14 => "sect571r1",
            15 => "secp160k1",
            16 => "secp160r1",
            17 => "secp160r2",
            18 => "secp192k1",
            19 => "secp192r1",
            20 => "secp224k1",
            21 => "secp224r1",
            22 => "secp256k1",
            23 => "secp256r1",
            24 => "secp384r1",
            25 => "secp521r1",
            26 => "brainpoolP256r1",
            27 => "brainpoolP384r1",
            28 => "brainpoolP512r1",
            29 => "x25519",
            30 => "x448",
            256 => "ffdhe2048",
            257 => "ffdhe3072",
            258 => "ffdhe4096",
            259 => "ffdhe6144",
            260 => "ffdhe8192",
            65280 => "unassigned",
            65281 => "arbitrary_explicit_prime_curves",
            65282 => "arbitrary_explicit_char2_curves",
            n if (31..=255).contains(&n) => "unassigned",
            n if (261..=507).contains(&n) => "unassigned",
            n if (508..=511).contains(&n) => "reserved",
            n if (512..=65023).contains(&n) => "unassigned",
            n if (65024..=65279).contains(&n) => "reserved",
            n if (65283..=65535).contains(&n) => "unassigned",
            _ => "unknown",
        }
    }
}

impl fmt::Display for SupportedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// EC point format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ECPointFormat(pub u8);

impl ECPointFormat {
    fn desc(self) -> &'static str {
        match self.0 {
            0 => "uncompressed",
            1 => "ansiX962_compressed_prime",
            2 => "ansiX962_compressed_char2",
            3..=247 => "unassigned",
            248..=255 => "reserved_private",
        }
    }
}

impl fmt::Display for ECPointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// Signature scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureScheme(pub u16);

impl SignatureScheme {
    pub fn is_grease(self) -> bool {
        is_grease16(self.0)
    }

    fn desc(self) -> &'static str {
        if self.is_grease() {
            return "GREASE";
        }
        match self.0 {
            0x0201 => "rsa_pkcs1_sha1",
            0x0203 => "ecdsa_sha1",
            0x0401 => "rsa_pkcs1_sha256",
            0x0403 => "ecdsa_secp256r1_sha256",
            0x0501 => "rsa_pkcs1_sha384",
            0x0503 => "ecdsa_secp384r1_sha384",
            0x0601 => "rsa_pkcs1_sha512",
            0x0603 => "ecdsa_secp521r1_sha512",
            0x0804 => "rsa_pss_rsae_sha256",
            0x0805 => "rsa_pss_rsae_sha384",
            0x0806 => "rsa_pss_rsae_sha512",
            0x0807 => "ed25519",
            0x0808 => "ed448",
            0x0809 => "rsa_pss_pss_sha256",
            0x080A => "rsa_pss_pss_sha384",
            0x080B => "rsa_pss_pss_sha512",
            _ => "unknown",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// A `supported_versions` entry: like `ProtocolVersion` but `0x7f00 | draft`
/// values are valid TLS 1.3 draft markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportedVersion(pub u16);

impl SupportedVersion {
    pub fn is_grease(self) -> bool {
        is_grease16(self.0)
    }

    pub fn is_draft(self) -> bool {
        (self.0 & 0xff00) == 0x7f00
    }

    fn desc(self) -> String {
        if self.is_draft() {
            return format!("TLS_1.3(draft {})", self.0 & 0x00ff);
        }
        if self.is_grease() {
            return "GREASE".to_string();
        }
        ProtocolVersion(self.0).desc().to_string()
    }
}

impl fmt::Display for SupportedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

/// PSK key exchange mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PSKKeyExchangeMode(pub u8);

impl PSKKeyExchangeMode {
    pub const PSK_KE: PSKKeyExchangeMode = PSKKeyExchangeMode(0);
    pub const PSK_DHE_KE: PSKKeyExchangeMode = PSKKeyExchangeMode(1);

    pub fn is_grease(self) -> bool {
        is_grease8(self.0)
    }

    fn desc(self) -> &'static str {
        if self.is_grease() {
            return "GREASE";
        }
        match self.0 {
            0 => "psk_ke",
            1 => "psk_dhe_ke",
            2..=253 => "unassigned",
            254..=255 => "reserved_private",
        }
    }
}

impl fmt::Display for PSKKeyExchangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.desc(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_display_and_validity() {
        assert!(ContentType::HANDSHAKE.is_valid());
        assert!(!ContentType(0).is_valid());
        assert_eq!(ContentType::ALERT.to_string(), "alert(21)");
    }

    #[test]
    fn protocol_version_round_trip() {
        assert_eq!(ProtocolVersion::TLS_1_2.to_string(), "TLS_1.2(771)");
        assert!(!ProtocolVersion(0x0305).is_valid());
    }

    #[test]
    fn grease_tables() {
        assert!(is_grease16(0x3a3a));
        assert!(!is_grease16(0x1234));
        assert!(is_grease8(0x0b));
        assert!(!is_grease8(0x0c));
    }

    #[test]
    fn supported_version_draft() {
        let draft = SupportedVersion(0x7f1c);
        assert!(draft.is_draft());
        assert_eq!(draft.to_string(), "TLS_1.3(draft 28)(32540)");
    }

    #[test]
    fn ec_point_format_ranges() {
        assert_eq!(ECPointFormat(0).to_string(), "uncompressed(0)");
        assert_eq!(ECPointFormat(250).to_string(), "reserved_private(250)");
    }
}
