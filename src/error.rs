//! Closed error taxonomy for every layer of the decoder.
//!
//! Every kind is reported at the boundary of the call that detected it;
//! nothing here is retried internally. The alert/CCS "invalid value"
//! kinds are named separately because they commonly mean the record is
//! encrypted rather than malformed.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlsError {
    #[error("tls record is of wrong content type")]
    WrongContentType,

    #[error("tls record is of unknown protocol version")]
    WrongProtocolVersion,

    #[error("tls record is of wrong size")]
    WrongSize,

    #[error("tls record payload size doesn't match the declared record length")]
    WrongPayload,

    #[error("tls record header valid but payload is empty")]
    PayloadEmpty,

    #[error("dispatcher called with the wrong record type")]
    UnexpectedRecordType,

    #[error("inner payload size fails the per-type exact length check")]
    WrongLenPayload,

    #[error("unexpected alert level, or record is encrypted")]
    AlertInvalidLevel,

    #[error("unexpected alert description, or record is encrypted")]
    AlertInvalidDesc,

    #[error("unexpected change_cipher_spec value, or record is encrypted")]
    CCSInvalidValue,

    #[error("handshake header is of wrong size")]
    HandshakeWrongSize,

    #[error("handshake is of unknown type")]
    HandshakeWrongType,

    #[error("handshake body is shorter than required")]
    HandshakeBadLength,

    #[error("handshake extension vector or body has a malformed length")]
    HandshakeExtBadLength,

    #[error("handshake payload length doesn't match the exact-length call")]
    HandshakePayloadMissmatch,

    #[error("handshake length exceeds the bytes remaining in the record")]
    HandshakeFragmented,

    #[error("certificates vector has a malformed length")]
    CertsBadLength,

    #[error("length of certificates vector doesn't match declared length")]
    CertsMissmatch,

    #[error("declared certificate length exceeds remaining payload")]
    CertsInvalidPayload,

    /// Pass-through: the certificate's DER body did not parse as valid X.509.
    /// The inner message is the X.509 parser's own `Display` output.
    #[error("failed to parse X.509 certificate: {0}")]
    Certificate(String),
}

pub type Result<T> = std::result::Result<T, TlsError>;
