//! The record layer is the outermost TLS framing unit: a 5-byte header
//! (content type, protocol version, length) followed by that many payload
//! bytes. Decoding walks the header as a finite state machine, stepping
//! one field at a time rather than slicing the whole header in one shot.

use crate::constants::{ContentType, ProtocolVersion};
use crate::error::TlsError;
use crate::fsm::FiniteStateMachine;

/// Largest payload this decoder accepts: the standard 16384-byte TLS record
/// limit plus the 1024-byte slack TLS implementations commonly allow for
/// padding and MAC overhead on ciphertext records.
pub const MAX_PAYLOAD_LEN: usize = 16384 + 1024;

/// A decoded record: header fields plus an independently owned payload
/// buffer. Two records are equal iff every field, including the payload
/// bytes, matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub content_type: ContentType,
    pub version: ProtocolVersion,
    pub length: u16,
    pub contents: [u8; 5],
    pub payload: Vec<u8>,
}

impl Record {
    /// Runs the full record header + payload check over `data`, without
    /// producing a value. Never panics.
    pub fn has_header(data: &[u8]) -> bool {
        if data.len() < 5 {
            return false;
        }
        let content_type = ContentType(data[0]);
        let version = ProtocolVersion(u16::from_be_bytes([data[1], data[2]]));
        let length = u16::from_be_bytes([data[3], data[4]]);
        content_type.is_valid() && version.is_valid() && (length as usize) <= MAX_PAYLOAD_LEN
    }

    /// Parses one record from the front of `data`. `data` must contain
    /// exactly the header plus the declared payload; trailing bytes beyond
    /// that are not considered part of this record but are also not
    /// rejected, since a caller may be handing in a buffer that holds more
    /// than one record back to back.
    pub fn decode(data: &[u8]) -> Result<Self, TlsError> {
        let mut parser = RecordLayerParser::start(data);
        loop {
            parser = parser.transition();
            match parser {
                RecordLayerParser::Finished(record) => return Ok(record),
                RecordLayerParser::Failed(err) => return Err(err),
                _ => continue,
            }
        }
    }

    /// Deep copy: the returned record owns its own payload buffer, so
    /// mutating one does not affect the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copies only the header, leaving the payload empty.
    pub fn copy_header(&self) -> Self {
        Self {
            payload: Vec::new(),
            ..self.clone()
        }
    }

    /// Replaces the payload with an empty buffer while preserving the
    /// declared length, so `is_clear()` is true afterward.
    pub fn clear_payload(&mut self) {
        self.payload.clear();
    }

    pub fn is_clear(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Finite-state walk through a record's header, one field at a time.
#[allow(dead_code)]
pub enum RecordLayerParser<'a> {
    ExpectContentType {
        remainder: &'a [u8],
    },
    ExpectProtocolVersion {
        content_type: ContentType,
        remainder: &'a [u8],
    },
    ExpectLength {
        content_type: ContentType,
        protocol_version: ProtocolVersion,
        remainder: &'a [u8],
    },
    ExpectContent {
        content_type: ContentType,
        protocol_version: ProtocolVersion,
        length: u16,
        remainder: &'a [u8],
    },
    Finished(Record),
    Failed(TlsError),
}

impl<'a> RecordLayerParser<'a> {
    /// The finite state machine always starts with "ExpectContentType".
    pub fn start(remainder: &'a [u8]) -> Self {
        Self::ExpectContentType { remainder }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// Attempt to extract the content_type encoding from the remainder of
    /// the received bytes. If there is a valid content_type encoding,
    /// return Self::ExpectProtocolVersion, otherwise return Self::Failed.
    fn parse_content_type(self) -> Self {
        let remainder = match self {
            Self::ExpectContentType { remainder } => remainder,
            _ => unreachable!(),
        };
        if remainder.is_empty() {
            return Self::Failed(TlsError::WrongSize);
        }
        let content_type = ContentType(remainder[0]);
        if !content_type.is_valid() {
            return Self::Failed(TlsError::WrongContentType);
        }
        Self::ExpectProtocolVersion {
            content_type,
            remainder: &remainder[1..],
        }
    }

    /// Attempt to extract the protocol version encoding from the remainder
    /// of the received bytes. If there is a valid protocol_version
    /// encoding, return Self::ExpectLength, else return Self::Failed.
    fn parse_protocol_version(self) -> Self {
        let (content_type, remainder) = match self {
            Self::ExpectProtocolVersion {
                content_type,
                remainder,
            } => (content_type, remainder),
            _ => unreachable!(),
        };
        if remainder.len() < 2 {
            return Self::Failed(TlsError::WrongSize);
        }
        let protocol_version = ProtocolVersion(u16::from_be_bytes([remainder[0], remainder[1]]));
        if !protocol_version.is_valid() {
            return Self::Failed(TlsError::WrongProtocolVersion);
        }
        Self::ExpectLength {
            content_type,
            protocol_version,
            remainder: &remainder[2..],
        }
    }

    /// Attempt to extract the declared length. Rejects lengths over the
    /// record size ceiling.
    fn parse_length(self) -> Self {
        let (content_type, protocol_version, remainder) = match self {
            Self::ExpectLength {
                content_type,
                protocol_version,
                remainder,
            } => (content_type, protocol_version, remainder),
            _ => unreachable!(),
        };
        if remainder.len() < 2 {
            return Self::Failed(TlsError::WrongSize);
        }
        let length = u16::from_be_bytes([remainder[0], remainder[1]]);
        if length as usize > MAX_PAYLOAD_LEN {
            return Self::Failed(TlsError::WrongSize);
        }
        Self::ExpectContent {
            content_type,
            protocol_version,
            length,
            remainder: &remainder[2..],
        }
    }

    /// Slices the payload out of the remainder and assembles the finished
    /// record, or fails if the remainder doesn't hold enough bytes.
    fn parse_content(self) -> Self {
        let (content_type, protocol_version, length, remainder) = match self {
            Self::ExpectContent {
                content_type,
                protocol_version,
                length,
                remainder,
            } => (content_type, protocol_version, length, remainder),
            _ => unreachable!(),
        };
        if remainder.is_empty() {
            return Self::Failed(TlsError::PayloadEmpty);
        }
        let length_usize = length as usize;
        if remainder.len() < length_usize {
            return Self::Failed(TlsError::WrongPayload);
        }
        let version_bytes = protocol_version.0.to_be_bytes();
        let length_bytes = length.to_be_bytes();
        let contents = [
            content_type.0,
            version_bytes[0],
            version_bytes[1],
            length_bytes[0],
            length_bytes[1],
        ];
        Self::Finished(Record {
            content_type,
            version: protocol_version,
            length,
            contents,
            payload: remainder[..length_usize].to_vec(),
        })
    }
}

impl<'a> FiniteStateMachine for RecordLayerParser<'a> {
    type State = ();

    fn transition(self) -> Self {
        match self {
            Self::ExpectContentType { .. } => self.parse_content_type(),
            Self::ExpectProtocolVersion { .. } => self.parse_protocol_version(),
            Self::ExpectLength { .. } => self.parse_length(),
            Self::ExpectContent { .. } => self.parse_content(),
            Self::Finished(_) | Self::Failed(_) => self,
        }
    }

    fn is_halt(&self) -> bool {
        self.is_finished() || self.is_failed()
    }
}
