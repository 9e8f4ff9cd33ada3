//! Given a decoded record, produce the content-typed message it carries:
//! Alert, ChangeCipherSpec, ApplicationData, or one or more Handshake
//! messages.

use crate::constants::{AlertDescription, AlertLevel, ContentType};
use crate::error::TlsError;
use crate::handshake::{self, Handshake};
use crate::options::DecodeOptions;
use crate::record_layer::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub description: AlertDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeCipherSpec {
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Alert(Alert),
    ChangeCipherSpec(ChangeCipherSpec),
    ApplicationData(Vec<u8>),
    Handshake(Vec<Handshake>),
}

impl Message {
    pub fn from_record(record: &Record, opts: DecodeOptions) -> Result<Message, TlsError> {
        match record.content_type {
            ContentType::ALERT => decode_alert(&record.payload).map(Message::Alert),
            ContentType::CHANGE_CIPHER_SPEC => {
                decode_ccs(&record.payload).map(Message::ChangeCipherSpec)
            }
            ContentType::APPLICATION_DATA => Ok(Message::ApplicationData(record.payload.clone())),
            ContentType::HANDSHAKE => {
                handshake::parse_handshakes(&record.payload, opts).map(Message::Handshake)
            }
            _ => Err(TlsError::UnexpectedRecordType),
        }
    }
}

fn decode_alert(payload: &[u8]) -> Result<Alert, TlsError> {
    if payload.len() != 2 {
        return Err(TlsError::WrongLenPayload);
    }
    let level = AlertLevel(payload[0]);
    if !level.is_valid() {
        return Err(TlsError::AlertInvalidLevel);
    }
    let description = AlertDescription(payload[1]);
    if !description.is_valid() {
        return Err(TlsError::AlertInvalidDesc);
    }
    Ok(Alert { level, description })
}

fn decode_ccs(payload: &[u8]) -> Result<ChangeCipherSpec, TlsError> {
    if payload.len() != 1 {
        return Err(TlsError::WrongLenPayload);
    }
    if payload[0] != 1 {
        return Err(TlsError::CCSInvalidValue);
    }
    Ok(ChangeCipherSpec { value: payload[0] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_cleartext_alert() {
        let record = Record::decode(&[0x15, 0x03, 0x03, 0x00, 0x02, 0x01, 0x00]).unwrap();
        let message = Message::from_record(&record, DecodeOptions::default()).unwrap();
        assert_eq!(
            message,
            Message::Alert(Alert {
                level: AlertLevel::WARNING,
                description: AlertDescription(0),
            })
        );
    }

    #[test]
    fn ciphered_alert_is_wrong_len_payload() {
        let mut data = vec![0x15, 0x03, 0x03, 0x00, 0x1a];
        data.extend_from_slice(&[0u8; 26]);
        let record = Record::decode(&data).unwrap();
        assert_eq!(
            Message::from_record(&record, DecodeOptions::default()),
            Err(TlsError::WrongLenPayload)
        );
    }

    #[test]
    fn change_cipher_spec_ok_and_bad() {
        let ok = Record::decode(&[0x14, 0x03, 0x03, 0x00, 0x01, 0x01]).unwrap();
        assert_eq!(
            Message::from_record(&ok, DecodeOptions::default()).unwrap(),
            Message::ChangeCipherSpec(ChangeCipherSpec { value: 1 })
        );

        let bad = Record::decode(&[0x14, 0x03, 0x03, 0x00, 0x01, 0x03]).unwrap();
        assert_eq!(
            Message::from_record(&bad, DecodeOptions::default()),
            Err(TlsError::CCSInvalidValue)
        );
    }

    #[test]
    fn application_data_is_opaque() {
        let record = Record::decode(&[0x17, 0x03, 0x03, 0x00, 0x03, 0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(
            Message::from_record(&record, DecodeOptions::default()).unwrap(),
            Message::ApplicationData(vec![0xAA, 0xBB, 0xCC])
        );
    }
}
