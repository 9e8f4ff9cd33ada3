//! Certificate body decoding: an outer 24-bit length, then a sequence of
//! 3-byte-length-prefixed DER certificates. Each certificate is handed to
//! `x509-parser` to confirm it is structurally valid X.509; this decoder
//! does not otherwise inspect certificate contents.

use crate::error::TlsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateData {
    pub certificates_len: u32,
    pub certificates: Vec<Vec<u8>>,
}

impl CertificateData {
    pub fn decode(data: &[u8]) -> Result<Self, TlsError> {
        if data.len() < 3 {
            return Err(TlsError::CertsBadLength);
        }
        let certificates_len = u32::from_be_bytes([0, data[0], data[1], data[2]]);
        let body = &data[3..];
        if body.len() != certificates_len as usize {
            return Err(TlsError::CertsMissmatch);
        }

        let mut certificates = Vec::new();
        let mut offset = 0;
        while offset < body.len() {
            let header = body
                .get(offset..offset + 3)
                .ok_or(TlsError::CertsInvalidPayload)?;
            let cert_len = u32::from_be_bytes([0, header[0], header[1], header[2]]) as usize;
            offset += 3;
            let der = body
                .get(offset..offset + cert_len)
                .ok_or(TlsError::CertsInvalidPayload)?;
            x509_parser::parse_x509_certificate(der)
                .map_err(|e| TlsError::Certificate(e.to_string()))?;
            certificates.push(der.to_vec());
            offset += cert_len;
        }

        Ok(Self {
            certificates_len,
            certificates,
        })
    }

    /// Parses every stored DER certificate into its structured X.509
    /// representation. Parsing was already validated once during `decode`;
    /// this exists for callers that need the structured fields (e.g.
    /// `Subject`) without keeping the borrowed value alive across `decode`.
    pub fn parsed(&self) -> Result<Vec<x509_parser::certificate::X509Certificate<'_>>, TlsError> {
        self.certificates
            .iter()
            .map(|der| {
                x509_parser::parse_x509_certificate(der)
                    .map(|(_, cert)| cert)
                    .map_err(|e| TlsError::Certificate(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_header() {
        assert_eq!(
            CertificateData::decode(&[0x00, 0x01]),
            Err(TlsError::CertsBadLength)
        );
    }

    #[test]
    fn rejects_outer_length_mismatch() {
        let data = [0x00, 0x00, 0x05, 0x01, 0x02];
        assert_eq!(
            CertificateData::decode(&data),
            Err(TlsError::CertsMissmatch)
        );
    }

    #[test]
    fn rejects_cert_len_exceeding_remainder() {
        let mut data = vec![];
        let body = [0x00, 0x00, 0x10, 0xAA, 0xBB]; // declares 16 bytes, has 2
        data.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
        data.extend_from_slice(&body);
        assert_eq!(
            CertificateData::decode(&data),
            Err(TlsError::CertsInvalidPayload)
        );
    }
}
