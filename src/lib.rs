//! A passive, read-only decoder for the TLS/SSL record layer and the
//! messages it carries, plus a JA3 client fingerprinter. No cryptography,
//! no record reassembly, no encoder path.

pub mod capture;
pub mod constants;
pub mod error;
pub mod fsm;
pub mod handshake;
pub mod ja3;
pub mod message;
pub mod options;
pub mod record_layer;

pub use error::{Result, TlsError};
pub use message::Message;
pub use options::DecodeOptions;
pub use record_layer::Record;
