//! Decodes a single hex-encoded TLS record, passed as an argument or read
//! from stdin, and prints the decoded structure. All decoding logic lives
//! in the library; this binary is only the I/O boundary.
use std::env;
use std::io::{self, Read};

use tls_core::handshake::HandshakeBody;
use tls_core::ja3;
use tls_core::message::Message;
use tls_core::options::DecodeOptions;
use tls_core::record_layer::Record;

fn main() {
    let hexstr = match env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("failed to read hex input from stdin");
            buf
        }
    };

    let bytes = hex::decode(hexstr.trim()).expect("input is not valid hex");
    let record = Record::decode(&bytes).expect("failed to decode tls record");
    println!("{:?}", record);

    let message = Message::from_record(&record, DecodeOptions::default())
        .expect("failed to decode tls message");
    println!("{:?}", message);

    if let Message::Handshake(handshakes) = &message {
        for hs in handshakes {
            if let HandshakeBody::ClientHello(hello) = &hs.body {
                let (ja3_str, digest) = ja3::ja3(hello);
                println!("ja3: {}", ja3_str);
                println!("ja3 digest: {}", digest);
            }
        }
    }
}
