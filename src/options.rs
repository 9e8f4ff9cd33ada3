//! Parser options threaded explicitly into the hello decoders, rather than
//! a module-level mutable flag, to gate extension decoding.

/// Controls whether hello decoders populate `ExtensionsInfo` from the raw
/// extensions vector. Disabling this still produces the raw `Extension`
/// list; it only skips the per-extension typed decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub decode_extensions: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            decode_extensions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_decodes_extensions() {
        assert!(DecodeOptions::default().decode_extensions);
    }
}
