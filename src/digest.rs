//! Finalized digest values and their encodings.

use std::fmt;

/// An immutable digest produced by finalizing a hash context.
///
/// The length is fixed by the algorithm that produced it. A digest is
/// cheap to clone and freely shareable read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    /// Wrap raw digest bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the digest, yielding its bytes.
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hexadecimal rendering: two digits per byte,
    /// most-significant nibble first, no separators or prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Standard base64 rendering.
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{Engine as _, engine::general_purpose};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// URL-safe base64 rendering, unpadded.
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.bytes)
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest holds no bytes. Never true for a digest
    /// produced by a correctly behaving algorithm binding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_msn_first() {
        let digest = Digest::new(vec![0xd4, 0x1d, 0x00, 0xff]);
        assert_eq!(digest.to_hex(), "d41d00ff");
        assert_eq!(digest.to_string(), digest.to_hex());
    }

    #[test]
    fn base64_renderings() {
        let digest = Digest::new(hex::decode("d41d8cd98f00b204e9800998ecf8427e").unwrap());
        assert_eq!(digest.to_base64(), "1B2M2Y8AsgTpgAmY7PhCfg==");
        assert_eq!(digest.to_base64url(), "1B2M2Y8AsgTpgAmY7PhCfg");
    }
}
