//! The byte-sink adapter over a hash context.

use std::fmt;
use std::io;

use crate::{Digest, HashAlgorithm, HashContext, Result};

/// Single-owner byte sink feeding a [`HashContext`].
///
/// Heterogeneous inputs — raw byte slices, text, and anything
/// implementing [`fmt::Display`] — go through one insertion surface,
/// and every insertion preserves concatenation semantics: pushing `A`
/// then `B` digests identically to pushing `A‖B` at once.
///
/// The writer also implements [`io::Write`], so any byte producer can
/// be drained into it with [`io::copy`].
///
/// ```
/// use hashstream::{HashAlgorithm, HashWriter};
///
/// # fn main() -> hashstream::Result<()> {
/// let mut hasher = HashWriter::new(HashAlgorithm::Sha256);
/// hasher.push("The quick brown fox ")?.push("jumps over the lazy dog")?;
/// assert_eq!(
///     hasher.hex_digest()?,
///     "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
/// );
/// # Ok(())
/// # }
/// ```
///
/// Once [`HashWriter::hex_digest`] has been called the underlying
/// context is finalized; later insertions fail with
/// [`crate::HashError::WriteAfterFinalize`]. Treat the writer as
/// single-shot once a digest has been read.
pub struct HashWriter {
    context: HashContext,
}

impl HashWriter {
    /// Create a writer owning a fresh context for `algorithm`.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            context: HashContext::new(algorithm),
        }
    }

    /// The algorithm of the owned context.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.context.algorithm()
    }

    /// Append a byte sequence; returns `self` for chaining.
    ///
    /// # Errors
    ///
    /// [`crate::HashError::WriteAfterFinalize`] once finalized.
    pub fn push(&mut self, data: impl AsRef<[u8]>) -> Result<&mut Self> {
        self.context.write(data.as_ref())?;
        Ok(self)
    }

    /// Format a value to text and append the resulting bytes.
    ///
    /// This is the thin helper for numeric and other displayable
    /// values; the bytes hashed are exactly the formatted text.
    ///
    /// # Errors
    ///
    /// [`crate::HashError::WriteAfterFinalize`] once finalized.
    pub fn push_display(&mut self, value: impl fmt::Display) -> Result<&mut Self> {
        self.push(value.to_string())
    }

    /// Whether the owned context has been finalized.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.context.is_finalized()
    }

    /// Finalize the owned context.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::finalize`].
    pub fn finalize(&mut self) -> Result<()> {
        self.context.finalize()
    }

    /// Finalize the owned context if it is still open.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::ensure_finalized`].
    pub fn ensure_finalized(&mut self) -> Result<()> {
        self.context.ensure_finalized()
    }

    /// The finalized digest.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::digest`].
    pub fn digest(&self) -> Result<&Digest> {
        self.context.digest()
    }

    /// Raw bytes of the finalized digest.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::digest_bytes`].
    pub fn digest_bytes(&self) -> Result<&[u8]> {
        self.context.digest_bytes()
    }

    /// Finalize if needed and render the digest as lowercase hex.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::hex_digest`].
    pub fn hex_digest(&mut self) -> Result<String> {
        self.context.hex_digest()
    }

    /// Finalize if needed and consume the writer, yielding the digest.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::into_digest`].
    pub fn into_digest(self) -> Result<Digest> {
        self.context.into_digest()
    }
}

impl From<HashContext> for HashWriter {
    fn from(context: HashContext) -> Self {
        Self { context }
    }
}

impl io::Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.context
            .write(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
