//! Stream-oriented incremental hashing with a uniform digest interface.
//!
//! Arbitrary byte-producing sources feed a hash computation through one
//! write surface without the caller knowing which algorithm is in use.
//! A [`HashContext`] wraps the algorithm-specific state behind a
//! finalize-once contract, [`HashAlgorithm`] manufactures bound
//! contexts, and a finalized [`Digest`] renders as lowercase hex.
//!
//! ```
//! use hashstream::{HashAlgorithm, HashWriter};
//!
//! # fn main() -> hashstream::Result<()> {
//! let mut hasher = HashWriter::new(HashAlgorithm::Sha256);
//! hasher.push("The quick brown fox ")?.push("jumps over the lazy dog")?;
//! assert_eq!(
//!     hasher.hex_digest()?,
//!     "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
//! );
//! # Ok(())
//! # }
//! ```
//!
//! One-shot digests go through [`hex_digest`] (in-memory input) or
//! [`hex_digest_reader`] (drains any [`io::Read`] to EOF), and
//! [`streaming`] adapts asynchronous chunk streams.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod context;
pub mod digest;
pub mod error;
pub mod streaming;
pub mod writer;

pub use algorithm::HashAlgorithm;
pub use context::HashContext;
pub use error::{HashError, Result};
pub use self::digest::Digest;
pub use streaming::{StreamChunk, StreamDigest, StreamingHasher, collect_digest, stream_hash};
pub use writer::HashWriter;

use std::io;

use tracing::debug;

/// Read buffer size for draining byte sources.
const READ_CHUNK_SIZE: usize = 8192;

/// One-shot digest of an in-memory byte buffer or string.
///
/// Pure: the same input and algorithm always yield the same digest,
/// and the input is never mutated.
///
/// # Errors
///
/// Propagates [`HashError::EmptyDigest`] from a broken binding; never
/// fails for well-behaved algorithms.
pub fn digest(algorithm: HashAlgorithm, data: impl AsRef<[u8]>) -> Result<Digest> {
    let mut context = algorithm.hasher();
    context.write(data.as_ref())?;
    context.into_digest()
}

/// One-shot lowercase hex digest of an in-memory byte buffer or string.
///
/// ```
/// use hashstream::{HashAlgorithm, hex_digest};
///
/// let hex = hex_digest(HashAlgorithm::Md5, "").unwrap();
/// assert_eq!(hex, "d41d8cd98f00b204e9800998ecf8427e");
/// ```
///
/// # Errors
///
/// Same conditions as [`digest`].
pub fn hex_digest(algorithm: HashAlgorithm, data: impl AsRef<[u8]>) -> Result<String> {
    Ok(digest(algorithm, data)?.to_hex())
}

/// Drain `reader` to EOF and return the lowercase hex digest of
/// everything read.
///
/// Bytes are fed through the context in 8 KiB chunks, so the source
/// never needs to fit in memory.
///
/// # Errors
///
/// [`HashError::Io`] if reading fails; otherwise the same conditions
/// as [`digest`].
pub fn hex_digest_reader<R: io::Read>(algorithm: HashAlgorithm, reader: &mut R) -> Result<String> {
    let mut context = algorithm.hasher();
    let mut buf = [0u8; READ_CHUNK_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        context.write(&buf[..n])?;
        total_bytes += n as u64;
    }

    debug!(algorithm = %algorithm, total_bytes, "drained reader into hash context");
    context.hex_digest()
}
