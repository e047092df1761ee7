//! Finalize-once incremental hash contexts.

use std::mem;

use digest::Digest as _;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use tracing::trace;

use crate::{Digest, HashAlgorithm, HashError, Result};

/// Algorithm-tagged running state, one variant per binding.
enum HasherState {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl HasherState {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => Self::Md5(Md5::new()),
            HashAlgorithm::Sha1 => Self::Sha1(Sha1::new()),
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Sha384 => Self::Sha384(Sha384::new()),
            HashAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
        }
    }

    fn update(&mut self, bytes: &[u8]) {
        match self {
            Self::Md5(hasher) => hasher.update(bytes),
            Self::Sha1(hasher) => hasher.update(bytes),
            Self::Sha256(hasher) => hasher.update(bytes),
            Self::Sha384(hasher) => hasher.update(bytes),
            Self::Sha512(hasher) => hasher.update(bytes),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            Self::Md5(hasher) => hasher.finalize().to_vec(),
            Self::Sha1(hasher) => hasher.finalize().to_vec(),
            Self::Sha256(hasher) => hasher.finalize().to_vec(),
            Self::Sha384(hasher) => hasher.finalize().to_vec(),
            Self::Sha512(hasher) => hasher.finalize().to_vec(),
        }
    }
}

/// The two states a context moves through. `Open → Finalized` happens
/// exactly once, via [`HashContext::finalize`]; nothing leaves
/// `Finalized`.
enum State {
    Open(HasherState),
    Finalized(Digest),
}

/// An incremental hash computation with a finalize-once contract.
///
/// A context accepts writes while open, transitions to finalized
/// exactly once, and only then exposes its digest. Each context is
/// exclusively owned by whoever created it; there is no sharing and no
/// internal locking.
pub struct HashContext {
    algorithm: HashAlgorithm,
    state: State,
}

impl HashContext {
    /// Create a fresh open context bound to `algorithm`.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        trace!(algorithm = %algorithm, "hash context created");
        Self {
            algorithm,
            state: State::Open(HasherState::new(algorithm)),
        }
    }

    /// The algorithm this context was bound to at construction.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Whether `finalize` has run.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, State::Finalized(_))
    }

    /// Append bytes to the running state.
    ///
    /// A zero-length write is a no-op.
    ///
    /// # Errors
    ///
    /// [`HashError::WriteAfterFinalize`] if the context is finalized.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        match &mut self.state {
            State::Open(hasher) => {
                hasher.update(bytes);
                Ok(())
            }
            State::Finalized(_) => Err(HashError::WriteAfterFinalize),
        }
    }

    /// Compute the digest from the accumulated state and transition to
    /// finalized.
    ///
    /// # Errors
    ///
    /// [`HashError::DoubleFinalize`] on a second call, and
    /// [`HashError::EmptyDigest`] if the binding yields zero bytes — a
    /// broken binding, after which the context stays unusable.
    pub fn finalize(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, State::Finalized(Digest::new(Vec::new()))) {
            State::Finalized(digest) => {
                self.state = State::Finalized(digest);
                Err(HashError::DoubleFinalize)
            }
            State::Open(hasher) => {
                let digest = Digest::new(hasher.finalize());
                if digest.is_empty() {
                    return Err(HashError::EmptyDigest {
                        algorithm: self.algorithm,
                    });
                }
                trace!(
                    algorithm = %self.algorithm,
                    digest_size = digest.len(),
                    "hash context finalized"
                );
                self.state = State::Finalized(digest);
                Ok(())
            }
        }
    }

    /// Finalize if the context is still open; otherwise do nothing.
    ///
    /// Idempotent: repeat calls neither error nor change the digest.
    ///
    /// # Errors
    ///
    /// Propagates [`HashError::EmptyDigest`] from the first finalize.
    pub fn ensure_finalized(&mut self) -> Result<()> {
        if self.is_finalized() {
            Ok(())
        } else {
            self.finalize()
        }
    }

    /// The finalized digest.
    ///
    /// # Errors
    ///
    /// [`HashError::AccessBeforeFinalize`] while the context is open,
    /// [`HashError::EmptyDigest`] if finalization produced no bytes.
    pub fn digest(&self) -> Result<&Digest> {
        match &self.state {
            State::Open(_) => Err(HashError::AccessBeforeFinalize),
            State::Finalized(digest) if digest.is_empty() => Err(HashError::EmptyDigest {
                algorithm: self.algorithm,
            }),
            State::Finalized(digest) => Ok(digest),
        }
    }

    /// Raw bytes of the finalized digest.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::digest`].
    pub fn digest_bytes(&self) -> Result<&[u8]> {
        self.digest().map(Digest::as_bytes)
    }

    /// Length of the finalized digest in bytes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HashContext::digest`].
    pub fn digest_size(&self) -> Result<usize> {
        self.digest().map(Digest::len)
    }

    /// Finalize if needed and render the digest as lowercase hex.
    ///
    /// Never fails merely because the context was still open.
    ///
    /// # Errors
    ///
    /// Propagates [`HashError::EmptyDigest`] from finalization.
    pub fn hex_digest(&mut self) -> Result<String> {
        self.ensure_finalized()?;
        Ok(self.digest()?.to_hex())
    }

    /// Finalize if needed and consume the context, yielding its digest.
    ///
    /// # Errors
    ///
    /// Propagates the same conditions as [`HashContext::digest`].
    pub fn into_digest(mut self) -> Result<Digest> {
        self.ensure_finalized()?;
        match self.state {
            State::Open(_) => Err(HashError::AccessBeforeFinalize),
            State::Finalized(digest) if digest.is_empty() => Err(HashError::EmptyDigest {
                algorithm: self.algorithm,
            }),
            State::Finalized(digest) => Ok(digest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_context_rejects_digest_access() {
        let context = HashAlgorithm::Sha256.hasher();
        assert!(matches!(context.digest(), Err(HashError::AccessBeforeFinalize)));
        assert!(matches!(context.digest_bytes(), Err(HashError::AccessBeforeFinalize)));
        assert!(matches!(context.digest_size(), Err(HashError::AccessBeforeFinalize)));
    }

    #[test]
    fn finalized_context_rejects_writes() {
        let mut context = HashAlgorithm::Md5.hasher();
        context.write(b"abc").unwrap();
        context.finalize().unwrap();
        assert!(matches!(context.write(b"more"), Err(HashError::WriteAfterFinalize)));
    }

    #[test]
    fn second_finalize_is_an_error() {
        let mut context = HashAlgorithm::Sha1.hasher();
        context.finalize().unwrap();
        assert!(matches!(context.finalize(), Err(HashError::DoubleFinalize)));
    }

    #[test]
    fn ensure_finalized_is_idempotent() {
        let mut context = HashAlgorithm::Sha512.hasher();
        context.write(b"idempotent").unwrap();
        context.ensure_finalized().unwrap();
        let first = context.digest().unwrap().clone();
        context.ensure_finalized().unwrap();
        assert_eq!(context.digest().unwrap(), &first);
    }

    #[test]
    fn empty_write_is_a_noop() {
        let mut with_empty = HashAlgorithm::Sha256.hasher();
        with_empty.write(b"").unwrap();
        with_empty.write(b"payload").unwrap();
        with_empty.write(b"").unwrap();

        let mut without = HashAlgorithm::Sha256.hasher();
        without.write(b"payload").unwrap();

        assert_eq!(with_empty.hex_digest().unwrap(), without.hex_digest().unwrap());
    }

    #[test]
    fn digest_size_matches_the_algorithm() {
        for algorithm in HashAlgorithm::ALL {
            let mut context = algorithm.hasher();
            context.write(b"sized").unwrap();
            context.finalize().unwrap();
            assert_eq!(context.digest_size().unwrap(), algorithm.digest_size());
        }
    }

    #[test]
    fn into_digest_finalizes_open_contexts() {
        let mut context = HashAlgorithm::Sha256.hasher();
        context.write(b"abc").unwrap();
        let digest = context.into_digest().unwrap();
        assert_eq!(digest.len(), 32);
    }
}
