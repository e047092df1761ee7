//! Error handling for hash computations.

use std::io;

use thiserror::Error;

use crate::HashAlgorithm;

/// Errors surfaced by hash contexts, the algorithm registry, and the
/// stream adapters.
///
/// All of these are contract violations reported synchronously to the
/// immediate caller; none are retried and there is no degraded mode.
#[derive(Debug, Error)]
pub enum HashError {
    /// A write was attempted on a context that has already been finalized.
    #[error("write attempted on a finalized hash context")]
    WriteAfterFinalize,

    /// `finalize` was called on a context that was already finalized.
    #[error("hash context may only be finalized once")]
    DoubleFinalize,

    /// A digest accessor was called before the context was finalized.
    #[error("digest accessed before the hash context was finalized")]
    AccessBeforeFinalize,

    /// An algorithm name outside the supported set was looked up.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    /// An algorithm binding reported a zero-length digest after finalize.
    ///
    /// This indicates a broken binding, never a usable runtime condition.
    #[error("{algorithm} binding produced an empty digest")]
    EmptyDigest {
        /// Algorithm whose binding misbehaved.
        algorithm: HashAlgorithm,
    },

    /// Reading from a byte source failed while draining it into a context.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Result type for hashing operations.
pub type Result<T> = std::result::Result<T, HashError>;
