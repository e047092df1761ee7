//! Incremental hashing over asynchronous byte streams.
//!
//! A [`StreamingHasher`] adapts any `Stream` of byte chunks into a
//! hash computation over a [`HashContext`], emitting one progress item
//! per chunk and the digest once the input ends. Suspension happens
//! only while awaiting the caller's input; the context itself is
//! driven synchronously.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use pin_project_lite::pin_project;

use crate::{Digest, HashAlgorithm, HashContext, HashError, Result};

pin_project! {
    /// Drives a [`HashContext`] from a stream of byte chunks.
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        context: HashContext,
        finished: bool,
        total_bytes: u64,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Wrap `input`, binding a fresh context for `algorithm`.
    pub fn new(input: S, algorithm: HashAlgorithm) -> Self {
        Self {
            input,
            context: HashContext::new(algorithm),
            finished: false,
            total_bytes: 0,
        }
    }

    /// The algorithm of the owned context.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.context.algorithm()
    }

    /// Bytes written into the context so far.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// One progress item from a streaming hash computation.
#[derive(Debug, Clone)]
pub struct StreamChunk {
    /// Bytes written by this item's chunk; zero on the final item.
    pub bytes_processed: u64,
    /// Bytes written in total so far.
    pub total_bytes: u64,
    /// The digest, present only on the final item.
    pub digest: Option<Digest>,
}

impl StreamChunk {
    /// Whether this is the final item carrying the digest.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.digest.is_some()
    }
}

/// Final result of a streaming hash computation.
#[derive(Debug, Clone)]
pub struct StreamDigest {
    /// The finalized digest.
    pub digest: Digest,
    /// Bytes written in total.
    pub total_bytes: u64,
    /// Algorithm the digest was computed with.
    pub algorithm: HashAlgorithm,
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        match this.input.as_mut().poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                let chunk_size = chunk.len() as u64;
                *this.total_bytes += chunk_size;

                if let Err(e) = this.context.write(&chunk) {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e)));
                }

                Poll::Ready(Some(Ok(StreamChunk {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                *this.finished = true;

                let digest = this
                    .context
                    .ensure_finalized()
                    .and_then(|()| this.context.digest().map(|d| d.clone()));

                match digest {
                    Ok(digest) => Poll::Ready(Some(Ok(StreamChunk {
                        bytes_processed: 0,
                        total_bytes: *this.total_bytes,
                        digest: Some(digest),
                    }))),
                    Err(e) => Poll::Ready(Some(Err(e))),
                }
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Adapt a stream of byte chunks into a hash computation.
pub fn stream_hash<S>(input: S, algorithm: HashAlgorithm) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher::new(input, algorithm)
}

/// Drive a [`StreamingHasher`] to completion and collect the digest.
///
/// # Errors
///
/// Propagates any error item from the hasher; fails with
/// [`HashError::AccessBeforeFinalize`] if the stream ends without a
/// final item, which a well-formed hasher never does.
pub async fn collect_digest<S>(mut hasher: StreamingHasher<S>) -> Result<StreamDigest>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    let algorithm = hasher.algorithm();
    let mut total_bytes = 0;
    let mut digest = None;

    while let Some(item) = hasher.next().await {
        let chunk = item?;
        total_bytes = chunk.total_bytes;
        if let Some(d) = chunk.digest {
            digest = Some(d);
            break;
        }
    }

    let digest = digest.ok_or(HashError::AccessBeforeFinalize)?;

    Ok(StreamDigest {
        digest,
        total_bytes,
        algorithm,
    })
}
