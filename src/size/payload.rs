//! Payload generation
//!
//! Payloads can be far larger than memory (`"8000000000gb"` is grammar-valid),
//! so the server streams them in [`CHUNK_SIZE`] pieces and yields to the
//! runtime between pieces. [`SizeRange::payload`] buffers the whole payload
//! and is meant for small ranges.

use super::types::SizeRange;
use bytes::{Bytes, BytesMut};
use futures::stream::{self, Stream};
use rand::Rng;
use std::convert::Infallible;

/// Symbols a payload is drawn from.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest piece a streamed payload is generated in.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Random bytes below this map uniformly onto the alphabet (4 * 52).
const ACCEPT_BELOW: u8 = 208;

/// Fill `buf` with letters drawn uniformly from [`ALPHABET`].
pub fn fill_letters<R: Rng + ?Sized>(rng: &mut R, buf: &mut [u8]) {
    let mut scratch = [0u8; 256];
    let mut filled = 0;

    while filled < buf.len() {
        rng.fill_bytes(&mut scratch);
        for b in scratch.iter().copied().filter(|b| *b < ACCEPT_BELOW) {
            if filled == buf.len() {
                break;
            }
            buf[filled] = ALPHABET[usize::from(b % 52)];
            filled += 1;
        }
    }
}

fn letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Bytes {
    let mut buf = BytesMut::zeroed(len);
    fill_letters(rng, &mut buf);
    buf.freeze()
}

/// Stream `len` letters in pieces of at most [`CHUNK_SIZE`].
///
/// Each piece is generated when the stream is polled and the task yields
/// after every piece, so a large payload never holds a worker thread for
/// longer than one piece.
pub fn letter_stream<R>(len: u64, rng: R) -> impl Stream<Item = Result<Bytes, Infallible>> + Send
where
    R: Rng + Send + 'static,
{
    stream::unfold((rng, len), |(mut rng, remaining)| async move {
        if remaining == 0 {
            return None;
        }

        let piece = usize::try_from(remaining).map_or(CHUNK_SIZE, |r| r.min(CHUNK_SIZE));
        let chunk = letters(&mut rng, piece);
        tokio::task::yield_now().await;

        Some((Ok(chunk), (rng, remaining - piece as u64)))
    })
}

impl SizeRange {
    /// Pick a payload length.
    ///
    /// Exactly `lower` without an upper bound, otherwise uniform over
    /// `[lower, upper)`. Equal bounds yield `lower`.
    pub fn sample_len<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let lower = u64::try_from(self.lower).unwrap_or(0);
        if self.upper <= self.lower {
            return lower;
        }

        let span = self.upper.abs_diff(self.lower);
        lower + rng.gen_range(0..span)
    }

    /// Generate a whole payload of letters whose length follows
    /// [`SizeRange::sample_len`].
    pub fn payload<R: Rng + ?Sized>(&self, rng: &mut R) -> Bytes {
        let len = usize::try_from(self.sample_len(rng)).unwrap_or(usize::MAX);
        letters(rng, len)
    }

    /// Sample a length and stream a payload of that many letters.
    ///
    /// Returns the sampled length alongside the stream so callers can
    /// announce it before any data is produced.
    pub fn payload_stream<R>(
        &self,
        mut rng: R,
    ) -> (u64, impl Stream<Item = Result<Bytes, Infallible>> + Send)
    where
        R: Rng + Send + 'static,
    {
        let len = self.sample_len(&mut rng);
        (len, letter_stream(len, rng))
    }
}
