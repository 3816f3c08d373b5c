//! Sliding-window scan built on [`RollingHash`].
//!
//! The first window is hashed directly; every following window is obtained with one
//! [`RollingHash::roll_char`] call using a factor computed once up front. Each step depends
//! on the previous hash, so the scan is sequential.

use std::str::Chars;

use log::trace;

use super::RollingHash;
use crate::error::{Error, Result};

/// Iterator over `(offset, hash)` for every window of a text.
///
/// `offset` is the index, in code points, of the window's first character.
pub struct RollingWindows<'a, H: RollingHash> {
    hasher: &'a H,
    factor: H::Factor,
    /// Text of the first window, until it has been yielded.
    first: Option<&'a str>,
    /// Trails the window: yields the character leaving it.
    outgoing: Chars<'a>,
    /// Leads the window: yields the character entering it.
    incoming: Chars<'a>,
    current: Option<H::Output>,
    offset: usize,
}

impl<'a, H: RollingHash> RollingWindows<'a, H> {
    /// Prepares a scan of `text` with windows of `window_len` code points.
    ///
    /// # Errors
    /// `InvalidArgument` if `window_len` is zero.
    pub fn new(hasher: &'a H, text: &'a str, window_len: usize) -> Result<Self> {
        if window_len == 0 {
            return Err(Error::invalid_argument("window length must be at least 1"));
        }

        let mut incoming = text.chars();
        let mut first_end = 0;
        let mut taken = 0;
        for c in incoming.by_ref().take(window_len) {
            first_end += c.len_utf8();
            taken += 1;
        }
        // shorter than one window: nothing to yield
        let first = (taken == window_len).then(|| &text[..first_end]);

        Ok(RollingWindows {
            hasher,
            factor: hasher.shift_factor(window_len),
            first,
            outgoing: text.chars(),
            incoming,
            current: None,
            offset: 0,
        })
    }
}

impl<H: RollingHash> Iterator for RollingWindows<'_, H> {
    type Item = (usize, H::Output);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(window) = self.first.take() {
            let hash = self.hasher.hash(window);
            self.current = Some(hash);
            return Some((0, hash));
        }

        let prev = self.current?;
        let incoming = self.incoming.next()?;
        let outgoing = self.outgoing.next()?;
        let hash = self.hasher.roll_char(prev, self.factor, outgoing, incoming);
        self.offset += 1;
        trace!("rolled window {}: -{outgoing:?} +{incoming:?}", self.offset);
        self.current = Some(hash);
        Some((self.offset, hash))
    }
}
