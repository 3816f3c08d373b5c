//! Rolling polynomial hashing.
//!
//! This module provides two polynomial hashers behind one contract, [`RollingHash`]:
//! - [`PolynomialHash`]: Horner evaluation reduced by a modulus, first character weighted by
//!   `base^(n-1)`. Output always lies in `[0, modulus)`.
//! - [`SimplePolynomialHash`]: unreduced sum in an `f64`, first character weighted by `base^0`.
//!
//! The two orientations are deliberately different, so the roll step differs too. Do not mix
//! values produced by one policy with the other.
//!
//! # Examples
//!
//! ```rust
//! use polyhash::hashing::{PolynomialHash, RollingHash, SimplePolynomialHash};
//!
//! fn fingerprints<H: RollingHash>(hasher: &H, text: &str) -> Vec<H::Output> {
//!     hasher.windows(text, 3).unwrap().map(|(_, h)| h).collect()
//! }
//!
//! let text = "abracadabra";
//! assert_eq!(fingerprints(&PolynomialHash::default(), text).len(), 9);
//! assert_eq!(fingerprints(&SimplePolynomialHash::default(), text).len(), 9);
//! ```

use std::fmt::Debug;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

pub mod code_points;
pub mod polynomial_rolling;
pub mod simple_polynomial;
pub mod window;

pub use code_points::Shift;
pub use polynomial_rolling::{PolynomialHash, PolynomialHashBuilder};
pub use simple_polynomial::{SimplePolynomialHash, SimplePolynomialHashBuilder};
pub use window::RollingWindows;

/// Common contract of the polynomial hashers.
///
/// `hash` computes a fingerprint from scratch. `roll` derives the fingerprint of a window
/// shifted one code point to the right from the fingerprint of the previous window.
/// Implementors supply the O(1) step (`roll_char`) and the per-length factor it needs
/// (`shift_factor`); callers scanning long inputs can compute the factor once and reuse it.
pub trait RollingHash {
    /// Numeric type of a fingerprint.
    type Output: Copy + PartialEq + Debug;

    /// Precomputed value that depends only on the window length.
    type Factor: Copy + Debug;

    /// Hashes every code point of `word`.
    fn hash(&self, word: &str) -> Self::Output;

    /// Computes the factor used by [`RollingHash::roll_char`] for windows of `window_len`
    /// code points.
    fn shift_factor(&self, window_len: usize) -> Self::Factor;

    /// Drops `outgoing` from the front of the window hashed by `prev_hash` and appends
    /// `incoming` at the back.
    fn roll_char(
        &self,
        prev_hash: Self::Output,
        factor: Self::Factor,
        outgoing: char,
        incoming: char,
    ) -> Self::Output;

    /// Recomputes the hash for `new_word`, which must be `prev_word` shifted one code point to
    /// the right.
    ///
    /// # Errors
    /// `InvalidArgument` if the two words differ in code-point length or are empty.
    fn roll(&self, prev_hash: Self::Output, prev_word: &str, new_word: &str) -> Result<Self::Output> {
        let shift = Shift::between(prev_word, new_word)?;
        let factor = self.shift_factor(shift.len);
        Ok(self.roll_char(prev_hash, factor, shift.outgoing, shift.incoming))
    }

    /// Iterates over the hash of every window of `window_len` code points in `text`.
    ///
    /// # Errors
    /// `InvalidArgument` if `window_len` is zero.
    fn windows<'a>(&'a self, text: &'a str, window_len: usize) -> Result<RollingWindows<'a, Self>>
    where
        Self: Sized,
    {
        RollingWindows::new(self, text, window_len)
    }
}

/// Accepts any primitive number that is a whole value of at least 1.
pub(crate) fn positive_integer<T: ToPrimitive>(value: T, name: &str) -> Result<u64> {
    let not_positive = || Error::invalid_argument(format!("{name} must be a positive integer"));
    let approx = value.to_f64().ok_or_else(not_positive)?;
    if !approx.is_finite() || approx.fract() != 0.0 || approx < 1.0 {
        return Err(not_positive());
    }
    value
        .to_u64()
        .ok_or_else(|| Error::invalid_argument(format!("{name} does not fit in 64 bits")))
}
