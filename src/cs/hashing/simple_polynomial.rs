//! # Simple Polynomial Hash
//!
//! An **unreduced** polynomial hash, kept for teaching. The first character gets the lowest
//! power:
//!
//! ```text
//!   H(w) = w[0] + w[1] * b + w[2] * b^2 + ... + w[n-1] * b^(n-1)
//! ```
//!
//! Rolling one character to the right subtracts `w[0]`, divides by `b` (every remaining term
//! is a multiple of `b`) and adds the incoming character times `b^(n-1)`.
//!
//! ## Numeric model
//!
//! Values are IEEE-754 binary64 (`f64`) with round-to-nearest-even. Every integer up to
//! [`SimplePolynomialHash::MAX_EXACT`] (`2^53 - 1`) is represented exactly, and inside that
//! range `roll` is guaranteed to agree with `hash`.
//!
//! **Past that range the value is silently rounded.** Nothing wraps, saturates, or errors; the
//! hash is simply no longer the true polynomial value, and a rolled hash may stop matching a
//! freshly computed one. With the default base 17 this happens after roughly a dozen
//! characters. Use [`SimplePolynomialHash::is_exact`] to check, or use
//! [`PolynomialHash`](super::PolynomialHash) for anything beyond demonstrations.
//!
//! Powers are built by repeated multiplication so the rounding sequence, and therefore the
//! output, is the same on every platform.

use log::debug;
use num_traits::ToPrimitive;

use super::code_points::code_point;
use super::{positive_integer, RollingHash};
use crate::error::{Error, Result};

/// Default base of the polynomial.
pub const DEFAULT_BASE: u64 = 17;

/// Builder for [`SimplePolynomialHash`].
#[derive(Debug, Clone)]
pub struct SimplePolynomialHashBuilder {
    base: u64,
}

impl Default for SimplePolynomialHashBuilder {
    fn default() -> Self {
        Self { base: DEFAULT_BASE }
    }
}

impl SimplePolynomialHashBuilder {
    /// Creates a new builder with the default base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Builds the hasher.
    ///
    /// # Errors
    /// `InvalidArgument` if the base is zero.
    pub fn build(self) -> Result<SimplePolynomialHash> {
        if self.base == 0 {
            return Err(Error::invalid_argument("base must be a positive integer"));
        }
        debug!("simple polynomial hash configured: base={}", self.base);
        Ok(SimplePolynomialHash { base: self.base })
    }
}

/// Unreduced polynomial hasher over `f64`. See the module docs for its precision limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimplePolynomialHash {
    base: u64,
}

impl Default for SimplePolynomialHash {
    fn default() -> Self {
        Self { base: DEFAULT_BASE }
    }
}

impl SimplePolynomialHash {
    /// Largest integer below which every `f64` value is exact (`2^53 - 1`).
    pub const MAX_EXACT: f64 = 9_007_199_254_740_991.0;

    /// Creates a hasher from any primitive number.
    ///
    /// # Errors
    /// `InvalidArgument` unless `base` is a whole number of at least 1.
    pub fn new<B: ToPrimitive>(base: B) -> Result<Self> {
        SimplePolynomialHashBuilder::new()
            .with_base(positive_integer(base, "base")?)
            .build()
    }

    /// Returns the base.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Whether `value` is still an exact integer, i.e. hashes built from it can be trusted.
    pub fn is_exact(value: f64) -> bool {
        value.is_finite() && value.abs() <= Self::MAX_EXACT && value.fract() == 0.0
    }

    #[inline]
    fn radix(&self) -> f64 {
        self.base as f64
    }
}

impl RollingHash for SimplePolynomialHash {
    type Output = f64;
    type Factor = f64;

    fn hash(&self, word: &str) -> f64 {
        let radix = self.radix();
        let mut hash = 0.0;
        let mut power = 1.0;
        for c in word.chars() {
            hash += f64::from(code_point(c)) * power;
            power *= radix;
        }
        if !Self::is_exact(hash) {
            debug!("simple polynomial hash left the exact f64 range: {hash}");
        }
        hash
    }

    /// `base^(window_len - 1)` as an `f64`.
    fn shift_factor(&self, window_len: usize) -> f64 {
        let radix = self.radix();
        (1..window_len).fold(1.0, |power, _| power * radix)
    }

    fn roll_char(&self, prev_hash: f64, top_power: f64, outgoing: char, incoming: char) -> f64 {
        let mut hash = prev_hash - f64::from(code_point(outgoing));
        hash /= self.radix();
        hash + f64::from(code_point(incoming)) * top_power
    }
}
