//! # Polynomial Rolling Hash
//!
//! This module implements a **modular polynomial rolling hash** over the Unicode code points of
//! a string, suitable for **production** use in substring search (e.g. Rabin-Karp), string
//! fingerprinting, or any scan that needs the hash of every fixed-length window of a text.
//!
//! For a word `w` of `n` code points the hash is evaluated with Horner's rule, left to right:
//!
//! ```text
//!   H(w) = ( ... ((w[0] * b + w[1]) * b + w[2]) ... * b + w[n-1] ) mod m
//!        = Σ w[i] * b^(n-1-i) mod m
//! ```
//!
//! so the first character carries the highest power. Moving the window one character to the
//! right removes `w[0] * b^(n-1)`, multiplies by `b` and appends the new character.
//!
//! ## Key Features
//! - **Configurable base** and **modulus**, defaulting to 37 and 101.
//! - Any `u64` modulus: intermediate products are computed in 128 bits, so nothing overflows
//!   and every output lies in `[0, modulus)`.
//! - **Builder pattern** for parameter specification.
//! - The window multiplier `b^(n-1) mod m` is exposed through [`RollingHash::shift_factor`]
//!   so a scan can compute it once and roll each window in O(1).
//!
//! **Note**: This is **not** cryptographically secure. Equal hashes do not imply equal
//! windows; confirming a match is up to the caller.

use log::debug;
use num_traits::ToPrimitive;

use super::code_points::code_point;
use super::{positive_integer, RollingHash};
use crate::error::{Error, Result};

/// Default base (multiplier) of the polynomial.
pub const DEFAULT_BASE: u64 = 37;
/// Default modulus, a small prime.
pub const DEFAULT_MODULUS: u64 = 101;

/// A builder for [`PolynomialHash`], allowing you to set base and modulus.
#[derive(Debug, Clone)]
pub struct PolynomialHashBuilder {
    base: u64,
    modulus: u64,
}

impl Default for PolynomialHashBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolynomialHashBuilder {
    /// Creates a new builder with default base/modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the multiplier used in the polynomial).
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the modulus. Every hash falls in `[0, modulus)`.
    /// A prime larger than the alphabet keeps collisions down.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Builds the hasher.
    ///
    /// # Errors
    /// `InvalidArgument` if the base or the modulus is zero.
    pub fn build(self) -> Result<PolynomialHash> {
        if self.base == 0 {
            return Err(Error::invalid_argument("base must be a positive integer"));
        }
        if self.modulus == 0 {
            return Err(Error::invalid_argument("modulus must be a positive integer"));
        }
        debug!(
            "polynomial hash configured: base={}, modulus={}",
            self.base, self.modulus
        );
        Ok(PolynomialHash {
            base: self.base,
            modulus: self.modulus,
        })
    }
}

/// Modular polynomial hasher. Immutable once built, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolynomialHash {
    base: u64,
    modulus: u64,
}

impl Default for PolynomialHash {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolynomialHash {
    /// Creates a hasher from any primitive numbers.
    ///
    /// # Errors
    /// `InvalidArgument` unless both values are whole numbers of at least 1 that fit in a `u64`.
    ///
    /// ```rust
    /// use polyhash::{Error, PolynomialHash};
    ///
    /// assert!(PolynomialHash::new(37, 101).is_ok());
    /// assert!(matches!(PolynomialHash::new(2.5, 101), Err(Error::InvalidArgument(_))));
    /// assert!(matches!(PolynomialHash::new(-5, 101), Err(Error::InvalidArgument(_))));
    /// ```
    pub fn new<B: ToPrimitive, M: ToPrimitive>(base: B, modulus: M) -> Result<Self> {
        PolynomialHashBuilder::new()
            .with_base(positive_integer(base, "base")?)
            .with_modulus(positive_integer(modulus, "modulus")?)
            .build()
    }

    /// Returns the base.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// One Horner step: `(hash * base + c) mod modulus`.
    #[inline]
    fn push(&self, hash: u64, c: char) -> u64 {
        let shifted = mul_mod(hash, self.base, self.modulus);
        add_mod(shifted, u64::from(code_point(c)), self.modulus)
    }
}

impl RollingHash for PolynomialHash {
    type Output = u64;
    type Factor = u64;

    /// Time complexity: O(n) in code points.
    fn hash(&self, word: &str) -> u64 {
        word.chars().fold(0, |hash, c| self.push(hash, c))
    }

    /// `base^(window_len - 1) mod modulus`.
    fn shift_factor(&self, window_len: usize) -> u64 {
        let exponent = window_len.saturating_sub(1) as u64;
        pow_mod(self.base, exponent, self.modulus)
    }

    fn roll_char(&self, prev_hash: u64, multiplier: u64, outgoing: char, incoming: char) -> u64 {
        let prev_hash = prev_hash % self.modulus;
        // remove the leading character's contribution
        let leading = mul_mod(u64::from(code_point(outgoing)), multiplier, self.modulus);
        let hash = sub_mod(prev_hash, leading, self.modulus);
        self.push(hash, incoming)
    }
}

// internal ops

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// Both inputs must already be reduced.
#[inline]
fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    // 128-bit product cannot overflow for 64-bit operands
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Square-and-multiply. Returns `1 % m` for a zero exponent.
fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut square = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, square, m);
        }
        square = mul_mod(square, square, m);
        exp >>= 1;
    }
    result
}
