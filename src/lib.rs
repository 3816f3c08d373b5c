//! Rolling polynomial hashes over Unicode text.
//!
//! Two numeric policies share the [`RollingHash`] contract:
//!
//! - [`PolynomialHash`] reduces every step by a modulus and is the one to use in practice.
//! - [`SimplePolynomialHash`] keeps the raw polynomial value in an `f64` and is meant for
//!   teaching. It stops being exact once values pass `2^53 - 1`.
//!
//! ```rust
//! use polyhash::{PolynomialHash, RollingHash};
//!
//! let hasher = PolynomialHash::default();
//! let h = hasher.hash("ab");
//! assert_eq!(hasher.roll(h, "ab", "bc").unwrap(), hasher.hash("bc"));
//! ```

pub mod cs;
pub mod error;

pub use cs::hashing;
pub use cs::hashing::{
    PolynomialHash, PolynomialHashBuilder, RollingHash, RollingWindows, SimplePolynomialHash,
    SimplePolynomialHashBuilder,
};
pub use error::{Error, Result};
