//! Code-point decoding shared by the hashers.
//!
//! Rust `char`s are Unicode scalar values, so iterating `str::chars` already yields one item
//! per logical symbol. A character outside the Basic Multilingual Plane (an emoji, say) is a
//! single term, never a surrogate pair.

use crate::error::{Error, Result};

/// Numeric value of a character as used in the polynomial.
#[inline]
pub fn code_point(c: char) -> u32 {
    u32::from(c)
}

/// Number of code points in `word`.
#[inline]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// The characters that change when a window moves one code point to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    /// Window length in code points.
    pub len: usize,
    /// First character of the previous window.
    pub outgoing: char,
    /// Last character of the new window.
    pub incoming: char,
}

impl Shift {
    /// Validates a pair of windows and extracts the characters that leave and enter.
    ///
    /// Only lengths are checked; that `new_word` really is `prev_word` shifted is the caller's
    /// contract.
    pub fn between(prev_word: &str, new_word: &str) -> Result<Self> {
        let len = char_len(prev_word);
        let new_len = char_len(new_word);
        if len != new_len {
            return Err(Error::invalid_argument(format!(
                "windows must have equal length, got {len} and {new_len} code points"
            )));
        }

        match (prev_word.chars().next(), new_word.chars().next_back()) {
            (Some(outgoing), Some(incoming)) => Ok(Shift {
                len,
                outgoing,
                incoming,
            }),
            _ => Err(Error::invalid_argument("cannot roll an empty window")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_is_one_code_point() {
        assert_eq!(char_len("😀"), 1);
        assert_eq!("😀".len(), 4);
        assert_eq!(code_point('😀'), 0x1F600);
        assert_eq!(code_point('a'), 97);
    }

    #[test]
    fn test_shift_between() {
        let shift = Shift::between("abc", "bcd").unwrap();
        assert_eq!(
            shift,
            Shift {
                len: 3,
                outgoing: 'a',
                incoming: 'd'
            }
        );
    }

    #[test]
    fn test_shift_counts_code_points_not_bytes() {
        // 5 bytes vs 2 bytes, but both are two symbols
        let shift = Shift::between("😀a", "ab").unwrap();
        assert_eq!(shift.len, 2);
        assert_eq!(shift.outgoing, '😀');
        assert_eq!(shift.incoming, 'b');

        assert!(Shift::between("ab", "a😀").is_ok());
        assert!(Shift::between("a😀", "😀").is_err());
    }

    #[test]
    fn test_shift_rejects_mismatch_and_empty() {
        assert!(matches!(
            Shift::between("ab", "abc"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(Shift::between("", ""), Err(Error::InvalidArgument(_))));
    }
}
