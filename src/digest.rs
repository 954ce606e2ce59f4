//! Seed canonicalization: every input becomes a hex digest.
//!
//! The digest is the sole entropy source for generation. A seed that
//! already looks like a hex digest (11+ hex characters) passes through
//! unchanged, so a caller holding a precomputed hash (a git commit,
//! say, or a key fingerprint) gets the same icon as a renderer that
//! hashed the original value itself. Everything else is SHA-1 hashed.
//!
//! There is no error path: every input, including the empty string,
//! canonicalizes deterministically.

use sha1::{Digest as _, Sha1};
use std::fmt;

/// Minimum length for a seed to count as a pre-hashed digest. Shape and
/// color digits are read from fixed offsets up to 10, so anything shorter
/// must be hashed to a full 40-character digest.
const MIN_DIGEST_LEN: usize = 11;

/// A canonical hex digest of at least [`MIN_DIGEST_LEN`] characters.
///
/// Construction guarantees every character is an ASCII hex digit; digits
/// are parsed case-insensitively, and a passthrough seed keeps its
/// original case (the text is part of no output, only the parsed values).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    /// Canonicalize a seed: passthrough if it already looks like a
    /// digest, otherwise the lowercase SHA-1 hex of its UTF-8 bytes.
    pub fn from_seed(seed: &str) -> Self {
        if looks_like_digest(seed) {
            Self(seed.to_string())
        } else {
            Self(format!("{:x}", Sha1::digest(seed.as_bytes())))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex digit at byte offset `index` as a value 0-15.
    ///
    /// Offsets past the end read as 0; the composer only uses offsets
    /// 1-10, which are always in range.
    pub fn digit(&self, index: usize) -> u8 {
        self.0
            .as_bytes()
            .get(index)
            .copied()
            .map(hex_value)
            .unwrap_or(0)
    }

    /// Hue in [0, 1]: the trailing 7 hex characters as a 28-bit integer,
    /// scaled by the largest such integer.
    pub fn hue_fraction(&self) -> f32 {
        let bytes = self.0.as_bytes();
        let mut value: u32 = 0;
        for &b in &bytes[bytes.len() - 7..] {
            value = (value << 4) | u32::from(hex_value(b));
        }
        value as f32 / 0x0fff_ffff as f32
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn looks_like_digest(seed: &str) -> bool {
    seed.len() >= MIN_DIGEST_LEN && seed.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Value of one ASCII hex digit. The non-hex arm is unreachable for
/// bytes taken from a constructed [`Digest`].
fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_seed_of_11_chars_passes_through() {
        assert_eq!(Digest::from_seed("0123456789a").as_str(), "0123456789a");
    }

    #[test]
    fn uppercase_hex_seed_keeps_its_case() {
        assert_eq!(
            Digest::from_seed("0123456789ABCDEF").as_str(),
            "0123456789ABCDEF"
        );
    }

    #[test]
    fn short_hex_seed_is_hashed() {
        // 10 hex chars is one short of passthrough
        assert_eq!(
            Digest::from_seed("0123456789").as_str(),
            "87acec17cd9dcd20a716cc2cf67417b71c8a7016"
        );
    }

    #[test]
    fn non_hex_seed_is_hashed() {
        assert_eq!(
            Digest::from_seed("alice").as_str(),
            "522b276a356bdf39013dfabea2cd43e141ecc9e8"
        );
        // 'G' disqualifies an otherwise hex-looking seed
        assert_eq!(
            Digest::from_seed("0123456789ABCDEFG").as_str(),
            "904bf6ad9c1b90be01294c765119238068873759"
        );
    }

    #[test]
    fn empty_seed_is_sha1_of_empty_string() {
        assert_eq!(
            Digest::from_seed("").as_str(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn hashing_a_seed_equals_presenting_its_digest() {
        let hashed = Digest::from_seed("deadbeef");
        let presented = Digest::from_seed("f49cf6381e322b147053b74e4500af8533ac1e4c");
        assert_eq!(hashed, presented);
    }

    #[test]
    fn digits_parse_case_insensitively() {
        let upper = Digest::from_seed("0123456789ABCDEF");
        let lower = Digest::from_seed("0123456789abcdef");
        for i in 0..16 {
            assert_eq!(upper.digit(i), lower.digit(i));
            assert_eq!(upper.digit(i), i as u8);
        }
    }

    #[test]
    fn out_of_range_digit_reads_zero() {
        let d = Digest::from_seed("alice");
        assert_eq!(d.digit(40), 0);
    }

    #[test]
    fn hue_fraction_spans_unit_interval() {
        assert_eq!(Digest::from_seed("00000000000000000000").hue_fraction(), 0.0);
        assert_eq!(Digest::from_seed("0000fffffff").hue_fraction(), 1.0);
    }

    #[test]
    fn hue_fraction_uses_trailing_7_chars_only() {
        let a = Digest::from_seed("aaaa0000000000001234567");
        let b = Digest::from_seed("ffff0000000000001234567");
        assert_eq!(a.hue_fraction(), b.hue_fraction());
    }

    #[test]
    fn hue_fraction_of_known_digest() {
        let d = Digest::from_seed("alice");
        assert_eq!(d.hue_fraction(), 0.120_309_74);
    }
}
