//! Client-side CAPTCHA challenges.
//!
//! A challenge is a short code the user retypes; it is friction against
//! scripted submits, not a security boundary.

use std::{env, fmt};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Characters a challenge is drawn from (`O`, `I`, `0` and `1` excluded).
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Number of characters in every challenge.
pub const LENGTH: usize = 6;

/// Environment variable holding a `u64` seed for the challenge generator.
///
/// Makes challenges predictable for scripted runs and tests.
pub const SEED_ENV: &str = "EDUGATE_CAPTCHA_SEED";

/// Challenge generator for a new dialog: seeded from [`SEED_ENV`] when it
/// holds a `u64`, OS entropy otherwise.
pub fn rng_from_env() -> StdRng {
    rng_for_seed(env::var(SEED_ENV).ok().as_deref())
}

fn rng_for_seed(seed: Option<&str>) -> StdRng {
    match seed.map(|s| s.trim().parse::<u64>()) {
        Some(Ok(seed)) => {
            tracing::warn!(seed, "captcha generator seeded from {SEED_ENV}");
            StdRng::seed_from_u64(seed)
        }
        Some(Err(_)) => {
            tracing::warn!("ignoring invalid {SEED_ENV}");
            StdRng::from_os_rng()
        }
        None => StdRng::from_os_rng(),
    }
}

/// A generated challenge. Always `LENGTH` characters from `ALPHABET`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captcha(String);

impl Captcha {
    /// Draws a new challenge from the thread-local generator.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Draws a new challenge from the given generator.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against user input. Surrounding whitespace
    /// is significant.
    pub fn matches(&self, response: &str) -> bool {
        response.to_uppercase() == self.0
    }
}

impl fmt::Display for Captcha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(captcha: &Captcha) {
        assert_eq!(captcha.as_str().len(), LENGTH);
        assert!(
            captcha.as_str().bytes().all(|b| ALPHABET.contains(&b)),
            "unexpected character in {captcha}"
        );
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_characters() {
        for excluded in [b'O', b'I', b'0', b'1'] {
            assert!(!ALPHABET.contains(&excluded));
        }
        assert!(ALPHABET.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn test_generated_challenges_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            assert_well_formed(&Captcha::generate_with(&mut rng));
        }
        assert_well_formed(&Captcha::generate());
    }

    #[test]
    fn test_same_seed_same_challenge() {
        let a = Captcha::generate_with(&mut StdRng::seed_from_u64(99));
        let b = Captcha::generate_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let captcha = Captcha("AB3XYZ".to_string());
        assert!(captcha.matches("AB3XYZ"));
        assert!(captcha.matches("ab3xyz"));
        assert!(captcha.matches("aB3xYz"));
        assert!(!captcha.matches("AB3XY"));
        assert!(!captcha.matches(" AB3XYZ"));
        assert!(!captcha.matches(""));
    }

    #[test]
    fn test_seed_makes_generator_deterministic() {
        let a = Captcha::generate_with(&mut rng_for_seed(Some("42")));
        let b = Captcha::generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = Captcha::generate_with(&mut rng_for_seed(Some(" 42\n")));
        assert_eq!(a, c);
    }

    #[test]
    fn test_invalid_seed_still_generates() {
        assert_well_formed(&Captcha::generate_with(&mut rng_for_seed(Some("abc"))));
        assert_well_formed(&Captcha::generate_with(&mut rng_for_seed(None)));
    }
}
