//! Generator module — random passwords and their strength score.
//!
//! This module provides:
//! - `CharClass` and `CharClasses` (`charset`)
//! - The informational strength score (`strength`)
//! - `generate` / `generate_with`, which draw characters from the union alphabet

pub mod charset;
pub mod strength;

use rand::Rng;

use crate::errors::{VaultError, Result};

pub use charset::{CharClass, CharClasses};
pub use strength::{strength, Rating};

/// Generate a password using the thread-local, OS-seeded RNG.
pub fn generate(length: usize, classes: CharClasses) -> Result<String> {
    generate_with(length, classes, &mut rand::rng())
}

/// Generate a password of exactly `length` characters drawn from `rng`.
///
/// Each character is picked independently and uniformly from the union
/// alphabet of `classes`, with replacement. There is no guarantee that
/// every enabled class shows up in the output.
pub fn generate_with<R: Rng + ?Sized>(
    length: usize,
    classes: CharClasses,
    rng: &mut R,
) -> Result<String> {
    let alphabet = classes.alphabet();
    if alphabet.is_empty() {
        return Err(VaultError::NoCharacterClassSelected);
    }
    if length == 0 {
        return Err(VaultError::InvalidLength);
    }

    let password: String = (0..length)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect();

    tracing::debug!(length, classes = classes.len(), "generated password");
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_exact_length() {
        for length in [1, 8, 16, 32, 200] {
            let pw = generate(length, CharClasses::all()).unwrap();
            assert_eq!(pw.chars().count(), length);
        }
    }

    #[test]
    fn empty_classes_is_rejected_for_any_length() {
        for length in [0, 1, 16] {
            let err = generate(length, CharClasses::empty()).unwrap_err();
            assert!(matches!(err, VaultError::NoCharacterClassSelected));
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = generate(0, CharClasses::all()).unwrap_err();
        assert!(matches!(err, VaultError::InvalidLength));
    }

    #[test]
    fn only_enabled_alphabet_is_used() {
        let classes: CharClasses = [CharClass::Digits].into_iter().collect();
        let pw = generate(64, classes).unwrap();
        assert!(pw.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let classes = CharClasses::from_flags(false, true, true, false);
        let a = generate_with(16, classes, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with(16, classes, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
