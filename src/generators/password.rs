// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CharacterClassSet, PasswordGenerationOptions};

/// Draws passwords from the union alphabet of the selected character classes.
///
/// The random source is injected so a seeded or stronger generator can be
/// swapped in without touching the algorithm.
pub struct PasswordGenerator<R = StdRng> {
    rng: R,
}

impl PasswordGenerator<StdRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for PasswordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Returns `None` when no class is selected.
    pub fn generate(&mut self, length: usize, classes: &CharacterClassSet) -> Option<String> {
        let chars: Vec<char> = classes.alphabet().chars().collect();

        if chars.is_empty() {
            log::warn!("No character types selected for password generation");
            return None;
        }

        let dist = Uniform::from(0..chars.len());
        let password = (0..length)
            .map(|_| chars[dist.sample(&mut self.rng)])
            .collect();

        Some(password)
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Option<String> {
        self.generate(options.length, &options.classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterClass, LOWERCASE};
    use rand_chacha::ChaCha8Rng;

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha8Rng> {
        PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_lowercase_only() {
        let classes = CharacterClassSet::from_classes([CharacterClass::Lowercase]);
        let password = PasswordGenerator::new().generate(8, &classes).unwrap();

        assert_eq!(password.chars().count(), 8);
        assert!(password.chars().all(|c| LOWERCASE.contains(c)));
    }

    #[test]
    fn test_no_classes_selected() {
        let mut generator = PasswordGenerator::new();
        assert_eq!(generator.generate(5, &CharacterClassSet::none()), None);
        assert_eq!(generator.generate(0, &CharacterClassSet::none()), None);
    }

    #[test]
    fn test_length_and_membership_for_every_selection() {
        let mut generator = seeded(7);

        // Every non-empty subset of the four classes.
        for mask in 1u8..16 {
            let classes = CharacterClassSet::from_classes(
                CharacterClass::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << *i) != 0)
                    .map(|(_, c)| c),
            );
            let alphabet = classes.alphabet();

            for length in [0, 1, 12, 64] {
                let password = generator.generate(length, &classes).unwrap();
                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|c| alphabet.contains(c)));
            }
        }
    }

    #[test]
    fn test_zero_length_is_empty_string() {
        let password = seeded(1).generate(0, &CharacterClassSet::all());
        assert_eq!(password.as_deref(), Some(""));
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let options = PasswordGenerationOptions::default();
        let first = seeded(42).generate_password(&options);
        let second = seeded(42).generate_password(&options);
        let other = seeded(43).generate_password(&options);

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_every_character_is_reachable() {
        let classes = CharacterClassSet::from_classes([CharacterClass::Digits]);
        let password = seeded(3).generate(2_000, &classes).unwrap();

        for digit in "0123456789".chars() {
            assert!(password.contains(digit), "digit {} never drawn", digit);
        }
    }
}
