use crate::Generator;
use blink_core::Slug;
use rand::Rng;
use typed_builder::TypedBuilder;

/// The 62 characters a generated slug is drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DEFAULT_LENGTH: usize = 5;

/// A generator of fixed-length random alphanumeric slugs.
///
/// Each character is drawn uniformly from [`ALPHABET`], so the default
/// length of 5 gives 62^5 (about 916 million) distinct slugs.
///
/// ```
/// use blink_generator::{Generator, RandomGenerator};
///
/// let generator = RandomGenerator::builder().build();
/// assert_eq!(generator.generate().len(), 5);
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomGenerator {
    #[builder(default = DEFAULT_LENGTH)]
    length: usize,
}

impl RandomGenerator {
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Generator for RandomGenerator {
    type Output = Slug;

    fn generate(&self) -> Self::Output {
        let mut rng = rand::thread_rng();
        let slug: String = (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Slug::from(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_five_characters_by_default() {
        let generator = RandomGenerator::default();
        assert_eq!(generator.length(), 5);

        for _ in 0..100 {
            assert_eq!(generator.generate().len(), 5);
        }
    }

    #[test]
    fn draws_only_from_the_alphabet() {
        let generator = RandomGenerator::default();

        for _ in 0..1_000 {
            let slug = generator.generate();
            assert!(slug.as_str().bytes().all(|b| ALPHABET.contains(&b)));
            assert!(slug.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn custom_length() {
        let generator = RandomGenerator::builder().length(12).build();
        assert_eq!(generator.generate().len(), 12);
    }

    #[test]
    fn consecutive_slugs_differ() {
        let generator = RandomGenerator::default();
        let slugs: HashSet<_> = (0..100).map(|_| generator.generate()).collect();
        // 100 draws from ~916M values: a repeat would point at a broken rng.
        assert_eq!(slugs.len(), 100);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
