pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use blink_core::Slug;

/// Trait for generating slugs.
///
/// Implementations are pure generators that don't interact with storage.
/// They are not required to produce unique output; the caller probes the
/// store and asks again on a collision.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Slug>;

    /// Generates a candidate slug.
    fn generate(&self) -> Self::Output;
}
