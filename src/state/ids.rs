//! Card id generation.
//!
//! Ids are UUIDv4-formatted strings drawn from a seeded ChaCha8 stream:
//!
//! - **Unique**: every issued id is remembered; a repeat is redrawn
//! - **Deterministic**: the same seed yields the same id sequence
//! - **Opaque**: ids carry no card data
//!
//! ```
//! use rust_board::state::CardIdGenerator;
//!
//! let mut a = CardIdGenerator::new(42);
//! let mut b = CardIdGenerator::new(42);
//!
//! let id = a.next_id();
//! assert_eq!(id, b.next_id());
//! assert_eq!(id.as_str().len(), 36);
//! assert_ne!(id, a.next_id());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use uuid::Builder;

use super::card::CardId;

/// Session-wide source of fresh card ids.
#[derive(Clone, Debug)]
pub struct CardIdGenerator {
    rng: ChaCha8Rng,
    seed: u64,
    issued: FxHashSet<CardId>,
}

impl CardIdGenerator {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            issued: FxHashSet::default(),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Draw an id never issued before by this generator.
    pub fn next_id(&mut self) -> CardId {
        loop {
            let uuid = Builder::from_random_bytes(self.rng.gen()).into_uuid();
            let id = CardId::new(uuid.to_string());
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut a = CardIdGenerator::new(7);
        let mut b = CardIdGenerator::new(7);

        for _ in 0..50 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut a = CardIdGenerator::new(1);
        let mut b = CardIdGenerator::new(2);
        assert_ne!(a.next_id(), b.next_id());
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = CardIdGenerator::new(3);
        let drawn: FxHashSet<_> = (0..2000).map(|_| ids.next_id()).collect();

        assert_eq!(drawn.len(), 2000);
        assert_eq!(ids.issued_count(), 2000);
    }

    #[test]
    fn test_uuid_shape() {
        let mut ids = CardIdGenerator::new(4);
        for _ in 0..20 {
            let id = ids.next_id();
            let parts: Vec<&str> = id.as_str().split('-').collect();

            assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![8, 4, 4, 4, 12]);
            assert!(parts[2].starts_with('4'));
            assert!(matches!(parts[3].as_bytes()[0], b'8' | b'9' | b'a' | b'b'));
        }
    }

    #[test]
    fn test_ids_parse_as_v4_uuids() {
        let mut ids = CardIdGenerator::new(6);
        for _ in 0..20 {
            let id = ids.next_id();
            let uuid = uuid::Uuid::parse_str(id.as_str()).unwrap();

            assert_eq!(uuid.get_version_num(), 4);
            assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
            assert_eq!(uuid.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_clone_replays_sequence() {
        let mut ids = CardIdGenerator::new(5);
        ids.next_id();

        let mut replay = ids.clone();
        assert_eq!(ids.next_id(), replay.next_id());
        assert_eq!(ids.seed(), 5);
    }
}
