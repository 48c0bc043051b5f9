//! Seeded dice with a persistable stream position.
//!
//! Classic Traveller resolves everything with 2d6 checks and 1d6 table picks.
//! The generator here is a ChaCha stream cipher RNG so that its exact position
//! can be snapshotted into a character record and restored later: a career
//! resolved in one sitting and a career resolved across many separate calls
//! produce identical rolls.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::character::{CharacterRecord, Characteristic};

/// A serializable snapshot of a dice generator's position.
///
/// Stored in [`CharacterRecord::random_state`] after every transition so the
/// next transition resumes the same pseudo-random sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState(ChaCha8Rng);

/// The dice generator used by every career transition.
#[derive(Debug, Clone)]
pub struct DiceRng {
    rng: ChaCha8Rng,
}

impl DiceRng {
    /// Create a generator from an integer seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator for a record, resuming its saved stream position.
    ///
    /// Falls back to a fresh generator from the record's seed when no state
    /// has been saved yet.
    pub fn for_record(record: &CharacterRecord) -> Self {
        match &record.random_state {
            Some(state) => Self::restore(state),
            None => Self::from_seed(record.seed),
        }
    }

    /// Restore a generator from a snapshot.
    pub fn restore(state: &RngState) -> Self {
        Self {
            rng: state.0.clone(),
        }
    }

    /// Snapshot the generator's current position.
    pub fn snapshot(&self) -> RngState {
        RngState(self.rng.clone())
    }

    /// Roll 2d6: the sum of two independent d6 rolls, 2 through 12.
    pub fn roll_2d6(&mut self) -> u32 {
        self.roll_1d6() + self.roll_1d6()
    }

    /// Roll a single d6, 1 through 6.
    pub fn roll_1d6(&mut self) -> u32 {
        self.rng.random_range(1..=6)
    }

    /// Roll 2d6 on a derived per-characteristic stream.
    ///
    /// Draws once from the parent stream, seeds a child generator from a hash
    /// of that draw and the characteristic name, rolls on the child, and
    /// discards it. The parent advances by exactly one draw no matter which
    /// characteristic is rolled, so generation order cannot entangle the
    /// individual scores.
    pub fn characteristic_roll(&mut self, characteristic: Characteristic) -> i32 {
        let draw = self.rng.next_u64();
        let mut hasher = Sha256::new();
        hasher.update(draw.to_le_bytes());
        hasher.update(characteristic.name().as_bytes());
        let digest = hasher.finalize();
        let seed = u64::from_le_bytes(
            digest[..8]
                .try_into()
                .expect("SHA-256 digest is at least 8 bytes"),
        );
        let mut child = ChaCha8Rng::seed_from_u64(seed);
        child.random_range(1..=6) + child.random_range(1..=6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_are_in_range() {
        let mut dice = DiceRng::from_seed(42);
        for _ in 0..200 {
            let two = dice.roll_2d6();
            assert!((2..=12).contains(&two));
            let one = dice.roll_1d6();
            assert!((1..=6).contains(&one));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = DiceRng::from_seed(7);
        let mut b = DiceRng::from_seed(7);
        for _ in 0..50 {
            assert_eq!(a.roll_2d6(), b.roll_2d6());
        }
    }

    #[test]
    fn snapshot_resumes_sequence() {
        let mut dice = DiceRng::from_seed(99);
        dice.roll_2d6();
        let state = dice.snapshot();
        let expected: Vec<u32> = (0..20).map(|_| dice.roll_2d6()).collect();

        let mut resumed = DiceRng::restore(&state);
        let actual: Vec<u32> = (0..20).map(|_| resumed.roll_2d6()).collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let mut dice = DiceRng::from_seed(5);
        dice.roll_1d6();
        let state = dice.snapshot();
        let json = serde_json::to_string(&state).unwrap();
        let restored: RngState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);

        let mut a = DiceRng::restore(&state);
        let mut b = DiceRng::restore(&restored);
        assert_eq!(a.roll_2d6(), b.roll_2d6());
    }

    #[test]
    fn characteristic_roll_in_range() {
        let mut dice = DiceRng::from_seed(1);
        for characteristic in Characteristic::all() {
            let value = dice.characteristic_roll(*characteristic);
            assert!((2..=12).contains(&value));
        }
    }

    #[test]
    fn characteristic_roll_advances_parent_by_one_draw() {
        let mut with_child = DiceRng::from_seed(11);
        with_child.characteristic_roll(Characteristic::Strength);

        let mut plain = DiceRng::from_seed(11);
        plain.rng.next_u64();

        assert_eq!(with_child.snapshot(), plain.snapshot());
    }

    #[test]
    fn characteristic_roll_is_deterministic_per_name() {
        // Same parent position and same characteristic: identical value.
        let base = DiceRng::from_seed(3);
        let first = base.clone().characteristic_roll(Characteristic::Strength);
        let second = base.clone().characteristic_roll(Characteristic::Strength);
        assert_eq!(first, second);
    }
}
