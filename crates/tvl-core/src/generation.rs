//! Character creation: names and characteristic scores.
//!
//! Names come from two 6×6 grids indexed by a pair of d6 rolls, one grid for
//! first names and one for last names. Characteristics are 2d6 rolled on a
//! derived per-characteristic stream so the order they are generated in does
//! not change their values.

use crate::character::{CharacterRecord, Characteristic};
use crate::dice::DiceRng;

/// First names, indexed by (d6 - 1, d6 - 1).
const FIRST_NAMES: [[&str; 6]; 6] = [
    ["Zara", "Orion", "Nova", "Elexis", "Jaxon", "Lyra"],
    ["Nyx", "Ryker", "Elara", "Caelum", "Vega", "Draco"],
    ["Aurora", "Cassius", "Astra", "Kaius", "Seren", "Altair"],
    ["Selene", "Maximus", "Zephyr", "Cosmo", "Astrid", "Pheonix"],
    ["Nebula", "Kira", "Axel", "Vesper", "Cyrus", "Luna"],
    ["Atlas", "Iris", "Dex", "Stella", "Kai", "Cora"],
];

/// Last names, indexed by (d6 - 1, d6 - 1).
const LAST_NAMES: [[&str; 6]; 6] = [
    ["Xylo", "Pax", "Kin", "Vortex", "Starfire", "Nebulae"],
    ["Solaris", "Quantum", "Galaxy", "Void", "Stardust", "Cosmos"],
    ["Hyperdrive", "Meteor", "Comet", "Eclipse", "Andromeda", "Nebular"],
    ["Astraeus", "Ion", "Pulsar", "Zenith", "Flux", "Prism"],
    ["Nexus", "Titan", "Astro", "Helix", "Vector", "Cipher"],
    ["Apex", "Binary", "Nova", "Quark", "Sigma", "Vertex"],
];

/// Create an empty record for a fresh 18-year-old character.
pub fn create_record(seed: u64) -> CharacterRecord {
    CharacterRecord::new(seed)
}

/// Generate a full character name from two pairs of d6 rolls.
pub fn generate_name(rng: &mut DiceRng) -> String {
    let first = FIRST_NAMES[(rng.roll_1d6() - 1) as usize][(rng.roll_1d6() - 1) as usize];
    let last = LAST_NAMES[(rng.roll_1d6() - 1) as usize][(rng.roll_1d6() - 1) as usize];
    format!("{first} {last}")
}

/// Generate one characteristic score (2d6) on its derived stream.
pub fn generate_characteristic(rng: &mut DiceRng, characteristic: Characteristic) -> i32 {
    rng.characteristic_roll(characteristic)
}

/// Generate all six characteristics into a record and save the dice position.
pub fn generate_all_characteristics(rng: &mut DiceRng, record: &mut CharacterRecord) {
    for characteristic in Characteristic::all() {
        let value = generate_characteristic(rng, *characteristic);
        record.characteristics.set(*characteristic, value);
    }
    record.random_state = Some(rng.snapshot());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_grids_are_full() {
        for row in FIRST_NAMES.iter().chain(LAST_NAMES.iter()) {
            for name in row {
                assert!(!name.is_empty());
            }
        }
    }

    #[test]
    fn generated_name_has_two_parts() {
        let mut rng = DiceRng::from_seed(42);
        let name = generate_name(&mut rng);
        assert_eq!(name.split(' ').count(), 2);
    }

    #[test]
    fn same_seed_same_name() {
        let mut a = DiceRng::from_seed(7);
        let mut b = DiceRng::from_seed(7);
        assert_eq!(generate_name(&mut a), generate_name(&mut b));
    }

    #[test]
    fn characteristics_in_rolled_range() {
        let mut rng = DiceRng::from_seed(1);
        let mut record = CharacterRecord::new(1);
        generate_all_characteristics(&mut rng, &mut record);
        for c in Characteristic::all() {
            let value = record.characteristics.get(*c);
            assert!((2..=12).contains(&value), "{c} = {value}");
        }
        assert!(record.random_state.is_some());
    }

    #[test]
    fn full_set_is_reproducible() {
        let mut a = DiceRng::from_seed(9);
        let mut record_a = CharacterRecord::new(9);
        generate_all_characteristics(&mut a, &mut record_a);

        let mut b = DiceRng::from_seed(9);
        let mut record_b = CharacterRecord::new(9);
        generate_all_characteristics(&mut b, &mut record_b);

        assert_eq!(record_a.characteristics, record_b.characteristics);
        assert_eq!(record_a.random_state, record_b.random_state);
    }
}
