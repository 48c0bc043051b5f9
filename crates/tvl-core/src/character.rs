//! The character record: the single mutable aggregate of a career.
//!
//! A [`CharacterRecord`] is owned by whoever drives the generation (a CLI, a
//! test, a web frontend) and is passed by reference through every career
//! transition. The engine holds no state of its own between calls; the record
//! plus its saved dice position is the entire state of a career.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dice::RngState;
use crate::event::CareerEvent;
use crate::tables::Service;

/// One of the six Classic Traveller characteristics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Characteristic {
    /// Physical power (STR).
    Strength,
    /// Agility and reflexes (DEX).
    Dexterity,
    /// Stamina and resilience (END).
    Endurance,
    /// Reasoning ability (INT).
    Intelligence,
    /// Schooling and training (EDU).
    Education,
    /// Social standing (SOC).
    Social,
}

impl Characteristic {
    /// All six characteristics in UPP order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Strength,
            Self::Dexterity,
            Self::Endurance,
            Self::Intelligence,
            Self::Education,
            Self::Social,
        ]
    }

    /// Full lowercase name, as used in serialized records.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Endurance => "endurance",
            Self::Intelligence => "intelligence",
            Self::Education => "education",
            Self::Social => "social",
        }
    }

    /// Three-letter abbreviation (STR, DEX, END, INT, EDU, SOC).
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Endurance => "END",
            Self::Intelligence => "INT",
            Self::Education => "EDU",
            Self::Social => "SOC",
        }
    }

    /// Parse a three-letter abbreviation, case-insensitively.
    pub fn parse_abbrev(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "STR" => Some(Self::Strength),
            "DEX" => Some(Self::Dexterity),
            "END" => Some(Self::Endurance),
            "INT" => Some(Self::Intelligence),
            "EDU" => Some(Self::Education),
            "SOC" => Some(Self::Social),
            _ => None,
        }
    }
}

impl std::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// The six characteristic scores of a character.
///
/// Scores floor at 0 (ageing can erode them) and have no enforced upper
/// bound (mustering-out boosts can push them past the rolled range).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicSet {
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Endurance score.
    pub endurance: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Education score.
    pub education: i32,
    /// Social standing score.
    pub social: i32,
}

impl CharacteristicSet {
    /// Get a score by characteristic.
    pub fn get(&self, characteristic: Characteristic) -> i32 {
        match characteristic {
            Characteristic::Strength => self.strength,
            Characteristic::Dexterity => self.dexterity,
            Characteristic::Endurance => self.endurance,
            Characteristic::Intelligence => self.intelligence,
            Characteristic::Education => self.education,
            Characteristic::Social => self.social,
        }
    }

    /// Set a score by characteristic.
    pub fn set(&mut self, characteristic: Characteristic, value: i32) {
        match characteristic {
            Characteristic::Strength => self.strength = value,
            Characteristic::Dexterity => self.dexterity = value,
            Characteristic::Endurance => self.endurance = value,
            Characteristic::Intelligence => self.intelligence = value,
            Characteristic::Education => self.education = value,
            Characteristic::Social => self.social = value,
        }
    }

    /// Add to a score. No upper bound.
    pub fn boost(&mut self, characteristic: Characteristic, amount: i32) {
        self.set(characteristic, self.get(characteristic) + amount);
    }

    /// Subtract from a score, flooring at 0. Returns the actual loss.
    pub fn reduce(&mut self, characteristic: Characteristic, amount: i32) -> i32 {
        let old = self.get(characteristic);
        let new = (old - amount).max(0);
        self.set(characteristic, new);
        old - new
    }

    /// Universal Personality Profile: the six scores as hex digits
    /// (10 → A, 11 → B, and so on).
    pub fn upp(&self) -> String {
        Characteristic::all()
            .iter()
            .map(|c| {
                let value = self.get(*c);
                match value {
                    0..=9 => char::from(b'0' + value as u8),
                    10..=35 => char::from(b'A' + (value - 10) as u8),
                    _ => 'Z',
                }
            })
            .collect()
    }
}

/// How the current term's survival check resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurvivalOutcome {
    /// No survival check has been resolved this term.
    #[default]
    Pending,
    /// The character survived the term unharmed.
    Survived,
    /// The character was injured; the term is cut short.
    Injured,
}

impl std::fmt::Display for SurvivalOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Survived => write!(f, "survived"),
            Self::Injured => write!(f, "injured"),
        }
    }
}

/// Readiness flags: which transition is legally next for this record.
///
/// These are the authoritative state-machine position. At most one flag is
/// true at a time; when all are false the character is either awaiting
/// enlistment (no career yet), in the skill-resolution phase (eligibility
/// remaining), or finished (benefits paid out).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyFlags {
    /// A survival check opens the current term.
    pub survival: bool,
    /// A commission check is next.
    pub commission: bool,
    /// A promotion check is next.
    pub promotion: bool,
    /// The ageing step is next.
    pub ageing: bool,
    /// A reenlistment decision is next.
    pub reenlistment: bool,
    /// The career has ended; mustering out is next.
    pub muster_out: bool,
}

impl ReadyFlags {
    /// Clear every flag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// How many flags are currently set.
    pub fn count_set(&self) -> usize {
        [
            self.survival,
            self.commission,
            self.promotion,
            self.ageing,
            self.reenlistment,
            self.muster_out,
        ]
        .iter()
        .filter(|f| **f)
        .count()
    }
}

/// Final mustering-out payout. Its presence marks the career complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusterOutBenefits {
    /// Total credits received from cash rolls.
    pub cash: u32,
    /// Material benefits by name, with a count for repeats.
    pub items: BTreeMap<String, u32>,
    /// Characteristic boosts received, by characteristic.
    pub characteristic_boosts: BTreeMap<Characteristic, i32>,
    /// Number of rolls taken on the cash table.
    pub cash_rolls: u32,
    /// Number of rolls taken on the benefits table.
    pub benefit_rolls: u32,
}

/// The complete state of one character's generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Character name.
    pub name: String,
    /// Current age in years. Careers start at 18.
    pub age: u32,
    /// The seed this character's dice stream started from.
    pub seed: u64,
    /// The six characteristic scores.
    pub characteristics: CharacteristicSet,
    /// Assigned service. Set once at enlistment, immutable afterwards.
    pub career: Option<Service>,
    /// True when enlistment failed and the draft assigned the service.
    pub drafted: bool,
    /// True once a commission succeeds. Never reset.
    pub commissioned: bool,
    /// Current rank. Only ever increases.
    pub rank: u32,
    /// Completed terms of service. 0 while in the first term.
    pub terms_served: u32,
    /// Pending skill rolls banked for the current term.
    pub skill_eligibility: u32,
    /// Acquired skills and their levels.
    pub skills: BTreeMap<String, u32>,
    /// How this term's survival check resolved.
    pub survival_outcome: SurvivalOutcome,
    /// Which transition is legally next.
    pub ready: ReadyFlags,
    /// Everything that has happened, in order. Append-only.
    pub career_history: Vec<CareerEvent>,
    /// Final payout. `Some` means the career is over.
    pub mustering_out_benefits: Option<MusterOutBenefits>,
    /// Saved dice stream position, updated by every transition.
    pub random_state: Option<RngState>,
}

impl CharacterRecord {
    /// Create an empty record for a fresh 18-year-old character.
    pub fn new(seed: u64) -> Self {
        Self {
            name: String::new(),
            age: 18,
            seed,
            characteristics: CharacteristicSet::default(),
            career: None,
            drafted: false,
            commissioned: false,
            rank: 0,
            terms_served: 0,
            skill_eligibility: 0,
            skills: BTreeMap::new(),
            survival_outcome: SurvivalOutcome::Pending,
            ready: ReadyFlags::default(),
            career_history: Vec::new(),
            mustering_out_benefits: None,
            random_state: None,
        }
    }

    /// The 1-based number of the term currently being served.
    pub fn current_term(&self) -> u32 {
        self.terms_served + 1
    }

    /// True once mustering out has completed.
    pub fn is_complete(&self) -> bool {
        self.mustering_out_benefits.is_some()
    }

    /// Gambling skill level, which modifies mustering-out cash rolls.
    pub fn gambling_level(&self) -> u32 {
        self.skills.get("Gambling").copied().unwrap_or(0)
    }

    /// Raise a skill by one level, inserting it at level 1 if new.
    pub fn gain_skill(&mut self, name: &str) -> u32 {
        let level = self.skills.entry(name.to_string()).or_insert(0);
        *level += 1;
        *level
    }

    /// Append an event to the career history.
    pub fn push_event(&mut self, event: CareerEvent) {
        self.career_history.push(event);
    }

    /// Display-only `term.step` position string (e.g. `"2.4"`).
    ///
    /// Recomputed from the readiness flags and never branched on internally;
    /// the flags themselves are the source of truth.
    pub fn current_phase(&self) -> String {
        if self.is_complete() {
            return "complete".to_string();
        }
        let term = self.current_term();
        let step = if self.career.is_none() {
            0
        } else if self.ready.survival {
            1
        } else if self.ready.commission {
            2
        } else if self.ready.promotion {
            3
        } else if self.ready.ageing {
            5
        } else if self.ready.reenlistment {
            6
        } else if self.ready.muster_out {
            7
        } else {
            // No flag set with an active career: the skill phase.
            4
        };
        format!("{term}.{step}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_defaults() {
        let record = CharacterRecord::new(42);
        assert_eq!(record.age, 18);
        assert_eq!(record.seed, 42);
        assert_eq!(record.terms_served, 0);
        assert_eq!(record.current_term(), 1);
        assert!(record.career.is_none());
        assert!(!record.is_complete());
        assert_eq!(record.ready.count_set(), 0);
        assert_eq!(record.current_phase(), "1.0");
    }

    #[test]
    fn characteristic_get_set() {
        let mut set = CharacteristicSet::default();
        for (i, c) in Characteristic::all().iter().enumerate() {
            set.set(*c, i as i32 + 5);
        }
        assert_eq!(set.strength, 5);
        assert_eq!(set.social, 10);
        assert_eq!(set.get(Characteristic::Endurance), 7);
    }

    #[test]
    fn reduce_floors_at_zero() {
        let mut set = CharacteristicSet {
            strength: 1,
            ..CharacteristicSet::default()
        };
        let lost = set.reduce(Characteristic::Strength, 2);
        assert_eq!(lost, 1);
        assert_eq!(set.strength, 0);
        let lost = set.reduce(Characteristic::Strength, 1);
        assert_eq!(lost, 0);
    }

    #[test]
    fn boost_has_no_upper_bound() {
        let mut set = CharacteristicSet {
            social: 11,
            ..CharacteristicSet::default()
        };
        set.boost(Characteristic::Social, 2);
        assert_eq!(set.social, 13);
    }

    #[test]
    fn upp_hex_digits() {
        let set = CharacteristicSet {
            strength: 7,
            dexterity: 8,
            endurance: 9,
            intelligence: 10,
            education: 11,
            social: 12,
        };
        assert_eq!(set.upp(), "789ABC");
    }

    #[test]
    fn abbrev_parse_roundtrip() {
        for c in Characteristic::all() {
            assert_eq!(Characteristic::parse_abbrev(c.abbrev()), Some(*c));
        }
        assert_eq!(Characteristic::parse_abbrev("int"), Some(Characteristic::Intelligence));
        assert_eq!(Characteristic::parse_abbrev("XYZ"), None);
    }

    #[test]
    fn gain_skill_stacks() {
        let mut record = CharacterRecord::new(1);
        assert_eq!(record.gain_skill("Gun Combat"), 1);
        assert_eq!(record.gain_skill("Gun Combat"), 2);
        assert_eq!(record.skills.get("Gun Combat"), Some(&2));
    }

    #[test]
    fn phase_string_tracks_flags() {
        let mut record = CharacterRecord::new(1);
        record.career = Some(Service::Navy);
        record.ready.survival = true;
        assert_eq!(record.current_phase(), "1.1");

        record.ready.clear();
        record.skill_eligibility = 2;
        assert_eq!(record.current_phase(), "1.4");

        record.ready.clear();
        record.ready.reenlistment = true;
        record.terms_served = 1;
        assert_eq!(record.current_phase(), "2.6");

        record.mustering_out_benefits = Some(MusterOutBenefits::default());
        assert_eq!(record.current_phase(), "complete");
    }

    #[test]
    fn record_serde_roundtrip() {
        let mut record = CharacterRecord::new(77);
        record.name = "Zara Pax".to_string();
        record.career = Some(Service::Navy);
        record.characteristics.intelligence = 9;
        record.gain_skill("Pilot");
        record.ready.survival = true;

        let json = serde_json::to_string(&record).unwrap();
        let restored: CharacterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
