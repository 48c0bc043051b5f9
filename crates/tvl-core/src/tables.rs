//! Classic Traveller Book 1 (1977) rule tables.
//!
//! Static per-service data: target numbers, characteristic bonuses, skill
//! tables, mustering-out tables, rank titles, and the ageing schedule. All
//! values are taken from the original Book 1 rules. Pure data — the career
//! state machine interprets it.

use serde::{Deserialize, Serialize};

use crate::character::{Characteristic, CharacteristicSet};

/// One of the six services a character can serve in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Service {
    /// The interstellar navy.
    Navy,
    /// The marine corps.
    Marines,
    /// The planetary army.
    Army,
    /// The exploratory scout service.
    Scouts,
    /// The merchant marine.
    Merchants,
    /// Everything else.
    Others,
}

impl Service {
    /// All six services, in draft-table order (1d6 → index).
    pub fn all() -> &'static [Self] {
        &[
            Self::Navy,
            Self::Marines,
            Self::Army,
            Self::Scouts,
            Self::Merchants,
            Self::Others,
        ]
    }

    /// Parse a service name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "navy" => Some(Self::Navy),
            "marines" => Some(Self::Marines),
            "army" => Some(Self::Army),
            "scouts" => Some(Self::Scouts),
            "merchants" => Some(Self::Merchants),
            "others" | "other" => Some(Self::Others),
            _ => None,
        }
    }

    /// Whether this service has a commission and promotion system.
    ///
    /// Scouts and Others have no rank structure at all.
    pub fn has_commissions(self) -> bool {
        !matches!(self, Self::Scouts | Self::Others)
    }

    /// Service name as printed on a character sheet.
    pub fn name(self) -> &'static str {
        match self {
            Self::Navy => "Navy",
            Self::Marines => "Marines",
            Self::Army => "Army",
            Self::Scouts => "Scouts",
            Self::Merchants => "Merchants",
            Self::Others => "Others",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the four skill tables a service offers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillTable {
    /// Personal development: characteristic boosts and basic skills.
    Personal,
    /// Service skills.
    Service,
    /// Advanced education.
    Advanced,
    /// Advanced education, EDU 8+ only.
    Education,
}

impl SkillTable {
    /// All four tables.
    pub fn all() -> &'static [Self] {
        &[Self::Personal, Self::Service, Self::Advanced, Self::Education]
    }

    /// Parse a table name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "service" => Some(Self::Service),
            "advanced" => Some(Self::Advanced),
            "education" => Some(Self::Education),
            _ => None,
        }
    }

    /// Table name as used in serialized events and CLI input.
    pub fn name(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Service => "service",
            Self::Advanced => "advanced",
            Self::Education => "education",
        }
    }
}

impl std::fmt::Display for SkillTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A conditional check bonus: +`bonus` when `characteristic` ≥ `minimum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacteristicBonus {
    /// The characteristic consulted.
    pub characteristic: Characteristic,
    /// Minimum score required for the bonus to apply.
    pub minimum: i32,
    /// Bonus added to the roll when the minimum is met.
    pub bonus: i32,
}

/// Sum the applicable bonuses for a set of scores, with a human-readable
/// breakdown of which bonuses applied.
pub fn applicable_bonuses(
    characteristics: &CharacteristicSet,
    bonuses: &[CharacteristicBonus],
) -> (i32, Vec<String>) {
    let mut total = 0;
    let mut details = Vec::new();
    for b in bonuses {
        let score = characteristics.get(b.characteristic);
        if score >= b.minimum {
            total += b.bonus;
            details.push(format!(
                "{} {}>={} (+{})",
                b.characteristic.abbrev(),
                score,
                b.minimum,
                b.bonus
            ));
        }
    }
    (total, details)
}

/// Target number for enlistment into a service.
pub fn enlistment_target(service: Service) -> i32 {
    match service {
        Service::Navy => 8,
        Service::Marines => 9,
        Service::Army => 5,
        Service::Scouts => 7,
        Service::Merchants => 7,
        Service::Others => 3,
    }
}

/// Characteristic bonuses to the enlistment roll.
pub fn enlistment_bonuses(service: Service) -> &'static [CharacteristicBonus] {
    use Characteristic::*;
    match service {
        Service::Navy => &[
            CharacteristicBonus { characteristic: Intelligence, minimum: 8, bonus: 1 },
            CharacteristicBonus { characteristic: Education, minimum: 9, bonus: 2 },
        ],
        Service::Marines => &[
            CharacteristicBonus { characteristic: Intelligence, minimum: 8, bonus: 1 },
            CharacteristicBonus { characteristic: Strength, minimum: 8, bonus: 2 },
        ],
        Service::Army => &[
            CharacteristicBonus { characteristic: Dexterity, minimum: 6, bonus: 1 },
            CharacteristicBonus { characteristic: Endurance, minimum: 5, bonus: 2 },
        ],
        Service::Scouts => &[
            CharacteristicBonus { characteristic: Intelligence, minimum: 6, bonus: 1 },
            CharacteristicBonus { characteristic: Strength, minimum: 8, bonus: 2 },
        ],
        Service::Merchants => &[
            CharacteristicBonus { characteristic: Strength, minimum: 7, bonus: 1 },
            CharacteristicBonus { characteristic: Intelligence, minimum: 6, bonus: 2 },
        ],
        Service::Others => &[],
    }
}

/// Target number for the per-term survival check.
pub fn survival_target(service: Service) -> i32 {
    match service {
        Service::Navy => 5,
        Service::Marines => 6,
        Service::Army => 5,
        Service::Scouts => 7,
        Service::Merchants => 5,
        Service::Others => 5,
    }
}

/// Characteristic bonuses to the survival roll.
pub fn survival_bonuses(service: Service) -> &'static [CharacteristicBonus] {
    use Characteristic::*;
    match service {
        Service::Navy => &[CharacteristicBonus { characteristic: Intelligence, minimum: 7, bonus: 2 }],
        Service::Marines => &[CharacteristicBonus { characteristic: Endurance, minimum: 8, bonus: 2 }],
        Service::Army => &[CharacteristicBonus { characteristic: Education, minimum: 6, bonus: 2 }],
        Service::Scouts => &[CharacteristicBonus { characteristic: Endurance, minimum: 9, bonus: 2 }],
        Service::Merchants => &[CharacteristicBonus { characteristic: Intelligence, minimum: 7, bonus: 2 }],
        Service::Others => &[CharacteristicBonus { characteristic: Intelligence, minimum: 9, bonus: 2 }],
    }
}

/// Target number for a commission, or `None` for services without one.
pub fn commission_target(service: Service) -> Option<i32> {
    match service {
        Service::Navy => Some(10),
        Service::Marines => Some(9),
        Service::Army => Some(5),
        Service::Merchants => Some(4),
        Service::Scouts | Service::Others => None,
    }
}

/// Characteristic bonuses to the commission roll.
pub fn commission_bonuses(service: Service) -> &'static [CharacteristicBonus] {
    use Characteristic::*;
    match service {
        Service::Navy => &[CharacteristicBonus { characteristic: Social, minimum: 9, bonus: 1 }],
        Service::Marines => &[CharacteristicBonus { characteristic: Education, minimum: 7, bonus: 1 }],
        Service::Army => &[CharacteristicBonus { characteristic: Endurance, minimum: 7, bonus: 1 }],
        Service::Merchants => &[CharacteristicBonus { characteristic: Intelligence, minimum: 9, bonus: 1 }],
        Service::Scouts | Service::Others => &[],
    }
}

/// Target number for a promotion, or `None` for services without one.
pub fn promotion_target(service: Service) -> Option<i32> {
    match service {
        Service::Navy => Some(8),
        Service::Marines => Some(9),
        Service::Army => Some(6),
        Service::Merchants => Some(10),
        Service::Scouts | Service::Others => None,
    }
}

/// Characteristic bonuses to the promotion roll.
pub fn promotion_bonuses(service: Service) -> &'static [CharacteristicBonus] {
    use Characteristic::*;
    match service {
        Service::Navy => &[CharacteristicBonus { characteristic: Education, minimum: 8, bonus: 1 }],
        Service::Marines => &[CharacteristicBonus { characteristic: Social, minimum: 8, bonus: 1 }],
        Service::Army => &[CharacteristicBonus { characteristic: Education, minimum: 7, bonus: 1 }],
        Service::Merchants => &[CharacteristicBonus { characteristic: Intelligence, minimum: 9, bonus: 1 }],
        Service::Scouts | Service::Others => &[],
    }
}

/// Highest achievable rank, or `None` for services without ranks.
pub fn max_rank(service: Service) -> Option<u32> {
    match service {
        Service::Navy | Service::Marines | Service::Army => Some(6),
        Service::Merchants => Some(5),
        Service::Scouts | Service::Others => None,
    }
}

/// Target number for reenlistment.
pub fn reenlistment_target(service: Service) -> i32 {
    match service {
        Service::Navy => 6,
        Service::Marines => 6,
        Service::Army => 7,
        Service::Scouts => 3,
        Service::Merchants => 4,
        Service::Others => 5,
    }
}

/// The six entries of a service's skill table.
///
/// Entries beginning with `+1 ` name a characteristic boost rather than a
/// skill (`"+1 STR"` and so on).
pub fn skill_table(service: Service, table: SkillTable) -> &'static [&'static str; 6] {
    match (service, table) {
        (Service::Navy, SkillTable::Personal) => {
            &["+1 STR", "+1 DEX", "+1 END", "+1 INT", "+1 EDU", "+1 SOC"]
        }
        (Service::Navy, SkillTable::Service) => &[
            "Ship's Boat", "Vacc Suit", "Forward Observer", "Gunnery", "Blade Combat", "Gun Combat",
        ],
        (Service::Navy, SkillTable::Advanced) => &[
            "Vacc Suit", "Mechanical", "Electronic", "Engineering", "Gunnery", "Jack-of-all-Trades",
        ],
        (Service::Navy, SkillTable::Education) => {
            &["Medical", "Navigation", "Engineering", "Computer", "Pilot", "Admin"]
        }
        (Service::Marines, SkillTable::Personal) => {
            &["+1 STR", "+1 DEX", "+1 END", "Gambling", "Brawling", "Blade Combat"]
        }
        (Service::Marines, SkillTable::Service) => &[
            "Vehicle", "Vacc Suit", "Blade Combat", "Gun Combat", "Blade Combat", "Gun Combat",
        ],
        (Service::Marines, SkillTable::Advanced) => &[
            "Vehicle", "Mechanical", "Electronic", "Tactics", "Blade Combat", "Gun Combat",
        ],
        (Service::Marines, SkillTable::Education) => {
            &["Medical", "Tactics", "Tactics", "Computer", "Leader", "Admin"]
        }
        (Service::Army, SkillTable::Personal) => {
            &["+1 STR", "+1 DEX", "+1 END", "Gambling", "+1 EDU", "Brawling"]
        }
        (Service::Army, SkillTable::Service) => &[
            "Vehicle", "Air/Raft", "Gun Combat", "Forward Observer", "Blade Combat", "Gun Combat",
        ],
        (Service::Army, SkillTable::Advanced) => &[
            "Vehicle", "Mechanical", "Electronic", "Tactics", "Blade Combat", "Gun Combat",
        ],
        (Service::Army, SkillTable::Education) => {
            &["Medical", "Tactics", "Tactics", "Computer", "Leader", "Admin"]
        }
        (Service::Scouts, SkillTable::Personal) => {
            &["+1 STR", "+1 DEX", "+1 END", "+1 INT", "+1 EDU", "Gun Combat"]
        }
        (Service::Scouts, SkillTable::Service) => &[
            "Vehicle", "Vacc Suit", "Mechanical", "Navigation", "Electronics", "Jack-of-all-Trades",
        ],
        (Service::Scouts, SkillTable::Advanced) => &[
            "Vehicle", "Mechanical", "Electronic", "Jack-of-all-Trades", "Gunnery", "Medical",
        ],
        (Service::Scouts, SkillTable::Education) => &[
            "Medical", "Navigation", "Engineering", "Computer", "Pilot", "Jack-of-all-Trades",
        ],
        (Service::Merchants, SkillTable::Personal) => {
            &["+1 STR", "+1 DEX", "+1 END", "Blade Combat", "Bribery", "+1 INT"]
        }
        (Service::Merchants, SkillTable::Service) => &[
            "Vehicle", "Vacc Suit", "Jack-of-all-Trades", "Steward", "Electronics", "Gun Combat",
        ],
        (Service::Merchants, SkillTable::Advanced) => &[
            "Streetwise", "Mechanical", "Electronic", "Navigation", "Engineering", "Computer",
        ],
        (Service::Merchants, SkillTable::Education) => {
            &["Medical", "Navigation", "Engineering", "Computer", "Pilot", "Admin"]
        }
        (Service::Others, SkillTable::Personal) => {
            &["+1 STR", "+1 DEX", "+1 END", "Blade Combat", "Brawling", "+1 SOC"]
        }
        (Service::Others, SkillTable::Service) => &[
            "Vehicle", "Gambling", "Brawling", "Bribery", "Blade Combat", "Gun Combat",
        ],
        (Service::Others, SkillTable::Advanced) => &[
            "Streetwise", "Mechanical", "Electronic", "Gambling", "Brawling", "Forgery",
        ],
        (Service::Others, SkillTable::Education) => &[
            "Medical", "Forgery", "Electronics", "Computer", "Streetwise", "Jack-of-all-Trades",
        ],
    }
}

/// Mustering-out cash award for a table index (1–7), in credits.
pub fn cash_award(service: Service, index: u32) -> Option<u32> {
    let row: [u32; 7] = match service {
        Service::Navy => [1_000, 5_000, 5_000, 10_000, 20_000, 50_000, 50_000],
        Service::Marines => [2_000, 5_000, 5_000, 10_000, 20_000, 30_000, 40_000],
        Service::Army => [2_000, 5_000, 10_000, 10_000, 10_000, 20_000, 30_000],
        Service::Scouts => [20_000, 20_000, 30_000, 30_000, 50_000, 50_000, 50_000],
        Service::Merchants => [1_000, 5_000, 10_000, 20_000, 20_000, 40_000, 40_000],
        Service::Others => [1_000, 5_000, 10_000, 10_000, 10_000, 50_000, 100_000],
    };
    match index {
        1..=7 => Some(row[(index - 1) as usize]),
        _ => None,
    }
}

/// Mustering-out benefit for a table index (1–7).
///
/// `None` where the table has no entry (Scouts and Others stop at 6).
/// A `"-"` entry is a real row that awards nothing.
pub fn benefit_award(service: Service, index: u32) -> Option<&'static str> {
    let row: &[&str] = match service {
        Service::Navy => &["Low Psg", "INT +1", "EDU +2", "Blade", "Travellers", "High Psg", "SOC +2"],
        Service::Marines => &["Low Psg", "INT +2", "EDU +1", "Blade", "Traveller", "High Psg", "SOC +2"],
        Service::Army => &["Low Psg", "INT +1", "EDU +2", "Gun", "High Psg", "Mid Psg", "SOC +1"],
        Service::Scouts => &["Low Psg", "INT +2", "EDU +2", "Blade", "Gun", "Scout Ship"],
        Service::Merchants => &["Low Psg", "INT +1", "EDU +1", "Gun", "Blade", "Low Psg", "Free Trader"],
        Service::Others => &["Low Psg", "INT +1", "EDU +1", "Gun", "High Psg", "-"],
    };
    row.get((index as usize).checked_sub(1)?).copied()
}

/// Rank titles by rank number. Index 0 is the untitled enlisted rank.
pub fn rank_titles(service: Service) -> &'static [&'static str] {
    match service {
        Service::Navy => &["", "Ensign", "Lieutenant", "Lt Cmdr", "Commander", "Captain", "Admiral"],
        Service::Army => &["", "Lieutenant", "Captain", "Major", "Lt Colonel", "Colonel", "General"],
        Service::Marines => &[
            "", "Lieutenant", "Captain", "Force Commander", "Lt Colonel", "Colonel", "Brigadier",
        ],
        Service::Merchants => &["", "4th Officer", "3rd Officer", "2nd Officer", "1st Officer", "Captain"],
        Service::Scouts | Service::Others => &["", ""],
    }
}

/// Title for a given rank, or the empty string when the service has none.
pub fn rank_title(service: Service, rank: u32) -> &'static str {
    rank_titles(service).get(rank as usize).copied().unwrap_or("")
}

/// One ageing check: roll 2d6, losing `loss` from the characteristic when the
/// roll is below `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeingCheck {
    /// Characteristic at risk.
    pub characteristic: Characteristic,
    /// Roll below this and the loss applies.
    pub target: i32,
    /// Points lost on a failed check.
    pub loss: i32,
}

/// Ages that trigger the early ageing checks.
pub const EARLY_AGEING_AGES: [u32; 4] = [34, 38, 42, 46];

/// Ages that trigger the late ageing checks.
pub const LATE_AGEING_AGES: [u32; 4] = [50, 54, 58, 62];

/// Age at which advanced ageing begins, recurring every 4 years.
pub const ADVANCED_AGEING_START: u32 = 66;

/// The ageing checks for an early- or late-band threshold age, or an empty
/// slice for ages outside both bands.
pub fn ageing_checks(age: u32) -> &'static [AgeingCheck] {
    use Characteristic::*;
    if EARLY_AGEING_AGES.contains(&age) {
        &[
            AgeingCheck { characteristic: Strength, target: 8, loss: 1 },
            AgeingCheck { characteristic: Dexterity, target: 7, loss: 1 },
            AgeingCheck { characteristic: Endurance, target: 8, loss: 1 },
        ]
    } else if LATE_AGEING_AGES.contains(&age) {
        &[
            AgeingCheck { characteristic: Strength, target: 9, loss: 1 },
            AgeingCheck { characteristic: Dexterity, target: 8, loss: 1 },
            AgeingCheck { characteristic: Endurance, target: 9, loss: 1 },
        ]
    } else {
        &[]
    }
}

/// The ageing checks applied every 4 years from age 66.
pub const ADVANCED_AGEING_CHECKS: [AgeingCheck; 4] = [
    AgeingCheck { characteristic: Characteristic::Strength, target: 9, loss: 2 },
    AgeingCheck { characteristic: Characteristic::Dexterity, target: 9, loss: 2 },
    AgeingCheck { characteristic: Characteristic::Endurance, target: 9, loss: 2 },
    AgeingCheck { characteristic: Characteristic::Intelligence, target: 9, loss: 1 },
];

/// Ways to roll each 2d6 sum (index = sum, 2–12). 36 outcomes total.
pub const WAYS_2D6: [u32; 13] = [0, 0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Parse a table entry that encodes a characteristic change.
///
/// Skill tables write boosts as `"+1 STR"`; mustering-out benefit tables
/// write them as `"INT +2"`. Both forms are accepted. Returns `None` for
/// ordinary skill or item entries.
pub fn characteristic_entry(entry: &str) -> Option<(Characteristic, i32)> {
    let mut parts = entry.split_whitespace();
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if let Some(amount) = first.strip_prefix('+') {
        // "+1 STR"
        Some((Characteristic::parse_abbrev(second)?, amount.parse().ok()?))
    } else if let Some(amount) = second.strip_prefix('+') {
        // "STR +1"
        Some((Characteristic::parse_abbrev(first)?, amount.parse().ok()?))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_parse_variants() {
        assert_eq!(Service::parse("Navy"), Some(Service::Navy));
        assert_eq!(Service::parse("  marines "), Some(Service::Marines));
        assert_eq!(Service::parse("OTHER"), Some(Service::Others));
        assert_eq!(Service::parse("pirates"), None);
    }

    #[test]
    fn draft_table_has_six_services() {
        assert_eq!(Service::all().len(), 6);
    }

    #[test]
    fn commission_services_are_consistent() {
        for service in Service::all() {
            assert_eq!(commission_target(*service).is_some(), service.has_commissions());
            assert_eq!(promotion_target(*service).is_some(), service.has_commissions());
            assert_eq!(max_rank(*service).is_some(), service.has_commissions());
            if !service.has_commissions() {
                assert!(commission_bonuses(*service).is_empty());
                assert!(promotion_bonuses(*service).is_empty());
            }
        }
    }

    #[test]
    fn every_service_has_complete_skill_tables() {
        for service in Service::all() {
            for table in SkillTable::all() {
                let entries = skill_table(*service, *table);
                assert!(entries.iter().all(|e| !e.is_empty()));
            }
        }
    }

    #[test]
    fn cash_tables_cover_indices_one_through_seven() {
        for service in Service::all() {
            for index in 1..=7 {
                assert!(cash_award(*service, index).is_some(), "{service} cash {index}");
            }
            assert!(cash_award(*service, 0).is_none());
            assert!(cash_award(*service, 8).is_none());
        }
    }

    #[test]
    fn benefit_tables_match_book_one() {
        assert_eq!(benefit_award(Service::Navy, 7), Some("SOC +2"));
        assert_eq!(benefit_award(Service::Scouts, 6), Some("Scout Ship"));
        assert_eq!(benefit_award(Service::Scouts, 7), None);
        assert_eq!(benefit_award(Service::Others, 6), Some("-"));
        assert_eq!(benefit_award(Service::Others, 7), None);
    }

    #[test]
    fn applicable_bonuses_respects_minimums() {
        let set = CharacteristicSet {
            intelligence: 8,
            education: 8,
            ..CharacteristicSet::default()
        };
        // Navy enlistment: INT 8+ gives +1, EDU 9+ (not met) gives nothing.
        let (total, details) = applicable_bonuses(&set, enlistment_bonuses(Service::Navy));
        assert_eq!(total, 1);
        assert_eq!(details, vec!["INT 8>=8 (+1)"]);
    }

    #[test]
    fn ageing_bands() {
        assert_eq!(ageing_checks(34).len(), 3);
        assert_eq!(ageing_checks(46)[0].target, 8);
        assert_eq!(ageing_checks(50)[0].target, 9);
        assert_eq!(ageing_checks(62).len(), 3);
        assert!(ageing_checks(30).is_empty());
        assert!(ageing_checks(66).is_empty()); // advanced band has its own table
    }

    #[test]
    fn ways_2d6_sum_to_thirty_six() {
        assert_eq!(WAYS_2D6.iter().sum::<u32>(), 36);
        assert_eq!(WAYS_2D6[7], 6);
        assert_eq!(WAYS_2D6[2], 1);
        assert_eq!(WAYS_2D6[12], 1);
    }

    #[test]
    fn characteristic_entries_parse_both_forms() {
        assert_eq!(
            characteristic_entry("+1 STR"),
            Some((Characteristic::Strength, 1))
        );
        assert_eq!(
            characteristic_entry("EDU +2"),
            Some((Characteristic::Education, 2))
        );
        assert_eq!(characteristic_entry("Gun Combat"), None);
        assert_eq!(characteristic_entry("Blade"), None);
        assert_eq!(characteristic_entry("-"), None);
        assert_eq!(characteristic_entry("Jack-of-all-Trades"), None);
    }

    #[test]
    fn rank_titles_top_out() {
        assert_eq!(rank_title(Service::Navy, 6), "Admiral");
        assert_eq!(rank_title(Service::Merchants, 5), "Captain");
        assert_eq!(rank_title(Service::Scouts, 1), "");
        assert_eq!(rank_title(Service::Navy, 99), "");
    }
}
