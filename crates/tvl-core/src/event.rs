//! The career event log.
//!
//! Every transition appends at least one event. Events are a tagged sum type
//! so consumers get exhaustiveness checking when they branch on event kind;
//! their position in [`crate::character::CharacterRecord::career_history`] is
//! the sequence index.

use serde::{Deserialize, Serialize};

use crate::character::{Characteristic, SurvivalOutcome};
use crate::tables::{Service, SkillTable};

/// A resolved 2d6 check: roll, modifiers, target, and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRoll {
    /// The raw 2d6 roll.
    pub roll: u32,
    /// Total modifier applied to the roll.
    pub modifier: i32,
    /// Which bonuses contributed to the modifier.
    pub modifier_details: Vec<String>,
    /// The number needed.
    pub target: i32,
    /// Roll plus modifier.
    pub total: i32,
    /// Whether the total met the target.
    pub success: bool,
}

impl CheckRoll {
    /// Resolve a roll against a target: success when roll + modifier ≥ target.
    pub fn resolve(roll: u32, modifier: i32, modifier_details: Vec<String>, target: i32) -> Self {
        let total = roll as i32 + modifier;
        Self {
            roll,
            modifier,
            modifier_details,
            target,
            total,
            success: total >= target,
        }
    }
}

/// A check that may be skipped by the rules rather than rolled.
///
/// Skipping is not an error: a player may legitimately ask for a commission
/// check in a service that has none, and the rules answer "not applicable".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckAttempt {
    /// The rules define no roll here; the reason says why.
    NotApplicable {
        /// Why the check does not apply.
        reason: String,
    },
    /// Dice were rolled.
    Rolled(CheckRoll),
}

impl CheckAttempt {
    /// Whether dice were actually rolled.
    pub fn applicable(&self) -> bool {
        matches!(self, Self::Rolled(_))
    }

    /// Whether the check was rolled and succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Rolled(check) if check.success)
    }
}

/// How enlistment resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnlistmentOutcome {
    /// The character joined the service of their choice.
    Enlisted,
    /// Enlistment failed; the draft assigned a service.
    Drafted,
}

impl std::fmt::Display for EnlistmentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enlisted => write!(f, "enlisted"),
            Self::Drafted => write!(f, "drafted"),
        }
    }
}

/// What a skill-table roll produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillGain {
    /// A characteristic boost entry ("+1 STR" and friends).
    CharacteristicIncrease {
        /// Which characteristic was raised.
        characteristic: Characteristic,
        /// How much it was raised by.
        amount: i32,
        /// The score after the increase.
        new_value: i32,
    },
    /// A named skill, gained at level 1 or raised by one level.
    Skill {
        /// The skill's name.
        name: String,
        /// The level after this gain.
        level: u32,
    },
}

/// The player's stated reenlistment preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReenlistmentPreference {
    /// Stay in for another term.
    Reenlist,
    /// Leave the service.
    Discharge,
    /// Retire with honors (5th term onward).
    Retire,
}

impl ReenlistmentPreference {
    /// Parse a preference, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reenlist" => Some(Self::Reenlist),
            "discharge" | "leave" => Some(Self::Discharge),
            "retire" => Some(Self::Retire),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReenlistmentPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reenlist => write!(f, "reenlist"),
            Self::Discharge => write!(f, "discharge"),
            Self::Retire => write!(f, "retire"),
        }
    }
}

/// How a reenlistment attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReenlistmentOutcome {
    /// Reenlisted by choice.
    Reenlisted,
    /// Forced to stay by a roll of 12.
    Retained,
    /// Left or was refused another term.
    Discharged,
    /// Retired after five or more terms.
    Retired,
    /// Discharged without a roll after an injury.
    MedicalDischarge,
}

impl ReenlistmentOutcome {
    /// Whether the career continues into a new term.
    pub fn continues(self) -> bool {
        matches!(self, Self::Reenlisted | Self::Retained)
    }
}

impl std::fmt::Display for ReenlistmentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reenlisted => write!(f, "reenlisted"),
            Self::Retained => write!(f, "retained"),
            Self::Discharged => write!(f, "discharged"),
            Self::Retired => write!(f, "retired"),
            Self::MedicalDischarge => write!(f, "medical discharge"),
        }
    }
}

/// One entry in the career history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CareerEvent {
    /// An enlistment attempt, successful or drafted.
    Enlistment {
        /// The service the character tried to join.
        service: Service,
        /// The enlistment roll.
        check: CheckRoll,
        /// Enlisted or drafted.
        outcome: EnlistmentOutcome,
        /// The service actually joined.
        assigned: Service,
    },
    /// A per-term survival check.
    Survival {
        /// Service the term was served in.
        career: Service,
        /// The survival roll.
        check: CheckRoll,
        /// Survived or injured.
        outcome: SurvivalOutcome,
        /// Skill rolls granted for the term (0 when injured).
        skill_eligibility_granted: u32,
    },
    /// A commission check, rolled or skipped.
    Commission {
        /// Service the check was made in.
        career: Service,
        /// Rolled check, or the reason none applies.
        attempt: CheckAttempt,
        /// Rank after the check.
        rank: u32,
    },
    /// A promotion check, rolled or skipped.
    Promotion {
        /// Service the check was made in.
        career: Service,
        /// Rolled check, or the reason none applies.
        attempt: CheckAttempt,
        /// Rank after the check.
        rank: u32,
    },
    /// One skill-table roll.
    SkillResolution {
        /// Service whose tables were used.
        career: Service,
        /// Which table was rolled on.
        table: SkillTable,
        /// The 1d6 table roll.
        roll: u32,
        /// What the roll produced.
        gain: SkillGain,
        /// Eligibility remaining after this roll.
        remaining: u32,
    },
    /// End-of-term ageing: the age advance and any characteristic losses.
    ///
    /// Appended with empty check lists, then annotated in place once the
    /// individual threshold checks have resolved.
    Ageing {
        /// Age before this term's ageing.
        previous_age: u32,
        /// Age after.
        current_age: u32,
        /// Years added (4 survived, 2 injured).
        age_increase: u32,
        /// Threshold ages at which checks were rolled.
        checks_performed: Vec<u32>,
        /// Summaries of each loss suffered (e.g. `"-1 STR"`).
        effects: Vec<String>,
    },
    /// One individual ageing threshold check.
    AgeingDetail {
        /// The threshold age that triggered the check.
        age: u32,
        /// Characteristic at risk.
        characteristic: Characteristic,
        /// The 2d6 roll (loss applies when below target).
        roll: u32,
        /// The saving target.
        target: i32,
        /// Score before the check.
        old_value: i32,
        /// Score after the check.
        new_value: i32,
        /// Points actually lost.
        loss: i32,
        /// True for the 66+ advanced band.
        advanced: bool,
    },
    /// A reenlistment decision and its resolution.
    Reenlistment {
        /// Service being reenlisted in.
        career: Service,
        /// Age at the decision.
        age: u32,
        /// What the player asked for. Absent for an automatic medical
        /// discharge, which involves no decision.
        preference: Option<ReenlistmentPreference>,
        /// The 2d6 roll, absent for a medical discharge.
        roll: Option<u32>,
        /// The reenlistment target, absent for a medical discharge.
        target: Option<i32>,
        /// How it resolved.
        outcome: ReenlistmentOutcome,
        /// Whether the career continues.
        continues: bool,
    },
    /// A standing change outside the usual checks (drafted → enlisted).
    StatusChange {
        /// Service the character serves in.
        career: Service,
        /// Previous standing.
        from: String,
        /// New standing.
        to: String,
        /// What caused the change.
        reason: String,
    },
    /// One mustering-out roll on the cash table.
    MusterOutCashRoll {
        /// Service whose table was used.
        career: Service,
        /// The 1d6 roll.
        roll: u32,
        /// Gambling skill bonus applied.
        gambling_bonus: u32,
        /// Table index consulted (capped at 7).
        index: u32,
        /// Credits received.
        amount: u32,
    },
    /// One mustering-out roll on the benefits table.
    MusterOutBenefitRoll {
        /// Service whose table was used.
        career: Service,
        /// The 1d6 roll.
        roll: u32,
        /// Rank 5–6 bonus applied.
        rank_bonus: u32,
        /// Table index consulted (capped at 7).
        index: u32,
        /// The benefit rolled.
        benefit: String,
    },
    /// A characteristic boost granted by a mustering-out benefit.
    MusterOutBoost {
        /// Which characteristic was raised.
        characteristic: Characteristic,
        /// How much it was raised by.
        amount: i32,
        /// The score after the boost.
        new_value: i32,
    },
    /// The mustering-out totals. Always the final event of a career.
    MusterOutSummary {
        /// Service mustered out of.
        career: Service,
        /// Total rolls earned (terms plus rank band).
        total_rolls: u32,
        /// Rolls taken as cash.
        cash_rolls: u32,
        /// Rolls taken as benefits.
        benefit_rolls: u32,
        /// Total credits received.
        cash: u32,
    },
}

impl CareerEvent {
    /// Short kind tag for display tables and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Enlistment { .. } => "enlistment",
            Self::Survival { .. } => "survival",
            Self::Commission { .. } => "commission",
            Self::Promotion { .. } => "promotion",
            Self::SkillResolution { .. } => "skill",
            Self::Ageing { .. } => "ageing",
            Self::AgeingDetail { .. } => "ageing detail",
            Self::Reenlistment { .. } => "reenlistment",
            Self::StatusChange { .. } => "status change",
            Self::MusterOutCashRoll { .. } => "muster-out cash",
            Self::MusterOutBenefitRoll { .. } => "muster-out benefit",
            Self::MusterOutBoost { .. } => "muster-out boost",
            Self::MusterOutSummary { .. } => "muster-out summary",
        }
    }
}

impl std::fmt::Display for CareerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enlistment { service, check, outcome, assigned } => {
                write!(
                    f,
                    "{outcome} in {assigned} (sought {service}, rolled {} vs {})",
                    check.total, check.target
                )
            }
            Self::Survival { check, outcome, .. } => {
                write!(f, "{outcome} (rolled {} vs {})", check.total, check.target)
            }
            Self::Commission { attempt, rank, .. } => match attempt {
                CheckAttempt::NotApplicable { reason } => {
                    write!(f, "commission not applicable: {reason}")
                }
                CheckAttempt::Rolled(check) if check.success => {
                    write!(f, "commissioned as officer, rank {rank}")
                }
                CheckAttempt::Rolled(check) => {
                    write!(f, "not commissioned (rolled {} vs {})", check.total, check.target)
                }
            },
            Self::Promotion { attempt, rank, .. } => match attempt {
                CheckAttempt::NotApplicable { reason } => {
                    write!(f, "promotion not applicable: {reason}")
                }
                CheckAttempt::Rolled(check) if check.success => {
                    write!(f, "promoted to rank {rank}")
                }
                CheckAttempt::Rolled(check) => {
                    write!(f, "not promoted (rolled {} vs {})", check.total, check.target)
                }
            },
            Self::SkillResolution { table, roll, gain, .. } => match gain {
                SkillGain::CharacteristicIncrease { characteristic, amount, .. } => {
                    write!(f, "{table} table roll {roll}: +{amount} {characteristic}")
                }
                SkillGain::Skill { name, level } => {
                    write!(f, "{table} table roll {roll}: {name}-{level}")
                }
            },
            Self::Ageing { previous_age, current_age, effects, .. } => {
                if effects.is_empty() {
                    write!(f, "aged {previous_age} -> {current_age}")
                } else {
                    write!(f, "aged {previous_age} -> {current_age} ({})", effects.join(", "))
                }
            }
            Self::AgeingDetail { age, characteristic, roll, target, loss, .. } => {
                if *loss > 0 {
                    write!(f, "age {age}: {characteristic} check {roll} vs {target}, -{loss}")
                } else {
                    write!(f, "age {age}: {characteristic} check {roll} vs {target}, no loss")
                }
            }
            Self::Reenlistment { preference, outcome, roll, .. } => {
                match (preference, roll) {
                    (Some(preference), Some(roll)) => {
                        write!(f, "asked to {preference}: {outcome} (rolled {roll})")
                    }
                    _ => write!(f, "{outcome}"),
                }
            }
            Self::StatusChange { from, to, reason, .. } => {
                write!(f, "{from} -> {to} ({reason})")
            }
            Self::MusterOutCashRoll { amount, roll, .. } => {
                write!(f, "cash roll {roll}: Cr{amount}")
            }
            Self::MusterOutBenefitRoll { benefit, roll, .. } => {
                write!(f, "benefit roll {roll}: {benefit}")
            }
            Self::MusterOutBoost { characteristic, amount, new_value } => {
                write!(f, "benefit: +{amount} {characteristic} (now {new_value})")
            }
            Self::MusterOutSummary { total_rolls, cash_rolls, benefit_rolls, cash, .. } => {
                write!(
                    f,
                    "mustered out: {total_rolls} rolls ({cash_rolls} cash, {benefit_rolls} benefits), Cr{cash}"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_roll_resolution() {
        let check = CheckRoll::resolve(7, 2, vec!["INT 8>=7 (+2)".to_string()], 8);
        assert_eq!(check.total, 9);
        assert!(check.success);

        let check = CheckRoll::resolve(5, 0, Vec::new(), 8);
        assert_eq!(check.total, 5);
        assert!(!check.success);
    }

    #[test]
    fn check_roll_exact_target_succeeds() {
        let check = CheckRoll::resolve(8, 0, Vec::new(), 8);
        assert!(check.success);
    }

    #[test]
    fn check_attempt_predicates() {
        let skipped = CheckAttempt::NotApplicable {
            reason: "Scouts does not have commissions".to_string(),
        };
        assert!(!skipped.applicable());
        assert!(!skipped.succeeded());

        let rolled = CheckAttempt::Rolled(CheckRoll::resolve(10, 0, Vec::new(), 8));
        assert!(rolled.applicable());
        assert!(rolled.succeeded());
    }

    #[test]
    fn reenlistment_outcome_continuation() {
        assert!(ReenlistmentOutcome::Reenlisted.continues());
        assert!(ReenlistmentOutcome::Retained.continues());
        assert!(!ReenlistmentOutcome::Discharged.continues());
        assert!(!ReenlistmentOutcome::Retired.continues());
        assert!(!ReenlistmentOutcome::MedicalDischarge.continues());
    }

    #[test]
    fn preference_parse() {
        assert_eq!(ReenlistmentPreference::parse("Reenlist"), Some(ReenlistmentPreference::Reenlist));
        assert_eq!(ReenlistmentPreference::parse("leave"), Some(ReenlistmentPreference::Discharge));
        assert_eq!(ReenlistmentPreference::parse("retire"), Some(ReenlistmentPreference::Retire));
        assert_eq!(ReenlistmentPreference::parse("desert"), None);
    }

    #[test]
    fn event_serde_roundtrip() {
        let event = CareerEvent::SkillResolution {
            career: Service::Navy,
            table: SkillTable::Service,
            roll: 4,
            gain: SkillGain::Skill {
                name: "Gunnery".to_string(),
                level: 1,
            },
            remaining: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        let restored: CareerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, restored);
    }

    #[test]
    fn event_display() {
        let event = CareerEvent::MusterOutCashRoll {
            career: Service::Army,
            roll: 4,
            gambling_bonus: 1,
            index: 5,
            amount: 10_000,
        };
        assert_eq!(event.to_string(), "cash roll 4: Cr10000");
        assert_eq!(event.kind(), "muster-out cash");
    }
}
