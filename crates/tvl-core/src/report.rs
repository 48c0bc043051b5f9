//! Read-only reporting: success odds and upcoming-check requirements.
//!
//! Everything here is pure: the record is only read, never mutated, and no
//! dice are rolled. Calling any of these twice with the same record yields
//! identical results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::{CharacterRecord, SurvivalOutcome};
use crate::error::{ChargenError, ChargenResult};
use crate::tables::{self, SkillTable, WAYS_2D6};

/// The odds of passing a 2d6 check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessProbability {
    /// Chance of success, 0–100.
    pub percentage: f64,
    /// A human-readable summary of the odds.
    pub description: String,
}

/// Compute the chance that 2d6 + `modifier` meets `target`.
///
/// Uses the 36-outcome 2d6 distribution. An effective target above 12 cannot
/// be rolled (0%); an effective target of 2 or less cannot be missed (100%).
pub fn success_probability(target: i32, modifier: i32) -> SuccessProbability {
    let effective = target - modifier;
    let percentage = if effective <= 2 {
        100.0
    } else if effective > 12 {
        0.0
    } else {
        let ways: u32 = (effective..=12).map(|sum| WAYS_2D6[sum as usize]).sum();
        f64::from(ways) * 100.0 / 36.0
    };
    let description = if effective <= 2 {
        "automatic success".to_string()
    } else if effective > 12 {
        "impossible on 2d6".to_string()
    } else {
        format!("needs {effective}+ on 2d6 ({percentage:.1}%)")
    };
    SuccessProbability {
        percentage,
        description,
    }
}

/// What an upcoming check needs, or why none applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirements {
    /// A check would be rolled with these numbers.
    Check {
        /// The target number.
        target: i32,
        /// The modifier this character would add.
        modifier: i32,
        /// Which bonuses make up the modifier.
        details: Vec<String>,
    },
    /// No check applies; the reasons say why.
    NotApplicable {
        /// Why no check applies.
        reasons: Vec<String>,
    },
}

impl Requirements {
    fn not_applicable(reason: impl Into<String>) -> Self {
        Self::NotApplicable {
            reasons: vec![reason.into()],
        }
    }
}

/// Target and modifier for this character's next survival check.
pub fn survival_requirements(record: &CharacterRecord) -> Requirements {
    let Some(career) = record.career else {
        return Requirements::not_applicable("no active career");
    };
    let (modifier, details) =
        tables::applicable_bonuses(&record.characteristics, tables::survival_bonuses(career));
    Requirements::Check {
        target: tables::survival_target(career),
        modifier,
        details,
    }
}

/// Target and modifier for this character's commission check, or the reasons
/// it would not be rolled.
pub fn commission_requirements(record: &CharacterRecord) -> Requirements {
    let Some(career) = record.career else {
        return Requirements::not_applicable("no active career");
    };
    let mut reasons = Vec::new();
    if record.commissioned {
        reasons.push("already commissioned".to_string());
    }
    if !career.has_commissions() {
        reasons.push(format!("{career} does not have commissions"));
    }
    if record.drafted && record.current_term() == 1 {
        reasons.push("drafted characters cannot be commissioned in their first term".to_string());
    }
    let Some(target) = tables::commission_target(career) else {
        return Requirements::NotApplicable { reasons };
    };
    if !reasons.is_empty() {
        return Requirements::NotApplicable { reasons };
    }
    let (modifier, details) =
        tables::applicable_bonuses(&record.characteristics, tables::commission_bonuses(career));
    Requirements::Check {
        target,
        modifier,
        details,
    }
}

/// Target and modifier for this character's promotion check, or the reasons
/// it would not be rolled.
pub fn promotion_requirements(record: &CharacterRecord) -> Requirements {
    let Some(career) = record.career else {
        return Requirements::not_applicable("no active career");
    };
    let mut reasons = Vec::new();
    if !career.has_commissions() {
        reasons.push(format!("{career} does not have promotions"));
    } else {
        if !record.commissioned {
            reasons.push("promotion requires a commission".to_string());
        }
        if tables::max_rank(career).is_some_and(|max| record.rank >= max) {
            reasons.push(format!("already at maximum rank for {career}"));
        }
    }
    let Some(target) = tables::promotion_target(career) else {
        return Requirements::NotApplicable { reasons };
    };
    if !reasons.is_empty() {
        return Requirements::NotApplicable { reasons };
    }
    let (modifier, details) =
        tables::applicable_bonuses(&record.characteristics, tables::promotion_bonuses(career));
    Requirements::Check {
        target,
        modifier,
        details,
    }
}

/// Which skill tables this character may roll on.
pub fn available_skill_tables(record: &CharacterRecord) -> BTreeMap<SkillTable, bool> {
    SkillTable::all()
        .iter()
        .map(|table| {
            let unlocked = match table {
                SkillTable::Education => record.characteristics.education >= 8,
                _ => true,
            };
            (*table, unlocked)
        })
        .collect()
}

/// A reenlistment choice currently open to the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReenlistmentOption {
    /// Roll to stay for another term.
    Reenlist,
    /// Leave the service.
    Discharge,
    /// Retire with honors (5th term onward).
    Retire,
    /// Injury forces a medical discharge; no choice remains.
    Medical,
}

/// The reenlistment choices open to the character right now.
///
/// Empty unless the record is actually at a reenlistment decision (or at a
/// forced medical discharge).
pub fn available_reenlistment_options(record: &CharacterRecord) -> Vec<ReenlistmentOption> {
    if record.ready.reenlistment {
        let mut options = vec![ReenlistmentOption::Reenlist, ReenlistmentOption::Discharge];
        if record.current_term() >= 5 {
            options.push(ReenlistmentOption::Retire);
        }
        options
    } else if record.ready.muster_out && record.survival_outcome == SurvivalOutcome::Injured {
        vec![ReenlistmentOption::Medical]
    } else {
        Vec::new()
    }
}

/// The chance of completing `terms` full terms in the character's service.
///
/// Compounds the single-term survival probability over every term with the
/// reenlistment probability over the terms between them (the final term ends
/// by choice, not by a reenlistment success).
pub fn completion_probability(
    record: &CharacterRecord,
    terms: u32,
) -> ChargenResult<SuccessProbability> {
    let career = record.career.ok_or(ChargenError::NoCareer)?;
    let survival = success_probability(
        tables::survival_target(career),
        match survival_requirements(record) {
            Requirements::Check { modifier, .. } => modifier,
            Requirements::NotApplicable { .. } => 0,
        },
    );
    let reenlistment = success_probability(tables::reenlistment_target(career), 0);

    let survive_all = (survival.percentage / 100.0).powi(terms as i32);
    let reenlist_between = (reenlistment.percentage / 100.0).powi(terms.saturating_sub(1) as i32);
    let percentage = survive_all * reenlist_between * 100.0;

    Ok(SuccessProbability {
        percentage,
        description: format!(
            "{terms} full terms in the {career}: {percentage:.1}% \
             (survival {:.1}% per term, reenlistment {:.1}%)",
            survival.percentage, reenlistment.percentage
        ),
    })
}
