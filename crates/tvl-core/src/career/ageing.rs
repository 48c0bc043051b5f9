//! End-of-term ageing: the age advance and characteristic erosion.

use crate::character::{CharacterRecord, SurvivalOutcome};
use crate::dice::DiceRng;
use crate::error::{ChargenError, ChargenResult};
use crate::event::{CareerEvent, ReenlistmentOutcome};
use crate::tables::{
    self, ADVANCED_AGEING_CHECKS, ADVANCED_AGEING_START, AgeingCheck, EARLY_AGEING_AGES,
    LATE_AGEING_AGES,
};

/// Age the character at the end of a term and roll any ageing checks.
///
/// Survivors age 4 years; the injured age 2. For every threshold age crossed
/// this term (34/38/42/46, then 50/54/58/62, then every 4 years from 66) a
/// 2d6 check is rolled per listed characteristic, losing points on a roll
/// below the target, floored at 0. The injured still age but skip the checks.
///
/// Afterwards an injured character is discharged on medical grounds without a
/// dice roll and heads straight to mustering out; everyone else moves to the
/// reenlistment decision.
pub fn check_ageing(rng: &mut DiceRng, record: &mut CharacterRecord) -> ChargenResult<()> {
    let career = record.career.ok_or(ChargenError::NoCareer)?;
    if record.is_complete() {
        return Err(ChargenError::CareerComplete);
    }

    let age_increase = match record.survival_outcome {
        SurvivalOutcome::Injured => 2,
        _ => 4,
    };
    let previous_age = record.age;
    record.age += age_increase;
    let current_age = record.age;

    record.ready.clear();

    // The ageing event goes in first and is annotated with the check results
    // once the individual threshold rolls have resolved.
    let ageing_index = record.career_history.len();
    record.push_event(CareerEvent::Ageing {
        previous_age,
        current_age,
        age_increase,
        checks_performed: Vec::new(),
        effects: Vec::new(),
    });

    let mut checks_performed = Vec::new();
    let mut effects = Vec::new();
    if record.survival_outcome == SurvivalOutcome::Survived {
        for &threshold in EARLY_AGEING_AGES.iter().chain(LATE_AGEING_AGES.iter()) {
            if previous_age < threshold && threshold <= current_age {
                checks_performed.push(threshold);
                for check in tables::ageing_checks(threshold) {
                    roll_ageing_check(rng, record, threshold, check, false, &mut effects);
                }
            }
        }
        let mut threshold = ADVANCED_AGEING_START;
        while threshold <= current_age {
            if previous_age < threshold {
                checks_performed.push(threshold);
                for check in &ADVANCED_AGEING_CHECKS {
                    roll_ageing_check(rng, record, threshold, check, true, &mut effects);
                }
            }
            threshold += 4;
        }
    }

    if let CareerEvent::Ageing {
        checks_performed: performed,
        effects: event_effects,
        ..
    } = &mut record.career_history[ageing_index]
    {
        *performed = checks_performed;
        *event_effects = effects;
    }

    if record.survival_outcome == SurvivalOutcome::Injured {
        record.ready.muster_out = true;
        record.push_event(CareerEvent::Reenlistment {
            career,
            age: record.age,
            preference: None,
            roll: None,
            target: None,
            outcome: ReenlistmentOutcome::MedicalDischarge,
            continues: false,
        });
    } else {
        record.ready.reenlistment = true;
    }

    record.random_state = Some(rng.snapshot());
    Ok(())
}

/// Roll one threshold check, apply any loss, and record the detail event.
fn roll_ageing_check(
    rng: &mut DiceRng,
    record: &mut CharacterRecord,
    age: u32,
    check: &AgeingCheck,
    advanced: bool,
    effects: &mut Vec<String>,
) {
    let roll = rng.roll_2d6();
    let old_value = record.characteristics.get(check.characteristic);
    let loss = if (roll as i32) < check.target {
        record.characteristics.reduce(check.characteristic, check.loss)
    } else {
        0
    };
    let new_value = record.characteristics.get(check.characteristic);
    if loss > 0 {
        effects.push(format!("-{loss} {}", check.characteristic.abbrev()));
    }
    record.push_event(CareerEvent::AgeingDetail {
        age,
        characteristic: check.characteristic,
        roll,
        target: check.target,
        old_value,
        new_value,
        loss,
        advanced,
    });
}
