//! The end-of-term reenlistment decision.

use crate::career::term_skill_grant;
use crate::character::{CharacterRecord, SurvivalOutcome};
use crate::dice::DiceRng;
use crate::error::{ChargenError, ChargenResult};
use crate::event::{CareerEvent, ReenlistmentOutcome, ReenlistmentPreference};
use crate::tables;

/// Resolve the end-of-term reenlistment attempt.
///
/// The player states a preference (reenlist, discharge, or retire — the
/// latter only from the 5th term), then 2d6 is rolled against the service's
/// reenlistment target. A roll of 12 always forces retention regardless of
/// preference, and from the 7th term onward only a 12 continues the career.
/// Every rolled outcome completes the term, so `terms_served` always
/// increments here.
///
/// When the career continues, all term-scoped state resets, a drafted
/// character becomes a regular enlistee for good, the new term's skill rolls
/// are banked, and the next survival check opens. When it ends, mustering out
/// is next.
pub fn attempt_reenlistment(
    rng: &mut DiceRng,
    record: &mut CharacterRecord,
    preference: ReenlistmentPreference,
) -> ChargenResult<()> {
    let career = record.career.ok_or(ChargenError::NoCareer)?;
    if record.is_complete() {
        return Err(ChargenError::CareerComplete);
    }
    if preference == ReenlistmentPreference::Retire && record.current_term() < 5 {
        return Err(ChargenError::EarlyRetirement(record.current_term()));
    }

    let target = tables::reenlistment_target(career);
    let roll = rng.roll_2d6();

    let outcome = if roll == 12 {
        // Mandatory retention, even for those trying to leave.
        ReenlistmentOutcome::Retained
    } else if record.terms_served >= 6 {
        // Seventh term onward: anything but a 12 ends the career.
        ReenlistmentOutcome::Discharged
    } else {
        match preference {
            ReenlistmentPreference::Reenlist => {
                if roll as i32 >= target {
                    ReenlistmentOutcome::Reenlisted
                } else {
                    ReenlistmentOutcome::Discharged
                }
            }
            ReenlistmentPreference::Discharge => ReenlistmentOutcome::Discharged,
            ReenlistmentPreference::Retire => ReenlistmentOutcome::Retired,
        }
    };

    let continues = outcome.continues();
    record.terms_served += 1;
    record.push_event(CareerEvent::Reenlistment {
        career,
        age: record.age,
        preference: Some(preference),
        roll: Some(roll),
        target: Some(target),
        outcome,
        continues,
    });

    record.ready.clear();
    if continues {
        if record.drafted {
            record.drafted = false;
            record.push_event(CareerEvent::StatusChange {
                career,
                from: "drafted".to_string(),
                to: "enlisted".to_string(),
                reason: "successful reenlistment".to_string(),
            });
        }
        record.survival_outcome = SurvivalOutcome::Pending;
        record.skill_eligibility = term_skill_grant(record, career);
        record.ready.survival = true;
    } else {
        record.ready.muster_out = true;
    }

    record.random_state = Some(rng.snapshot());
    Ok(())
}
