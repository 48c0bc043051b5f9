//! The per-term survival check.

use crate::career::term_skill_grant;
use crate::character::{CharacterRecord, SurvivalOutcome};
use crate::dice::DiceRng;
use crate::error::{ChargenError, ChargenResult};
use crate::event::{CareerEvent, CheckRoll};
use crate::tables;

/// Check whether the character survives the current term.
///
/// Rolls 2d6 plus characteristic bonuses against the service's survival
/// target. Survivors bank the term's skill rolls and move on to the
/// commission check (when one applies), the promotion check (when already
/// commissioned), or straight to skill resolution. The injured skip the rest
/// of the term and go directly to ageing. Death is not on the table: a failed
/// roll means injury.
pub fn check_survival(rng: &mut DiceRng, record: &mut CharacterRecord) -> ChargenResult<()> {
    let career = record.career.ok_or(ChargenError::NoCareer)?;
    if record.is_complete() {
        return Err(ChargenError::CareerComplete);
    }

    let target = tables::survival_target(career);
    let (modifier, details) =
        tables::applicable_bonuses(&record.characteristics, tables::survival_bonuses(career));
    let check = CheckRoll::resolve(rng.roll_2d6(), modifier, details, target);

    record.ready.clear();
    let (outcome, granted) = if check.success {
        record.survival_outcome = SurvivalOutcome::Survived;
        let granted = term_skill_grant(record, career);
        record.skill_eligibility += granted;

        let commission_open = career.has_commissions()
            && !record.commissioned
            && !(record.drafted && record.current_term() == 1);
        let promotion_open = record.commissioned
            && tables::max_rank(career).is_some_and(|max| record.rank < max);
        if commission_open {
            record.ready.commission = true;
        } else if promotion_open {
            record.ready.promotion = true;
        }
        // Otherwise no flag: the banked eligibility marks the skill phase.
        (SurvivalOutcome::Survived, granted)
    } else {
        record.survival_outcome = SurvivalOutcome::Injured;
        record.ready.ageing = true;
        (SurvivalOutcome::Injured, 0)
    };

    record.push_event(CareerEvent::Survival {
        career,
        check,
        outcome,
        skill_eligibility_granted: granted,
    });
    record.random_state = Some(rng.snapshot());
    Ok(())
}
