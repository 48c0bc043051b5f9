//! Enlistment: the one-time entry into a service.

use crate::character::CharacterRecord;
use crate::dice::DiceRng;
use crate::error::{ChargenError, ChargenResult};
use crate::event::{CareerEvent, CheckRoll, EnlistmentOutcome};
use crate::tables::{self, Service};

/// Attempt to enlist in a chosen service.
///
/// Rolls 2d6 plus characteristic bonuses against the service's enlistment
/// target. On success the character joins the chosen service; on failure the
/// draft assigns one of the six services uniformly (1d6). Either way the
/// career is now fixed and the first term's survival check is next.
///
/// Errors if a career has already been assigned.
pub fn attempt_enlistment(
    rng: &mut DiceRng,
    record: &mut CharacterRecord,
    service: Service,
) -> ChargenResult<()> {
    if let Some(existing) = record.career {
        return Err(ChargenError::CareerAlreadySet(existing.name().to_string()));
    }

    let target = tables::enlistment_target(service);
    let (modifier, details) =
        tables::applicable_bonuses(&record.characteristics, tables::enlistment_bonuses(service));
    let check = CheckRoll::resolve(rng.roll_2d6(), modifier, details, target);

    let (outcome, assigned) = if check.success {
        (EnlistmentOutcome::Enlisted, service)
    } else {
        let draft_roll = rng.roll_1d6();
        let drafted_service = Service::all()[(draft_roll - 1) as usize];
        record.drafted = true;
        (EnlistmentOutcome::Drafted, drafted_service)
    };

    record.career = Some(assigned);
    record.ready.clear();
    record.ready.survival = true;
    record.push_event(CareerEvent::Enlistment {
        service,
        check,
        outcome,
        assigned,
    });
    record.random_state = Some(rng.snapshot());
    Ok(())
}
