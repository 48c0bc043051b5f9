//! The promotion check.

use crate::character::CharacterRecord;
use crate::dice::DiceRng;
use crate::error::{ChargenError, ChargenResult};
use crate::event::{CareerEvent, CheckAttempt, CheckRoll};
use crate::tables;

/// Check whether the character is promoted this term.
///
/// Promotion requires a prior commission. The check does not apply — and no
/// dice are rolled — when the service has no rank structure, when the
/// character holds no commission, or when they already sit at the service's
/// maximum rank. A successful roll raises the rank by one and grants one
/// extra skill roll.
pub fn check_promotion(rng: &mut DiceRng, record: &mut CharacterRecord) -> ChargenResult<()> {
    let career = record.career.ok_or(ChargenError::NoCareer)?;
    if record.is_complete() {
        return Err(ChargenError::CareerComplete);
    }

    let reason = if !career.has_commissions() {
        Some(format!("{career} does not have promotions"))
    } else if !record.commissioned {
        Some("promotion requires a commission".to_string())
    } else if tables::max_rank(career).is_some_and(|max| record.rank >= max) {
        Some(format!(
            "already at maximum rank ({}) for {career}",
            record.rank
        ))
    } else {
        None
    };

    record.ready.promotion = false;
    let attempt = match reason {
        Some(reason) => CheckAttempt::NotApplicable { reason },
        None => {
            let target = tables::promotion_target(career).ok_or(ChargenError::TableLookup {
                table: "promotion",
                service: career.name().to_string(),
                index: 0,
            })?;
            let (modifier, details) = tables::applicable_bonuses(
                &record.characteristics,
                tables::promotion_bonuses(career),
            );
            let check = CheckRoll::resolve(rng.roll_2d6(), modifier, details, target);
            if check.success {
                record.rank += 1;
                record.skill_eligibility += 1;
            }
            CheckAttempt::Rolled(check)
        }
    };

    record.push_event(CareerEvent::Promotion {
        career,
        attempt,
        rank: record.rank,
    });
    record.random_state = Some(rng.snapshot());
    Ok(())
}
