//! Mustering out: the final benefit distribution when a career ends.

use crate::character::{CharacterRecord, MusterOutBenefits};
use crate::dice::DiceRng;
use crate::error::{ChargenError, ChargenResult};
use crate::event::CareerEvent;
use crate::tables;

/// Pay out a finished career in cash and benefits.
///
/// Total rolls are one per completed term plus a rank-band bonus (ranks 1–2
/// add 1, 3–4 add 2, 5–6 add 3). Up to 3 of those rolls can be taken on the
/// cash table (`cash_rolls`; defaults to as many as allowed); the rest roll
/// on the benefits table. Cash rolls add the Gambling skill level, benefit
/// rolls add 1 at rank 5 or 6, and both cap at table index 7. Benefits that
/// name a characteristic boost apply immediately; the rest accumulate as
/// items, with repeats counted.
///
/// Populating the benefits is the terminal transition: the record accepts no
/// further career activity afterwards.
pub fn muster_out(
    rng: &mut DiceRng,
    record: &mut CharacterRecord,
    cash_rolls: Option<u32>,
) -> ChargenResult<()> {
    let career = record.career.ok_or(ChargenError::NoCareer)?;
    if record.is_complete() {
        return Err(ChargenError::CareerComplete);
    }

    let rank_roll_bonus = match record.rank {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        _ => 3,
    };
    let total_rolls = record.terms_served + rank_roll_bonus;
    let cash_count = cash_rolls.unwrap_or(3).min(3).min(total_rolls);
    let benefit_count = total_rolls - cash_count;

    let gambling_bonus = record.gambling_level();
    let benefit_rank_bonus = u32::from(record.rank == 5 || record.rank == 6);

    let mut benefits = MusterOutBenefits {
        cash_rolls: cash_count,
        benefit_rolls: benefit_count,
        ..MusterOutBenefits::default()
    };

    for _ in 0..cash_count {
        let roll = rng.roll_1d6();
        let index = (roll + gambling_bonus).min(7);
        let amount =
            tables::cash_award(career, index).ok_or(ChargenError::TableLookup {
                table: "cash",
                service: career.name().to_string(),
                index,
            })?;
        benefits.cash += amount;
        record.push_event(CareerEvent::MusterOutCashRoll {
            career,
            roll,
            gambling_bonus,
            index,
            amount,
        });
    }

    for _ in 0..benefit_count {
        let roll = rng.roll_1d6();
        let index = (roll + benefit_rank_bonus).min(7);
        let benefit =
            tables::benefit_award(career, index).ok_or(ChargenError::TableLookup {
                table: "benefits",
                service: career.name().to_string(),
                index,
            })?;
        record.push_event(CareerEvent::MusterOutBenefitRoll {
            career,
            roll,
            rank_bonus: benefit_rank_bonus,
            index,
            benefit: benefit.to_string(),
        });

        match tables::characteristic_entry(benefit) {
            Some((characteristic, amount)) => {
                record.characteristics.boost(characteristic, amount);
                *benefits.characteristic_boosts.entry(characteristic).or_insert(0) += amount;
                record.push_event(CareerEvent::MusterOutBoost {
                    characteristic,
                    amount,
                    new_value: record.characteristics.get(characteristic),
                });
            }
            None if benefit != "-" => {
                *benefits.items.entry(benefit.to_string()).or_insert(0) += 1;
            }
            None => {} // the empty table row awards nothing
        }
    }

    record.push_event(CareerEvent::MusterOutSummary {
        career,
        total_rolls,
        cash_rolls: cash_count,
        benefit_rolls: benefit_count,
        cash: benefits.cash,
    });
    record.mustering_out_benefits = Some(benefits);
    record.ready.clear();
    record.random_state = Some(rng.snapshot());
    Ok(())
}
