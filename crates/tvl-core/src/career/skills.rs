//! Skill resolution: spending banked skill rolls on a chosen table.

use crate::character::CharacterRecord;
use crate::dice::DiceRng;
use crate::error::{ChargenError, ChargenResult};
use crate::event::{CareerEvent, SkillGain};
use crate::tables::{self, SkillTable};

/// Spend one banked skill roll on the chosen table.
///
/// The table must be named explicitly; there is no automatic selection.
/// Rolls 1d6 to pick one of the table's six entries. Entries that encode a
/// characteristic boost raise that characteristic; every other entry is a
/// skill gained at level 1 or raised by one level. Exactly one eligibility is
/// consumed, and when the last one is spent the term moves on to ageing.
///
/// Errors when no eligibility remains or when the education table is chosen
/// without EDU 8+.
pub fn resolve_skill(
    rng: &mut DiceRng,
    record: &mut CharacterRecord,
    table: SkillTable,
) -> ChargenResult<()> {
    let career = record.career.ok_or(ChargenError::NoCareer)?;
    if record.is_complete() {
        return Err(ChargenError::CareerComplete);
    }
    if record.skill_eligibility == 0 {
        return Err(ChargenError::NoSkillEligibility);
    }
    if table == SkillTable::Education && record.characteristics.education < 8 {
        return Err(ChargenError::TableLocked(
            table.name().to_string(),
            format!(
                "requires EDU 8+ (currently {})",
                record.characteristics.education
            ),
        ));
    }

    let entries = tables::skill_table(career, table);
    let roll = rng.roll_1d6();
    let entry = entries[(roll - 1) as usize];

    let gain = match tables::characteristic_entry(entry) {
        Some((characteristic, amount)) => {
            record.characteristics.boost(characteristic, amount);
            SkillGain::CharacteristicIncrease {
                characteristic,
                amount,
                new_value: record.characteristics.get(characteristic),
            }
        }
        None => {
            let level = record.gain_skill(entry);
            SkillGain::Skill {
                name: entry.to_string(),
                level,
            }
        }
    };

    record.skill_eligibility -= 1;
    if record.skill_eligibility == 0 {
        record.ready.clear();
        record.ready.ageing = true;
    }

    record.push_event(CareerEvent::SkillResolution {
        career,
        table,
        roll,
        gain,
        remaining: record.skill_eligibility,
    });
    record.random_state = Some(rng.snapshot());
    Ok(())
}
