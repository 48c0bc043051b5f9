//! Classic Traveller (1977) character generation engine.
//!
//! Implements the Book 1 career mini-game: enlistment, per-term survival,
//! commission and promotion checks, skill acquisition, ageing, reenlistment,
//! and mustering out. The engine is a set of pure state transitions over a
//! [`CharacterRecord`]; callers own the record, persist it between calls, and
//! get bit-for-bit reproducible careers from a seed because the dice stream
//! position rides along inside the record.

pub mod career;
pub mod character;
pub mod dice;
pub mod error;
pub mod event;
pub mod generation;
pub mod report;
pub mod tables;

pub use career::{
    attempt_enlistment, attempt_reenlistment, check_ageing, check_commission, check_promotion,
    check_survival, muster_out, resolve_skill,
};
pub use character::{
    CharacterRecord, Characteristic, CharacteristicSet, MusterOutBenefits, ReadyFlags,
    SurvivalOutcome,
};
pub use dice::{DiceRng, RngState};
pub use error::{ChargenError, ChargenResult};
pub use event::{
    CareerEvent, CheckAttempt, CheckRoll, EnlistmentOutcome, ReenlistmentOutcome,
    ReenlistmentPreference, SkillGain,
};
pub use generation::{create_record, generate_all_characteristics, generate_characteristic, generate_name};
pub use report::{
    ReenlistmentOption, Requirements, SuccessProbability, available_reenlistment_options,
    available_skill_tables, commission_requirements, completion_probability,
    promotion_requirements, success_probability, survival_requirements,
};
pub use tables::{Service, SkillTable, rank_title};
