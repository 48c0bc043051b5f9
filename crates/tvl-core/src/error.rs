//! Error types for the character generation engine.

use thiserror::Error;

/// Result type for character generation operations.
pub type ChargenResult<T> = Result<T, ChargenError>;

/// Errors that can occur while resolving a career transition.
///
/// These are precondition violations: the record is left untouched when one
/// is returned. Rule outcomes that merely skip a check (a Scout attempting a
/// commission, for example) are not errors — they produce a recorded event
/// with an explanation instead.
#[derive(Debug, Error)]
pub enum ChargenError {
    /// Enlistment was attempted after a career was already assigned.
    #[error("career already set: {0}")]
    CareerAlreadySet(String),

    /// A transition that requires an active career was called before enlistment.
    #[error("character has no active career")]
    NoCareer,

    /// The career has already ended and benefits have been paid out.
    #[error("career is already complete")]
    CareerComplete,

    /// A skill roll was requested with no eligibility remaining.
    #[error("no skill eligibility remaining")]
    NoSkillEligibility,

    /// The requested skill table exists but is locked for this character.
    #[error("skill table '{0}' is not available: {1}")]
    TableLocked(String, String),

    /// An unknown service name was supplied.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// An unknown skill table name was supplied.
    #[error("unknown skill table: {0}")]
    UnknownTable(String),

    /// An unknown reenlistment preference was supplied.
    #[error("unknown reenlistment preference: {0}")]
    UnknownPreference(String),

    /// Retirement was requested before the fifth term of service.
    #[error("cannot retire before the 5th term (currently in term {0})")]
    EarlyRetirement(u32),

    /// A rule table had no entry for the requested service/index combination.
    #[error("no {table} entry for {service} at index {index}")]
    TableLookup {
        /// The table that was consulted.
        table: &'static str,
        /// The service the lookup was for.
        service: String,
        /// The index that had no entry.
        index: u32,
    },
}
