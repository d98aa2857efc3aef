//! Core library for capturing travel leads.
//!
//! A lead submission is parsed leniently, given a random purchase
//! probability, persisted through a [`LeadStore`], and classified:
//!
//! - [`LeadSubmission`] / [`LeadRecord`]: inbound shape and persisted entity
//! - [`ProbabilityScore`] / [`Classification`]: the score and its bucket
//! - [`ScoreSource`]: injectable randomness ([`ThreadRngScore`] in production)
//! - [`LeadIntake`]: the parse, score, persist pipeline
//!
//! Transport concerns (HTTP events, CORS, AWS clients) live in the Lambda crates.

#![deny(warnings)]

pub mod error;
pub mod intake;
pub mod lead;
pub mod scoring;
pub mod store;

pub use error::{Error, Result};
pub use intake::{LeadIntake, LeadReceipt};
pub use lead::{
    local_timestamp, new_lead_id, LeadDetails, LeadRecord, LeadSubmission, DEFAULT_HAS_TRAVELED,
    DEFAULT_TEXT, TIMESTAMP_FORMAT,
};
pub use scoring::{Classification, ProbabilityScore, ScoreSource, ThreadRngScore, MAX_SCORE, MIN_SCORE};
pub use store::{LeadStore, MemoryLeadStore};
