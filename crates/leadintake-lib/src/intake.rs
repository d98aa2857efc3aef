//! The lead intake pipeline.
//!
//! One submission runs through a fixed sequence of fallible steps:
//! parse, default, score, identify, persist. The first failure is returned
//! unchanged so the caller can report its cause.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::lead::{local_timestamp, new_lead_id, LeadRecord, LeadSubmission};
use crate::scoring::{Classification, ProbabilityScore, ScoreSource};
use crate::store::LeadStore;

/// Outcome of a successfully stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadReceipt {
    pub lead_id: String,
    pub probability: ProbabilityScore,
    pub classification: Classification,
}

/// Lead intake service wired to a store and a score source.
#[derive(Debug)]
pub struct LeadIntake<S, R> {
    store: S,
    scores: R,
}

impl<S, R> LeadIntake<S, R>
where
    S: LeadStore,
    R: ScoreSource,
{
    pub fn new(store: S, scores: R) -> Self {
        Self { store, scores }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse, score, and persist one submission body.
    pub async fn submit(&self, body: &str) -> Result<LeadReceipt> {
        let details = LeadSubmission::from_json(body)?.into_details();
        let probability = ProbabilityScore::try_from(self.scores.next_score())?;
        let record = LeadRecord::new(details, probability, new_lead_id(), local_timestamp());

        debug!(lead_id = %record.lead_id, "writing lead record");
        self.store.put_lead(&record).await?;

        let classification = probability.classification();
        info!(
            lead_id = %record.lead_id,
            probability = probability.value(),
            classification = %classification,
            "lead stored"
        );

        Ok(LeadReceipt {
            lead_id: record.lead_id,
            probability,
            classification,
        })
    }
}
