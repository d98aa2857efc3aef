//! Persistence seam for lead records.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use crate::error::Result;
use crate::lead::LeadRecord;

/// Key-value store holding lead records keyed by `leadId`.
///
/// `put_lead` is an unconditional create-or-overwrite; no uniqueness check is
/// made against existing keys.
pub trait LeadStore: Send + Sync {
    fn put_lead(&self, record: &LeadRecord) -> impl Future<Output = Result<()>> + Send;
}

/// In-process store for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    records: Mutex<HashMap<String, LeadRecord>>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, lead_id: &str) -> Option<LeadRecord> {
        self.lock().get(lead_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of every stored record, in no particular order.
    pub fn records(&self) -> Vec<LeadRecord> {
        self.lock().values().cloned().collect()
    }

    // A panic while holding the lock leaves the map intact; keep serving it.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, LeadRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LeadStore for MemoryLeadStore {
    async fn put_lead(&self, record: &LeadRecord) -> Result<()> {
        self.lock().insert(record.lead_id.clone(), record.clone());
        Ok(())
    }
}
