//! In-memory history backend
//!
//! One append-only list per user behind a single lock. Ids come from a
//! store-wide counter, so they increase in save order across users.

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    now_ms, validate_fields, HistoryConfig, HistoryError, HistoryRecord, HistoryResult,
    HistoryStore, RecordId, TranslationKind,
};

#[derive(Debug, Default)]
struct Inner {
    last_id: RecordId,
    by_user: HashMap<String, VecDeque<HistoryRecord>>,
}

#[derive(Debug, Default)]
pub struct MemoryHistory {
    config: HistoryConfig,
    inner: RwLock<Inner>,
}

impl MemoryHistory {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(Inner::default()),
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Save with an explicit timestamp
    pub fn save_at(
        &self,
        user_id: &str,
        input: &str,
        output: &str,
        kind: TranslationKind,
        timestamp_ms: u64,
    ) -> HistoryResult<HistoryRecord> {
        validate_fields(user_id, input, output)?;

        let mut inner = self.inner.write();
        let id = inner.last_id.next();
        inner.last_id = id;

        let record = HistoryRecord {
            id,
            user_id: user_id.to_string(),
            input: input.to_string(),
            output: output.to_string(),
            kind,
            timestamp_ms,
        };

        let records = inner.by_user.entry(user_id.to_string()).or_default();
        records.push_back(record.clone());
        while records.len() > self.config.per_user_cap {
            records.pop_front();
            debug!("History for {} over cap, dropped oldest record", user_id);
        }

        Ok(record)
    }

    /// Records held for one user
    pub fn count(&self, user_id: &str) -> usize {
        self.inner
            .read()
            .by_user
            .get(user_id)
            .map_or(0, VecDeque::len)
    }

    /// Users with at least one record
    pub fn user_count(&self) -> usize {
        self.inner.read().by_user.len()
    }

    /// Remove all records for a user, returning how many were dropped
    pub fn clear_user(&self, user_id: &str) -> usize {
        self.inner
            .write()
            .by_user
            .remove(user_id)
            .map_or(0, |records| records.len())
    }
}

impl HistoryStore for MemoryHistory {
    fn save(
        &self,
        user_id: &str,
        input: &str,
        output: &str,
        kind: TranslationKind,
    ) -> HistoryResult<HistoryRecord> {
        self.save_at(user_id, input, output, kind, now_ms())
    }

    fn history(&self, user_id: &str, limit: Option<usize>) -> HistoryResult<Vec<HistoryRecord>> {
        if user_id.trim().is_empty() {
            return Err(HistoryError::MissingField("user_id"));
        }
        let limit = self.config.effective_limit(limit);

        let inner = self.inner.read();
        Ok(inner
            .by_user
            .get(user_id)
            .map(|records| records.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
