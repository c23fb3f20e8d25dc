//! History store trait and configuration

use serde::{Deserialize, Serialize};

use crate::{HistoryError, HistoryRecord, HistoryResult, TranslationKind};

/// Paging and retention limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Page size when the caller gives none
    pub default_limit: usize,
    /// Largest page a caller may request
    pub max_limit: usize,
    /// Records kept per user; older ones are dropped
    pub per_user_cap: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
            per_user_cap: 1000,
        }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> HistoryResult<()> {
        if self.default_limit == 0 || self.max_limit == 0 || self.per_user_cap == 0 {
            return Err(HistoryError::InvalidConfig(
                "limits and per-user cap must be positive".to_string(),
            ));
        }
        if self.default_limit > self.max_limit {
            return Err(HistoryError::InvalidConfig(format!(
                "default_limit {} exceeds max_limit {}",
                self.default_limit, self.max_limit
            )));
        }
        Ok(())
    }

    /// Page size for a request: the default when absent, clamped to `1..=max_limit`
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit.max(1))
    }
}

/// Where translations are recorded
pub trait HistoryStore: Send + Sync {
    /// Append a record. User id, input and output must be non-empty.
    fn save(
        &self,
        user_id: &str,
        input: &str,
        output: &str,
        kind: TranslationKind,
    ) -> HistoryResult<HistoryRecord>;

    /// Newest first, at most `limit` records (config default when `None`)
    fn history(&self, user_id: &str, limit: Option<usize>) -> HistoryResult<Vec<HistoryRecord>>;
}

/// Reject blank required fields, naming the first one missing
pub fn validate_fields(user_id: &str, input: &str, output: &str) -> HistoryResult<()> {
    let fields = [("user_id", user_id), ("input", input), ("output", output)];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(HistoryError::MissingField(name));
        }
    }
    Ok(())
}
