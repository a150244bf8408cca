//! # Saved-Result Repository
//!
//! Persists the last completed calculation under a single fixed key.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Saved-Result Lifecycle                               │
//! │                                                                         │
//! │  Flow start ────► load_last() ──► get(KEY) ──► JSON ──► Result         │
//! │                        │                                                │
//! │                        ├── key absent        → None                     │
//! │                        ├── backend failed    → warn! + None             │
//! │                        └── malformed JSON    → warn! + None             │
//! │                                                                         │
//! │  Flow complete ─► save(result) ─► JSON ──► set(KEY, json)              │
//! │                        │                                                │
//! │                        └── create-or-replace; at most one result       │
//! │                            exists at a time, no append, no delete      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A previous result is a UX affordance, not a dependency: pricing and
//! validation never touch storage, so nothing downstream can fail
//! because a read did.

use std::sync::Arc;

use tracing::{debug, warn};

use decora_core::types::CalculatorResult;

use crate::error::StoreResult;
use crate::port::KeyValueStore;

/// The single fixed key the saved result lives under.
pub const RESULT_KEY: &str = "@interior_calculator_result";

/// Repository for the last completed calculation.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ResultRepository::new(store);
///
/// if let Some(previous) = repo.load_last().await {
///     // pre-fill the checklist from previous.requirements
/// }
///
/// repo.save(&result).await?;
/// ```
#[derive(Clone)]
pub struct ResultRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ResultRepository {
    /// Creates a repository over an injected storage port.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        ResultRepository { store }
    }

    /// Loads the previously saved result, if one exists and parses.
    ///
    /// Every failure mode degrades to `None`: a missing key, an
    /// unreachable backend, and a malformed stored value all mean
    /// "no previous result". Failures are logged, never returned.
    pub async fn load_last(&self) -> Option<CalculatorResult> {
        let raw = match self.store.get(RESULT_KEY).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "Failed to read saved result, treating as absent");
                return None;
            }
        };

        match serde_json::from_str::<CalculatorResult>(&raw) {
            Ok(result) => {
                debug!(bhk_type = %result.bhk_type, "Loaded saved result");
                Some(result)
            }
            Err(err) => {
                warn!(error = %err, "Saved result is malformed, treating as absent");
                None
            }
        }
    }

    /// Persists a result, replacing any previous one.
    ///
    /// Write failures are returned to the caller; no retries happen
    /// here.
    pub async fn save(&self, result: &CalculatorResult) -> StoreResult<()> {
        let json = serde_json::to_string(result)?;
        self.store.set(RESULT_KEY, &json).await?;

        debug!(bhk_type = %result.bhk_type, "Saved calculation result");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::InMemoryStore;

    use chrono::{TimeZone, Utc};
    use decora_core::estimate::calculate_all_estimates;
    use decora_core::types::{LineItemId, PropertyType, RequirementSet};

    fn sample_result() -> CalculatorResult {
        let requirements = RequirementSet::new()
            .with(LineItemId::Kitchen, 1)
            .with(LineItemId::Wardrobe, 3);
        let estimates = calculate_all_estimates(&requirements);
        let completed_at = Utc.timestamp_millis_opt(1_722_860_000_000).unwrap();

        CalculatorResult::new(PropertyType::ThreeBhk, requirements, estimates, completed_at)
    }

    #[tokio::test]
    async fn test_load_without_save_is_none() {
        let repo = ResultRepository::new(Arc::new(InMemoryStore::new()));
        assert_eq!(repo.load_last().await, None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let repo = ResultRepository::new(Arc::new(InMemoryStore::new()));
        let result = sample_result();

        repo.save(&result).await.unwrap();
        assert_eq!(repo.load_last().await, Some(result));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_result() {
        let repo = ResultRepository::new(Arc::new(InMemoryStore::new()));

        repo.save(&sample_result()).await.unwrap();

        let requirements = RequirementSet::new().with(LineItemId::Kitchen, 1);
        let replacement = CalculatorResult::new(
            PropertyType::OneBhk,
            requirements.clone(),
            calculate_all_estimates(&requirements),
            Utc.timestamp_millis_opt(1_722_870_000_000).unwrap(),
        );
        repo.save(&replacement).await.unwrap();

        assert_eq!(repo.load_last().await, Some(replacement));
    }

    #[tokio::test]
    async fn test_malformed_stored_json_is_absent() {
        let store = Arc::new(InMemoryStore::new());
        store.set(RESULT_KEY, "{definitely not json").await.unwrap();

        let repo = ResultRepository::new(store);
        assert_eq!(repo.load_last().await, None);
    }

    #[tokio::test]
    async fn test_wire_shape_on_disk() {
        let store = Arc::new(InMemoryStore::new());
        let repo = ResultRepository::new(store.clone());

        repo.save(&sample_result()).await.unwrap();

        let raw = store.get(RESULT_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["bhkType"], "3BHK");
        assert_eq!(json["requirements"]["wardrobe"], 3);
        assert!(json["estimates"]["essential"].is_u64());
        assert!(json["timestamp"].is_i64());
    }
}
