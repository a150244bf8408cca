//! # decora-store: Storage Layer for the Decora Estimator
//!
//! This crate persists the last completed calculation. It exposes a
//! key-value storage port, two implementations of it, and the
//! repository that (de)serializes the saved result.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Decora Data Flow                                  │
//! │                                                                         │
//! │  Estimator flow (CLI / frontend bridge)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    decora-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌───────────────┐  │   │
//! │  │   │     port      │   │     sqlite     │   │    results    │  │   │
//! │  │   │ KeyValueStore │◄──│  SqliteStore   │   │ ResultRepo    │  │   │
//! │  │   │ InMemoryStore │   │  StoreConfig   │   │ (fixed key)   │  │   │
//! │  │   └───────────────┘   └────────────────┘   └───────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (on-device) or process memory (tests)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`port`] - The `KeyValueStore` trait and the in-memory implementation
//! - [`sqlite`] - SQLite-backed implementation with pool configuration
//! - [`results`] - The saved-result repository over a single fixed key
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use decora_store::{ResultRepository, SqliteStore, StoreConfig};
//!
//! let store = SqliteStore::open(StoreConfig::new("decora.db")).await?;
//! let repo = ResultRepository::new(Arc::new(store));
//!
//! let previous = repo.load_last().await; // None on first run
//! repo.save(&result).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod port;
pub mod results;
pub mod sqlite;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use port::{InMemoryStore, KeyValueStore};
pub use results::{ResultRepository, RESULT_KEY};
pub use sqlite::{SqliteStore, StoreConfig};
