//! Stock image search trait definition.
//!
//! The in-tree implementation is a fixed local library
//! ([`crate::media::FixedStockLibrary`]); a real provider integration would
//! implement the same trait. Any substitute must preserve the contract:
//! keyword-aware substring matching and a never-empty fallback when the
//! provider's catalog is non-empty.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One stock photo candidate offered to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockImage {
    pub id: String,
    pub url: String,
    /// Display name, also the default media name when the user picks this.
    pub name: String,
    pub photographer: String,
}

/// Searchable source of stock photo candidates.
#[async_trait]
pub trait StockImagePort: Send + Sync {
    /// Candidates matching `query`, falling back to a non-empty default
    /// selection when nothing matches.
    async fn search(&self, query: &str) -> Vec<StockImage>;
}
