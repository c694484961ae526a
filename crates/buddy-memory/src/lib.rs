//! Persistence for curated scenarios and per-session chat logs.

use async_trait::async_trait;
use buddy_schema::{Category, ChatMessage, NewScenario, PsychScenario, Role};

mod error;
pub mod migrations;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::SqliteStore;

/// Read access to curated scenarios, plus the bulk replace used by seeding.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    /// First scenario (lowest id) whose folded trigger contains the folded
    /// `keyword`. An empty keyword matches nothing.
    async fn find_by_keyword(&self, keyword: &str) -> StoreResult<Option<PsychScenario>>;

    /// Uniformly random scenario of `category`, or `None` when it has no rows.
    async fn find_random_by_category(
        &self,
        category: Category,
    ) -> StoreResult<Option<PsychScenario>>;

    async fn list_by_category(&self, category: Category) -> StoreResult<Vec<PsychScenario>>;

    async fn count(&self) -> StoreResult<usize>;

    /// Atomically delete every scenario and insert `scenarios`. On failure the
    /// previous contents are left untouched.
    async fn replace_all(&self, scenarios: Vec<NewScenario>) -> StoreResult<usize>;
}

/// Append-only conversation log keyed by session id.
#[async_trait]
pub trait ChatLog: Send + Sync {
    async fn append(&self, session_id: &str, role: Role, content: &str)
        -> StoreResult<ChatMessage>;

    /// The most recent `limit` messages of a session, oldest first.
    async fn read_history(&self, session_id: &str, limit: usize) -> StoreResult<Vec<ChatMessage>>;
}
