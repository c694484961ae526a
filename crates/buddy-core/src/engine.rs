use std::sync::Arc;

use buddy_memory::{ChatLog, ScenarioStore, StoreError};
use buddy_schema::{ChatMessage, Role};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::classifier::{Classifier, KeywordClassifier};
use crate::config::EngineConfig;
use crate::detector::EmergencyDetector;
use crate::selector::{ResponseSelector, Route, Selection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReply {
    pub session_id: String,
    pub response: String,
    pub route: Route,
}

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("turn cancelled")]
    Cancelled,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Runs chat turns: logs the user message, selects a reply, logs the reply.
///
/// Inputs are expected to be validated already (see
/// [`buddy_schema::TurnRequest::validate`]).
pub struct ChatEngine {
    selector: ResponseSelector,
    chat_log: Arc<dyn ChatLog>,
}

impl ChatEngine {
    pub fn new(
        store: Arc<dyn ScenarioStore>,
        chat_log: Arc<dyn ChatLog>,
        config: &EngineConfig,
    ) -> Self {
        Self::with_classifier(store, chat_log, Arc::new(KeywordClassifier::default()), config)
    }

    pub fn with_classifier(
        store: Arc<dyn ScenarioStore>,
        chat_log: Arc<dyn ChatLog>,
        classifier: Arc<dyn Classifier>,
        config: &EngineConfig,
    ) -> Self {
        let selector = ResponseSelector::new(store, classifier, EmergencyDetector::default())
            .with_store_timeout(config.store_timeout());
        Self { selector, chat_log }
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    /// Always produces a reply; chat log failures are logged and skipped.
    pub async fn handle_turn(&self, session_id: &str, text: &str) -> TurnReply {
        let span = tracing::info_span!("turn", turn_id = %Uuid::new_v4(), session_id);
        async {
            let selection = self.respond(session_id, text).await;
            self.finish(session_id, selection).await
        }
        .instrument(span)
        .await
    }

    /// Like [`handle_turn`](Self::handle_turn), but gives up with
    /// [`TurnError::Cancelled`] if `cancel` fires before a reply is chosen.
    /// Once chosen, the reply is logged even if `cancel` fires afterwards.
    pub async fn handle_turn_cancellable(
        &self,
        session_id: &str,
        text: &str,
        cancel: CancellationToken,
    ) -> Result<TurnReply, TurnError> {
        let span = tracing::info_span!("turn", turn_id = %Uuid::new_v4(), session_id);
        async {
            let selection = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!("turn cancelled by caller");
                    return Err(TurnError::Cancelled);
                }
                selection = self.respond(session_id, text) => selection,
            };
            Ok(self.finish(session_id, selection).await)
        }
        .instrument(span)
        .await
    }

    /// The most recent `limit` messages of a session, oldest first.
    pub async fn history(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, TurnError> {
        Ok(self.chat_log.read_history(session_id, limit).await?)
    }

    async fn respond(&self, session_id: &str, text: &str) -> Selection {
        if let Err(err) = self.chat_log.append(session_id, Role::User, text).await {
            tracing::warn!(error = %err, "failed to log user message");
        }
        self.selector.select(text).await
    }

    async fn finish(&self, session_id: &str, selection: Selection) -> TurnReply {
        if let Err(err) = self
            .chat_log
            .append(session_id, Role::Assistant, &selection.text)
            .await
        {
            tracing::warn!(error = %err, "failed to log assistant reply");
        }
        tracing::info!(
            route = selection.route.name(),
            category = selection.category.map(|c| c.as_str()),
            "turn answered"
        );
        TurnReply {
            session_id: session_id.to_owned(),
            response: selection.text,
            route: selection.route,
        }
    }
}
