use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use buddy_memory::{ScenarioStore, StoreError, StoreResult};
use buddy_schema::{normalize, Category, PsychScenario};
use serde::Serialize;

use crate::classifier::Classifier;
use crate::detector::EmergencyDetector;
use crate::keywords::{
    CRISIS_FALLBACK_RESPONSE, CRISIS_LOOKUP_KEYWORD, DEFAULT_RESPONSE, GREETINGS,
    TIP_SEPARATOR, TRIGGER_KEYWORDS,
};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Terminal state the selector reached for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Crisis { from_scenario: bool },
    TriggerMatch { keyword: String, scenario_id: i64 },
    CategoryFallback { category: Category, scenario_id: i64 },
    Greeting { keyword: String },
    Default,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crisis { .. } => "crisis",
            Self::TriggerMatch { .. } => "trigger_match",
            Self::CategoryFallback { .. } => "category_fallback",
            Self::Greeting { .. } => "greeting",
            Self::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub text: String,
    pub route: Route,
    /// `None` for crisis turns (never classified) and unclassified messages.
    pub category: Option<Category>,
}

#[derive(Debug)]
enum State {
    Start,
    EmergencyCheck,
    Crisis,
    Classify,
    TriggerMatch(Category),
    CategoryFallback(Category),
    NoCategory,
    Greeting,
    Default,
    Responded(Selection),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::EmergencyCheck => "emergency_check",
            Self::Crisis => "crisis",
            Self::Classify => "classify",
            Self::TriggerMatch(_) => "trigger_match",
            Self::CategoryFallback(_) => "category_fallback",
            Self::NoCategory => "no_category",
            Self::Greeting => "greeting",
            Self::Default => "default",
            Self::Responded(_) => "responded",
        }
    }
}

/// Picks the reply for one message. Holds no per-message state, so one
/// instance serves any number of concurrent turns.
pub struct ResponseSelector {
    store: Arc<dyn ScenarioStore>,
    classifier: Arc<dyn Classifier>,
    detector: EmergencyDetector,
    store_timeout: Duration,
}

impl ResponseSelector {
    pub fn new(
        store: Arc<dyn ScenarioStore>,
        classifier: Arc<dyn Classifier>,
        detector: EmergencyDetector,
    ) -> Self {
        Self {
            store,
            classifier,
            detector,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub async fn select(&self, text: &str) -> Selection {
        let folded = normalize(text);
        let mut category = None;
        let mut state = State::Start;

        loop {
            tracing::debug!(state = state.name(), "selector step");
            state = match state {
                State::Start => State::EmergencyCheck,
                State::EmergencyCheck => {
                    if self.detector.is_emergency(&folded) {
                        State::Crisis
                    } else {
                        State::Classify
                    }
                }
                State::Crisis => State::Responded(self.crisis().await),
                State::Classify => match self.classifier.classify(&folded) {
                    Some(found) => {
                        category = Some(found);
                        State::TriggerMatch(found)
                    }
                    None => State::NoCategory,
                },
                State::TriggerMatch(cat) => match self.trigger_match(&folded, cat).await {
                    Some((keyword, scenario)) => State::Responded(Selection {
                        text: with_tips(&scenario),
                        route: Route::TriggerMatch {
                            keyword: keyword.to_owned(),
                            scenario_id: scenario.id,
                        },
                        category,
                    }),
                    None => State::CategoryFallback(cat),
                },
                State::CategoryFallback(cat) => {
                    let found = self
                        .bounded("find_random_by_category", self.store.find_random_by_category(cat))
                        .await;
                    match found {
                        Some(scenario) => State::Responded(Selection {
                            text: with_tips(&scenario),
                            route: Route::CategoryFallback {
                                category: cat,
                                scenario_id: scenario.id,
                            },
                            category,
                        }),
                        None => State::Greeting,
                    }
                }
                State::NoCategory => State::Greeting,
                State::Greeting => match GREETINGS.iter().find(|(kw, _)| folded.contains(kw)) {
                    Some((keyword, reply)) => State::Responded(Selection {
                        text: (*reply).to_owned(),
                        route: Route::Greeting {
                            keyword: (*keyword).to_owned(),
                        },
                        category,
                    }),
                    None => State::Default,
                },
                State::Default => State::Responded(Selection {
                    text: DEFAULT_RESPONSE.to_owned(),
                    route: Route::Default,
                    category,
                }),
                State::Responded(selection) => {
                    tracing::debug!(route = selection.route.name(), "selector responded");
                    return selection;
                }
            };
        }
    }

    async fn crisis(&self) -> Selection {
        let found = self
            .bounded(
                "find_by_keyword",
                self.store.find_by_keyword(CRISIS_LOOKUP_KEYWORD),
            )
            .await;
        match found {
            Some(scenario) => Selection {
                text: with_tips(&scenario),
                route: Route::Crisis {
                    from_scenario: true,
                },
                category: None,
            },
            None => Selection {
                text: CRISIS_FALLBACK_RESPONSE.to_owned(),
                route: Route::Crisis {
                    from_scenario: false,
                },
                category: None,
            },
        }
    }

    /// Tries every trigger keyword present in the message, in list order, and
    /// keeps the first scenario whose category agrees with the classification.
    async fn trigger_match(
        &self,
        folded: &str,
        category: Category,
    ) -> Option<(&'static str, PsychScenario)> {
        for keyword in TRIGGER_KEYWORDS.iter().copied() {
            if !folded.contains(keyword) {
                continue;
            }
            let found = self
                .bounded("find_by_keyword", self.store.find_by_keyword(keyword))
                .await;
            match found {
                Some(scenario) if scenario.category == category => {
                    return Some((keyword, scenario));
                }
                Some(scenario) => {
                    tracing::debug!(
                        keyword,
                        classified = %category,
                        stored = %scenario.category,
                        "trigger scenario category mismatch"
                    );
                }
                None => {}
            }
        }
        None
    }

    /// Runs a store call under the timeout. Failures and timeouts degrade to
    /// `None`, the same as a miss.
    async fn bounded<T, F>(&self, op: &'static str, call: F) -> Option<T>
    where
        F: Future<Output = StoreResult<Option<T>>>,
    {
        let err = match tokio::time::timeout(self.store_timeout, call).await {
            Ok(Ok(found)) => return found,
            Ok(Err(err)) => err,
            Err(_) => StoreError::Timeout(self.store_timeout),
        };
        tracing::warn!(op, error = %err, "scenario store unavailable, falling through");
        None
    }
}

fn with_tips(scenario: &PsychScenario) -> String {
    if scenario.tips.trim().is_empty() {
        return scenario.response.clone();
    }
    format!("{}{}{}", scenario.response, TIP_SEPARATOR, scenario.tips)
}
