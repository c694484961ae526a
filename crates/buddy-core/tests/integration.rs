use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use buddy_core::keywords::{CRISIS_HOTLINE, DEFAULT_RESPONSE, GREETINGS, TIP_SEPARATOR};
use buddy_core::*;
use buddy_memory::{ChatLog, ScenarioStore, SqliteStore, StoreError, StoreResult};
use buddy_schema::{Category, ChatMessage, NewScenario, PsychScenario, Role};
use tokio_util::sync::CancellationToken;

/// Keyword classifier that counts how often it is consulted.
#[derive(Default)]
struct CountingClassifier {
    inner: KeywordClassifier,
    calls: AtomicUsize,
}

impl Classifier for CountingClassifier {
    fn classify(&self, text: &str) -> Option<Category> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.classify(text)
    }
}

struct FailingStore;

#[async_trait]
impl ScenarioStore for FailingStore {
    async fn find_by_keyword(&self, _keyword: &str) -> StoreResult<Option<PsychScenario>> {
        Err(StoreError::Unavailable("forced failure".into()))
    }

    async fn find_random_by_category(
        &self,
        _category: Category,
    ) -> StoreResult<Option<PsychScenario>> {
        Err(StoreError::Unavailable("forced failure".into()))
    }

    async fn list_by_category(&self, _category: Category) -> StoreResult<Vec<PsychScenario>> {
        Err(StoreError::Unavailable("forced failure".into()))
    }

    async fn count(&self) -> StoreResult<usize> {
        Err(StoreError::Unavailable("forced failure".into()))
    }

    async fn replace_all(&self, _scenarios: Vec<NewScenario>) -> StoreResult<usize> {
        Err(StoreError::Unavailable("forced failure".into()))
    }
}

/// Answers every lookup with a matching scenario, but only after `delay`.
struct SlowStore {
    delay: Duration,
}

impl SlowStore {
    fn scenario(&self, category: Category) -> PsychScenario {
        PsychScenario {
            id: 1,
            category,
            trigger: "slow".into(),
            response: "too late".into(),
            tips: String::new(),
        }
    }
}

#[async_trait]
impl ScenarioStore for SlowStore {
    async fn find_by_keyword(&self, _keyword: &str) -> StoreResult<Option<PsychScenario>> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(self.scenario(Category::Depression)))
    }

    async fn find_random_by_category(
        &self,
        category: Category,
    ) -> StoreResult<Option<PsychScenario>> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(self.scenario(category)))
    }

    async fn list_by_category(&self, _category: Category) -> StoreResult<Vec<PsychScenario>> {
        Ok(Vec::new())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(0)
    }

    async fn replace_all(&self, scenarios: Vec<NewScenario>) -> StoreResult<usize> {
        Ok(scenarios.len())
    }
}

struct FailingChatLog;

#[async_trait]
impl ChatLog for FailingChatLog {
    async fn append(
        &self,
        _session_id: &str,
        _role: Role,
        _content: &str,
    ) -> StoreResult<ChatMessage> {
        Err(StoreError::Unavailable("chat log down".into()))
    }

    async fn read_history(&self, _session_id: &str, _limit: usize) -> StoreResult<Vec<ChatMessage>> {
        Err(StoreError::Unavailable("chat log down".into()))
    }
}

fn new_scenario(category: Category, trigger: &str, response: &str, tips: &str) -> NewScenario {
    NewScenario {
        category,
        trigger: trigger.into(),
        response: response.into(),
        tips: tips.into(),
    }
}

async fn seeded_store() -> Arc<SqliteStore> {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let report = seed_scenarios(store.as_ref(), false).await.unwrap();
    assert_eq!(
        report,
        SeedReport::Replaced {
            inserted: SEED_SCENARIOS.len()
        }
    );
    store
}

fn engine_over(store: Arc<SqliteStore>) -> ChatEngine {
    ChatEngine::new(store.clone(), store, &EngineConfig::default())
}

fn expected_text(scenario: &PsychScenario) -> String {
    format!("{}{}{}", scenario.response, TIP_SEPARATOR, scenario.tips)
}

#[tokio::test]
async fn crisis_message_skips_classifier_and_uses_crisis_scenario() {
    let store = seeded_store().await;
    let classifier = Arc::new(CountingClassifier::default());
    let engine = ChatEngine::with_classifier(
        store.clone(),
        store.clone(),
        classifier.clone(),
        &EngineConfig::default(),
    );

    for text in ["Tôi muốn chết", "toi khong muon song nua", "Mình nghĩ đến TỰ TỬ"] {
        let reply = engine.handle_turn("s1", text).await;
        assert!(reply.response.contains(CRISIS_HOTLINE), "{text}");
        assert_eq!(
            reply.route,
            Route::Crisis {
                from_scenario: true
            }
        );
    }
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);

    let crisis = store.find_by_keyword("tu tu").await.unwrap().unwrap();
    let reply = engine.handle_turn("s1", "ket thuc tat ca").await;
    assert_eq!(reply.response, expected_text(&crisis));
}

#[tokio::test]
async fn crisis_falls_back_to_builtin_text_when_store_fails() {
    let classifier = Arc::new(CountingClassifier::default());
    let engine = ChatEngine::with_classifier(
        Arc::new(FailingStore),
        Arc::new(SqliteStore::open_in_memory().unwrap()),
        classifier.clone(),
        &EngineConfig::default(),
    );

    let reply = engine.handle_turn("s1", "toi muon tu lam hai").await;
    assert_eq!(
        reply.route,
        Route::Crisis {
            from_scenario: false
        }
    );
    assert!(reply.response.contains(CRISIS_HOTLINE));
    assert!(reply.response.contains("mien phi, 24/7"));
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn exam_stress_message_gets_matching_trigger_scenario() {
    let store = seeded_store().await;
    let expected = store.find_by_keyword("kiem tra").await.unwrap().unwrap();
    assert_eq!(expected.category, Category::Stress);

    let engine = engine_over(store);
    let reply = engine
        .handle_turn("s1", "Tôi bị stress vì bài kiểm tra sắp tới")
        .await;

    assert_eq!(reply.response, expected_text(&expected));
    assert_eq!(
        reply.route,
        Route::TriggerMatch {
            keyword: "kiem tra".into(),
            scenario_id: expected.id,
        }
    );
}

#[tokio::test]
async fn greeting_without_category_keywords() {
    let engine = engine_over(seeded_store().await);
    let reply = engine.handle_turn("s1", "xin chao").await;
    assert_eq!(reply.response, GREETINGS[0].1);
    assert_eq!(
        reply.route,
        Route::Greeting {
            keyword: "xin chao".into()
        }
    );
}

#[tokio::test]
async fn unmatched_message_gets_default_text() {
    let store = seeded_store().await;
    let classifier = Arc::new(CountingClassifier::default());
    let engine = ChatEngine::with_classifier(
        store.clone(),
        store,
        classifier.clone(),
        &EngineConfig::default(),
    );

    let reply = engine.handle_turn("s1", "qwerty zxcv").await;
    assert_eq!(reply.response, DEFAULT_RESPONSE);
    assert_eq!(reply.route, Route::Default);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn trigger_scenario_from_other_category_is_ignored() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    store
        .replace_all(vec![
            new_scenario(Category::Stress, "ngu khong du vi hoc", "stress-row", "a"),
            new_scenario(Category::Sleep, "dem trang", "sleep-row", "b"),
        ])
        .await
        .unwrap();
    let sleep_row = store
        .list_by_category(Category::Sleep)
        .await
        .unwrap()
        .remove(0);

    let selection = engine_over(store).selector().select("toi mat ngu").await;
    assert_eq!(selection.category, Some(Category::Sleep));
    assert_eq!(selection.text, "sleep-row\n\n Meo: b");
    assert_eq!(
        selection.route,
        Route::CategoryFallback {
            category: Category::Sleep,
            scenario_id: sleep_row.id,
        }
    );
}

#[tokio::test]
async fn classified_category_without_scenarios_falls_to_greeting() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let selection = engine_over(store)
        .selector()
        .select("hay quen bai hoc")
        .await;
    assert_eq!(selection.category, Some(Category::Focus));
    assert_eq!(
        selection.route,
        Route::Greeting {
            keyword: "hoc".into()
        }
    );
}

#[tokio::test]
async fn failing_store_degrades_to_default() {
    let engine = ChatEngine::new(
        Arc::new(FailingStore),
        Arc::new(SqliteStore::open_in_memory().unwrap()),
        &EngineConfig::default(),
    );
    let reply = engine.handle_turn("s1", "Tôi bị stress vì bài kiểm tra").await;
    assert_eq!(reply.response, DEFAULT_RESPONSE);
    assert_eq!(reply.route, Route::Default);
}

#[tokio::test]
async fn dropped_scenario_table_degrades_like_a_miss() {
    let store = seeded_store().await;
    {
        let db = store.db();
        let conn = db.lock().unwrap();
        conn.execute_batch("DROP TABLE psych_scenarios").unwrap();
    }
    let reply = engine_over(store).handle_turn("s1", "xin chao, minh bi stress").await;
    assert_eq!(reply.response, GREETINGS[0].1);
}

#[tokio::test]
async fn slow_store_times_out_and_degrades() {
    let config = EngineConfig {
        store_timeout_ms: 20,
        ..EngineConfig::default()
    };
    let engine = ChatEngine::new(
        Arc::new(SlowStore {
            delay: Duration::from_secs(5),
        }),
        Arc::new(SqliteStore::open_in_memory().unwrap()),
        &config,
    );

    let reply = engine.handle_turn("s1", "minh thay ap luc qua").await;
    assert_eq!(
        reply.route,
        Route::Greeting {
            keyword: "ap luc".into()
        }
    );

    let crisis = engine.handle_turn("s1", "muon chet").await;
    assert_eq!(
        crisis.route,
        Route::Crisis {
            from_scenario: false
        }
    );
}

#[tokio::test]
async fn selection_is_deterministic_for_trigger_matches() {
    let engine = engine_over(seeded_store().await);
    let first = engine.selector().select("bo me ap luc thi cu").await;
    for _ in 0..20 {
        assert_eq!(engine.selector().select("bo me ap luc thi cu").await, first);
    }
}

#[tokio::test]
async fn equal_scores_pick_first_category_in_order() {
    let engine = engine_over(seeded_store().await);
    for _ in 0..10 {
        let selection = engine.selector().select("stress va lo lang").await;
        assert_eq!(selection.category, Some(Category::Stress));
    }
}

#[tokio::test]
async fn category_fallback_stays_within_category() {
    let store = seeded_store().await;
    let loneliness: Vec<i64> = store
        .list_by_category(Category::Loneliness)
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    let engine = engine_over(store);

    for _ in 0..10 {
        let selection = engine.selector().select("minh thay le loi").await;
        match selection.route {
            Route::CategoryFallback {
                category,
                scenario_id,
            } => {
                assert_eq!(category, Category::Loneliness);
                assert!(loneliness.contains(&scenario_id));
            }
            other => panic!("unexpected route: {other:?}"),
        }
    }
}

#[tokio::test]
async fn turn_is_logged_in_order() {
    let engine = engine_over(seeded_store().await);
    let reply = engine.handle_turn("session-a", "xin chao").await;
    engine.handle_turn("session-b", "hello").await;

    let history = engine.history("session-a", 50).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[0].content, "xin chao");
    assert_eq!(history[1].role, Role::Assistant);
    assert_eq!(history[1].content, reply.response);
}

#[tokio::test]
async fn append_then_read_returns_message_last() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.append("s1", Role::Assistant, "earlier").await.unwrap();
    store.append("s1", Role::User, "Tôi ổn").await.unwrap();

    let history = store.read_history("s1", 10).await.unwrap();
    let last = history.last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "Tôi ổn");
}

#[tokio::test]
async fn chat_log_failure_does_not_block_reply() {
    let store = seeded_store().await;
    let engine = ChatEngine::new(store, Arc::new(FailingChatLog), &EngineConfig::default());

    let reply = engine.handle_turn("s1", "xin chao").await;
    assert_eq!(reply.response, GREETINGS[0].1);
    assert!(matches!(
        engine.history("s1", 10).await,
        Err(TurnError::Store(_))
    ));
}

#[tokio::test]
async fn cancelled_turn_returns_error_without_reply() {
    let engine = engine_over(seeded_store().await);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = engine
        .handle_turn_cancellable("s1", "xin chao", cancel)
        .await;
    assert!(matches!(result, Err(TurnError::Cancelled)));

    let history = engine.history("s1", 10).await.unwrap();
    assert!(history.iter().all(|m| m.role != Role::Assistant));
}

#[tokio::test]
async fn cancelling_one_turn_leaves_others_running() {
    let config = EngineConfig {
        store_timeout_ms: 200,
        ..EngineConfig::default()
    };
    let engine = Arc::new(ChatEngine::new(
        Arc::new(SlowStore {
            delay: Duration::from_secs(5),
        }),
        Arc::new(SqliteStore::open_in_memory().unwrap()),
        &config,
    ));

    let cancel = CancellationToken::new();
    let slow = {
        let engine = Arc::clone(&engine);
        let cancel = cancel.clone();
        tokio::spawn(async move {
            engine
                .handle_turn_cancellable("s1", "minh bi stress", cancel)
                .await
        })
    };
    let other = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            engine
                .handle_turn_cancellable("s2", "xin chao", CancellationToken::new())
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    cancel.cancel();

    assert!(matches!(slow.await.unwrap(), Err(TurnError::Cancelled)));
    let other = other.await.unwrap().unwrap();
    assert_eq!(other.response, GREETINGS[0].1);
}

#[tokio::test]
async fn seeding_skips_then_forces() {
    let store = seeded_store().await;
    assert_eq!(store.count().await.unwrap(), SEED_SCENARIOS.len());

    let report = seed_scenarios(store.as_ref(), false).await.unwrap();
    assert_eq!(
        report,
        SeedReport::Skipped {
            existing: SEED_SCENARIOS.len()
        }
    );

    let report = seed_scenarios(store.as_ref(), true).await.unwrap();
    assert_eq!(
        report,
        SeedReport::Replaced {
            inserted: SEED_SCENARIOS.len()
        }
    );
    assert_eq!(store.count().await.unwrap(), SEED_SCENARIOS.len());
}

#[tokio::test]
async fn partial_store_is_reseeded() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    store
        .replace_all(vec![new_scenario(Category::Focus, "old", "old-row", "")])
        .await
        .unwrap();

    let report = seed_scenarios(store.as_ref(), false).await.unwrap();
    assert!(matches!(report, SeedReport::Replaced { .. }));
    assert!(store.find_by_keyword("old").await.unwrap().is_none());
}

#[tokio::test]
async fn seeding_reports_store_failure() {
    let err = seed_scenarios(&FailingStore, true).await.unwrap_err();
    assert!(format!("{err:#}").contains("forced failure"));
}

#[tokio::test]
async fn accented_seed_triggers_are_searchable_folded() {
    let store = seeded_store().await;
    let found = store.find_by_keyword("luoi bieng").await.unwrap().unwrap();
    assert_eq!(found.category, Category::Motivation);
    assert!(found.trigger.contains("lười"));
}
