use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use buddy_schema::{normalize, Category, ChatMessage, NewScenario, PsychScenario, Role};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::task;

use crate::migrations::run_migrations;
use crate::{ChatLog, ScenarioStore, StoreError, StoreResult};

const SCENARIO_COLUMNS: &str = "id, category, trigger_phrase, response, tips";

/// SQLite-backed implementation of both [`ScenarioStore`] and [`ChatLog`].
#[derive(Clone)]
pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        run_migrations(&conn)?;
        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn db(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.db)
    }

    async fn with_conn<T, F>(&self, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || {
            let conn = db
                .lock()
                .map_err(|_| StoreError::Unavailable("failed to lock sqlite connection".into()))?;
            f(&conn)
        })
        .await?
    }
}

#[async_trait]
impl ScenarioStore for SqliteStore {
    async fn find_by_keyword(&self, keyword: &str) -> StoreResult<Option<PsychScenario>> {
        let folded = normalize(keyword.trim());
        if folded.is_empty() {
            return Ok(None);
        }
        self.with_conn(move |conn| {
            let sql = format!(
                "SELECT {SCENARIO_COLUMNS} FROM psych_scenarios
                 WHERE instr(trigger_folded, ?1) > 0
                 ORDER BY id ASC LIMIT 1"
            );
            let found = conn
                .query_row(&sql, params![folded], row_to_scenario)
                .optional()?;
            Ok(found)
        })
        .await
    }

    async fn find_random_by_category(
        &self,
        category: Category,
    ) -> StoreResult<Option<PsychScenario>> {
        self.with_conn(move |conn| {
            let sql = format!(
                "SELECT {SCENARIO_COLUMNS} FROM psych_scenarios
                 WHERE category = ?1
                 ORDER BY RANDOM() LIMIT 1"
            );
            let found = conn
                .query_row(&sql, params![category.as_str()], row_to_scenario)
                .optional()?;
            Ok(found)
        })
        .await
    }

    async fn list_by_category(&self, category: Category) -> StoreResult<Vec<PsychScenario>> {
        self.with_conn(move |conn| {
            let sql = format!(
                "SELECT {SCENARIO_COLUMNS} FROM psych_scenarios
                 WHERE category = ?1
                 ORDER BY id ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![category.as_str()], row_to_scenario)?;
            let scenarios = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(scenarios)
        })
        .await
    }

    async fn count(&self) -> StoreResult<usize> {
        self.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM psych_scenarios", [], |row| {
                row.get(0)
            })?;
            Ok(n.max(0) as usize)
        })
        .await
    }

    async fn replace_all(&self, scenarios: Vec<NewScenario>) -> StoreResult<usize> {
        self.with_conn(move |conn| {
            let tx = conn.unchecked_transaction()?;
            tx.execute("DELETE FROM psych_scenarios", [])?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO psych_scenarios
                        (category, trigger_phrase, trigger_folded, response, tips)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for s in &scenarios {
                    stmt.execute(params![
                        s.category.as_str(),
                        s.trigger,
                        normalize(&s.trigger),
                        s.response,
                        s.tips,
                    ])?;
                }
            }
            tx.commit()?;
            Ok(scenarios.len())
        })
        .await
    }
}

#[async_trait]
impl ChatLog for SqliteStore {
    async fn append(
        &self,
        session_id: &str,
        role: Role,
        content: &str,
    ) -> StoreResult<ChatMessage> {
        let session_id = session_id.to_owned();
        let content = content.to_owned();
        self.with_conn(move |conn| {
            let created_at = Utc::now();
            conn.execute(
                "INSERT INTO chat_messages (session_id, role, content, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    session_id,
                    role.as_str(),
                    content,
                    format_datetime_sql(&created_at),
                ],
            )?;
            Ok(ChatMessage {
                id: conn.last_insert_rowid(),
                session_id,
                role,
                content,
                created_at,
            })
        })
        .await
    }

    async fn read_history(&self, session_id: &str, limit: usize) -> StoreResult<Vec<ChatMessage>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let session_id = session_id.to_owned();
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, session_id, role, content, created_at FROM chat_messages
                 WHERE session_id = ?1
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?2",
            )?;
            let rows = stmt.query_map(
                params![session_id, i64::try_from(limit).unwrap_or(i64::MAX)],
                row_to_message,
            )?;
            let mut messages = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            messages.reverse();
            Ok(messages)
        })
        .await
    }
}

// Fixed-width UTC timestamps keep lexical order equal to chronological order.
fn format_datetime_sql(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime_sql(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn parse_text_sql<T>(idx: usize, raw: &str) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn row_to_scenario(row: &Row<'_>) -> rusqlite::Result<PsychScenario> {
    let category_raw: String = row.get(1)?;
    Ok(PsychScenario {
        id: row.get(0)?,
        category: parse_text_sql(1, &category_raw)?,
        trigger: row.get(2)?,
        response: row.get(3)?,
        tips: row.get(4)?,
    })
}

fn row_to_message(row: &Row<'_>) -> rusqlite::Result<ChatMessage> {
    let role_raw: String = row.get(2)?;
    let created_raw: String = row.get(4)?;
    Ok(ChatMessage {
        id: row.get(0)?,
        session_id: row.get(1)?,
        role: parse_text_sql(2, &role_raw)?,
        content: row.get(3)?,
        created_at: parse_datetime_sql(&created_raw)?,
    })
}
