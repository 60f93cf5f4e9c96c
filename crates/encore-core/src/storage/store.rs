use crate::config::EventConfig;
use crate::errors::CoreError;
use crate::model::{Judge, JudgeSummary, Performer, ScoreRecord, ScoreSheet};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Everything the voting gate needs to decide, read under a single connection
/// lock so the answer reflects one consistent snapshot.
#[derive(Debug)]
pub struct GateView {
    pub judge_exists: bool,
    pub current_performer: Option<i64>,
    pub judge_ids: Vec<i64>,
    pub scored: HashSet<i64>,
}

/// One stored score joined with its judge and performer, the row shape both
/// the aggregation engine and the raw-scores view read from.
#[derive(Debug, Clone)]
pub struct JoinedScoreRow {
    pub performer_id: i64,
    pub performer_name: String,
    pub judge_id: i64,
    pub judge_name: String,
    pub sheet: ScoreSheet,
    pub weight: f64,
}

#[derive(Clone)]
pub struct Store {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(crate::storage::schema::DDL)?;
        Ok(())
    }

    // judges

    pub fn upsert_judge(&self, judge: &Judge) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO judge(judge_id, name, email, password, weight)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(judge_id) DO UPDATE SET
                name=excluded.name,
                email=excluded.email,
                password=excluded.password,
                weight=excluded.weight",
            params![
                judge.judge_id,
                judge.name,
                judge.email,
                judge.password,
                judge.weight
            ],
        )?;
        Ok(())
    }

    pub fn judge_exists(&self, judge_id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let found: Option<i64> = conn
            .query_row(
                "SELECT judge_id FROM judge WHERE judge_id = ?1",
                params![judge_id],
                |r| r.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn judge_by_email(&self, email: &str) -> Result<Option<Judge>> {
        let conn = self.conn.lock().unwrap();
        let judge = conn
            .query_row(
                "SELECT judge_id, name, email, password, weight FROM judge WHERE email = ?1",
                params![email],
                |r| {
                    Ok(Judge {
                        judge_id: r.get(0)?,
                        name: r.get(1)?,
                        email: r.get(2)?,
                        password: r.get(3)?,
                        weight: r.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(judge)
    }

    pub fn judge_summaries(&self) -> Result<Vec<JudgeSummary>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT judge_id, name FROM judge ORDER BY judge_id ASC")?;
        let rows = stmt.query_map([], |r| {
            Ok(JudgeSummary {
                judge_id: r.get(0)?,
                name: r.get(1)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    // performers

    pub fn upsert_performer(&self, performer: &Performer) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO performer(id, name) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET name=excluded.name",
            params![performer.id, performer.name],
        )?;
        Ok(())
    }

    pub fn performer_exists(&self, performer_id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let found: Option<i64> = conn
            .query_row(
                "SELECT id FROM performer WHERE id = ?1",
                params![performer_id],
                |r| r.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn performers(&self) -> Result<Vec<Performer>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name FROM performer ORDER BY id ASC")?;
        let rows = stmt.query_map([], |r| {
            Ok(Performer {
                id: r.get(0)?,
                name: r.get(1)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Seeds judges and performers from an event config in one transaction.
    /// Setup-time only; the core never mutates either table after that.
    pub fn seed(&self, cfg: &EventConfig) -> Result<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        for judge in &cfg.judges {
            tx.execute(
                "INSERT INTO judge(judge_id, name, email, password, weight)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(judge_id) DO UPDATE SET
                    name=excluded.name,
                    email=excluded.email,
                    password=excluded.password,
                    weight=excluded.weight",
                params![
                    judge.judge_id,
                    judge.name,
                    judge.email,
                    judge.password,
                    judge.weight
                ],
            )?;
        }
        for performer in &cfg.performers {
            tx.execute(
                "INSERT INTO performer(id, name) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET name=excluded.name",
                params![performer.id, performer.name],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    // scores

    pub fn has_score(&self, judge_id: i64, performer_id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let found: Option<i64> = conn
            .query_row(
                "SELECT score_id FROM scores WHERE judge_id = ?1 AND performer_id = ?2",
                params![judge_id, performer_id],
                |r| r.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Inserts exactly one record per (judge, performer) pair. The duplicate
    /// check and the insert run in one transaction, and the UNIQUE constraint
    /// backstops races: a concurrent double submit surfaces as
    /// `DuplicateSubmission`, never as two rows.
    pub fn insert_score(&self, record: &ScoreRecord) -> Result<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        let existing: Option<i64> = tx
            .query_row(
                "SELECT score_id FROM scores WHERE judge_id = ?1 AND performer_id = ?2",
                params![record.judge_id, record.performer_id],
                |r| r.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(CoreError::DuplicateSubmission);
        }
        let inserted = tx.execute(
            "INSERT INTO scores(judge_id, performer_id, presentation, stage_presence, choreography, timing, performance)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.judge_id,
                record.performer_id,
                record.sheet.presentation,
                record.sheet.stage_presence,
                record.sheet.choreography,
                record.sheet.timing,
                record.sheet.performance
            ],
        );
        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                return Err(CoreError::DuplicateSubmission);
            }
            Err(e) => return Err(e.into()),
        }
        tx.commit()?;
        Ok(())
    }

    pub fn count_scores(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM scores", [], |r| r.get(0))?;
        Ok(n)
    }

    pub fn score_rows(&self) -> Result<Vec<JoinedScoreRow>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT
                p.id, p.name,
                j.judge_id, j.name,
                s.presentation, s.stage_presence, s.choreography, s.timing, s.performance,
                j.weight
             FROM scores s
             JOIN performer p ON s.performer_id = p.id
             JOIN judge j ON s.judge_id = j.judge_id
             ORDER BY p.id ASC, j.judge_id ASC",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(JoinedScoreRow {
                performer_id: r.get(0)?,
                performer_name: r.get(1)?,
                judge_id: r.get(2)?,
                judge_name: r.get(3)?,
                sheet: ScoreSheet {
                    presentation: r.get(4)?,
                    stage_presence: r.get(5)?,
                    choreography: r.get(6)?,
                    timing: r.get(7)?,
                    performance: r.get(8)?,
                },
                weight: r.get(9)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    // event phase

    pub fn latest_phase(&self) -> Result<Option<bool>> {
        let conn = self.conn.lock().unwrap();
        let phase: Option<bool> = conn
            .query_row(
                "SELECT has_started FROM event_status
                 ORDER BY event_datetime DESC, id DESC
                 LIMIT 1",
                [],
                |r| r.get(0),
            )
            .optional()?;
        Ok(phase)
    }

    /// Flips the phase and appends the new entry. Transitioning to "started"
    /// clears all scores in the same transaction: no reader may ever observe
    /// a started event with stale scores.
    pub fn toggle_event_phase(&self) -> Result<bool> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        let current: Option<bool> = tx
            .query_row(
                "SELECT has_started FROM event_status
                 ORDER BY event_datetime DESC, id DESC
                 LIMIT 1",
                [],
                |r| r.get(0),
            )
            .optional()?;
        let new_status = !current.unwrap_or(false);
        tx.execute(
            "INSERT INTO event_status(has_started, event_datetime) VALUES (?1, ?2)",
            params![new_status, chrono::Utc::now().to_rfc3339()],
        )?;
        if new_status {
            tx.execute("DELETE FROM scores", [])?;
        }
        tx.commit()?;
        Ok(new_status)
    }

    // current performer

    pub fn set_current_performer(&self, performer_id: i64) -> Result<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        let found: Option<i64> = tx
            .query_row(
                "SELECT id FROM performer WHERE id = ?1",
                params![performer_id],
                |r| r.get(0),
            )
            .optional()?;
        if found.is_none() {
            return Err(CoreError::PerformerNotFound);
        }
        tx.execute(
            "INSERT INTO current_performer(performer_id, entry_timestamp) VALUES (?1, ?2)",
            params![performer_id, chrono::Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn current_performer(&self) -> Result<Option<Performer>> {
        let conn = self.conn.lock().unwrap();
        let performer = conn
            .query_row(
                "SELECT p.id, p.name
                 FROM current_performer cp
                 JOIN performer p ON cp.performer_id = p.id
                 ORDER BY cp.entry_timestamp DESC, cp.id DESC
                 LIMIT 1",
                [],
                |r| {
                    Ok(Performer {
                        id: r.get(0)?,
                        name: r.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(performer)
    }

    // voting gate

    pub fn gate_view(&self, judge_id: i64) -> Result<GateView> {
        let conn = self.conn.lock().unwrap();

        let judge_exists: bool = conn
            .query_row(
                "SELECT judge_id FROM judge WHERE judge_id = ?1",
                params![judge_id],
                |r| r.get::<_, i64>(0),
            )
            .optional()?
            .is_some();

        let current_performer: Option<i64> = conn
            .query_row(
                "SELECT performer_id FROM current_performer
                 ORDER BY entry_timestamp DESC, id DESC
                 LIMIT 1",
                [],
                |r| r.get(0),
            )
            .optional()?;

        let mut stmt = conn.prepare("SELECT judge_id FROM judge ORDER BY judge_id ASC")?;
        let id_rows = stmt.query_map([], |r| r.get::<_, i64>(0))?;
        let mut judge_ids = Vec::new();
        for r in id_rows {
            judge_ids.push(r?);
        }

        let mut scored = HashSet::new();
        if let Some(performer_id) = current_performer {
            let mut stmt =
                conn.prepare("SELECT judge_id FROM scores WHERE performer_id = ?1")?;
            let rows = stmt.query_map(params![performer_id], |r| r.get::<_, i64>(0))?;
            for r in rows {
                scored.insert(r?);
            }
        }

        Ok(GateView {
            judge_exists,
            current_performer,
            judge_ids,
            scored,
        })
    }
}
