pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS judge (
  judge_id INTEGER PRIMARY KEY,
  name TEXT NOT NULL,
  email TEXT NOT NULL UNIQUE,
  password TEXT NOT NULL,
  weight REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS performer (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS scores (
  score_id INTEGER PRIMARY KEY AUTOINCREMENT,
  judge_id INTEGER NOT NULL REFERENCES judge(judge_id),
  performer_id INTEGER NOT NULL REFERENCES performer(id),
  presentation INTEGER NOT NULL,
  stage_presence INTEGER NOT NULL,
  choreography INTEGER NOT NULL,
  timing INTEGER NOT NULL,
  performance INTEGER NOT NULL,
  UNIQUE(judge_id, performer_id)
);

CREATE TABLE IF NOT EXISTS event_status (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  has_started INTEGER NOT NULL,
  event_datetime TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS current_performer (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  performer_id INTEGER NOT NULL REFERENCES performer(id),
  entry_timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_scores_performer ON scores(performer_id);
"#;
