use crate::model::game::Game;
use serde::Serialize;
use time::OffsetDateTime;

/// Normalized result of one game's most recent draw.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub ok: bool,
    pub game: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub draw_date: Option<OffsetDateTime>,
    pub numbers: Option<Vec<String>>,
    pub special: Option<String>,
    pub multiplier: Option<String>,
    pub jackpot: Option<u64>,
    pub cash_value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_draw: Option<String>,
    pub source: Option<&'static str>,
    pub error: Option<String>,
}

impl DrawRecord {
    pub fn new<S: Into<String>>(game: S, source: &'static str) -> Self {
        DrawRecord {
            ok: true,
            game: game.into(),
            draw_date: None,
            numbers: None,
            special: None,
            multiplier: None,
            jackpot: None,
            cash_value: None,
            next_draw: None,
            source: Some(source),
            error: None,
        }
    }

    pub fn failed<S: Into<String>, E: ToString>(game: S, error: E) -> Self {
        DrawRecord {
            ok: false,
            source: None,
            error: Some(error.to_string()),
            ..DrawRecord::new(game, "")
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Session {
    Midday,
    Evening,
    Night,
}

impl Session {
    pub const ALL: [Session; 3] = [Session::Midday, Session::Evening, Session::Night];

    pub fn label(self) -> &'static str {
        match self {
            Session::Midday => "Midday",
            Session::Evening => "Evening",
            Session::Night => "Night",
        }
    }
}

/// Result of a digit game drawn up to three times a day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionedDrawRecord {
    pub ok: bool,
    pub game: String,
    pub midday: Option<DrawRecord>,
    pub evening: Option<DrawRecord>,
    pub night: Option<DrawRecord>,
    pub source: Option<&'static str>,
    pub error: Option<String>,
}

impl SessionedDrawRecord {
    pub fn failed<S: Into<String>, E: ToString>(game: S, error: E) -> Self {
        SessionedDrawRecord {
            ok: false,
            game: game.into(),
            midday: None,
            evening: None,
            night: None,
            source: None,
            error: Some(error.to_string()),
        }
    }
}

/// What an assembler hands back for a single game.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum GameReport {
    Draw(DrawRecord),
    Sessioned(SessionedDrawRecord),
}

impl GameReport {
    /// An `ok: false` report shaped the way the game normally reports.
    pub fn failed<E: ToString>(game: Game, error: E) -> Self {
        if game.is_sessioned() {
            GameReport::Sessioned(SessionedDrawRecord::failed(game.label(), error))
        } else {
            GameReport::Draw(DrawRecord::failed(game.label(), error))
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            GameReport::Draw(record) => record.ok,
            GameReport::Sessioned(record) => record.ok,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GameReport::Draw(record) => record.error.as_deref(),
            GameReport::Sessioned(record) => record.error.as_deref(),
        }
    }
}

impl From<DrawRecord> for GameReport {
    fn from(record: DrawRecord) -> Self {
        GameReport::Draw(record)
    }
}

impl From<SessionedDrawRecord> for GameReport {
    fn from(record: SessionedDrawRecord) -> Self {
        GameReport::Sessioned(record)
    }
}
