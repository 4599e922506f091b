use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::player::Player;
use crate::model::{null_as_default, timestamp};

/// The stage of the tournament a match belongs to.
///
/// Kinds the backend adds later are kept verbatim in `Unknown`; they are
/// tolerated, they just have no kill threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchKind {
    Tryout,
    Semi,
    Final,
    Unknown(String),
}

impl MatchKind {
    pub fn as_str(&self) -> &str {
        match self {
            MatchKind::Tryout => "tryout",
            MatchKind::Semi => "semi",
            MatchKind::Final => "final",
            MatchKind::Unknown(kind) => kind,
        }
    }

    /// Kills a player needs before the match may be ended.
    pub fn kill_threshold(&self) -> Option<i32> {
        match self {
            MatchKind::Tryout | MatchKind::Semi => Some(10),
            MatchKind::Final => Some(20),
            MatchKind::Unknown(_) => None,
        }
    }

    /// Capitalised kind, as shown in match names.
    pub fn label(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for MatchKind {
    fn default() -> Self {
        MatchKind::Unknown(String::new())
    }
}

impl From<String> for MatchKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "tryout" => MatchKind::Tryout,
            "semi" => MatchKind::Semi,
            "final" => MatchKind::Final,
            _ => MatchKind::Unknown(raw),
        }
    }
}

impl From<MatchKind> for String {
    fn from(kind: MatchKind) -> Self {
        match kind {
            MatchKind::Unknown(kind) => kind,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a match is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum MatchStatus {
    #[strum(serialize = "not started")]
    NotStarted,
    #[strum(serialize = "playing")]
    Running,
    #[strum(serialize = "ended")]
    Ended,
}

/// A single match of a tournament as served by the backend.
///
/// Every lifecycle accessor is derived from the record on each call; a
/// `Match` is never mutated after it has been read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub judges: Vec<serde_json::Value>,
    #[serde(default)]
    pub kind: MatchKind,
    #[serde(default)]
    pub index: usize,
    #[serde(default, with = "timestamp::optional")]
    pub started: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub ended: Option<DateTime<Utc>>,
}

impl Match {
    /// Build a match from a raw JSON document.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build a match from an already parsed JSON value.
    pub fn from_value(raw: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(raw)?)
    }

    /// Completion threshold: the kill count that lets the match end.
    pub fn end(&self) -> Option<i32> {
        self.kind.kill_threshold()
    }

    pub fn is_started(&self) -> bool {
        !timestamp::is_zero_or_absent(self.started.as_ref())
    }

    pub fn is_ended(&self) -> bool {
        !timestamp::is_zero_or_absent(self.ended.as_ref())
    }

    pub fn can_start(&self) -> bool {
        !self.is_started()
    }

    /// True once any player has reached the threshold and the match is not
    /// already over. Without a threshold the match can never be ended.
    pub fn can_end(&self) -> bool {
        if self.is_ended() {
            return false;
        }
        match self.end() {
            Some(end) => self.players.iter().any(|p| p.kills >= end),
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_started() && !self.is_ended()
    }

    pub fn status(&self) -> MatchStatus {
        if self.is_ended() {
            MatchStatus::Ended
        } else if self.is_started() {
            MatchStatus::Running
        } else {
            MatchStatus::NotStarted
        }
    }

    /// Number of real (non-prefill) players.
    pub fn actual_players(&self) -> usize {
        self.players.iter().filter(|p| !p.is_prefill()).count()
    }

    /// The player with the most kills; the earliest one wins a tie.
    pub fn leader(&self) -> Option<&Player> {
        self.players.iter().rev().max_by_key(|p| p.kills)
    }

    /// Short name, e.g. `Tryout 3` or `Final`.
    pub fn name(&self) -> String {
        match self.kind {
            MatchKind::Final => "Final".to_string(),
            _ => format!("{} {}", self.kind.label(), self.index + 1),
        }
    }

    /// Title with the number of matches of this kind, e.g. `Semi 1/2`.
    pub fn title(&self, of: usize) -> String {
        match self.kind {
            MatchKind::Final => "Final".to_string(),
            _ => format!("{} {}/{}", self.kind.label(), self.index + 1, of),
        }
    }

    /// Front-end path of this match within `tournament`.
    pub fn path(&self, tournament: &str) -> String {
        format!("/towerfall/{}/{}/{}/", tournament, self.kind, self.index)
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self.players.iter().map(|p| p.name.as_str()).join(" / ");
        write!(f, "<{}: {} - {}>", self.name(), names, self.status())
    }
}
