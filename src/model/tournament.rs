use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::match_state::{Match, MatchKind};
use crate::model::player::Player;
use crate::model::{null_as_default, timestamp};

/// Most players a tournament takes.
pub const MAX_PLAYERS: usize = 32;
/// Fewest players needed before a tournament can start.
pub const MIN_PLAYERS: usize = 16;

/// A Drunken TowerFall tournament with all its matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub winners: Vec<Player>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub runnerups: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub judges: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tryouts: Vec<Match>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semis: Vec<Match>,
    #[serde(default, rename = "final")]
    pub final_match: Option<Match>,
    #[serde(default, with = "timestamp::optional")]
    pub opened: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub started: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub ended: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Open for registration.
    pub fn is_open(&self) -> bool {
        !timestamp::is_zero_or_absent(self.opened.as_ref())
    }

    pub fn is_started(&self) -> bool {
        !timestamp::is_zero_or_absent(self.started.as_ref())
    }

    pub fn is_ended(&self) -> bool {
        !timestamp::is_zero_or_absent(self.ended.as_ref())
    }

    pub fn is_joinable(&self) -> bool {
        self.players.len() < MAX_PLAYERS && self.is_open() && !self.is_started()
    }

    pub fn is_startable(&self) -> bool {
        self.is_open()
            && !self.is_started()
            && (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len())
    }

    pub fn is_running(&self) -> bool {
        self.is_started() && !self.is_ended()
    }

    /// Whether `name` may still sign up: there is room and the name is free.
    pub fn can_join(&self, name: &str) -> bool {
        self.players.len() < MAX_PLAYERS && !self.players.iter().any(|p| p.name == name)
    }

    /// All matches in play order: tryouts, semis, then the final.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.tryouts
            .iter()
            .chain(self.semis.iter())
            .chain(self.final_match.iter())
    }

    pub fn get_match(&self, kind: &MatchKind, index: usize) -> Option<&Match> {
        self.matches().find(|m| &m.kind == kind && m.index == index)
    }

    /// The first match that has not ended yet.
    pub fn next_match(&self) -> Option<&Match> {
        self.matches().find(|m| !m.is_ended())
    }

    /// Number of matches of `kind`, as used in [`Match::title`].
    pub fn count_of(&self, kind: &MatchKind) -> usize {
        self.matches().filter(|m| &m.kind == kind).count()
    }

    pub fn path(&self) -> String {
        format!("/towerfall/{}/", self.id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn players(n: usize) -> serde_json::Value {
        (0..n).map(|i| json!({ "name": format!("p{i}") })).collect()
    }

    fn tournament(value: serde_json::Value) -> Tournament {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_registration_rules() {
        let fresh = tournament(json!({
            "id": "dftest",
            "opened": "2021-01-01T18:00:00Z",
            "started": "0001-01-01T00:00:00Z",
            "ended": "0001-01-01T00:00:00Z",
            "players": players(3),
        }));
        assert!(fresh.is_open());
        assert!(fresh.is_joinable());
        assert!(!fresh.is_startable());
        assert!(fresh.can_join("newcomer"));
        assert!(!fresh.can_join("p1"));

        let full = tournament(json!({
            "opened": "2021-01-01T18:00:00Z",
            "players": players(32),
        }));
        assert!(!full.is_joinable());
        assert!(full.is_startable());
        assert!(!full.can_join("newcomer"));

        let enough = tournament(json!({
            "opened": "2021-01-01T18:00:00Z",
            "players": players(16),
        }));
        assert!(enough.is_startable());

        let never_opened = tournament(json!({ "opened": "0001-01-01T00:00:00Z" }));
        assert!(!never_opened.is_open());
        assert!(!never_opened.is_joinable());
    }

    #[test]
    fn test_running_tournament() {
        let t = tournament(json!({
            "opened": "2021-01-01T18:00:00Z",
            "started": "2021-01-01T19:00:00Z",
            "players": players(20),
        }));
        assert!(t.is_running());
        assert!(!t.is_joinable());
        assert!(!t.is_startable());
    }

    #[test]
    fn test_match_navigation() {
        let done = json!({ "started": "2021-01-01T19:00:00Z", "ended": "2021-01-01T19:10:00Z" });
        let t = tournament(json!({
            "id": "dftest",
            "tryouts": [
                { "kind": "tryout", "index": 0, "started": done["started"], "ended": done["ended"] },
                { "kind": "tryout", "index": 1, "started": "2021-01-01T19:11:00Z" },
            ],
            "semis": [
                { "kind": "semi", "index": 0 },
                { "kind": "semi", "index": 1 },
            ],
            "final": { "kind": "final", "index": 0 },
        }));

        assert_eq!(t.matches().count(), 5);
        assert_eq!(t.count_of(&MatchKind::Semi), 2);
        assert_eq!(t.path(), "/towerfall/dftest/");

        let next = t.next_match().unwrap();
        assert_eq!((&next.kind, next.index), (&MatchKind::Tryout, 1));

        let semi = t.get_match(&MatchKind::Semi, 1).unwrap();
        assert_eq!(semi.title(t.count_of(&semi.kind)), "Semi 2/2");
        assert!(t.get_match(&MatchKind::Semi, 2).is_none());
        assert_eq!(t.get_match(&MatchKind::Final, 0).map(Match::name), Some("Final".to_string()));
    }

    #[test]
    fn test_all_matches_ended() {
        let ended = json!({
            "kind": "final",
            "started": "2021-01-01T19:00:00Z",
            "ended": "2021-01-01T19:30:00Z",
        });
        let t = tournament(json!({ "tryouts": null, "semis": null, "final": ended }));
        assert!(t.next_match().is_none());
    }
}
