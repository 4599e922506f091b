use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A player's record within a match or tournament.
///
/// An empty `name` marks a prefill slot: a placeholder the backend puts in
/// a match until a real player is moved into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub name: String,
    pub preferred_color: String,
    pub shots: i32,
    pub sweeps: i32,
    pub kills: i32,
    #[serde(rename = "self")]
    pub self_kills: i32,
    pub explosions: i32,
    pub matches: i32,
    /// Total stored by the backend; see [`Player::score`] for the live value.
    #[serde(rename = "score")]
    pub total_score: i32,
}

impl Player {
    /// Entertainment score used to rank runnerups.
    ///
    /// A sweep is effectively worth 14: it also brings a shot and three kills.
    pub fn score(&self) -> i32 {
        self.sweeps * 5 + self.shots * 3 + self.kills * 2 + self.self_kills + self.explosions
    }

    pub fn is_prefill(&self) -> bool {
        self.name.is_empty()
    }
}

/// Players ordered by [`Player::score`], highest first. Ties keep input order.
pub fn by_score(players: &[Player]) -> Vec<&Player> {
    players
        .iter()
        .sorted_by_key(|p| Reverse(p.score()))
        .collect_vec()
}

/// Players ordered by kills, highest first. Ties keep input order.
pub fn by_kills(players: &[Player]) -> Vec<&Player> {
    players
        .iter()
        .sorted_by_key(|p| Reverse(p.kills))
        .collect_vec()
}

/// Runnerup order: fewest matches played first, then highest score.
pub fn by_runnerup(players: &[Player]) -> Vec<&Player> {
    players
        .iter()
        .sorted_by_key(|p| (p.matches, Reverse(p.score())))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, kills: i32, shots: i32, matches: i32) -> Player {
        Player {
            name: name.to_string(),
            kills,
            shots,
            matches,
            ..Default::default()
        }
    }

    #[test]
    fn test_score() {
        let p = Player {
            sweeps: 1,
            shots: 2,
            kills: 3,
            self_kills: 4,
            explosions: 5,
            ..Default::default()
        };
        assert_eq!(p.score(), 5 + 6 + 6 + 4 + 5);
    }

    #[test]
    fn test_deserialize_backend_player() {
        let p: Player = serde_json::from_str(
            r#"{"name":"thiderman","preferred_color":"green","shots":1,"sweeps":0,
                "kills":7,"self":2,"explosions":0,"matches":3,"score":18}"#,
        )
        .unwrap();
        assert_eq!(p.name, "thiderman");
        assert_eq!(p.kills, 7);
        assert_eq!(p.self_kills, 2);
        assert_eq!(p.total_score, 18);
        assert!(!p.is_prefill());

        let prefill: Player = serde_json::from_str(r#"{"kills":0}"#).unwrap();
        assert!(prefill.is_prefill());
    }

    #[test]
    fn test_rankings() {
        let players = vec![
            player("a", 3, 0, 2),
            player("b", 8, 0, 1),
            player("c", 3, 1, 1),
            player("d", 8, 0, 2),
        ];

        fn names<'a>(ps: Vec<&'a Player>) -> Vec<&'a str> {
            ps.iter().map(|p| p.name.as_str()).collect_vec()
        }
        assert_eq!(names(by_kills(&players)), ["b", "d", "a", "c"]);
        assert_eq!(names(by_score(&players)), ["b", "d", "c", "a"]);
        assert_eq!(names(by_runnerup(&players)), ["b", "c", "d", "a"]);
    }
}
