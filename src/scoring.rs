//! Scoring: run-collapsing over claimed cards.
//!
//! A player's cards are sorted ascending and partitioned into maximal
//! runs of consecutive values. Each run costs only its lowest card -
//! owning 6, 7, 8 scores 6, not 21. Every held token subtracts one
//! point. Lowest score wins.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;

/// A maximal run of consecutive card values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Lowest card in the run - the only one that scores.
    pub start: u8,
    /// Number of consecutive cards.
    pub len: u8,
}

impl Run {
    /// Highest card in the run.
    #[must_use]
    pub const fn end(self) -> u8 {
        self.start + self.len - 1
    }
}

/// Partition cards into maximal runs of consecutive values.
///
/// Input order does not matter; cards are sorted first.
///
/// ```
/// use no_thanks::scoring::card_runs;
///
/// let runs = card_runs([10, 3, 4, 5]);
/// assert_eq!(runs.len(), 2);
/// assert_eq!((runs[0].start, runs[0].len), (3, 3));
/// assert_eq!((runs[1].start, runs[1].len), (10, 1));
/// ```
pub fn card_runs(cards: impl IntoIterator<Item = u8>) -> SmallVec<[Run; 8]> {
    let mut sorted: Vec<u8> = cards.into_iter().collect();
    sorted.sort_unstable();

    let mut runs: SmallVec<[Run; 8]> = SmallVec::new();
    for card in sorted {
        match runs.last_mut() {
            Some(run) if u16::from(card) == u16::from(run.end()) + 1 => run.len += 1,
            _ => runs.push(Run { start: card, len: 1 }),
        }
    }
    runs
}

/// A player's final score: sum of run minimums, minus held tokens.
///
/// An empty hand scores `-tokens`.
///
/// ```
/// use no_thanks::core::Player;
/// use no_thanks::scoring::player_score;
///
/// let mut player = Player::new("p1", "Ada");
/// player.cards.push_back(3);
/// player.cards.push_back(4);
/// player.cards.push_back(5);
/// player.cards.push_back(10);
/// player.tokens = 5;
///
/// assert_eq!(player_score(&player), 8); // 3 + 10 - 5
/// ```
#[must_use]
pub fn player_score(player: &Player) -> i32 {
    let card_total: i32 = card_runs(player.cards.iter().copied())
        .iter()
        .map(|run| i32::from(run.start))
        .sum();
    card_total - player.tokens as i32
}

/// The id of the lowest-scoring player.
///
/// Exact ties go to the earlier player in turn order, so the result is
/// deterministic. Returns `None` for an empty table.
#[must_use]
pub fn winner(players: &Vector<Player>) -> Option<String> {
    let mut best: Option<(&Player, i32)> = None;
    for player in players.iter() {
        let score = player_score(player);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((player, score)),
        }
    }
    best.map(|(player, _)| player.id.clone())
}

/// Per-player score breakdown for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// The cards that actually count: the minimum of each run.
    pub counted: SmallVec<[u8; 8]>,
    /// Sum of counted cards.
    pub card_total: i32,
    /// Tokens held at game end.
    pub tokens: u32,
    /// Final score (`card_total - tokens`).
    pub score: i32,
}

impl std::fmt::Display for ScoreBreakdown {
    /// Formats like the score screen: `3 + 10 - 5 = 8`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.counted.is_empty() {
            write!(f, "0")?;
        } else {
            for (i, card) in self.counted.iter().enumerate() {
                if i > 0 {
                    write!(f, " + ")?;
                }
                write!(f, "{}", card)?;
            }
        }
        write!(f, " - {} = {}", self.tokens, self.score)
    }
}

/// Break a player's score into its counted cards and token deduction.
#[must_use]
pub fn breakdown(player: &Player) -> ScoreBreakdown {
    let counted: SmallVec<[u8; 8]> = card_runs(player.cards.iter().copied())
        .iter()
        .map(|run| run.start)
        .collect();
    let card_total: i32 = counted.iter().map(|&c| i32::from(c)).sum();

    ScoreBreakdown {
        counted,
        card_total,
        tokens: player.tokens,
        score: card_total - player.tokens as i32,
    }
}

/// One row of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Player id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Final score.
    pub score: i32,
    /// Claimed cards, sorted ascending.
    pub cards: Vec<u8>,
    /// Tokens held at game end.
    pub tokens: u32,
}

/// Final standings, best (lowest) score first.
///
/// The sort is stable, so tied players keep their turn order.
#[must_use]
pub fn standings(players: &Vector<Player>) -> Vec<PlayerScore> {
    let mut rows: Vec<PlayerScore> = players
        .iter()
        .map(|player| PlayerScore {
            id: player.id.clone(),
            name: player.name.clone(),
            score: player_score(player),
            cards: player.sorted_cards(),
            tokens: player.tokens,
        })
        .collect();
    rows.sort_by_key(|row| row.score);
    rows
}

/// Scores keyed by player id, for callers that look players up by id.
#[must_use]
pub fn score_table(players: &Vector<Player>) -> FxHashMap<String, i32> {
    players
        .iter()
        .map(|player| (player.id.clone(), player_score(player)))
        .collect()
}
