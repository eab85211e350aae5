use std::cmp::Ordering;

use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::model::{
    error::Error,
    scoring::{RawGrade, ScoringStrategy},
    structures::{mode::Mode, player::Player}
};

/// One loosely-typed entry of a bulk import payload. Entries with a
/// missing name or a grade outside the mode's table are skipped.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ImportEntry {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub stars: Option<f64>,
    #[serde(default)]
    pub roblox_link: String,
    pub position: Option<u32>
}

/// A ranked list of players for one scoring mode.
///
/// Players may be pinned to an explicit 1-based position. The `position`
/// field on each record, not the vector index, is the canonical source
/// of pinned ordering; inserts and moves keep the index consistent with
/// it, and every mutation renumbers the other pinned records with a
/// local ±1 shift so positions stay unique. Unpinned players are ranked
/// by descending point value at display time and are never reordered
/// relative to each other by position logic.
pub struct Leaderboard {
    mode: Mode,
    scoring: ScoringStrategy,
    players: Vec<Player>
}

impl Leaderboard {
    pub fn new(mode: Mode) -> Leaderboard {
        Leaderboard::with_players(mode, Vec::new())
    }

    /// Wraps an already-persisted player sequence, as loaded from disk.
    pub fn with_players(mode: Mode, players: Vec<Player>) -> Leaderboard {
        Leaderboard {
            mode,
            scoring: ScoringStrategy::for_mode(mode),
            players
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scoring(&self) -> ScoringStrategy {
        self.scoring
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The raw stored sequence, in insertion order. Display ordering is
    /// computed by [`Leaderboard::ordered`].
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Adds a player. With an explicit position, every pinned record at
    /// that position or below it in rank is shifted down by one to make
    /// room; without one, the player is appended unpinned.
    ///
    /// The grade is validated before anything is touched, so an invalid
    /// grade leaves the leaderboard unchanged.
    pub fn insert(
        &mut self,
        name: String,
        grade: &RawGrade,
        roblox_link: String,
        position: Option<u32>
    ) -> Result<(), Error> {
        let grade = self.scoring.parse_grade(grade)?;
        let score = self.scoring.score(grade)?;

        let player = Player {
            name,
            grade,
            points: score.points,
            percentage: score.percentage,
            roblox_link,
            position
        };

        match position {
            Some(pos) => {
                self.open_gap(pos);
                let index = (pos.saturating_sub(1) as usize).min(self.players.len());
                self.players.insert(index, player);
            }
            None => self.players.push(player)
        }

        Ok(())
    }

    /// Removes the first player with the given name. A missing name is a
    /// no-op. Removing a pinned player closes the gap it leaves: every
    /// record pinned below it moves up by one.
    pub fn remove(&mut self, name: &str) {
        let index = match self.players.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => return
        };

        let removed = self.players.remove(index);
        if let Some(pos) = removed.position {
            self.close_gap(pos);
        }
    }

    /// Rewrites a player's name, grade, score fields and link in place,
    /// preserving record identity. A new position that differs from the
    /// current one is a move: the gap at the old position is closed and
    /// a gap at the new position is opened, exactly as a remove followed
    /// by a positioned insert of the same record. Omitting the position
    /// leaves the current pin (or its absence) untouched.
    pub fn update(
        &mut self,
        old_name: &str,
        new_name: String,
        grade: &RawGrade,
        roblox_link: String,
        new_position: Option<u32>
    ) -> Result<(), Error> {
        let index = self
            .players
            .iter()
            .position(|p| p.name == old_name)
            .ok_or_else(|| Error::PlayerNotFound(old_name.to_string()))?;

        // Validated before the record is touched
        let grade = self.scoring.parse_grade(grade)?;
        let score = self.scoring.score(grade)?;

        let old_position = self.players[index].position;

        let player = &mut self.players[index];
        player.name = new_name;
        player.grade = grade;
        player.points = score.points;
        player.percentage = score.percentage;
        player.roblox_link = roblox_link;

        if let Some(target) = new_position {
            if Some(target) != old_position {
                let mut moved = self.players.remove(index);
                if let Some(old) = old_position {
                    self.close_gap(old);
                }
                self.open_gap(target);
                moved.position = Some(target);
                let at = (target.saturating_sub(1) as usize).min(self.players.len());
                self.players.insert(at, moved);
            }
        }

        Ok(())
    }

    /// Exchanges the position fields of two players, and nothing else.
    /// Absence swaps too: swapping a pinned with an unpinned player pins
    /// the one and unpins the other. No other record is renumbered.
    pub fn swap(&mut self, name1: &str, name2: &str) -> Result<(), Error> {
        let first = self
            .players
            .iter()
            .position(|p| p.name == name1)
            .ok_or_else(|| Error::PlayerNotFound(name1.to_string()))?;
        let second = self
            .players
            .iter()
            .position(|p| p.name == name2)
            .ok_or_else(|| Error::PlayerNotFound(name2.to_string()))?;

        let pos1 = self.players[first].position;
        let pos2 = self.players[second].position;
        self.players[first].position = pos2;
        self.players[second].position = pos1;

        Ok(())
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Replaces the whole leaderboard from a bulk payload. Entries with
    /// a blank name or a grade outside the mode's table are skipped
    /// silently; explicit positive positions are kept verbatim, with no
    /// shifting and no collision repair. This is the bulk-load fast
    /// path, distinct from [`Leaderboard::insert`].
    pub fn import(&mut self, entries: Vec<ImportEntry>) {
        self.players.clear();

        let total = entries.len();
        for entry in entries {
            let name = match entry.name {
                Some(name) if !name.trim().is_empty() => name,
                _ => continue
            };

            let raw = RawGrade {
                rank: entry.rank,
                stars: entry.stars
            };
            let grade = match self.scoring.parse_grade(&raw) {
                Ok(grade) => grade,
                Err(_) => continue
            };
            let score = match self.scoring.score(grade) {
                Ok(score) => score,
                Err(_) => continue
            };

            self.players.push(Player {
                name,
                grade,
                points: score.points,
                percentage: score.percentage,
                roblox_link: entry.roblox_link,
                position: entry.position.filter(|&pos| pos > 0)
            });
        }

        debug!(
            mode = %self.mode,
            imported = self.players.len(),
            skipped = total - self.players.len(),
            "leaderboard imported"
        );
    }

    /// The display ordering: pinned players first in ascending position,
    /// then unpinned players in descending point value. Recomputed on
    /// every call; the stored sequence is left alone.
    pub fn ordered(&self) -> Vec<Player> {
        self.players
            .iter()
            .cloned()
            .sorted_by(|a, b| match (a.position, b.position) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => b.points.total_cmp(&a.points)
            })
            .collect()
    }

    /// Shifts every pinned record at `at` or below down by one rank,
    /// making room for an insert at `at`.
    fn open_gap(&mut self, at: u32) {
        for player in &mut self.players {
            if let Some(pos) = player.position {
                if pos >= at {
                    player.position = Some(pos + 1);
                }
            }
        }
    }

    /// Inverse of `open_gap`: moves every record pinned below `removed`
    /// up by one rank.
    fn close_gap(&mut self, removed: u32) {
        for player in &mut self.players {
            if let Some(pos) = player.position {
                if pos > removed {
                    player.position = Some(pos - 1);
                }
            }
        }
    }
}
