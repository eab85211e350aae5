use crate::model::{
    leaderboard::{ImportEntry, Leaderboard},
    scoring::RawGrade,
    structures::mode::Mode
};

/// Builds a classic board by inserting `(name, rank, position)` triples
/// in order. Pinned fixtures should be listed in ascending position
/// order, since each positioned insert shifts the pins below it.
pub fn classic_board(players: &[(&str, &str, Option<u32>)]) -> Leaderboard {
    let mut board = Leaderboard::new(Mode::Classic);
    for (name, rank, position) in players {
        board
            .insert((*name).to_string(), &RawGrade::rank(rank), String::new(), *position)
            .expect("Expected valid classic fixture grade");
    }

    board
}

/// FFA counterpart of [`classic_board`], from `(name, stars, position)`.
pub fn ffa_board(players: &[(&str, f64, Option<u32>)]) -> Leaderboard {
    let mut board = Leaderboard::new(Mode::Ffa);
    for (name, stars, position) in players {
        board
            .insert((*name).to_string(), &RawGrade::stars(*stars), String::new(), *position)
            .expect("Expected valid ffa fixture grade");
    }

    board
}

pub fn import_entry(name: &str, rank: Option<&str>, stars: Option<f64>, position: Option<u32>) -> ImportEntry {
    ImportEntry {
        name: if name.is_empty() { None } else { Some(name.to_string()) },
        rank: rank.map(str::to_string),
        stars,
        roblox_link: String::new(),
        position
    }
}

/// The display ordering reduced to `(name, position)` pairs, which is
/// what most position tests assert on.
pub fn ranking(board: &Leaderboard) -> Vec<(String, Option<u32>)> {
    board
        .ordered()
        .into_iter()
        .map(|player| (player.name, player.position))
        .collect()
}
