use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: Amount,
    pub skip_turn: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            skip_turn: false,
        }
    }

    /// Name shown for a player who left their name blank, `index` is 0-based.
    pub fn default_name(index: usize) -> String {
        format!("Jugador {}", index + 1)
    }

    /// Builds a roster in input order, blank names fall back to [`Player::default_name`].
    pub fn roster<I, S>(names: I) -> Vec<Player>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| match name.as_ref().trim() {
                "" => Player::new(Self::default_name(index)),
                name => Player::new(name.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_fills_blank_names_by_position() {
        let players = Player::roster(["Ana", "", "  ", "Luis"]);

        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Jugador 2", "Jugador 3", "Luis"]);
        assert!(players.iter().all(|p| p.score == 0 && !p.skip_turn));
    }
}
