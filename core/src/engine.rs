use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The lone player of a single-player game revealed a trap.
    Lost { player: PlayerIndex, name: String },
    /// Board fully revealed, `winner` is the first player holding the top score.
    Won {
        winner: PlayerIndex,
        name: String,
        score: Amount,
    },
}

impl GameOutcome {
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Notifications for whoever renders the game, drained with [`PlayEngine::drain_events`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TileRevealed {
        index: TileIndex,
        content: TileContent,
    },
    /// Some score, skip flag or the current player changed. Queued at most once per action.
    PlayersChanged,
    GameEnded(GameOutcome),
}

/// Owns one game from the first reveal until it ends: board, roster and turn order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    layout: BoardLayout,
    board: Vec<EngineTile>,
    players: Vec<Player>,
    current_player: PlayerIndex,
    revealed_count: TileCount,
    turns: u32,
    state: EngineState,
    outcome: Option<GameOutcome>,
    triggered_trap: Option<TileIndex>,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl PlayEngine {
    pub fn new(layout: BoardLayout, players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if players.len() > usize::from(MAX_PLAYERS) {
            return Err(GameError::TooManyPlayers);
        }

        log::debug!(
            "New game: {} players, {} tiles",
            players.len(),
            layout.total_tiles()
        );
        Ok(Self {
            board: vec![EngineTile::Hidden; layout.total_tiles().into()],
            layout,
            players,
            current_player: 0,
            revealed_count: 0,
            turns: 0,
            state: Default::default(),
            outcome: None,
            triggered_trap: None,
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn total_tiles(&self) -> TileCount {
        self.layout.total_tiles()
    }

    pub fn tile_at(&self, index: TileIndex) -> EngineTile {
        self.board[usize::from(index)]
    }

    pub fn label_at(&self, index: TileIndex) -> Label {
        self.layout.label_at(index)
    }

    pub fn revealed_count(&self) -> TileCount {
        self.revealed_count
    }

    pub fn hidden_count(&self) -> TileCount {
        self.total_tiles() - self.revealed_count
    }

    /// Number of tiles revealed by a player action, ghost turns excluded.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn triggered_trap(&self) -> Option<TileIndex> {
        self.triggered_trap
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: PlayerIndex) -> &Player {
        &self.players[usize::from(index)]
    }

    pub fn is_single_player(&self) -> bool {
        self.players.len() == 1
    }

    pub fn current_player_index(&self) -> PlayerIndex {
        self.current_player
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current_player)
    }

    /// First player in roster order holding the highest score.
    pub fn leader(&self) -> PlayerIndex {
        let mut best = 0;
        for (index, player) in self.players.iter().enumerate().skip(1) {
            if player.score > self.players[best].score {
                best = index;
            }
        }
        best as PlayerIndex
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Handles a click on `index` by the current player.
    pub fn reveal(&mut self, index: TileIndex) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let index = self.layout.validate_index(index)?;

        if self.state.is_finished() || !self.tile_at(index).is_hidden() {
            return Ok(NoChange);
        }

        // stale click from a player whose turn was already forfeited
        if self.current_player().skip_turn {
            log::debug!("{} forfeits a pending turn", self.current_player().name);
            self.current_player_mut().skip_turn = false;
            self.advance_turn();
            self.events.push(GameEvent::PlayersChanged);
            return Ok(Skipped);
        }

        let content = self.layout.content_at(index);
        self.board[usize::from(index)] = EngineTile::Revealed(content);
        self.revealed_count += 1;
        self.turns += 1;
        self.events.push(GameEvent::TileRevealed { index, content });
        log::debug!(
            "{} reveals tile {} ({:?})",
            self.current_player().name,
            index,
            content
        );

        let mut players_changed = false;
        match content {
            TileContent::Treasure(value) => {
                let player = self.current_player_mut();
                player.score = player.score.saturating_add(value);
                players_changed = true;
            }
            TileContent::Trap if self.is_single_player() => {
                self.triggered_trap = Some(index);
                let name = self.current_player().name.clone();
                self.finish(GameOutcome::Lost {
                    player: self.current_player,
                    name,
                });
                return Ok(HitTrap);
            }
            TileContent::Trap => {
                self.current_player_mut().skip_turn = true;
                players_changed = true;
            }
            TileContent::Safe => {}
        }

        if self.hidden_count() == 0 {
            if players_changed {
                self.events.push(GameEvent::PlayersChanged);
            }
            let winner = self.leader();
            let Player { name, score, .. } = self.player(winner).clone();
            self.finish(GameOutcome::Won {
                winner,
                name,
                score,
            });
            return Ok(Ended);
        }

        if self.advance_turn() || players_changed {
            self.events.push(GameEvent::PlayersChanged);
        }
        Ok(Revealed(content))
    }

    /// Moves to the next player, consuming skip flags on the way. Returns whether any player state changed.
    fn advance_turn(&mut self) -> bool {
        let count = self.players.len();
        let start = usize::from(self.current_player);
        let mut next = (start + 1) % count;

        // each pass clears one flag, so `count` passes always land on a free player
        let mut consumed = 0;
        while self.players[next].skip_turn && consumed < count {
            self.players[next].skip_turn = false;
            consumed += 1;
            log::debug!("{} misses a turn", self.players[next].name);
            next = (next + 1) % count;
        }

        self.current_player = next as PlayerIndex;
        consumed > 0 || next != start
    }

    fn finish(&mut self, outcome: GameOutcome) {
        if self.state.is_finished() {
            return;
        }

        self.state = if outcome.is_win() {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::info!("Game over after {} turns: {:?}", self.turns, outcome);
        self.outcome = Some(outcome.clone());
        self.events.push(GameEvent::GameEnded(outcome));
    }

    fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[usize::from(self.current_player)]
    }
}
