use crate::setup::{SetupRequest, SetupView};
use crate::utils::*;
use gloo::timers::callback::Timeout;
use tesoro_core as game;
use game::BoardGenerator;
use yew::prelude::*;

/// Lets the flip animation of the last tile play before the result shows up.
const RESULT_DELAY_MS: u32 = 300;

const TRAP_IMG: &str = "/treasure/images/skull-25.png";
const CHEST_IMG: &str = "/treasure/images/treasure-25.png";
const LOGO_IMG: &str = "/treasure/images/logo.png";

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewTile {
    Hidden,
    Safe,
    Treasure(game::Amount),
    Trap,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
    pub result_visible: bool,
}

impl GameSession {
    fn new(engine: game::PlayEngine) -> Self {
        Self {
            engine,
            result_visible: false,
        }
    }

    fn start(request: &SetupRequest, seed: u64) -> game::Result<Self> {
        let mut generator = game::RandomBoardGenerator::from_seed(seed);
        let config = generator.random_config(request.difficulty);
        let layout = generator.generate(&config)?;
        let players = game::Player::roster(&request.names);
        Ok(Self::new(game::PlayEngine::new(layout, players)?))
    }

    fn tile_view(&self, index: game::TileIndex) -> ViewTile {
        use game::{EngineTile, TileContent};

        match self.engine.tile_at(index) {
            EngineTile::Hidden => ViewTile::Hidden,
            EngineTile::Revealed(TileContent::Safe) => ViewTile::Safe,
            EngineTile::Revealed(TileContent::Treasure(value)) => ViewTile::Treasure(value),
            EngineTile::Revealed(TileContent::Trap) => ViewTile::Trap,
        }
    }

    fn can_interact_at(&self, index: game::TileIndex) -> bool {
        !self.engine.is_finished() && self.engine.tile_at(index).is_hidden()
    }

    fn result_title(&self) -> Option<String> {
        use game::GameOutcome::*;

        self.engine.outcome().map(|outcome| match outcome {
            Lost { name, .. } => format!("¡Juego terminado! {} encontró una trampa y perdió.", name),
            Won { name, score, .. } => format!("¡Victoria! {} gana con {}", name, euros(*score)),
        })
    }

    /// Logs pending engine events, returns whether the game just ended.
    fn flush_events(&mut self) -> bool {
        let mut ended = false;
        for event in self.engine.drain_events() {
            log::debug!("event: {:?}", event);
            if let game::GameEvent::GameEnded(outcome) = event {
                log::info!("game ended: {:?}", outcome);
                ended = true;
            }
        }
        ended
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start(SetupRequest),
    Reveal(game::TileIndex),
    ShowResult,
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: game::TileIndex,
    label: game::Label,
    tile: ViewTile,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::TileIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    use ViewTile::*;

    let TileProps {
        index,
        label,
        tile,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "tile",
        (tile != Hidden).then_some("flipped"),
        locked.then_some("locked")
    );
    let back_class = classes!(
        "tile-back",
        match tile {
            Hidden => None,
            Safe => Some("safe"),
            Treasure(_) => Some("treasure"),
            Trap => Some("trap"),
        }
    );
    let back = match tile {
        Treasure(value) => html! {
            <>
                <img src={CHEST_IMG} alt="Tesoro"/>
                <div class="value">{euros(value)}</div>
            </>
        },
        Trap => html! { <img src={TRAP_IMG} alt="Trampa"/> },
        Hidden | Safe => html! { {"\u{a0}"} },
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", index);
        callback.emit(index);
    });

    html! {
        <div {class} {onclick} data-index={index.to_string()}>
            <div class="tile-inner">
                <div class="tile-front">{label.to_string()}</div>
                <div class={back_class}>{back}</div>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ScoreboardProps {
    players: Vec<game::Player>,
    current: game::PlayerIndex,
}

#[function_component(ScoreboardView)]
fn scoreboard_component(props: &ScoreboardProps) -> Html {
    let rows = props
        .players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let class = classes!(
                "player",
                (index == usize::from(props.current)).then_some("current-player"),
                player.skip_turn.then_some("skipping")
            );
            html! {
                <div {class}>{format!("{}: {}", player.name, euros(player.score))}</div>
            }
        })
        .collect::<Html>();

    html! {
        <aside id="scoreboard" class={classes!((props.players.len() >= 11).then_some("two-col"))}>
            <img src={LOGO_IMG} alt="Isla del Tesoro" class="scoreboard-logo"/>
            <div class="players">{rows}</div>
        </aside>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    session: Option<GameSession>,
    seed: Option<u64>,
    _result_timeout: Option<Timeout>,
}

impl GameView {
    fn start_game(&mut self, request: &SetupRequest) -> bool {
        let seed = self.seed.unwrap_or_else(js_random_seed);
        log::debug!("starting game with seed {}", seed);

        match GameSession::start(request, seed) {
            Ok(session) => {
                self.session = Some(session);
                true
            }
            Err(err) => {
                log::error!("could not start game: {}", err);
                false
            }
        }
    }

    fn reveal_tile(&mut self, ctx: &Context<Self>, index: game::TileIndex) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let outcome = match session.engine.reveal(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("reveal {} failed: {}", index, err);
                return false;
            }
        };

        if session.flush_events() {
            let link = ctx.link().clone();
            self._result_timeout = Some(Timeout::new(RESULT_DELAY_MS, move || {
                link.send_message(Msg::ShowResult)
            }));
        }

        outcome.has_update()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: None,
            seed: ctx.props().seed,
            _result_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start(request) => self.start_game(&request),
            Reveal(index) => self.reveal_tile(ctx, index),
            ShowResult => match self.session.as_mut() {
                Some(session) if !session.result_visible => {
                    session.result_visible = true;
                    true
                }
                _ => false,
            },
            Restart => {
                self._result_timeout = None;
                self.session.take().is_some()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(session) = self.session.as_ref() else {
            let on_start = ctx.link().callback(Msg::Start);
            return html! { <SetupView {on_start}/> };
        };

        let engine = &session.engine;
        let callback = ctx.link().callback(Msg::Reveal);
        let tiles = (0..engine.total_tiles())
            .map(|index| {
                html! {
                    <TileView
                        {index}
                        label={engine.label_at(index)}
                        tile={session.tile_view(index)}
                        locked={!session.can_interact_at(index)}
                        callback={callback.clone()}
                    />
                }
            })
            .collect::<Html>();

        let result_open = session.result_visible;
        let result_title = session.result_title().unwrap_or_default();
        let on_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <div class="tesoro">
                <ScoreboardView
                    players={engine.players().to_vec()}
                    current={engine.current_player_index()}
                />
                <div id="grid" class={classes!("grid", (!engine.is_finished()).then_some("playable"))}>
                    {tiles}
                </div>
                <div
                    id="result-overlay"
                    class={classes!("overlay", (!result_open).then_some("hidden"))}
                    role="dialog"
                    aria-hidden={(!result_open).to_string()}
                >
                    <h1 id="result-title">{result_title}</h1>
                    <button id="restart-btn-overlay" onclick={on_restart}>{"Jugar de nuevo"}</button>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(treasures: &[(game::TileIndex, game::Amount)], traps: &[game::TileIndex], names: &[&str]) -> GameSession {
        let labels = (1..=4).collect();
        let layout = game::BoardLayout::from_parts(labels, treasures, traps).unwrap();
        let players = game::Player::roster(names.iter().copied());
        GameSession::new(game::PlayEngine::new(layout, players).unwrap())
    }

    #[test]
    fn tiles_show_content_once_revealed() {
        let mut session = session(&[(0, 42)], &[1], &["Ana", "Beto"]);

        assert_eq!(session.tile_view(0), ViewTile::Hidden);
        session.engine.reveal(0).unwrap();
        session.engine.reveal(1).unwrap();

        assert_eq!(session.tile_view(0), ViewTile::Treasure(42));
        assert_eq!(session.tile_view(1), ViewTile::Trap);
        assert!(!session.can_interact_at(0));
        assert!(session.can_interact_at(2));
    }

    #[test]
    fn trap_loss_title_names_the_player() {
        let mut session = session(&[], &[2], &["Ana"]);

        session.engine.reveal(2).unwrap();

        assert!(session.flush_events());
        assert_eq!(
            session.result_title().as_deref(),
            Some("¡Juego terminado! Ana encontró una trampa y perdió.")
        );
        assert!(!session.can_interact_at(3));
    }

    #[test]
    fn victory_title_shows_winner_and_score() {
        let mut session = session(&[(1, 42)], &[], &["Ana", "Beto"]);

        for index in 0..3 {
            session.engine.reveal(index).unwrap();
        }
        assert!(!session.flush_events());
        assert_eq!(session.result_title(), None);

        session.engine.reveal(3).unwrap();

        assert!(session.flush_events());
        assert_eq!(
            session.result_title().as_deref(),
            Some("¡Victoria! Beto gana con €42")
        );
    }

    #[test]
    fn start_builds_a_full_board_for_the_roster() {
        let request = SetupRequest {
            difficulty: game::Difficulty::Hard,
            names: vec!["Ana".into(), String::new()],
        };

        let session = GameSession::start(&request, 7).unwrap();

        assert_eq!(session.engine.total_tiles(), game::TOTAL_TILES);
        assert_eq!(session.engine.player(1).name, "Jugador 2");
        assert!(
            session
                .engine
                .layout()
                .labels()
                .iter()
                .all(|label| game::HARD_LABELS.contains(label))
        );
    }
}
