use tesoro_core::{Difficulty, MAX_PLAYERS, Player};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const DEFAULT_PLAYER_COUNT: usize = 2;

/// Everything the setup form hands over to start a game.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SetupRequest {
    pub difficulty: Difficulty,
    pub names: Vec<String>,
}

/// 1 column up to 5 players, 2 up to 10, 4 beyond.
fn name_columns_class(player_count: usize) -> Option<&'static str> {
    match player_count {
        11.. => Some("four-col"),
        6.. => Some("two-col"),
        _ => None,
    }
}

/// Keeps typed names when the player count changes.
fn resize_names(names: &[String], player_count: usize) -> Vec<String> {
    let mut names = names.to_vec();
    names.resize(player_count.clamp(1, MAX_PLAYERS.into()), String::new());
    names
}

#[derive(Properties, PartialEq)]
pub(crate) struct SetupProps {
    pub on_start: Callback<SetupRequest>,
}

#[function_component]
pub(crate) fn SetupView(props: &SetupProps) -> Html {
    let difficulty = use_state(Difficulty::default);
    let names = use_state(|| vec![String::new(); DEFAULT_PLAYER_COUNT]);
    let player_count = names.len();

    let on_difficulty = {
        let difficulty = difficulty.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse() {
                Ok(value) => difficulty.set(value),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    let on_player_count = {
        let names = names.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Ok(count) = select.value().parse::<usize>() else {
                log::warn!("bad player count: {:?}", select.value());
                return;
            };
            log::debug!("player count: {}", count);
            names.set(resize_names(&names, count));
        })
    };

    let on_submit = {
        let difficulty = difficulty.clone();
        let names = names.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_start.emit(SetupRequest {
                difficulty: *difficulty,
                names: (*names).clone(),
            });
        })
    };

    let name_inputs = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let oninput = {
                let names = names.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*names).clone();
                    next[index] = input.value();
                    names.set(next);
                })
            };
            html! {
                <input
                    type="text"
                    class="player-name"
                    placeholder={Player::default_name(index)}
                    value={name.clone()}
                    {oninput}
                />
            }
        })
        .collect::<Html>();

    let count_options = (1..=usize::from(MAX_PLAYERS))
        .map(|count| {
            html! {
                <option value={count.to_string()} selected={count == player_count}>{count.to_string()}</option>
            }
        })
        .collect::<Html>();

    html! {
        <div id="game-setup" class="overlay">
            <form id="setup-form" onsubmit={on_submit}>
                <label for="difficulty">{"Dificultad"}</label>
                <select id="difficulty" onchange={on_difficulty}>
                    <option value="easy" selected={*difficulty == Difficulty::Easy}>{"Fácil"}</option>
                    <option value="hard" selected={*difficulty == Difficulty::Hard}>{"Difícil"}</option>
                </select>
                <label for="num-players">{"Jugadores"}</label>
                <select id="num-players" onchange={on_player_count}>
                    {count_options}
                </select>
                <div id="player-names-container" class={classes!(name_columns_class(player_count))}>
                    {name_inputs}
                </div>
                <button type="submit">{"Empezar"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_columns_follow_player_count() {
        assert_eq!(name_columns_class(1), None);
        assert_eq!(name_columns_class(5), None);
        assert_eq!(name_columns_class(6), Some("two-col"));
        assert_eq!(name_columns_class(10), Some("two-col"));
        assert_eq!(name_columns_class(11), Some("four-col"));
        assert_eq!(name_columns_class(20), Some("four-col"));
    }

    #[test]
    fn resizing_keeps_typed_names() {
        let names = vec!["Ana".to_string(), "Beto".to_string()];

        assert_eq!(resize_names(&names, 3), ["Ana", "Beto", ""]);
        assert_eq!(resize_names(&names, 1), ["Ana"]);
        assert_eq!(resize_names(&names, 0), ["Ana"]);
        assert_eq!(resize_names(&names, 40).len(), 20);
    }
}
