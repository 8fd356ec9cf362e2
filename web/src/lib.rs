use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod setup;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a board seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Parses options from the URL fragment, e.g. `#-vv&--seed=42`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        let options = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("tesoro").chain(options))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let (args, parse_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from(["tesoro"]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            web_sys::console::error_1(&err.to_string().into());
        }
    }
    if let Some(err) = parse_error {
        log::error!("Ignoring options in URL: {}", err);
    }
    log::debug!("seed: {:?}", args.seed);

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { seed: args.seed })
        .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_from_location_hash() {
        let args = Args::from_location_hash("#-vvv&--seed=42").unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Debug));
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::from_location_hash("#--seed=banana").is_err());
    }
}
