use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--seed=abc`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (
            Args::from_location_hash("").expect("defaults must parse"),
            Some(err),
        ),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("seed: {:?}, api: {}", args.game.seed, args.game.api_url);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.api_url, api::DEFAULT_API_URL);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_sets_seed_api_and_verbosity() {
        let args =
            Args::from_location_hash("#-vv&--seed=abc&--api-url=http://localhost:3000").unwrap();

        assert_eq!(args.game.seed.as_deref(), Some("abc"));
        assert_eq!(args.game.api_url, "http://localhost:3000");
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::from_location_hash("#--nope").is_err());
    }
}
