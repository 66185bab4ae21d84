use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod menu;
mod theme;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,

    /// Force a color scheme instead of following the browser
    #[arg(long, value_enum)]
    theme: Option<theme::Theme>,
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

    let (args, parse_error) = match Args::try_parse_from(location_hash.split(['#', '&'])) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("ignoring launch options: {}", err);
    }
    log::debug!("seed: {:?}, mode: {:?}", args.game.seed, args.game.mode);

    theme::Theme::apply(args.theme);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_hash(hash: &str) -> Args {
        Args::try_parse_from(hash.split(['#', '&'])).unwrap()
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_hash("");

        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.mode, None);
        assert_eq!(args.theme, None);
    }

    #[test]
    fn hash_options_are_parsed() {
        let args = parse_hash("#--seed=42&--mode=tripling&--theme=dark");

        assert_eq!(args.game.seed, Some(42));
        assert_eq!(args.game.mode, Some(game::ModeArg::Tripling));
        assert_eq!(args.theme, Some(theme::Theme::Dark));
    }

    #[test]
    fn bad_options_are_rejected() {
        assert!(Args::try_parse_from("#--seed=lots".split(['#', '&'])).is_err());
        assert!(Args::try_parse_from("#--mode=quadrupling".split(['#', '&'])).is_err());
    }
}
