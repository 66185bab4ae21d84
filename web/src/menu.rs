use twofold_core as game;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Builds the session config from the typed base and the clicked difficulty.
pub(crate) fn start_config(
    base_text: &str,
    difficulty: game::Difficulty,
    merge_mode: Option<game::MergeMode>,
) -> game::Result<game::GameConfig> {
    let base = game::parse_base(base_text)?;
    match merge_mode {
        Some(merge_mode) => game::GameConfig::with_merge_mode(base, difficulty, merge_mode),
        None => game::GameConfig::new(base, difficulty),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MenuProps {
    pub on_start: Callback<game::GameConfig>,
    #[prop_or_default]
    pub merge_mode: Option<game::MergeMode>,
}

#[function_component]
pub(crate) fn MenuView(props: &MenuProps) -> Html {
    let base_text = use_state(String::new);
    let error = use_state(|| None::<game::GameError>);

    let oninput = {
        let base_text = base_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            base_text.set(input.value());
        })
    };

    let buttons = game::Difficulty::ALL.iter().map(|&difficulty| {
        let base_text = base_text.clone();
        let error = error.clone();
        let on_start = props.on_start.clone();
        let merge_mode = props.merge_mode;
        let onclick = Callback::from(move |_: MouseEvent| {
            match start_config(&base_text, difficulty, merge_mode) {
                Ok(config) => {
                    log::debug!("starting {:?}", config);
                    error.set(None);
                    on_start.emit(config);
                }
                Err(err) => {
                    log::debug!("rejected base {:?}: {}", *base_text, err);
                    error.set(Some(err));
                }
            }
        });
        html! {
            <button {onclick}>{difficulty.label()}</button>
        }
    });

    html! {
        <section class="menu">
            <p>{"Type in the base number and to what power you want to win"}</p>
            <label>
                {"Base Number"}
                <input type="number" min="2" inputmode="numeric" value={(*base_text).clone()} {oninput}/>
            </label>
            {
                if let Some(err) = *error {
                    html! { <small class="error">{err.to_string()}</small> }
                } else {
                    html! {}
                }
            }
            <nav>
                { for buttons }
            </nav>
        </section>
    }
}
