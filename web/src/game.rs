use crate::menu::MenuView;
use crate::utils::*;
use clap::{Args, ValueEnum};
use gloo::events::EventListener;
use twofold_core as game;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    Playing,
    Won,
    Lost,
}

impl ViewGameState {
    fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    fn message(self) -> &'static str {
        match self {
            Self::Playing => "",
            Self::Won => "You Win!",
            Self::Lost => "You Lose",
        }
    }
}

/// What a single board cell shows.
#[derive(Clone, Debug, PartialEq)]
struct ViewCell {
    label: String,
    background: game::Rgb,
}

#[derive(Clone, Debug)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
}

impl GameSession {
    fn new(engine: game::PlayEngine) -> Self {
        Self { engine }
    }

    fn view_state(&self) -> ViewGameState {
        use game::EngineState::*;
        match self.engine.state() {
            Playing => ViewGameState::Playing,
            Won => ViewGameState::Won,
            Lost => ViewGameState::Lost,
        }
    }

    fn cell_at(&self, coords: game::Coord2) -> ViewCell {
        let tile = self.engine.tile_at(coords);
        let config = self.engine.config();
        ViewCell {
            label: if tile == 0 {
                String::new()
            } else {
                tile.to_string()
            },
            background: game::tile_color(tile, config.base(), config.merge_mode()),
        }
    }

    fn apply_move(&mut self, direction: game::Direction) -> bool {
        let result = self.engine.apply_move(direction);
        match &result {
            Ok(outcome) if outcome.is_finished() => {
                log::debug!(
                    "game over after {} moves: {:?}",
                    self.engine.move_count(),
                    outcome
                );
            }
            Ok(_) => {}
            Err(err) => log::debug!("{:?} ignored: {}", direction, err),
        }
        result.has_update()
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::MoveOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::MoveOutcome| outcome.has_update())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start(game::GameConfig),
    Move(game::Direction),
    PlayAgain,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq)]
pub(crate) enum ModeArg {
    Doubling,
    Tripling,
}

impl From<ModeArg> for game::MergeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Doubling => Self::Doubling,
            ModeArg::Tripling => Self::Tripling,
        }
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first game instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Override how equal tiles combine, by default a base of 2 doubles and any other base triples
    #[arg(short, long, value_enum)]
    #[prop_or_default]
    pub mode: Option<ModeArg>,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: ViewCell,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let ViewCell { label, background } = props.cell.clone();
    let class = classes!("cell", label.is_empty().then_some("empty"));
    let style = format!(
        "background-color: {}; color: {}",
        background,
        game::FONT_COLOR
    );

    html! {
        <td {class} {style}>{label}</td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: Option<GameSession>,
    seed: u64,
    merge_mode: Option<game::MergeMode>,
    _key_listener: EventListener,
}

impl GameView {
    fn create_key_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::document(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let typing = event
                .target()
                .is_some_and(|target| target.has_type::<HtmlInputElement>());
            if typing {
                return;
            }
            if let Some(direction) = direction_for_key(&event.key()) {
                event.prevent_default();
                log::trace!("key {:?} -> {:?}", event.key(), direction);
                link.send_message(Msg::Move(direction));
            }
        })
    }

    fn get_game_state(&self) -> Option<ViewGameState> {
        self.game.as_ref().map(GameSession::view_state)
    }

    fn view_board(&self, session: &GameSession) -> Html {
        html! {
            <table>
                {
                    for (0..game::BOARD_SIZE).map(|row| html! {
                        <tr>
                            {
                                for (0..game::BOARD_SIZE).map(|col| {
                                    let cell = session.cell_at((row, col));
                                    html! { <CellView {cell}/> }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn view_hints(&self, session: &GameSession) -> Html {
        html! {
            <footer>
                {
                    for game::Direction::ALL.iter().map(|&direction| {
                        let class = classes!((!session.engine.can_move(direction)).then_some("blocked"));
                        html! { <kbd {class}>{arrow(direction)}</kbd> }
                    })
                }
            </footer>
        }
    }

    fn view_playing(&self, session: &GameSession) -> Html {
        let config = session.engine.config();
        let goal = format!(
            "{}^{} = {}",
            config.base(),
            config.difficulty().target_power(),
            config.win_value()
        );
        let moves = format!("Moves {}", session.engine.move_count());

        html! {
            <>
                <nav>
                    <aside>{config.difficulty().label()}</aside>
                    <span>{goal}</span>
                    <aside>{moves}</aside>
                </nav>
                {self.view_board(session)}
                {self.view_hints(session)}
            </>
        }
    }

    fn view_finished(&self, ctx: &Context<Self>, session: &GameSession) -> Html {
        let state = session.view_state();
        let highest = format!("Highest tile {}", session.engine.highest_tile());
        let cb_play_again = ctx.link().callback(|_: MouseEvent| Msg::PlayAgain);

        html! {
            <section class={classes!("game-over", match state {
                ViewGameState::Won => "win",
                _ => "lose",
            })}>
                <h2>{state.message()}</h2>
                <p>{highest}</p>
                <button onclick={cb_play_again}>{"Play Again"}</button>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            game: None,
            seed: props.seed.unwrap_or_else(js_random_seed),
            merge_mode: props.mode.map(game::MergeMode::from),
            _key_listener: GameView::create_key_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start(config) => {
                log::debug!("new game with seed {}", self.seed);
                let engine = game::PlayEngine::with_seed(config, self.seed);
                self.game = Some(GameSession::new(engine));
                true
            }
            Move(direction) => match self.game.as_mut() {
                Some(session) => session.apply_move(direction),
                None => false,
            },
            PlayAgain => {
                log::debug!("play again");
                self.seed = js_random_seed();
                self.game.take().is_some()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let background = format!("background-color: {}", game::BACKGROUND_COLOR);
        let on_start = ctx.link().callback(Msg::Start);

        let content = match (&self.game, self.get_game_state()) {
            (Some(session), Some(state)) if state.is_finished() => {
                self.view_finished(ctx, session)
            }
            (Some(session), _) => self.view_playing(session),
            (None, _) => html! {
                <MenuView {on_start} merge_mode={self.merge_mode}/>
            },
        };

        html! {
            <div class="twofold" style={background}>
                {content}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_on(rows: [[game::Tile; 4]; 4], base: game::Tile) -> GameSession {
        let config = game::GameConfig::new(base, game::Difficulty::BabyMode).unwrap();
        let board = game::Board::from_rows(rows);
        GameSession::new(game::PlayEngine::from_board(
            config,
            board,
            game::RandomSpawner::new(0),
        ))
    }

    #[test]
    fn cells_render_blank_for_empty_and_value_otherwise() {
        let session = session_on([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 8]], 2);

        assert_eq!(
            session.cell_at((0, 1)),
            ViewCell {
                label: String::new(),
                background: game::EMPTY_TILE_COLOR,
            }
        );
        assert_eq!(session.cell_at((0, 0)).label, "2");
        assert_eq!(session.cell_at((3, 3)).background, game::TILE_PALETTE[2]);
    }

    #[test]
    fn moves_after_game_over_are_ignored() {
        let mut session = session_on(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            2,
        );

        assert_eq!(session.view_state(), ViewGameState::Lost);
        assert_eq!(session.view_state().message(), "You Lose");
        assert!(!session.apply_move(game::Direction::Left));
    }

    #[test]
    fn winning_move_finishes_session() {
        let mut session = session_on([[256, 256, 0, 0], [0; 4], [0; 4], [0; 4]], 2);

        assert!(session.apply_move(game::Direction::Left));
        assert_eq!(session.view_state(), ViewGameState::Won);
        assert!(session.view_state().is_finished());
    }

    #[test]
    fn mode_arg_maps_onto_merge_mode() {
        assert_eq!(
            game::MergeMode::from(ModeArg::Tripling),
            game::MergeMode::Tripling
        );
    }
}
