use crate::api;
use crate::utils::*;
use clap::Args;
use game::{CategorySelector, RevealState};
use jeopardy_core as game;
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::RevealOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::RevealOutcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    NewGame,
    Loaded(Result<Vec<game::Category>, String>),
    Reveal(game::Coord2),
}

fn cell_class(state: RevealState) -> Classes {
    use RevealState::*;
    let mut class = classes!(
        "cell",
        match state {
            Hidden => "hidden",
            ShowingQuestion => "question",
            ShowingAnswer => "answer",
        }
    );
    if state.is_terminal() {
        class.push("locked");
    }
    class
}

const fn button_label(started: bool) -> &'static str {
    if started { "Restart!" } else { "Start!" }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    text: AttrValue,
    state: RevealState,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        text,
        state,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", x, y);
        callback.emit((x, y));
    });

    html! {
        <td class={cell_class(state)} data-x={x.to_string()} data-y={y.to_string()} {onclick}>
            {text}
        </td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub(crate) board: game::Board,
    /// Shared by every cell, called with the cell's `(column, row)`.
    pub(crate) callback: Callback<game::Coord2>,
}

#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let BoardProps { board, callback } = props;
    let (cols, _) = board.size();

    let cells: Vec<Html> = board
        .iter_coords()
        .map(|(x, y)| {
            let text: AttrValue =
                strip_markup(board.display_at((x, y)).unwrap_or(game::PLACEHOLDER)).into();
            let state = board.state_at((x, y)).unwrap_or_default();
            let callback = callback.clone();
            html! {
                <CellView {x} {y} {text} {state} {callback}/>
            }
        })
        .collect();

    html! {
        <table id="board" class="deployed">
            <thead>
                <tr id="category">
                    { for board.titles().iter().map(|title| html! { <th>{strip_markup(title)}</th> }) }
                </tr>
            </thead>
            <tbody>
                { for cells.chunks(usize::from(cols)).map(|row| html! { <tr>{ for row.iter().cloned() }</tr> }) }
            </tbody>
        </table>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<String>,

    /// Base URL of the category API
    #[arg(long, default_value = api::DEFAULT_API_URL)]
    pub(crate) api_url: String,
}

#[derive(Debug)]
pub(crate) struct GameView {
    board: Option<game::Board>,
    loading: bool,
    started: bool,
    error: Option<String>,
    games: u64,
}

impl GameView {
    fn next_seed(&mut self, ctx: &Context<Self>) -> u64 {
        let seed = match &ctx.props().seed {
            Some(seed) => seed_from_str(seed).wrapping_add(self.games),
            None => js_random_seed(),
        };
        self.games += 1;
        seed
    }

    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        if self.loading {
            log::debug!("game setup already in progress");
            return false;
        }

        self.board = None;
        self.error = None;
        self.loading = true;
        self.started = true;

        let seed = self.next_seed(ctx);
        let ids = game::RandomCategorySelector::new(seed).select();
        log::info!("new game, seed {}, categories {:?}", seed, ids);

        let source = api::CategoryApi::new(&ctx.props().api_url);
        ctx.link().send_future(async move {
            let mut categories = Vec::with_capacity(game::CATEGORY_COUNT);
            let result = game::fetch_categories(&source, &ids, &mut categories).await;
            Msg::Loaded(
                result
                    .map(|()| categories)
                    .map_err(|err| format!("{}: {}", err, err.source)),
            )
        });
        true
    }

    fn finish_loading(&mut self, loaded: Result<Vec<game::Category>, String>) -> bool {
        self.loading = false;

        match loaded.and_then(|categories| {
            game::Board::new(categories).map_err(|err| err.to_string())
        }) {
            Ok(board) => {
                log::debug!("board ready: {:?}", board.titles());
                self.board = Some(board);
            }
            Err(err) => {
                log::error!("game setup failed: {}", err);
                self.error = Some(err);
            }
        }
        true
    }

    fn reveal_cell(&mut self, coords: game::Coord2) -> bool {
        let Some(board) = self.board.as_mut() else {
            log::debug!("ignoring click on {:?}, no board", coords);
            return false;
        };

        let outcome = board.reveal(coords);
        match &outcome {
            Ok(_) => log::debug!("{} clues revealed", board.revealed_count()),
            Err(err) => log::debug!("ignoring click on {:?}: {}", coords, err),
        }
        outcome.has_update()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            board: None,
            loading: false,
            started: false,
            error: None,
            games: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewGame => self.start_game(ctx),
            Loaded(loaded) => self.finish_loading(loaded),
            Reveal(coords) => self.reveal_cell(coords),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        html! {
            <div class="jeopardy">
                <nav>
                    <button class="btn" disabled={self.loading} onclick={cb_new_game}>
                        {button_label(self.started)}
                    </button>
                    {
                        for self.board.as_ref().map(|board| html! {
                            <aside>{format!("{}/{}", board.revealed_count(), game::CATEGORY_COUNT * game::CLUES_PER_CATEGORY)}</aside>
                        })
                    }
                </nav>
                {
                    if let Some(error) = &self.error {
                        html! { <p class="error" role="alert">{format!("Could not set up the game. {}", error)}</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(board) = &self.board {
                        html! { <BoardView board={board.clone()} callback={ctx.link().callback(Msg::Reveal)}/> }
                    } else {
                        html! { <table id="board"/> }
                    }
                }
                <div id="dimmer" class={self.loading.then_some("dim")}>
                    <div id="load" class={self.loading.then_some("loader")}/>
                </div>
            </div>
        }
    }
}
