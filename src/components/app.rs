use clover_hunt::model::ItemId;
use clover_hunt::random::{MathRandom, RandomSource};
use clover_hunt::state::{GameSession, SessionAction, SessionStats};
use clover_hunt::{Difficulty, GameConfig};
use yew::prelude::*;

use super::{board::Board, controls_panel::ControlsPanel};

const CONFIG_KEY: &str = "clover_config";
const STATS_KEY: &str = "clover_stats";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

// Optional overrides stored as JSON; anything unreadable falls back to defaults.
fn load_config() -> GameConfig {
    let Some(raw) = local_storage().and_then(|store| store.get_item(CONFIG_KEY).ok().flatten()) else {
        return GameConfig::default();
    };
    GameConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring stored config: {err}");
        GameConfig::default()
    })
}

fn load_stats() -> Option<SessionStats> {
    let raw = local_storage()?.get_item(STATS_KEY).ok().flatten()?;
    serde_json::from_str(&raw)
        .map_err(|err| log::warn!("ignoring stored stats: {err}"))
        .ok()
}

fn fresh_seed() -> u64 {
    let mut rng = MathRandom;
    let hi = (rng.next_f64() * u32::MAX as f64) as u64;
    let lo = (rng.next_f64() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(|| GameSession::new(load_config(), fresh_seed()));

    // Load persisted stats
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(stats) = load_stats() {
                session.dispatch(SessionAction::RestoreStats(stats));
            }
            || ()
        });
    }
    // Persist stats changes
    use_effect_with(session.stats, move |stats| {
        if let (Some(store), Ok(raw)) = (local_storage(), serde_json::to_string(stats)) {
            if let Err(err) = store.set_item(STATS_KEY, &raw) {
                log::warn!("failed to persist stats: {err:?}");
            }
        }
        || ()
    });

    let on_resize = {
        let session = session.clone();
        Callback::from(move |(width, height): (f64, f64)| {
            session.dispatch(SessionAction::Resize {
                width,
                height,
                now_ms: js_sys::Date::now(),
            })
        })
    };
    let on_select = {
        let session = session.clone();
        Callback::from(move |(generation, id): (u32, ItemId)| {
            session.dispatch(SessionAction::Select {
                generation,
                id,
                now_ms: js_sys::Date::now(),
            })
        })
    };
    let on_start = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Start {
                now_ms: js_sys::Date::now(),
            })
        })
    };
    let on_reshuffle = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Reshuffle))
    };
    let on_dismiss = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Dismiss))
    };
    let on_difficulty = {
        let session = session.clone();
        Callback::from(move |difficulty: Difficulty| {
            session.dispatch(SessionAction::SetDifficulty(difficulty))
        })
    };

    html! {<div style="max-width:1152px; margin:0 auto; padding:16px; display:flex; flex-direction:column; gap:12px;">
        <ControlsPanel
            difficulty={session.difficulty}
            status={session.status}
            round={session.round}
            misses={session.misses}
            found_ms={session.found_ms()}
            best_ms={session.stats.best_ms}
            {on_difficulty}
            {on_start}
            {on_reshuffle}
            {on_dismiss}
        />
        <Board
            layout={session.layout.clone()}
            generation={session.generation}
            {on_resize}
            {on_select}
        />
    </div>}
}
