use clover_hunt::Difficulty;
use clover_hunt::state::Status;
use clover_hunt::util::format_ms;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub difficulty: Difficulty,
    pub status: Status,
    pub round: u32,
    pub misses: u32,
    /// Time of the round just won.
    pub found_ms: Option<f64>,
    pub best_ms: Option<f64>,
    pub on_difficulty: Callback<Difficulty>,
    pub on_start: Callback<()>,
    pub on_reshuffle: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let difficulty_cb = {
        let cb = props.on_difficulty.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
                return;
            };
            match select.value().parse::<Difficulty>() {
                Ok(difficulty) => cb.emit(difficulty),
                Err(err) => log::warn!("{err}"),
            }
        })
    };
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reshuffle_cb = {
        let cb = props.on_reshuffle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let status = match props.status {
        Status::Idle => "Ready",
        Status::Playing => "Searching",
        Status::Success => "Found it!",
    };
    let best = props.best_ms.map(format_ms).unwrap_or_else(|| "-".to_string());

    html! {<div style="display:flex; flex-wrap:wrap; align-items:center; gap:8px;">
        <label>
            {"Difficulty "}
            <select onchange={difficulty_cb}>
                { for Difficulty::ALL.iter().map(|d| html! {
                    <option value={d.key()} selected={*d == props.difficulty}>{ d.label() }</option>
                }) }
            </select>
        </label>
        <button onclick={start_cb}>{"New game"}</button>
        <button onclick={reshuffle_cb}>{"Reshuffle"}</button>
        <span>{ format!("Round {} · {} · misses {}", props.round, status, props.misses) }</span>
        { if let Some(found) = props.found_ms { html! { <span>{ format!("Time {}", format_ms(found)) }</span> } } else { html! {} } }
        <span>{ format!("Best {best}") }</span>
        { if props.status == Status::Success { html! { <button onclick={dismiss_cb}>{"Close"}</button> } } else { html! {} } }
    </div>}
}
