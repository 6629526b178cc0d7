use clover_hunt::layout::Layout;
use clover_hunt::model::ItemId;
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub layout: Layout,
    /// Layout generation, echoed back with each selection.
    pub generation: u32,
    pub on_resize: Callback<(f64, f64)>,
    pub on_select: Callback<(u32, ItemId)>,
}

#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    let board_ref = use_node_ref();

    // Measure once mounted, then on every window resize.
    {
        let board_ref = board_ref.clone();
        let on_resize = props.on_resize.clone();
        use_effect_with((), move |_| {
            let measure = move || {
                if let Some(el) = board_ref.cast::<HtmlElement>() {
                    let rect = el.get_bounding_client_rect();
                    on_resize.emit((rect.width(), rect.height()));
                }
            };
            measure();
            let listener = web_sys::window()
                .map(|win| EventListener::new(&win, "resize", move |_| measure()));
            move || drop(listener)
        });
    }

    let tokens = props
        .layout
        .items()
        .iter()
        .map(|item| {
            let onclick = {
                let on_select = props.on_select.clone();
                let generation = props.generation;
                let id = item.id;
                Callback::from(move |_: MouseEvent| on_select.emit((generation, id)))
            };
            let (glyph, label) = if item.is_target {
                ("\u{1F340}", "four-leaf clover")
            } else {
                ("\u{2618}", "three-leaf clover")
            };
            let style = format!(
                "position:absolute; left:{:.1}px; top:{:.1}px; width:{:.1}px; height:{:.1}px; transform:rotate({:.1}deg); padding:0; border:0; background:transparent; cursor:pointer; font-size:{:.1}px; line-height:1;",
                item.x,
                item.y,
                item.size,
                item.size,
                item.rotation,
                item.size * 0.8
            );
            html! { <button key={item.id.to_string()} {onclick} {style} aria-label={label}>{ glyph }</button> }
        })
        .collect::<Html>();

    html! {<div ref={board_ref} role="application" aria-label="clover board" style="position:relative; width:100%; aspect-ratio:3 / 2; overflow:hidden; user-select:none;">
        { tokens }
    </div>}
}
