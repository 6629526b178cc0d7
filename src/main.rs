mod components;
mod logger;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    yew::Renderer::<components::app::App>::new().render();
}
