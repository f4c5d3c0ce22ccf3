use frontend::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Mounting wheel page");
    yew::Renderer::<App>::new().render();
}
