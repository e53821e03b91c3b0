#[cfg(feature = "yew")]
mod app;

#[cfg(feature = "yew")]
fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug).module_prefix("roster_session"));

    yew::Renderer::<app::App>::new().render();
}

#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}
