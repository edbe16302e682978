use upload_to_summary::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        gloo::console::error!(e.to_string());
    }
    yew::Renderer::<App>::new().render();
}
