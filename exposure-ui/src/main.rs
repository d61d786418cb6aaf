use exposure_ui::app::App;
use log::Level;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Debug).expect("failed to initialize logger");
    yew::Renderer::<App>::new().render();
}
