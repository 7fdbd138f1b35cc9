mod app;
mod console;
mod icons;

use app::App;

fn main() {
    console::init();
    leptos::mount::mount_to_body(App);
}
