//! Goal Getter Frontend Entry Point

use goal_getter_ui::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
