use openship_dashboard::{App, bootstrap_theme, platform};
use openship_domain::manifesto;

fn main() {
    console_error_panic_hook::set_once();
    bootstrap_theme();
    platform::set_title(manifesto::TITLE);
    leptos::mount::mount_to_body(App);
}
