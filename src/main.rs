mod app;
mod arrow_button;
mod article;
mod dismiss;
mod params_form;

fn main() {
    console_error_panic_hook::set_once();
    app::run_app();
}
