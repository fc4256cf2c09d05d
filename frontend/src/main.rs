#[cfg(not(feature = "csr"))]
pub fn main() {
    // nothing to run outside the browser
    // to run: `trunk serve --open --features csr`
}

#[cfg(feature = "csr")]
pub fn main() {
    use oj_frontend::{app::*, init_tracing};

    console_error_panic_hook::set_once();
    init_tracing();

    leptos::mount_to_body(App);
}
