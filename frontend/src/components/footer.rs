use leptos::*;

use crate::config::frontend_config;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full mt-auto p-2 flex flex-col justify-center items-center">
            <p class="text-text">
                "Judge API at " <code>{frontend_config().api_server.clone()}</code>
            </p>
        </footer>
    }
}
