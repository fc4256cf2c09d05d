use leptos::*;

use crate::{config::frontend_config, router::href};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container mx-auto p-8 flex flex-col gap-4 text-text">
            <h1 class="text-4xl">{frontend_config().site_name.clone()}</h1>
            <p>"Pick a problem, submit a solution and watch it being judged."</p>
            <div class="flex flex-row gap-4">
                <a href=href("/problems") class="text-primary underline">
                    "Browse problems"
                </a>
                <a href=href("/contests") class="text-primary underline">
                    "Browse contests"
                </a>
            </div>
        </div>
    }
}
