use leptos::*;

use crate::router::href;

/// `detail` is what the backend said about the missing thing.
#[component]
pub fn NotFound(
    #[prop(into, optional)] path: Option<String>,
    #[prop(into, optional)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center p-8">
            <h1 class="text-4xl">404</h1>
            <p class="text-text">
                {path.map(|path| format!("Nothing lives at {path}"))}
            </p>
            <p class="text-text">{detail}</p>
            <a href=href("/") class="text-primary">
                "Back to home"
            </a>
        </div>
    }
}
