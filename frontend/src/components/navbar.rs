use leptos::*;

use crate::{config::frontend_config, router::href};

const LINKS: [(&str, &str); 4] = [
    ("/problems", "Problems"),
    ("/submissions", "Submissions"),
    ("/contests", "Contests"),
    ("/ranklist", "Rank List"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-background sticky top-0 p-2 flex flex-row justify-between border-b-2 border-primary">
            <div class="flex flex-row flex-nowrap">
                <a href=href("/") class="text-text text-lg px-5">
                    {frontend_config().site_name.clone()}
                </a>
                <ul class="flex flex-row flex-nowrap justify-between items-center">
                    {LINKS
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <li class="transition-opacity duration-300 hover:opacity-60">
                                    <a href=href(path) class="text-text text-base px-6">
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
