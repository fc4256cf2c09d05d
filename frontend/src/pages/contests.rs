use leptos::*;

use crate::{
    components::fetched,
    models::Contest,
    router::href,
    utils::{use_api, UseApiOptions},
};

#[component]
pub fn ContestList() -> impl IntoView {
    let contests = use_api::<Vec<Contest>>("/contests".to_owned(), UseApiOptions::default());

    view! {
        <div class="container mx-auto p-4 text-text">
            <h1 class="text-2xl mb-4">"Contests"</h1>
            {fetched(contests, |contests| {
                view! {
                    <table class="w-full table-auto">
                        <thead>
                            <tr class="text-left border-b-2 border-primary">
                                <th class="p-2">"#"</th>
                                <th class="p-2">"Name"</th>
                                <th class="p-2">"From"</th>
                                <th class="p-2">"To"</th>
                                <th class="p-2">"Problems"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {contests
                                .into_iter()
                                .map(|contest| {
                                    view! {
                                        <tr class="odd:bg-lighten">
                                            <td class="p-2">{contest.id}</td>
                                            <td class="p-2">
                                                <a href=href(&format!("/contest/{}", contest.id))>
                                                    {contest.name}
                                                </a>
                                            </td>
                                            <td class="p-2">{contest.from}</td>
                                            <td class="p-2">{contest.to}</td>
                                            <td class="p-2">{contest.problem_ids.len()}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
            })}
        </div>
    }
}
