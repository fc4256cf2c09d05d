use leptos::*;

use crate::{
    components::fetched,
    models::Problem,
    router::href,
    utils::{use_api, UseApiOptions},
};

#[component]
pub fn ProblemList() -> impl IntoView {
    let problems = use_api::<Vec<Problem>>("/problems".to_owned(), UseApiOptions::default());

    view! {
        <div class="container mx-auto p-4 text-text">
            <h1 class="text-2xl mb-4">"Problems"</h1>
            {fetched(problems, |problems| {
                view! {
                    <table class="w-full table-auto">
                        <thead>
                            <tr class="text-left border-b-2 border-primary">
                                <th class="p-2">"#"</th>
                                <th class="p-2">"Name"</th>
                                <th class="p-2">"Type"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {problems
                                .into_iter()
                                .map(|problem| {
                                    view! {
                                        <tr class="odd:bg-lighten">
                                            <td class="p-2">{problem.id}</td>
                                            <td class="p-2">
                                                <a href=href(&format!("/problem/{}", problem.id))>
                                                    {problem.name}
                                                </a>
                                            </td>
                                            <td class="p-2">{format!("{:?}", problem.problem_type)}</td>
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
