use leptos::*;

use crate::{
    components::fetched,
    models::Contest,
    router::href,
    utils::{use_api, UseApiOptions},
};

#[component]
pub fn ContestPage(id: i64) -> impl IntoView {
    let contest = use_api::<Contest>(format!("/contests/{id}"), UseApiOptions::default());

    view! {
        <div class="container mx-auto p-4 flex flex-col gap-4 text-text">
            {fetched(contest, |contest| view! { <ContestDetail contest=contest/> })}
        </div>
    }
}

#[component]
fn ContestDetail(contest: Contest) -> impl IntoView {
    let id = contest.id;
    let limit = match contest.submission_limit {
        0 => "unlimited".to_owned(),
        limit => limit.to_string(),
    };

    view! {
        <h1 class="text-2xl">{contest.name}</h1>
        <p class="text-sm opacity-60">{format!("{} ~ {}", contest.from, contest.to)}</p>
        <p>{format!("Submission limit per problem: {limit}")}</p>
        <p>{format!("{} participants", contest.user_ids.len())}</p>
        <div class="flex flex-row gap-4">
            <a href=href(&format!("/contest/{id}/submissions")) class="text-primary underline">
                "Submissions"
            </a>
            <a href=href(&format!("/ranklist?contest={id}")) class="text-primary underline">
                "Rank List"
            </a>
        </div>
        <ul class="list-disc pl-6">
            {contest
                .problem_ids
                .into_iter()
                .map(|problem| {
                    view! {
                        <li>
                            <a href=href(&format!("/contest/{id}/problem/{problem}"))>
                                {format!("Problem #{problem}")}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
