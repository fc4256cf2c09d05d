use leptos::*;
use leptos_router::ParamsMap;

use crate::{
    components::fetched,
    models::{with_query, Job, JobFilter},
    router::{href, ParamsMapExt},
    utils::{use_api, ApiResource, UseApiOptions},
};

/// Filter taken from the location's query, `contest_id` from the path wins
/// over the query one.
fn filter_from_query(contest_id: Option<i64>, query: &ParamsMap) -> JobFilter {
    JobFilter {
        user_id: query.get_param("user_id"),
        user_name: query.get_param("user_name"),
        contest_id: contest_id.or_else(|| query.get_param("contest_id")),
        problem_id: query.get_param("problem_id"),
        language: query.get_param("language"),
        state: query.get_param("state"),
        result: query.get_param("result"),
    }
}

/// The jobs matching `filter`, re-fetched whenever the returned problem
/// filter changes.
fn filtered_jobs(filter: JobFilter) -> (RwSignal<Option<i64>>, ApiResource<Vec<Job>>) {
    let problem_id = create_rw_signal(filter.problem_id);
    let path = Signal::derive(move || {
        let filter = JobFilter {
            problem_id: problem_id.get(),
            ..filter.clone()
        };
        with_query("/jobs", &filter)
    });
    (problem_id, use_api(path, UseApiOptions::default()))
}

#[component]
pub fn SubmissionList(contest_id: Option<i64>, query: ParamsMap) -> impl IntoView {
    let (problem_id, jobs) = filtered_jobs(filter_from_query(contest_id, &query));

    view! {
        <div class="container mx-auto p-4 flex flex-col gap-4 text-text">
            <h1 class="text-2xl">
                {match contest_id {
                    Some(contest) => format!("Submissions of contest #{contest}"),
                    None => "Submissions".to_owned(),
                }}
            </h1>
            <div class="flex flex-row gap-4 items-center">
                <input
                    type="number"
                    class="w-48 p-2 bg-lighten rounded"
                    placeholder="Problem ID"
                    prop:value=move || problem_id.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |e| problem_id.set(event_target_value(&e).trim().parse().ok())
                />
                <button
                    class="p-2 rounded bg-primary disabled:opacity-40"
                    disabled=move || jobs.is_loading.get()
                    on:click=move |_| jobs.execute()
                >
                    "Refresh"
                </button>
            </div>
            {fetched(jobs, |jobs| view! { <JobTable jobs=jobs/> })}
        </div>
    }
}

#[component]
pub fn JobTable(jobs: Vec<Job>) -> impl IntoView {
    view! {
        <table class="w-full table-auto">
            <thead>
                <tr class="text-left border-b-2 border-primary">
                    <th class="p-2">"ID"</th>
                    <th class="p-2">"Problem"</th>
                    <th class="p-2">"Language"</th>
                    <th class="p-2">"State"</th>
                    <th class="p-2">"Result"</th>
                    <th class="p-2">"Score"</th>
                    <th class="p-2">"Submitted"</th>
                </tr>
            </thead>
            <tbody>
                {jobs.into_iter().map(|job| view! { <JobRow job=job/> }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn JobRow(job: Job) -> impl IntoView {
    let submitted = job
        .created_at()
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| job.created_time.clone());
    let problem = match job.submission.contest_id {
        0 => format!("/problem/{}", job.submission.problem_id),
        contest => format!("/contest/{contest}/problem/{}", job.submission.problem_id),
    };

    view! {
        <tr class="odd:bg-lighten">
            <td class="p-2">
                <a href=href(&format!("/submission/{}", job.id))>{job.id}</a>
            </td>
            <td class="p-2">
                <a href=href(&problem)>{job.submission.problem_id}</a>
            </td>
            <td class="p-2">{job.submission.language}</td>
            <td class="p-2">{job.state.to_string()}</td>
            <td class="p-2">{job.result.label()}</td>
            <td class="p-2">{job.score}</td>
            <td class="p-2">{submitted}</td>
        </tr>
    }
}
