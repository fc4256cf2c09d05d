use leptos::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::{
    components::fetched,
    config::frontend_config,
    errors::Error,
    models::{Case, Job},
    router::href,
    utils::{use_api, UseApiOptions},
};

/// Nothing new will come from polling: the job is final, or the backend
/// rejected the request in a way retrying will not fix.
fn polling_done(data: Option<&Job>, error: Option<&Error>) -> bool {
    data.is_some_and(|job| job.state.is_final())
        || error.is_some_and(|error| error.kind.is_permanent())
}

/// One job, polled until it reaches a final state.
#[component]
pub fn SubmissionStatus(id: i64) -> impl IntoView {
    let job = use_api::<Job>(format!("/jobs/{id}"), UseApiOptions::default());

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            if !job.is_loading.get_untracked() {
                job.execute();
            }
        },
        frontend_config().poll_interval_ms,
    );
    create_effect(move |_| {
        let done = job.data.with(|data| {
            job.error.with(|error| polling_done(data.as_ref(), error.as_ref()))
        });
        if done {
            tracing::debug!(id, "polling stopped");
            pause();
        }
    });

    view! {
        <div class="container mx-auto p-4 flex flex-col gap-4 text-text">
            <h1 class="text-2xl">{format!("Submission #{id}")}</h1>
            {fetched(job, |job| view! { <JobDetail job=job/> })}
        </div>
    }
}

#[component]
fn JobDetail(job: Job) -> impl IntoView {
    let updated = job
        .updated_at()
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| job.updated_time.clone());
    let problem = href(&format!("/problem/{}", job.submission.problem_id));

    view! {
        <dl class="grid grid-cols-2 gap-2 w-96">
            <dt>"Problem"</dt>
            <dd>
                <a href=problem>{job.submission.problem_id}</a>
            </dd>
            <dt>"Language"</dt>
            <dd>{job.submission.language}</dd>
            <dt>"State"</dt>
            <dd>{job.state.to_string()}</dd>
            <dt>"Result"</dt>
            <dd>{job.result.label()}</dd>
            <dt>"Score"</dt>
            <dd>{job.score}</dd>
            <dt>"Updated"</dt>
            <dd>{updated}</dd>
        </dl>
        <table class="w-full table-auto">
            <thead>
                <tr class="text-left border-b-2 border-primary">
                    <th class="p-2">"Case"</th>
                    <th class="p-2">"Result"</th>
                    <th class="p-2">"Time"</th>
                    <th class="p-2">"Memory"</th>
                    <th class="p-2">"Info"</th>
                </tr>
            </thead>
            <tbody>
                {job.cases.into_iter().map(case_row).collect_view()}
            </tbody>
        </table>
        <pre class="p-2 bg-lighten rounded overflow-x-auto">
            <code>{job.submission.source_code}</code>
        </pre>
    }
}

fn case_row(case: Case) -> impl IntoView {
    view! {
        <tr class="odd:bg-lighten">
            <td class="p-2">{case.id}</td>
            <td class="p-2">{case.result.label()}</td>
            <td class="p-2">{format_time(case.time)}</td>
            <td class="p-2">{format_memory(case.memory)}</td>
            <td class="p-2 font-mono">{case.info}</td>
        </tr>
    }
}

fn format_time(micros: i64) -> String {
    format!("{} ms", micros / 1000)
}

fn format_memory(bytes: i64) -> String {
    format!("{} KiB", bytes / 1024)
}
