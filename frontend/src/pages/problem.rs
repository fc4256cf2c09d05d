use leptos::*;

use crate::{
    components::fetched,
    errors::ErrorView,
    models::{Job, Problem, Submission},
    router::{href, use_router},
    utils::{use_api, ApiResource, Method, UseApiOptions},
};

/// Form state and the `POST /jobs` it sends. A created job opens its
/// status page.
#[derive(Clone, Copy)]
struct SubmitForm {
    language: RwSignal<String>,
    source_code: RwSignal<String>,
    job: ApiResource<Job>,
}

impl SubmitForm {
    fn new(problem_id: i64, contest_id: Option<i64>) -> Self {
        let router = use_router();
        let language = create_rw_signal(String::new());
        let source_code = create_rw_signal(String::new());

        let submission = Signal::derive(move || {
            let submission = Submission {
                source_code: source_code.get(),
                language: language.get(),
                user_id: 0,
                contest_id: contest_id.unwrap_or(0),
                problem_id,
            };
            serde_json::to_value(submission).unwrap_or_default()
        });
        let job = use_api::<Job>(
            "/jobs".to_owned(),
            UseApiOptions::default()
                .method(Method::Post)
                .body(submission)
                .immediate(false)
                .refetch(false),
        );

        create_render_effect(move |_| {
            if let Some(id) = job.data.with(|job| job.as_ref().map(|job| job.id)) {
                router.navigate(&format!("/submission/{id}"));
            }
        });

        Self {
            language,
            source_code,
            job,
        }
    }

    fn disabled(&self) -> bool {
        self.job.is_loading.get()
            || self.language.with(String::is_empty)
            || self.source_code.with(|code| code.trim().is_empty())
    }

    fn submit(&self) {
        self.job.execute();
    }
}

/// Submission form of one problem, optionally inside a contest.
#[component]
pub fn ProblemSubmission(id: i64, contest_id: Option<i64>) -> impl IntoView {
    let problem = use_api::<Problem>(format!("/problems/{id}"), UseApiOptions::default());
    let languages = use_api::<Vec<String>>("/languages".to_owned(), UseApiOptions::default());

    let form = SubmitForm::new(id, contest_id);
    let SubmitForm {
        language,
        source_code,
        job,
    } = form;
    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        form.submit();
    };

    view! {
        <div class="container mx-auto p-4 flex flex-col gap-4 text-text">
            {fetched(problem, |problem| {
                view! {
                    <h1 class="text-2xl">{format!("#{} {}", problem.id, problem.name)}</h1>
                    <p class="text-sm opacity-60">{format!("{:?}", problem.problem_type)}</p>
                }
            })}
            {contest_id
                .map(|contest| {
                    view! {
                        <a href=href(&format!("/contest/{contest}")) class="text-primary underline">
                            {format!("Back to contest #{contest}")}
                        </a>
                    }
                })}
            <form class="flex flex-col gap-4" on:submit=on_submit>
                <select
                    class="w-64 p-2 bg-lighten rounded"
                    prop:value=move || language.get()
                    on:change=move |e| language.set(event_target_value(&e))
                >
                    <option value="" disabled selected>
                        "Language"
                    </option>
                    {move || {
                        languages
                            .data
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name}</option> })
                            .collect_view()
                    }}
                </select>
                <textarea
                    class="font-mono p-2 bg-lighten rounded"
                    rows=20
                    placeholder="Source code"
                    prop:value=move || source_code.get()
                    on:input=move |e| source_code.set(event_target_value(&e))
                ></textarea>
                <button
                    type="submit"
                    class="w-32 p-2 rounded bg-primary disabled:opacity-40"
                    disabled=move || form.disabled()
                >
                    "Submit"
                </button>
            </form>
            {move || job.error.get().map(|error| view! { <ErrorView error=error/> })}
        </div>
    }
}
