use leptos::*;

use crate::{
    errors::{ErrorView, NotFound, Result},
    pages::*,
    router::{use_router, Page, ParamsMapExt, ResolvedRoute, Resolution},
};

/// The page of the current location.
#[component]
pub fn Pages() -> impl IntoView {
    let resolution = use_router().resolution();

    move || match resolution.get() {
        Resolution::Found(route) => match render(&route) {
            Ok(view) => view,
            Err(error) => view! { <ErrorView error=error/> }.into_view(),
        },
        Resolution::NotFound(path) => view! { <NotFound path=path/> }.into_view(),
    }
}

fn render(route: &ResolvedRoute) -> Result<View> {
    let props = route.props();
    let contest_id = props.get_param::<i64>("contestId");

    Ok(match route.page {
        Page::Home => view! { <Home/> }.into_view(),
        Page::ProblemList => view! { <ProblemList/> }.into_view(),
        Page::ProblemSubmission => {
            let id = props.require_param::<i64>("id")?;
            view! { <ProblemSubmission id=id contest_id=contest_id/> }.into_view()
        }
        Page::SubmissionList => {
            let query = route.query.clone();
            view! { <SubmissionList contest_id=contest_id query=query/> }.into_view()
        }
        Page::SubmissionStatus => {
            let id = props.require_param::<i64>("id")?;
            view! { <SubmissionStatus id=id/> }.into_view()
        }
        Page::ContestList => view! { <ContestList/> }.into_view(),
        Page::ContestPage => {
            let id = props.require_param::<i64>("id")?;
            view! { <ContestPage id=id/> }.into_view()
        }
        Page::RankList => {
            let query = route.query.clone();
            view! { <RankList query=query/> }.into_view()
        }
    })
}
