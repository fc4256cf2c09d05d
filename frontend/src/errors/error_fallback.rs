use leptos::*;

use super::{Error, ErrorKind, NotFound};

/// Render a failed resource. Not-found errors get the not-found page with
/// the backend's message, everything else shows the kind and the context
/// lines.
#[component]
pub fn ErrorView(#[prop(into)] error: Error) -> impl IntoView {
    match error.kind {
        ErrorKind::NotFound => match not_found_detail(&error) {
            Some(detail) => view! { <NotFound detail=detail/> }.into_view(),
            None => view! { <NotFound/> }.into_view(),
        },
        kind => view! {
            <div class="p-4 border border-red rounded">
                <h2 class="text-xl">{kind.to_string()}</h2>
                <pre class="whitespace-pre-wrap">{error.context}</pre>
            </div>
        }
        .into_view(),
    }
}

fn not_found_detail(error: &Error) -> Option<String> {
    let context = error.context.trim();
    (!context.is_empty()).then(|| context.to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found_keeps_backend_message() {
        let error = Error::new(ErrorKind::NotFound, "Job 5 not found.");
        assert_eq!(not_found_detail(&error).as_deref(), Some("Job 5 not found."));
        assert_eq!(not_found_detail(&Error::new(ErrorKind::NotFound, " ")), None);
    }
}
