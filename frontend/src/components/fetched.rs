use leptos::*;

use crate::{errors::ErrorView, utils::ApiResource};

/// Render a resource: `render` once data is there, the error if the last
/// fetch failed, a loading line before either.
///
/// Data kept through a failed refresh is shown with the error above it.
pub fn fetched<T, V>(
    resource: ApiResource<T>,
    render: impl Fn(T) -> V + 'static,
) -> impl IntoView
where
    T: Clone + 'static,
    V: IntoView,
{
    move || {
        let error = resource.error.get();
        match (resource.data.get(), error) {
            (Some(data), error) => view! {
                {error.map(|error| {
                    view! {
                        <p class="text-red text-sm">
                            {format!("Refresh failed: {error}")}
                        </p>
                    }
                })}
                {render(data)}
            }
            .into_view(),
            (None, Some(error)) => view! { <ErrorView error=error/> }.into_view(),
            (None, None) => view! { <p class="text-text">"Loading..."</p> }.into_view(),
        }
    }
}
