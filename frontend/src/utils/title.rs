use leptos::*;
use leptos_meta::Title;

use crate::{config::frontend_config, router::use_router};

/// `"{name} - {site}"`, or just the site name for unnamed pages.
pub fn page_title(name: Option<&str>, site: &str) -> String {
    match name {
        Some(name) => format!("{name} - {site}"),
        None => site.to_owned(),
    }
}

/// Keeps the document title in sync with the active route's name.
#[component]
pub fn RouteTitle() -> impl IntoView {
    let resolution = use_router().resolution();
    let site = frontend_config().site_name.as_str();
    let text = move || resolution.with(|r| page_title(r.name(), site));

    view! { <Title text=text/> }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn title_format() {
        assert_eq!(
            page_title(Some("Problems"), "Rust Course Online Judge"),
            "Problems - Rust Course Online Judge"
        );
        assert_eq!(page_title(None, "OJ"), "OJ");
    }
}
