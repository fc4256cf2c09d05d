use std::rc::Rc;

use leptos::*;
use leptos_meta::*;

use crate::{
    components::*,
    pages::Pages,
    router::{provide_router, route_table, HashHistoryDriver, Router},
    utils::RouteTitle,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_router(Router::new(
        route_table(),
        Rc::new(HashHistoryDriver::new()),
    ));

    view! {
        <RouteTitle/>
        <div class="bg-background w-full min-h-screen flex flex-col text-text">
            <Navbar/>
            <main class="grow">
                <Pages/>
            </main>
            <Footer/>
        </div>
    }
}
