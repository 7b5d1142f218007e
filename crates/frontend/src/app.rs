use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation slot that carries the fetched profile from Login to Profile.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
