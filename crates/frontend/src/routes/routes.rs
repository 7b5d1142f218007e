use crate::domain::a001_random_user::ui::login::LoginPage;
use crate::domain::a001_random_user::ui::profile::ProfilePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Path of the profile screen; the login screen lives at `/`.
pub const PROFILE_PATH: &str = "/profile";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="notice">
                <p>"Page not found."</p>
                <A href="/">"Back to login"</A>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/profile") view=ProfilePage />
            </Routes>
        </Router>
    }
}
