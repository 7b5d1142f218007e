//! Main page component for the Profile screen

use super::tabs::panel_for;
use super::view_model::ProfileDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{CardAnimated, Motion};
use crate::shared::icons::icon;
use contracts::domain::a001_random_user::UserRecord;
use contracts::enums::ProfileTab;
use leptos::prelude::*;
use leptos_router::components::A;
use std::sync::Arc;

/// Title of the browser tab outside the Profile screen (see `index.html`)
pub const DEFAULT_TITLE: &str = "My Profile";

/// Browser tab title: the user's full name, or the app title without one
pub fn document_title(user: Option<&UserRecord>) -> String {
    user.map(UserRecord::full_name)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // The payload and the title live only as long as this screen.
    on_cleanup(move || {
        ctx.clear_profile();
        set_document_title(&document_title(None));
    });

    match ctx.profile_untracked() {
        Some(user) => view! { <ProfileDetails user=user /> }.into_any(),
        None => {
            log::warn!("ProfilePage opened without a profile payload");
            view! { <NoProfile /> }.into_any()
        }
    }
}

#[component]
fn NoProfile() -> impl IntoView {
    view! {
        <div class="page-center">
            <CardAnimated motion=Motion::FadeIn class="notice">
                <h2>"No profile loaded"</h2>
                <p>"Profiles are fetched on the login screen and are lost on reload."</p>
                <A href="/">{icon("arrow-left")} " Back to login"</A>
            </CardAnimated>
        </div>
    }
}

#[component]
fn ProfileDetails(user: Arc<UserRecord>) -> impl IntoView {
    set_document_title(&document_title(Some(user.as_ref())));
    let vm = ProfileDetailsVm::new(user.clone());

    view! {
        <div class="profile">
            <Hero user=user />
            <TabBar vm=vm.clone() />
            <TabContent vm=vm />
        </div>
    }
}

// ── Hero ──────────────────────────────────────────────────────────────────────

#[component]
fn Hero(user: Arc<UserRecord>) -> impl IntoView {
    view! {
        <CardAnimated motion=Motion::SlideUp class="profile__hero">
            <img
                class="profile__picture"
                src=user.picture.large.clone()
                alt=user.name.first.clone()
            />
            <div class="profile__summary">
                <h1 class="neon-text">{user.full_name()}</h1>
                <p>"⭐ Founding Member"</p>
                <p>"10+ nights booked"</p>
                <p>"❤️ Popular host"</p>
            </div>
        </CardAnimated>
    }
}

// ── Tab bar ───────────────────────────────────────────────────────────────────

#[component]
fn TabBar(vm: ProfileDetailsVm) -> impl IntoView {
    view! {
        <div class="page__tabs">
            {ProfileTab::all()
                .into_iter()
                .map(|tab| {
                    let vm = vm.clone();
                    let is_active = vm.is_active(tab);
                    view! {
                        <button
                            class="page__tab"
                            class:page__tab--active=move || is_active.get()
                            on:click=move |_| vm.set_tab(tab)
                        >
                            {icon(tab.icon_name())}
                            <span>{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

// ── Tab content ───────────────────────────────────────────────────────────────

#[component]
fn TabContent(vm: ProfileDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let user = vm.user;

    view! {
        {move || {
            let panel = panel_for(active_tab.get(), user.clone());
            view! {
                <CardAnimated motion=Motion::FadeIn class="profile__panel">
                    {panel}
                </CardAnimated>
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_fixtures::sample_user;

    #[test]
    fn test_document_title_follows_profile() {
        let user = sample_user();
        assert_eq!(document_title(Some(&user)), "Oliver Hughes");
        assert_eq!(document_title(None), DEFAULT_TITLE);
        assert_eq!(DEFAULT_TITLE, "My Profile");
    }
}
