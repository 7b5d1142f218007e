//! Login page: read-only credentials of a freshly generated user

use super::view_model::LoginVm;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::PROFILE_PATH;
use crate::shared::components::{CardAnimated, Motion};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = LoginVm::new();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let navigate = StoredValue::new_local(use_navigate());

    vm.load();

    let is_loading = vm.is_loading();
    let can_enter = vm.can_enter();
    let state = vm.state;

    let on_enter = move |_: leptos::ev::MouseEvent| {
        if vm.enter_profile(&ctx) {
            navigate.with_value(|navigate| navigate(PROFILE_PATH, Default::default()));
        }
    };

    view! {
        <div class="page-center">
            <Show
                when=move || !is_loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center;">
                        <Spinner />
                        <span>"Loading..."</span>
                    </Flex>
                }
            >
                <CardAnimated motion=Motion::SlideDown class="login-box">
                    <h1 class="neon-text">"Login to My Profile"</h1>

                    <Show when=move || !can_enter.get()>
                        <div class="error-message">
                            "Could not load a profile. Reload the page to try again."
                        </div>
                    </Show>

                    {move || {
                        let current = state.get();
                        view! {
                            <div class="form__group">
                                <label class="form__label">"Username"</label>
                                <Input value=RwSignal::new(current.username()) attr:readonly=true />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Password"</label>
                                <Input
                                    value=RwSignal::new(current.password())
                                    input_type=InputType::Password
                                    attr:readonly=true
                                />
                            </div>
                        }
                    }}

                    <Button
                        appearance=ButtonAppearance::Primary
                        class="login-box__submit"
                        disabled=Signal::derive(move || !can_enter.get())
                        on_click=on_enter
                    >
                        {icon("log-in")} "Enter Profile"
                    </Button>
                </CardAnimated>
            </Show>
        </div>
    }
}
