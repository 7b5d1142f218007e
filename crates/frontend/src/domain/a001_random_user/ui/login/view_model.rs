//! ViewModel for the Login screen

use super::model::{fetch_random_user, FetchError};
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_random_user::UserRecord;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// `Loading` until the one fetch settles, then `Ready` for good.
/// `Ready(None)` means the fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginState {
    Loading,
    Ready(Option<Arc<UserRecord>>),
}

impl LoginState {
    pub fn from_fetch(result: Result<UserRecord, FetchError>) -> Self {
        match result {
            Ok(user) => {
                log::info!("Fetched user '{}'", user.login.username);
                LoginState::Ready(Some(Arc::new(user)))
            }
            Err(e) => {
                log::error!("Failed to fetch user data: {}", e);
                LoginState::Ready(None)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoginState::Loading)
    }

    pub fn record(&self) -> Option<Arc<UserRecord>> {
        match self {
            LoginState::Ready(record) => record.clone(),
            LoginState::Loading => None,
        }
    }

    pub fn username(&self) -> String {
        self.record()
            .map(|r| r.login.username.clone())
            .unwrap_or_default()
    }

    pub fn password(&self) -> String {
        self.record()
            .map(|r| r.login.password.clone())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct LoginVm {
    pub state: RwSignal<LoginState>,
}

impl LoginVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LoginState::Loading),
        }
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn can_enter(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.record().is_some()))
    }

    /// Issue the single fetch for this screen visit.
    pub fn load(&self) {
        let vm = *self;
        log::debug!("LoginVm::load");

        spawn_local(async move {
            let result = fetch_random_user().await;
            vm.state.set(LoginState::from_fetch(result));
        });
    }

    /// Put the held record into the navigation slot.
    ///
    /// Returns `false` (and hands nothing off) when there is no record.
    pub fn enter_profile(&self, ctx: &AppGlobalContext) -> bool {
        match self.state.with_untracked(|s| s.record()) {
            Some(record) => {
                ctx.hand_off(record);
                true
            }
            None => {
                log::warn!("enter_profile: no profile loaded");
                false
            }
        }
    }
}

impl Default for LoginVm {
    fn default() -> Self {
        Self::new()
    }
}
