use contracts::domain::a001_random_user::UserRecord;
use leptos::prelude::*;
use std::sync::Arc;

/// App-wide state shared through Leptos context.
///
/// Holds the navigation payload: the record the Login screen fetched,
/// handed to the Profile screen on "Enter Profile". It lives only in memory,
/// so a page reload loses it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub profile: RwSignal<Option<Arc<UserRecord>>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            profile: RwSignal::new(None),
        }
    }

    pub fn hand_off(&self, record: Arc<UserRecord>) {
        log::info!("hand_off: profile '{}'", record.login.username);
        self.profile.set(Some(record));
    }

    pub fn profile_untracked(&self) -> Option<Arc<UserRecord>> {
        self.profile.get_untracked()
    }

    pub fn clear_profile(&self) {
        log::debug!("clear_profile");
        self.profile.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_fixtures::sample_user;

    #[test]
    fn test_hand_off_keeps_the_same_record() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        assert!(ctx.profile_untracked().is_none());

        let record = Arc::new(sample_user());
        ctx.hand_off(record.clone());
        let received = ctx.profile_untracked().unwrap();
        assert!(Arc::ptr_eq(&record, &received));

        ctx.clear_profile();
        assert!(ctx.profile_untracked().is_none());
    }
}
