//! ViewModel for the Profile screen

use contracts::domain::a001_random_user::UserRecord;
use contracts::enums::ProfileTab;
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProfileDetailsVm {
    pub user: Arc<UserRecord>,
    pub active_tab: RwSignal<ProfileTab>,
}

impl ProfileDetailsVm {
    pub fn new(user: Arc<UserRecord>) -> Self {
        Self {
            user,
            active_tab: RwSignal::new(ProfileTab::default()),
        }
    }

    pub fn set_tab(&self, tab: ProfileTab) {
        log::debug!("set_tab: {}", tab.key());
        self.active_tab.set(tab);
    }

    pub fn is_active(&self, tab: ProfileTab) -> Signal<bool> {
        let active_tab = self.active_tab;
        Signal::derive(move || active_tab.get() == tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_fixtures::sample_user;

    #[test]
    fn test_default_tab_is_about() {
        let owner = Owner::new();
        owner.set();

        let vm = ProfileDetailsVm::new(Arc::new(sample_user()));
        assert_eq!(vm.active_tab.get_untracked(), ProfileTab::About);
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let owner = Owner::new();
        owner.set();

        let vm = ProfileDetailsVm::new(Arc::new(sample_user()));
        for selected in ProfileTab::all() {
            vm.set_tab(selected);

            let active: Vec<ProfileTab> = ProfileTab::all()
                .into_iter()
                .filter(|tab| vm.is_active(*tab).get_untracked())
                .collect();
            assert_eq!(active, vec![selected]);
        }
    }
}
