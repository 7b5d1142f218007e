//! Tab components for the Profile screen

mod about;
mod contact;
mod location;
mod personal;
mod registration;

pub use about::{about_lines, AboutTab};
pub use contact::{contact_lines, ContactTab};
pub use location::{location_lines, LocationTab};
pub use personal::{personal_lines, PersonalTab};
pub use registration::{registration_lines, RegistrationTab};

use contracts::domain::a001_random_user::UserRecord;
use contracts::enums::ProfileTab;
use leptos::prelude::*;
use std::sync::Arc;

/// Text lines of the panel shown for `tab`
pub fn panel_lines(tab: ProfileTab, user: &UserRecord) -> Vec<String> {
    match tab {
        ProfileTab::About => about_lines(user),
        ProfileTab::Location => location_lines(user),
        ProfileTab::Contact => contact_lines(user),
        ProfileTab::Personal => personal_lines(user),
        ProfileTab::Registration => registration_lines(user),
    }
}

/// Panel component for `tab`
pub fn panel_for(tab: ProfileTab, user: Arc<UserRecord>) -> AnyView {
    match tab {
        ProfileTab::About        => view! { <AboutTab        user=user /> }.into_any(),
        ProfileTab::Location     => view! { <LocationTab     user=user /> }.into_any(),
        ProfileTab::Contact      => view! { <ContactTab      user=user /> }.into_any(),
        ProfileTab::Personal     => view! { <PersonalTab     user=user /> }.into_any(),
        ProfileTab::Registration => view! { <RegistrationTab user=user /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_fixtures::sample_user;

    #[test]
    fn test_each_tab_selects_its_own_panel() {
        let user = sample_user();

        assert_eq!(
            panel_lines(ProfileTab::About, &user),
            vec!["Live in London, Greater London. Love United Kingdom."]
        );
        assert_eq!(
            panel_lines(ProfileTab::Location, &user),
            vec![
                "4213 Kings Road, London, Greater London, United Kingdom EC1A 1BB",
                "Timezone: Western Europe Time, London, Lisbon, Casablanca (0:00)",
                "Coordinates: Lat 51.5, Lng -0.12",
            ]
        );
        assert_eq!(
            panel_lines(ProfileTab::Contact, &user),
            vec![
                "Email: oliver.hughes@example.com",
                "Phone: 016977 1234",
                "Cell: 07700 900123",
            ]
        );
        assert_eq!(
            panel_lines(ProfileTab::Personal, &user),
            vec![
                "Gender: male",
                "Nationality: GB",
                "DOB: 11/3/1984 (Age: 40)",
            ]
        );
        assert_eq!(
            panel_lines(ProfileTab::Registration, &user),
            vec!["Date: 2/29/2016", "Age: 8"]
        );
    }

    #[test]
    fn test_panels_are_distinct() {
        let user = sample_user();
        let panels: Vec<Vec<String>> = ProfileTab::all()
            .into_iter()
            .map(|tab| panel_lines(tab, &user))
            .collect();

        for (i, a) in panels.iter().enumerate() {
            for b in &panels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
