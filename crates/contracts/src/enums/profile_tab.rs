use serde::{Deserialize, Serialize};

/// Tabs of the Profile screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    About,
    Location,
    Contact,
    Personal,
    Registration,
}

impl ProfileTab {
    /// Stable tab key
    pub fn key(&self) -> &'static str {
        match self {
            ProfileTab::About => "about",
            ProfileTab::Location => "location",
            ProfileTab::Contact => "contact",
            ProfileTab::Personal => "personal",
            ProfileTab::Registration => "registration",
        }
    }

    /// Caption on the tab button
    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::About => "About",
            ProfileTab::Location => "Location",
            ProfileTab::Contact => "Contact",
            ProfileTab::Personal => "Personal",
            ProfileTab::Registration => "Registration",
        }
    }

    /// Icon name for the frontend `icon()` helper
    pub fn icon_name(&self) -> &'static str {
        match self {
            ProfileTab::About => "user",
            ProfileTab::Location => "map-pin",
            ProfileTab::Contact => "phone",
            ProfileTab::Personal => "user",
            ProfileTab::Registration => "calendar",
        }
    }

    /// All tabs in display order
    pub fn all() -> Vec<ProfileTab> {
        vec![
            ProfileTab::About,
            ProfileTab::Location,
            ProfileTab::Contact,
            ProfileTab::Personal,
            ProfileTab::Registration,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "about" => Some(ProfileTab::About),
            "location" => Some(ProfileTab::Location),
            "contact" => Some(ProfileTab::Contact),
            "personal" => Some(ProfileTab::Personal),
            "registration" => Some(ProfileTab::Registration),
            _ => None,
        }
    }
}
