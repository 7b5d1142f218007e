use contracts::domain::a001_random_user::UserRecord;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

pub fn about_lines(user: &UserRecord) -> Vec<String> {
    let loc = &user.location;
    vec![format!(
        "Live in {}, {}. Love {}.",
        loc.city, loc.state, loc.country
    )]
}

#[component]
pub fn AboutTab(user: Arc<UserRecord>) -> impl IntoView {
    view! {
        <div class="details-section">
            {about_lines(&user).into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            <Flex gap=FlexGap::Small>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Plant Parent"</Badge>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Interior Designer"</Badge>
            </Flex>
        </div>
    }
}
