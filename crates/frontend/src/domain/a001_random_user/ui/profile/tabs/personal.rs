use crate::shared::date_utils::format_dated_age;
use contracts::domain::a001_random_user::UserRecord;
use leptos::prelude::*;
use std::sync::Arc;

pub fn personal_lines(user: &UserRecord) -> Vec<String> {
    vec![
        format!("Gender: {}", user.gender),
        format!("Nationality: {}", user.nat),
        format!("DOB: {}", format_dated_age(&user.dob)),
    ]
}

#[component]
pub fn PersonalTab(user: Arc<UserRecord>) -> impl IntoView {
    view! {
        <div class="details-section">
            {personal_lines(&user).into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        </div>
    }
}
