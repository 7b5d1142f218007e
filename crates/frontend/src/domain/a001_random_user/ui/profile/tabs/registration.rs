use crate::shared::date_utils::format_date;
use contracts::domain::a001_random_user::UserRecord;
use leptos::prelude::*;
use std::sync::Arc;

pub fn registration_lines(user: &UserRecord) -> Vec<String> {
    vec![
        format!("Date: {}", format_date(&user.registered.date)),
        format!("Age: {}", user.registered.age),
    ]
}

#[component]
pub fn RegistrationTab(user: Arc<UserRecord>) -> impl IntoView {
    view! {
        <div class="details-section">
            {registration_lines(&user).into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        </div>
    }
}
