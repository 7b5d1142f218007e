use contracts::domain::a001_random_user::UserRecord;
use leptos::prelude::*;
use std::sync::Arc;

pub fn contact_lines(user: &UserRecord) -> Vec<String> {
    vec![
        format!("Email: {}", user.email),
        format!("Phone: {}", user.phone),
        format!("Cell: {}", user.cell),
    ]
}

#[component]
pub fn ContactTab(user: Arc<UserRecord>) -> impl IntoView {
    view! {
        <div class="details-section">
            {contact_lines(&user).into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        </div>
    }
}
