use crate::shared::map::MapView;
use contracts::domain::a001_random_user::UserRecord;
use leptos::prelude::*;
use std::sync::Arc;

pub fn location_lines(user: &UserRecord) -> Vec<String> {
    let loc = &user.location;
    vec![
        user.street_address(),
        format!(
            "Timezone: {} ({})",
            loc.timezone.description, loc.timezone.offset
        ),
        format!(
            "Coordinates: Lat {}, Lng {}",
            loc.coordinates.latitude, loc.coordinates.longitude
        ),
    ]
}

#[component]
pub fn LocationTab(user: Arc<UserRecord>) -> impl IntoView {
    view! {
        <div class="details-section">
            {location_lines(&user).into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            <MapView point=user.geo_point() popup=user.location.city.clone() />
        </div>
    }
}
