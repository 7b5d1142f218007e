//! CardAnimated — Thaw `Card` that plays an entrance animation on mount.
//!
//! Keyframes live in `style.css` (`card-fade-in`, `card-slide-down`,
//! `card-slide-up`). Because the animation runs on mount, re-rendering the
//! card (e.g. swapping tab content) replays it.
//!
//! # Example
//! ```text
//! <CardAnimated motion=Motion::SlideDown>
//!     <p>"Content"</p>
//! </CardAnimated>
//!
//! <CardAnimated motion=Motion::FadeIn class="profile__panel">
//! ```

use leptos::prelude::*;
use thaw::Card;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    /// Opacity only, 0.3s
    #[default]
    FadeIn,
    /// Drops in from above, 0.8s ease-out
    SlideDown,
    /// Rises from below, 0.8s
    SlideUp,
}

impl Motion {
    pub fn animation(&self) -> &'static str {
        match self {
            Motion::FadeIn => "card-fade-in 0.3s ease-in-out both",
            Motion::SlideDown => "card-slide-down 0.8s ease-out both",
            Motion::SlideUp => "card-slide-up 0.8s ease both",
        }
    }
}

/// Inline style for the card: the animation first, then any extra rules.
pub fn card_style(motion: Motion, style: &str) -> String {
    if style.is_empty() {
        format!("animation: {};", motion.animation())
    } else {
        format!("animation: {}; {}", motion.animation(), style)
    }
}

#[component]
pub fn CardAnimated(
    #[prop(optional)] motion: Motion,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: String,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style=card_style(motion, &style)>
            {children()}
        </Card>
    }
}
